//! CI/CD integration
//!
//! Provides:
//! - `format:target` output arguments
//! - Report files written relative to the working directory
//! - GitHub Actions step outputs via `$GITHUB_OUTPUT`

pub mod output;

pub use output::{write_file, write_github, OutputSpec, OutputSpecError};
