//! Command handlers for artifact-size CLI
//!
//! Each submodule handles a specific CLI command; [`emit`] holds the output
//! handling shared by the reporting commands.

pub mod analyze;
pub mod compare;
pub mod completions;
pub mod emit;

// Re-export command functions for convenient access
pub use analyze::cmd_analyze;
pub use compare::cmd_compare;
pub use completions::cmd_completions;
pub use emit::OutputArgs;
