//! Artifact measurement
//!
//! Resolves each artifact's globs to files and measures them:
//! - Raw size on disk
//! - gzip size (default level)
//! - brotli size (quality 11, window 22)
//!
//! Artifacts are measured in parallel; results keep config order.

pub mod artifact;
pub mod compress;
pub mod files;

pub use artifact::{analyze_all, analyze_artifact, file_size};
pub use files::resolve_files;
