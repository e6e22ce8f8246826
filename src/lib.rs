#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! artifact-size library
//!
//! Measures the raw, gzip and brotli sizes of groups of build outputs
//! ("artifacts"), and compares two such measurements into a change report.
//! It can be used programmatically in addition to the CLI interface.
//!
//! # Basic Example
//!
//! Comparing two snapshots:
//!
//! ```
//! use artifact_size::diff::{compare_artifacts, DiffStatus};
//! use artifact_size::snapshot::{ArtifactSnapshot, Compression, FileEntry};
//!
//! let file = |size| FileEntry {
//!     filename: "dist/app.js".to_string(),
//!     size,
//!     gzip: Some(size / 2),
//!     brotli: Some(size / 3),
//! };
//! let base = vec![ArtifactSnapshot::from_files("app", "app", vec![file(900)], Compression::ALL)];
//! let current = vec![ArtifactSnapshot::from_files("app", "app", vec![file(1200)], Compression::ALL)];
//!
//! let diff = compare_artifacts(&base, &current);
//! assert_eq!(diff[0].status, DiffStatus::Updated);
//! assert_eq!(diff[0].raw.difference, 300);
//! assert_eq!(diff[0].gzip.unwrap().difference, 150);
//! ```
//!
//! # Advanced Example: Reports
//!
//! Rendering a comparison for a pull request comment:
//!
//! ```
//! use artifact_size::diff::compare_artifacts;
//! use artifact_size::report::{format_diff, Format, FormatOptions, UnchangedMode};
//! use artifact_size::snapshot::{ArtifactSnapshot, Compression};
//!
//! let empty = |id: &str| ArtifactSnapshot::from_files(id, id, vec![], Compression::NONE);
//! let base = vec![empty("app"), empty("vendor")];
//! let current = vec![empty("app"), empty("vendor"), empty("worker")];
//!
//! let diff = compare_artifacts(&base, &current);
//! let options = FormatOptions {
//!     unchanged: UnchangedMode::Hide,
//!     ..Default::default()
//! };
//! let markdown = format_diff(&diff, Format::Markdown, &options);
//!
//! assert!(markdown.starts_with("## Artifact sizes\n\n"));
//! assert!(markdown.contains("worker"));
//! assert!(!markdown.contains("| vendor |"));
//! ```

/// File scanning and size measurement
pub mod analyzer;
/// CI/CD output targets
pub mod cicd;
/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file loading and validation
pub mod config;
/// Snapshot comparison and filtering
pub mod diff;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Report rendering
pub mod report;
/// Size measurement data model
pub mod snapshot;
