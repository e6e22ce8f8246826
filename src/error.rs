//! Error types with contextual suggestions
//!
//! Every failure the tool reports to a user carries:
//! - An actionable error message
//! - A suggested fix where one exists
//! - A sysexits-style exit code for CI
//!
//! # Examples
//!
//! ```
//! use artifact_size::error::ArtifactSizeError;
//!
//! let error = ArtifactSizeError::DuplicateArtifactId { id: "app".to_string() };
//!
//! assert_eq!(error.to_string(), "Duplicate artifact id: 'app'");
//! assert_eq!(error.exit_code(), 65);
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::cicd::OutputSpecError;

/// Errors surfaced by artifact-size
#[derive(Error, Debug)]
pub enum ArtifactSizeError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path to config file
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Configuration file could not be parsed or failed validation
    #[error("Invalid configuration in {path}: {message}")]
    InvalidConfig {
        /// Path to config file
        path: PathBuf,
        /// Parser or validation message
        message: String,
    },

    /// Two artifacts share the same id
    #[error("Duplicate artifact id: '{id}'")]
    DuplicateArtifactId {
        /// The repeated id
        id: String,
    },

    /// Include or exclude pattern is not a valid glob
    #[error("Invalid glob pattern in artifact '{artifact}': {pattern}")]
    InvalidPattern {
        /// Artifact id
        artifact: String,
        /// The offending pattern
        pattern: String,
        #[source]
        /// Glob parser error
        source: globset::Error,
    },

    /// File not found during operation
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path to missing file
        path: PathBuf,
        /// Operation that required the file
        operation: String,
    },

    /// Snapshot file is not a valid snapshot list
    #[error("Invalid snapshot file: {path}")]
    InvalidSnapshot {
        /// Path to snapshot file
        path: PathBuf,
        #[source]
        /// JSON error source
        source: serde_json::Error,
    },

    /// Malformed `--output-file`/`--output-github` argument
    #[error(transparent)]
    InvalidOutputSpec(#[from] OutputSpecError),

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl ArtifactSizeError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use artifact_size::error::ArtifactSizeError;
    /// use std::path::PathBuf;
    ///
    /// let error = ArtifactSizeError::FileNotFound {
    ///     path: PathBuf::from("base.json"),
    ///     operation: "compare".to_string(),
    /// };
    ///
    /// assert!(error.suggestion().unwrap().contains("base.json"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::ConfigNotFound { .. } => Some(
                "Check the path given with --config-file (relative paths resolve from the current directory)"
                    .to_string(),
            ),
            Self::InvalidConfig { .. } => Some(
                "Each artifact needs a non-empty \"id\" and \"name\"; include/exclude take a glob or a list of globs"
                    .to_string(),
            ),
            Self::DuplicateArtifactId { id } => {
                Some(format!("Rename one of the artifacts with id '{}'", id))
            }
            Self::InvalidPattern { .. } => Some(
                "Patterns are globs relative to the working directory, e.g. \"dist/**/*.js\""
                    .to_string(),
            ),
            Self::FileNotFound { path, operation } => Some(format!(
                "Ensure {} exists before running {} (create it with 'artifact-size analyze --format json')",
                path.display(),
                operation
            )),
            Self::InvalidSnapshot { .. } => Some(
                "Snapshots must be the JSON output of 'artifact-size analyze --format json'"
                    .to_string(),
            ),
            Self::InvalidOutputSpec(_) => Some(format!(
                "Use FORMAT:TARGET where FORMAT is one of: {}",
                crate::report::Format::ALL.map(|f| f.name()).join(", ")
            )),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get documentation URL for this error.
    pub fn docs_url(&self) -> Option<&str> {
        match self {
            Self::ConfigNotFound { .. }
            | Self::InvalidConfig { .. }
            | Self::InvalidPattern { .. } => {
                Some(concat!(env!("CARGO_PKG_REPOSITORY"), "#configuration"))
            }
            Self::InvalidOutputSpec(_) => Some(concat!(env!("CARGO_PKG_REPOSITORY"), "#outputs")),
            _ => None,
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Follows sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use artifact_size::error::ArtifactSizeError;
    /// use std::path::PathBuf;
    ///
    /// let error = ArtifactSizeError::FileNotFound {
    ///     path: PathBuf::from("base.json"),
    ///     operation: "compare".to_string(),
    /// };
    ///
    /// assert_eq!(error.exit_code(), 66); // EX_NOINPUT
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigNotFound { .. } => 66,      // EX_NOINPUT
            Self::InvalidConfig { .. } => 65,       // EX_DATAERR
            Self::DuplicateArtifactId { .. } => 65, // EX_DATAERR
            Self::InvalidPattern { .. } => 65,      // EX_DATAERR
            Self::FileNotFound { .. } => 66,        // EX_NOINPUT
            Self::InvalidSnapshot { .. } => 65,     // EX_DATAERR
            Self::InvalidOutputSpec(_) => 64,       // EX_USAGE
            Self::Io { .. } => 74,                  // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with suggestions and documentation links
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut indent = 1;
        for cause in error.chain().skip(1) {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                cause
            ));
            indent += 1;
        }

        if let Some(as_error) = Self::find(error) {
            if let Some(suggestion) = as_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }

            if let Some(docs) = as_error.docs_url() {
                output.push_str(&format!("{} {}\n", style("docs:").blue(), docs));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::find(error).map_or(1, ArtifactSizeError::exit_code)
    }

    /// First [`ArtifactSizeError`] in the chain, even below added context
    fn find(error: &anyhow::Error) -> Option<&ArtifactSizeError> {
        error
            .chain()
            .find_map(|cause| cause.downcast_ref::<ArtifactSizeError>())
    }
}
