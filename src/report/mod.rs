//! Report rendering for snapshots and snapshot comparisons
//!
//! Two entry points are provided:
//! - [`format_diff`] renders a list of [`DiffRecord`]s (output of `compare`)
//! - [`format_artifacts`] renders a snapshot list (output of `analyze`)
//!
//! Both support the same three [`Format`]s. JSON is always the complete,
//! unfiltered data; markdown and text are meant for humans and honour the
//! [`FormatOptions`].
//!
//! # Examples
//!
//! ```
//! use artifact_size::diff::compare_artifacts;
//! use artifact_size::report::{format_diff, Format, FormatOptions};
//! use artifact_size::snapshot::{ArtifactSnapshot, Compression};
//!
//! let base = vec![ArtifactSnapshot::from_files("app", "app", vec![], Compression::NONE)];
//! let diff = compare_artifacts(&base, &[]);
//!
//! let text = format_diff(&diff, Format::Text, &FormatOptions::default());
//! assert_eq!(text, "app: removed");
//! ```

mod artifacts;
mod json;
mod markdown;
mod text;

#[cfg(test)]
mod fixtures;

pub use crate::diff::UnchangedMode;

use crate::diff::DiffRecord;
use crate::snapshot::ArtifactSnapshot;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Header line shared by markdown reports
const MARKDOWN_HEADER: &str = "## Artifact sizes\n\n";

/// Sentence used when every artifact was filtered out
const NO_CHANGES: &str = "No artifact size changes in this build.";

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Pretty-printed JSON, lossless
    Json,
    /// GitHub flavoured markdown table
    Markdown,
    /// Plain text, optionally colorized
    #[default]
    Text,
}

impl Format {
    /// Every supported format
    pub const ALL: [Format; 3] = [Format::Json, Format::Markdown, Format::Text];

    /// Lowercase format name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Text => "text",
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| format!("Unknown format: {}", s))
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Colorize numeric values (text format only)
    pub color: bool,
    /// Include the `## Artifact sizes` header (markdown) and the
    /// no-changes sentence when nothing is left to show
    pub header: bool,
    /// Presentation of size-identical artifacts (markdown and text only)
    pub unchanged: UnchangedMode,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            color: false,
            header: true,
            unchanged: UnchangedMode::Show,
        }
    }
}

/// Render a snapshot comparison
///
/// # Examples
///
/// ```
/// use artifact_size::diff::compare_artifacts;
/// use artifact_size::report::{format_diff, Format, FormatOptions, UnchangedMode};
/// use artifact_size::snapshot::{ArtifactSnapshot, Compression};
///
/// let snapshot = vec![ArtifactSnapshot::from_files("app", "app", vec![], Compression::NONE)];
/// let diff = compare_artifacts(&snapshot, &snapshot);
///
/// let options = FormatOptions { unchanged: UnchangedMode::Hide, ..Default::default() };
/// let markdown = format_diff(&diff, Format::Markdown, &options);
/// assert_eq!(markdown, "## Artifact sizes\n\nNo artifact size changes in this build.\n");
/// ```
pub fn format_diff(records: &[DiffRecord], format: Format, options: &FormatOptions) -> String {
    match format {
        Format::Json => json::render(records),
        Format::Markdown => markdown::render(records, options),
        Format::Text => text::render(records, options),
    }
}

/// Render a snapshot list as produced by analysis
///
/// The `unchanged` option has no meaning for snapshots and is ignored.
///
/// # Examples
///
/// ```
/// use artifact_size::report::{format_artifacts, Format, FormatOptions};
/// use artifact_size::snapshot::{ArtifactSnapshot, Compression};
///
/// let artifacts = vec![ArtifactSnapshot::from_files("app", "app", vec![], Compression::NONE)];
/// let text = format_artifacts(&artifacts, Format::Text, &FormatOptions::default());
/// assert_eq!(text, "app: files=0, size=0B, gzip=-, brotli=-");
/// ```
pub fn format_artifacts(
    artifacts: &[ArtifactSnapshot],
    format: Format,
    options: &FormatOptions,
) -> String {
    match format {
        Format::Json => json::render(artifacts),
        Format::Markdown => artifacts::render_markdown(artifacts, options),
        Format::Text => artifacts::render_text(artifacts, options),
    }
}

/// Wrap a value in cyan when `color` is set
fn colorize(value: &str, color: bool) -> String {
    if color {
        console::style(value).cyan().force_styling(true).to_string()
    } else {
        value.to_string()
    }
}

/// `1 artifact` / `2 artifacts`
fn count_artifacts(count: usize) -> String {
    if count == 1 {
        "1 artifact".to_string()
    } else {
        format!("{} artifacts", count)
    }
}
