//! Unchanged-artifact filtering

use super::DiffRecord;
use serde::{Deserialize, Serialize};

/// How size-identical artifacts are presented in a report
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum UnchangedMode {
    /// Keep unchanged artifacts in the main table
    #[default]
    Show,
    /// Drop unchanged artifacts and mention how many were omitted
    Hide,
    /// Move unchanged artifacts into a collapsible section
    Collapse,
}

impl std::fmt::Display for UnchangedMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UnchangedMode::Show => "show",
            UnchangedMode::Hide => "hide",
            UnchangedMode::Collapse => "collapse",
        };
        write!(f, "{}", s)
    }
}

/// Select the records to display inline for `mode`
///
/// `Show` returns every record. `Hide` and `Collapse` both drop updated
/// records whose raw size did not change; added and removed records are
/// always kept. Order is preserved.
///
/// # Examples
///
/// ```
/// use artifact_size::diff::{compare_artifacts, filter_unchanged, UnchangedMode};
/// use artifact_size::snapshot::{ArtifactSnapshot, Compression};
///
/// let snapshot = vec![ArtifactSnapshot::from_files("app", "app", vec![], Compression::ALL)];
/// let diff = compare_artifacts(&snapshot, &snapshot);
///
/// assert_eq!(filter_unchanged(&diff, UnchangedMode::Show).len(), 1);
/// assert!(filter_unchanged(&diff, UnchangedMode::Hide).is_empty());
/// ```
pub fn filter_unchanged(records: &[DiffRecord], mode: UnchangedMode) -> Vec<&DiffRecord> {
    match mode {
        UnchangedMode::Show => records.iter().collect(),
        UnchangedMode::Hide | UnchangedMode::Collapse => {
            records.iter().filter(|r| !r.is_unchanged()).collect()
        }
    }
}
