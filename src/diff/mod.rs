//! Snapshot comparison
//!
//! Matches two snapshots by artifact id and produces one [`DiffRecord`] per
//! artifact, classified as added, removed or updated. Compressed metrics are
//! `None` whenever either side lacks them.

pub mod compare;
pub mod filter;

pub use compare::compare_artifacts;
pub use filter::{filter_unchanged, UnchangedMode};

use crate::snapshot::FileEntry;
use serde::{Deserialize, Serialize};

/// Lifecycle of an artifact between base and current snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffStatus {
    /// Only present in the current snapshot
    Added,
    /// Only present in the base snapshot
    Removed,
    /// Present in both snapshots
    Updated,
}

impl DiffStatus {
    /// Lowercase label as used in JSON output
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Updated => "updated",
        }
    }
}

/// Old/new sizes of a single metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDiff {
    /// Size in the base snapshot (0 when added)
    pub old_size: u64,
    /// Size in the current snapshot (0 when removed)
    pub new_size: u64,
    /// `new_size - old_size`, saturated to the `i64` range
    pub difference: i64,
}

impl MetricDiff {
    /// Create a diff between two sizes
    pub fn new(old_size: u64, new_size: u64) -> Self {
        let exact = i128::from(new_size) - i128::from(old_size);
        let difference = i64::try_from(exact).unwrap_or(if exact > 0 {
            i64::MAX
        } else {
            i64::MIN
        });
        Self {
            old_size,
            new_size,
            difference,
        }
    }

    /// Diff between two optional sizes, `None` unless both are known
    pub fn between(old_size: Option<u64>, new_size: Option<u64>) -> Option<Self> {
        old_size
            .zip(new_size)
            .map(|(old_size, new_size)| Self::new(old_size, new_size))
    }
}

/// Comparison of one artifact between two snapshots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffRecord {
    /// Artifact id
    pub id: String,
    /// Display name (taken from the current snapshot when present)
    pub name: String,
    /// Whether the artifact was added, removed or updated
    pub status: DiffStatus,
    /// Uncompressed sizes
    pub raw: MetricDiff,
    /// Gzip sizes, `None` if gzip is unavailable on either side
    pub gzip: Option<MetricDiff>,
    /// Brotli sizes, `None` if brotli is unavailable on either side
    pub brotli: Option<MetricDiff>,
    /// Files from the base snapshot
    pub old_files: Vec<FileEntry>,
    /// Files from the current snapshot
    pub new_files: Vec<FileEntry>,
}

impl DiffRecord {
    /// True for updated artifacts whose raw size did not change
    pub fn is_unchanged(&self) -> bool {
        self.status == DiffStatus::Updated && self.raw.difference == 0
    }

    /// True if at least one compressed metric is available
    pub fn has_compression(&self) -> bool {
        self.gzip.is_some() || self.brotli.is_some()
    }

    /// Change in number of files between base and current
    pub fn file_count_delta(&self) -> i64 {
        self.new_files.len() as i64 - self.old_files.len() as i64
    }
}
