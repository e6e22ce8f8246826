//! Snapshot differ

use super::{DiffRecord, DiffStatus, MetricDiff};
use crate::snapshot::ArtifactSnapshot;
use std::collections::{HashMap, HashSet};

impl DiffRecord {
    /// Diff for an artifact present in both snapshots
    pub fn updated(base: &ArtifactSnapshot, current: &ArtifactSnapshot) -> Self {
        Self {
            id: current.id.clone(),
            name: current.name.clone(),
            status: DiffStatus::Updated,
            raw: MetricDiff::new(base.size, current.size),
            gzip: MetricDiff::between(base.gzip, current.gzip),
            brotli: MetricDiff::between(base.brotli, current.brotli),
            old_files: base.files.clone(),
            new_files: current.files.clone(),
        }
    }

    /// Diff for an artifact that only exists in the current snapshot
    pub fn added(current: &ArtifactSnapshot) -> Self {
        Self {
            id: current.id.clone(),
            name: current.name.clone(),
            status: DiffStatus::Added,
            raw: MetricDiff::new(0, current.size),
            gzip: current.gzip.map(|size| MetricDiff::new(0, size)),
            brotli: current.brotli.map(|size| MetricDiff::new(0, size)),
            old_files: Vec::new(),
            new_files: current.files.clone(),
        }
    }

    /// Diff for an artifact that only exists in the base snapshot
    pub fn removed(base: &ArtifactSnapshot) -> Self {
        Self {
            id: base.id.clone(),
            name: base.name.clone(),
            status: DiffStatus::Removed,
            raw: MetricDiff::new(base.size, 0),
            gzip: base.gzip.map(|size| MetricDiff::new(size, 0)),
            brotli: base.brotli.map(|size| MetricDiff::new(size, 0)),
            old_files: base.files.clone(),
            new_files: Vec::new(),
        }
    }
}

/// Compare two snapshots, matching artifacts by id
///
/// Records are ordered with every base id first (in base order), followed by
/// ids only present in `current` (in current order). Each id appears once.
///
/// # Examples
///
/// ```
/// use artifact_size::diff::{compare_artifacts, DiffStatus};
/// use artifact_size::snapshot::{ArtifactSnapshot, Compression};
///
/// let base = vec![ArtifactSnapshot::from_files("app", "app", vec![], Compression::ALL)];
/// let current = vec![ArtifactSnapshot::from_files("lib", "lib", vec![], Compression::ALL)];
///
/// let diff = compare_artifacts(&base, &current);
/// assert_eq!(diff[0].status, DiffStatus::Removed);
/// assert_eq!(diff[1].status, DiffStatus::Added);
/// ```
pub fn compare_artifacts(
    base: &[ArtifactSnapshot],
    current: &[ArtifactSnapshot],
) -> Vec<DiffRecord> {
    let current_by_id: HashMap<&str, &ArtifactSnapshot> =
        current.iter().map(|a| (a.id.as_str(), a)).collect();
    let mut seen: HashSet<&str> = HashSet::with_capacity(base.len() + current.len());
    let mut records = Vec::with_capacity(base.len() + current.len());

    for artifact in base {
        if !seen.insert(artifact.id.as_str()) {
            continue;
        }
        let record = match current_by_id.get(artifact.id.as_str()) {
            Some(current_artifact) => DiffRecord::updated(artifact, current_artifact),
            None => DiffRecord::removed(artifact),
        };
        records.push(record);
    }

    for artifact in current {
        if seen.insert(artifact.id.as_str()) {
            records.push(DiffRecord::added(artifact));
        }
    }

    records
}
