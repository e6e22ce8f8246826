//! Diff records shared by the renderer tests

use crate::diff::{DiffRecord, DiffStatus, MetricDiff};
use crate::snapshot::FileEntry;

type Pair = (u64, u64);

fn files(count: usize, prefix: &str) -> Vec<FileEntry> {
    (0..count)
        .map(|i| FileEntry {
            filename: format!("dist/{}-{}.js", prefix, i),
            size: 1,
            gzip: None,
            brotli: None,
        })
        .collect()
}

pub fn record(
    id: &str,
    status: DiffStatus,
    raw: Pair,
    gzip: Option<Pair>,
    brotli: Option<Pair>,
    file_counts: (usize, usize),
) -> DiffRecord {
    DiffRecord {
        id: id.to_string(),
        name: id.to_string(),
        status,
        raw: MetricDiff::new(raw.0, raw.1),
        gzip: gzip.map(|(old, new)| MetricDiff::new(old, new)),
        brotli: brotli.map(|(old, new)| MetricDiff::new(old, new)),
        old_files: files(file_counts.0, id),
        new_files: files(file_counts.1, id),
    }
}

fn updated(id: &str, raw: Pair, gzip: Option<Pair>, brotli: Option<Pair>, count: usize) -> DiffRecord {
    record(id, DiffStatus::Updated, raw, gzip, brotli, (count, count))
}

/// Growth, no change and shrinkage
pub fn mixed_changes() -> Vec<DiffRecord> {
    vec![
        updated("app", (90, 100), Some((75, 80)), Some((72, 70)), 2),
        updated("lib", (200, 200), Some((150, 150)), Some((120, 120)), 1),
        updated("vendor", (300, 250), Some((250, 210)), Some((230, 200)), 1),
    ]
}

/// Every artifact changed
pub fn all_changed() -> Vec<DiffRecord> {
    let mut records = mixed_changes();
    records.remove(1);
    records
}

/// One changed and two unchanged artifacts
pub fn multiple_unchanged() -> Vec<DiffRecord> {
    vec![
        updated("app", (90, 100), Some((75, 80)), Some((72, 70)), 2),
        updated("lib", (200, 200), Some((150, 150)), Some((120, 120)), 1),
        updated("vendor", (300, 300), Some((250, 250)), Some((230, 230)), 1),
    ]
}

/// Nothing changed
pub fn unchanged_only() -> Vec<DiffRecord> {
    vec![updated("lib", (200, 200), Some((150, 150)), Some((120, 120)), 1)]
}

/// Changed and unchanged artifacts without compression
pub fn unchanged_no_compression() -> Vec<DiffRecord> {
    vec![
        updated("app", (90, 100), None, None, 1),
        updated("lib", (200, 200), None, None, 1),
    ]
}

pub fn single_added() -> Vec<DiffRecord> {
    vec![record("new", DiffStatus::Added, (0, 150), Some((0, 100)), Some((0, 80)), (0, 1))]
}

pub fn single_removed() -> Vec<DiffRecord> {
    vec![record("old", DiffStatus::Removed, (200, 0), Some((120, 0)), Some((100, 0)), (1, 0))]
}

pub fn single_added_no_compression() -> Vec<DiffRecord> {
    vec![record("new-nc", DiffStatus::Added, (0, 150), None, None, (0, 1))]
}

pub fn single_removed_no_compression() -> Vec<DiffRecord> {
    vec![record("old-nc", DiffStatus::Removed, (200, 0), None, None, (1, 0))]
}

/// Only gzip enabled
pub fn gzip_only() -> Vec<DiffRecord> {
    vec![
        updated("one-a", (90, 100), Some((75, 80)), None, 0),
        updated("one-b", (50, 60), Some((40, 45)), None, 0),
    ]
}

/// Compression disabled everywhere
pub fn no_compression() -> Vec<DiffRecord> {
    vec![
        updated("none-a", (90, 100), None, None, 0),
        updated("none-b", (50, 60), None, None, 0),
    ]
}

/// A different set of algorithms per artifact
pub fn mixed_compression() -> Vec<DiffRecord> {
    vec![
        updated("all-enabled", (120, 130), Some((90, 95)), Some((80, 85)), 0),
        updated("brotli-only", (70, 75), None, Some((60, 62)), 0),
        updated("all-disabled", (30, 40), None, None, 0),
    ]
}

/// Same artifact, one file fewer
pub fn file_changes() -> Vec<DiffRecord> {
    vec![record("removed-files", DiffStatus::Updated, (120, 110), None, None, (2, 1))]
}
