//! Size measurements for artifacts and their files
//!
//! A snapshot is the list of [`ArtifactSnapshot`]s produced by one analysis
//! run. Snapshots are persisted as JSON and later fed to the differ.

use serde::{Deserialize, Serialize};

/// Enabled compression algorithms for one artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compression {
    /// Measure gzip size
    pub gzip: bool,
    /// Measure brotli size
    pub brotli: bool,
}

impl Compression {
    /// Both algorithms enabled
    pub const ALL: Self = Self {
        gzip: true,
        brotli: true,
    };

    /// No compression measured
    pub const NONE: Self = Self {
        gzip: false,
        brotli: false,
    };
}

impl Default for Compression {
    fn default() -> Self {
        Self::ALL
    }
}

/// Per-file size result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to the working directory, `/`-separated
    pub filename: String,
    /// Size on disk in bytes
    pub size: u64,
    /// Gzip size in bytes, `None` when gzip is disabled
    pub gzip: Option<u64>,
    /// Brotli size in bytes, `None` when brotli is disabled
    pub brotli: Option<u64>,
}

/// Aggregated sizes for a single artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSnapshot {
    /// Stable identifier, unique within one snapshot
    pub id: String,
    /// Display name
    #[serde(alias = "artifact")]
    pub name: String,
    /// Files in the artifact, sorted by filename
    pub files: Vec<FileEntry>,
    /// Total size on disk in bytes
    pub size: u64,
    /// Total gzip size, `None` when gzip is disabled
    pub gzip: Option<u64>,
    /// Total brotli size, `None` when brotli is disabled
    pub brotli: Option<u64>,
}

impl ArtifactSnapshot {
    /// Build an artifact from its files, summing every metric
    ///
    /// Compressed totals are `None` only when the algorithm is disabled;
    /// an enabled algorithm over an empty file list totals zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use artifact_size::snapshot::{ArtifactSnapshot, Compression, FileEntry};
    ///
    /// let files = vec![
    ///     FileEntry { filename: "dist/a.js".into(), size: 70, gzip: Some(60), brotli: None },
    ///     FileEntry { filename: "dist/b.js".into(), size: 30, gzip: Some(20), brotli: None },
    /// ];
    /// let compression = Compression { gzip: true, brotli: false };
    /// let artifact = ArtifactSnapshot::from_files("app", "app", files, compression);
    ///
    /// assert_eq!(artifact.size, 100);
    /// assert_eq!(artifact.gzip, Some(80));
    /// assert_eq!(artifact.brotli, None);
    /// ```
    pub fn from_files(
        id: impl Into<String>,
        name: impl Into<String>,
        files: Vec<FileEntry>,
        compression: Compression,
    ) -> Self {
        let size = saturating_sum(files.iter().map(|f| f.size));
        let gzip = compression
            .gzip
            .then(|| saturating_sum(files.iter().filter_map(|f| f.gzip)));
        let brotli = compression
            .brotli
            .then(|| saturating_sum(files.iter().filter_map(|f| f.brotli)));

        Self {
            id: id.into(),
            name: name.into(),
            files,
            size,
            gzip,
            brotli,
        }
    }
}

fn saturating_sum(values: impl Iterator<Item = u64>) -> u64 {
    values.fold(0, u64::saturating_add)
}

/// Parse a snapshot list from its JSON form
pub fn from_json(json: &str) -> serde_json::Result<Vec<ArtifactSnapshot>> {
    serde_json::from_str(json)
}
