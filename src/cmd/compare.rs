//! Compare command implementation
//!
//! Handles the `artifact-size compare` command which diffs two snapshot files
//! written by `analyze --format json`.

use anyhow::Result;
use std::path::Path;

use super::emit::{emit, OutputArgs};
use crate::diff::{compare_artifacts, DiffRecord};
use crate::error::ArtifactSizeError;
use crate::infra::{FileSystem, RealFileSystem};
use crate::report::{format_diff, UnchangedMode};
use crate::snapshot::{self, ArtifactSnapshot};

/// Compare two snapshot files and emit the diff
///
/// # Examples
///
/// ```no_run
/// use artifact_size::cmd::{cmd_compare, OutputArgs};
/// use artifact_size::report::{Format, UnchangedMode};
/// use std::path::Path;
///
/// let output = OutputArgs {
///     format: Format::Markdown,
///     ..Default::default()
/// };
/// cmd_compare(
///     Path::new("base.json"),
///     Path::new("current.json"),
///     &output,
///     UnchangedMode::Collapse,
/// )?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - Either snapshot file doesn't exist
/// - A snapshot file is not valid snapshot JSON
/// - An output spec is malformed or an output cannot be written
pub fn cmd_compare(
    base: &Path,
    current: &Path,
    output: &OutputArgs,
    unchanged: UnchangedMode,
) -> Result<()> {
    let diff = compare_files(base, current, &RealFileSystem)?;

    emit(output, unchanged, |format, options| {
        format_diff(&diff, format, options)
    })
}

/// Read both snapshot files and diff them
pub fn compare_files<F: FileSystem>(
    base: &Path,
    current: &Path,
    fs: &F,
) -> Result<Vec<DiffRecord>> {
    let base = read_snapshot(base, fs)?;
    let current = read_snapshot(current, fs)?;
    let diff = compare_artifacts(&base, &current);
    log::debug!(
        "Compared {} base and {} current artifact(s) into {} record(s)",
        base.len(),
        current.len(),
        diff.len()
    );
    Ok(diff)
}

/// Read a snapshot list from a JSON file
pub fn read_snapshot<F: FileSystem>(
    path: &Path,
    fs: &F,
) -> Result<Vec<ArtifactSnapshot>, ArtifactSizeError> {
    let contents = fs.read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => ArtifactSizeError::FileNotFound {
            path: path.to_path_buf(),
            operation: "compare".to_string(),
        },
        _ => ArtifactSizeError::Io {
            context: format!("reading {}", path.display()),
            source,
        },
    })?;

    snapshot::from_json(&contents).map_err(|source| ArtifactSizeError::InvalidSnapshot {
        path: path.to_path_buf(),
        source,
    })
}
