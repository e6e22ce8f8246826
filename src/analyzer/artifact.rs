//! Per-file and per-artifact measurement

use super::compress::{brotli_size, gzip_size};
use super::files::resolve_files;
use crate::config::{NormalizedArtifactConfig, NormalizedConfig};
use crate::error::ArtifactSizeError;
use crate::infra::FileSystem;
use crate::snapshot::{ArtifactSnapshot, Compression, FileEntry};
use rayon::prelude::*;
use std::path::Path;

/// Measure one file
///
/// `filename` is resolved against `cwd` and recorded as given. The file is
/// only read when at least one algorithm is enabled.
pub fn file_size<F: FileSystem>(
    filename: &str,
    cwd: &Path,
    compression: Compression,
    fs: &F,
) -> Result<FileEntry, ArtifactSizeError> {
    let path = cwd.join(filename);
    let io_error = |source| ArtifactSizeError::Io {
        context: format!("reading {}", path.display()),
        source,
    };

    let size = fs.metadata(&path).map_err(io_error)?.len();

    let (gzip, brotli) = if compression.gzip || compression.brotli {
        let bytes = fs.read(&path).map_err(io_error)?;
        let gzip = if compression.gzip {
            Some(gzip_size(&bytes).map_err(io_error)?)
        } else {
            None
        };
        let brotli = if compression.brotli {
            Some(brotli_size(&bytes).map_err(io_error)?)
        } else {
            None
        };
        (gzip, brotli)
    } else {
        (None, None)
    };

    Ok(FileEntry {
        filename: filename.to_string(),
        size,
        gzip,
        brotli,
    })
}

/// Measure every file of one artifact
///
/// # Examples
///
/// ```no_run
/// use artifact_size::analyzer::analyze_artifact;
/// use artifact_size::config::ConfigLoader;
/// use artifact_size::infra::RealFileSystem;
/// use std::path::Path;
///
/// let config = ConfigLoader::load(Path::new("artifact-size.json"))?;
/// for artifact in &config.artifacts {
///     let snapshot = analyze_artifact(artifact, Path::new("."), &RealFileSystem)?;
///     println!("{}: {} bytes", snapshot.name, snapshot.size);
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn analyze_artifact<F: FileSystem>(
    artifact: &NormalizedArtifactConfig,
    cwd: &Path,
    fs: &F,
) -> Result<ArtifactSnapshot, ArtifactSizeError> {
    let compression = artifact.compression_flags();
    let files = resolve_files(artifact, cwd)?
        .iter()
        .map(|filename| file_size(filename, cwd, compression, fs))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ArtifactSnapshot::from_files(
        artifact.id.as_str(),
        artifact.name.as_str(),
        files,
        compression,
    ))
}

/// Measure all configured artifacts in parallel, keeping config order
pub fn analyze_all<F: FileSystem + Sync>(
    config: &NormalizedConfig,
    cwd: &Path,
    fs: &F,
) -> Result<Vec<ArtifactSnapshot>, ArtifactSizeError> {
    config
        .artifacts
        .par_iter()
        .map(|artifact| analyze_artifact(artifact, cwd, fs))
        .collect()
}
