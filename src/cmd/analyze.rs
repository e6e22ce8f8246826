//! Analyze command implementation
//!
//! Handles the `artifact-size analyze` command which measures every artifact
//! listed in a config file and prints (or writes) the resulting snapshot.

use anyhow::{Context, Result};
use std::path::Path;

use super::emit::{emit, OutputArgs};
use crate::analyzer::analyze_all;
use crate::config::ConfigLoader;
use crate::infra::{FileSystem, RealFileSystem};
use crate::report::{format_artifacts, UnchangedMode};
use crate::snapshot::ArtifactSnapshot;

/// Measure all configured artifacts and emit the snapshot
///
/// # Examples
///
/// ```no_run
/// use artifact_size::cmd::{cmd_analyze, OutputArgs};
/// use artifact_size::report::Format;
/// use std::path::Path;
///
/// let output = OutputArgs {
///     format: Format::Json,
///     output_files: vec!["temp/artifact-size.json".to_string()],
///     ..Default::default()
/// };
/// cmd_analyze(Path::new("artifact-size.json"), &output)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The config file is missing or invalid
/// - A matched file cannot be read
/// - An output spec is malformed or an output cannot be written
pub fn cmd_analyze(config_file: &Path, output: &OutputArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let artifacts = analyze_with_fs(&cwd.join(config_file), &cwd, &RealFileSystem)?;

    emit(output, UnchangedMode::Show, |format, options| {
        format_artifacts(&artifacts, format, options)
    })
}

/// Load `config_path` and measure its artifacts relative to `cwd`
pub fn analyze_with_fs<F: FileSystem + Sync>(
    config_path: &Path,
    cwd: &Path,
    fs: &F,
) -> Result<Vec<ArtifactSnapshot>> {
    let config = ConfigLoader::load_with_fs(config_path, fs)?;
    let artifacts = analyze_all(&config, cwd, fs).context("Failed to analyze artifacts")?;
    log::info!("Analyzed {} artifact(s)", artifacts.len());
    Ok(artifacts)
}
