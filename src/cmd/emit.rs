//! Report delivery shared by `analyze` and `compare`
//!
//! A report goes either to the `--output-file` targets or to stdout, and
//! additionally to every `--output-github` target.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cicd::{write_file, write_github, OutputSpec};
use crate::error::ArtifactSizeError;
use crate::infra::{FileSystem, RealFileSystem};
use crate::report::{Format, FormatOptions, UnchangedMode};

/// Output flags common to the reporting commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArgs {
    /// Format used for stdout and for `--output-file` values without a prefix
    pub format: Format,
    /// Raw `--output-file` values, `[format:]filename`
    pub output_files: Vec<String>,
    /// Raw `--output-github` values, `format:key`
    pub output_github: Vec<String>,
    /// Render headers
    pub header: bool,
}

impl Default for OutputArgs {
    fn default() -> Self {
        Self {
            format: Format::Text,
            output_files: Vec::new(),
            output_github: Vec::new(),
            header: true,
        }
    }
}

/// Where a report ends up, resolved from the process environment
pub struct Destination<'a, F: FileSystem> {
    /// Base directory for relative output files
    pub cwd: &'a Path,
    /// Value of `$GITHUB_OUTPUT`
    pub github_output: Option<&'a Path>,
    /// Colorize stdout
    pub color: bool,
    /// Filesystem used for writes
    pub fs: &'a F,
}

/// Deliver a report rendered by `render` according to `args`
pub fn emit<R>(args: &OutputArgs, unchanged: UnchangedMode, render: R) -> Result<()>
where
    R: Fn(Format, &FormatOptions) -> String,
{
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let github_output = std::env::var_os("GITHUB_OUTPUT").map(PathBuf::from);

    let destination = Destination {
        cwd: &cwd,
        github_output: github_output.as_deref(),
        color: console::colors_enabled(),
        fs: &RealFileSystem,
    };

    if let Some(stdout) = emit_to(args, unchanged, &destination, render)? {
        println!("{}", stdout);
    }
    Ok(())
}

/// Write every requested output; returns what belongs on stdout, if anything
///
/// All output specs are validated before anything is written.
pub fn emit_to<R, F>(
    args: &OutputArgs,
    unchanged: UnchangedMode,
    destination: &Destination<'_, F>,
    render: R,
) -> Result<Option<String>>
where
    R: Fn(Format, &FormatOptions) -> String,
    F: FileSystem,
{
    let files = args
        .output_files
        .iter()
        .map(|value| OutputSpec::parse(value, "--output-file", Some(args.format)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(ArtifactSizeError::from)?;
    let github = args
        .output_github
        .iter()
        .map(|value| OutputSpec::parse(value, "--output-github", None))
        .collect::<Result<Vec<_>, _>>()
        .map_err(ArtifactSizeError::from)?;

    let plain = FormatOptions {
        color: false,
        header: args.header,
        unchanged,
    };

    let stdout = if files.is_empty() {
        let options = FormatOptions {
            color: destination.color,
            ..plain
        };
        Some(render(args.format, &options))
    } else {
        for spec in &files {
            let content = render(spec.format, &plain);
            write_file(destination.fs, destination.cwd, &spec.target, &content).map_err(
                |source| ArtifactSizeError::Io {
                    context: format!("writing {}", spec.target),
                    source,
                },
            )?;
        }
        None
    };

    for spec in &github {
        let content = render(spec.format, &plain);
        write_github(
            destination.fs,
            destination.github_output,
            &spec.target,
            &content,
        )
        .map_err(|source| ArtifactSizeError::Io {
            context: format!("writing GitHub output '{}'", spec.target),
            source,
        })?;
    }

    Ok(stdout)
}
