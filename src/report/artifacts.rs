//! Markdown and text rendering of snapshot lists

use super::{colorize, FormatOptions, MARKDOWN_HEADER};
use crate::fmt::pretty_size;
use crate::snapshot::ArtifactSnapshot;

const TABLE_HEAD: &str = "| Artifact | Files | Size | Gzip | Brotli |\n|---|---|---:|---:|---:|\n";

/// Pretty size, or `-` for a disabled algorithm
fn maybe_size(size: Option<u64>) -> String {
    size.map_or_else(|| "-".to_string(), pretty_size)
}

pub(super) fn render_markdown(artifacts: &[ArtifactSnapshot], options: &FormatOptions) -> String {
    let header = if options.header { MARKDOWN_HEADER } else { "" };

    let rows: Vec<String> = artifacts
        .iter()
        .map(|artifact| {
            format!(
                "| `{}` | {} file(s) | {} | {} | {} |",
                artifact.name,
                artifact.files.len(),
                pretty_size(artifact.size),
                maybe_size(artifact.gzip),
                maybe_size(artifact.brotli)
            )
        })
        .collect();

    format!("{}{}{}\n", header, TABLE_HEAD, rows.join("\n"))
}

pub(super) fn render_text(artifacts: &[ArtifactSnapshot], options: &FormatOptions) -> String {
    let color = options.color;

    artifacts
        .iter()
        .map(|artifact| {
            let mut lines = vec![format!(
                "{}: files={}, size={}, gzip={}, brotli={}",
                artifact.name,
                colorize(&artifact.files.len().to_string(), color),
                colorize(&pretty_size(artifact.size), color),
                colorize(&maybe_size(artifact.gzip), color),
                colorize(&maybe_size(artifact.brotli), color)
            )];

            let last = artifact.files.len().saturating_sub(1);
            lines.extend(artifact.files.iter().enumerate().map(|(i, file)| {
                let branch = if i == last { '└' } else { '├' };
                format!(
                    " {} {} size={}, gzip={}, brotli={}",
                    branch,
                    file.filename,
                    colorize(&pretty_size(file.size), color),
                    colorize(&maybe_size(file.gzip), color),
                    colorize(&maybe_size(file.brotli), color)
                )
            }));

            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
