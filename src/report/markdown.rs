//! Markdown backend for snapshot comparisons
//!
//! Renders a GitHub flavoured table. Depending on the unchanged mode the
//! size-identical artifacts are listed inline, counted in a trailer, or moved
//! into a `<details>` section below the table.

use super::{count_artifacts, FormatOptions, UnchangedMode, MARKDOWN_HEADER, NO_CHANGES};
use crate::diff::{filter_unchanged, DiffRecord, DiffStatus};
use crate::fmt::{format_percent, pretty_size, signed_delta};

const TABLE_WITH_COMPRESSION: &str =
    "| Artifact | Files | Size | Compressed | Change |\n|---|---|---:|---:|---:|\n";
const TABLE_WITHOUT_COMPRESSION: &str = "| Artifact | Files | Size | Change |\n|---|---|---:|---:|\n";
const DETAILS_WITH_COMPRESSION: &str =
    "| Artifact | Files | Size | Compressed |\n|---|---|---:|---:|\n";
const DETAILS_WITHOUT_COMPRESSION: &str = "| Artifact | Files | Size |\n|---|---|---:|\n";

pub(super) fn render(records: &[DiffRecord], options: &FormatOptions) -> String {
    let filtered = filter_unchanged(records, options.unchanged);

    if filtered.is_empty() {
        return if options.header {
            format!("{}{}\n", MARKDOWN_HEADER, NO_CHANGES)
        } else {
            String::new()
        };
    }

    let omitted: Vec<&DiffRecord> = match options.unchanged {
        UnchangedMode::Show => Vec::new(),
        UnchangedMode::Hide | UnchangedMode::Collapse => {
            records.iter().filter(|r| r.is_unchanged()).collect()
        }
    };

    let mut out = String::new();
    if options.header {
        out.push_str(MARKDOWN_HEADER);
    }
    out.push_str(description(options.unchanged, omitted.len()));
    out.push_str("\n\n");

    let show_compressed = filtered.iter().any(|r| r.has_compression());
    out.push_str(if show_compressed {
        TABLE_WITH_COMPRESSION
    } else {
        TABLE_WITHOUT_COMPRESSION
    });
    let rows: Vec<String> = filtered
        .iter()
        .map(|record| render_row(record, show_compressed))
        .collect();
    out.push_str(&rows.join("\n"));
    out.push('\n');

    if omitted.is_empty() {
        return out;
    }

    match options.unchanged {
        UnchangedMode::Show => {}
        UnchangedMode::Hide => {
            out.push_str(&format!("\n*{} omitted*\n", count_artifacts(omitted.len())));
        }
        UnchangedMode::Collapse => {
            out.push_str(&format!("\n*{} collapsed*\n\n", count_artifacts(omitted.len())));
            out.push_str(&render_details(&omitted));
        }
    }

    out
}

fn description(mode: UnchangedMode, omitted: usize) -> &'static str {
    if omitted == 0 {
        return "Artifact sizes in this build.";
    }

    match mode {
        UnchangedMode::Show => "Artifact sizes in this build.",
        UnchangedMode::Hide => "Artifact sizes in this build (artifacts with unchanged sizes omitted).",
        UnchangedMode::Collapse => "Artifact sizes in this build (unchanged artifacts collapsed below).",
    }
}

/// Escape spaces so names never break a table cell
fn cell_name(name: &str) -> String {
    name.replace(' ', "&nbsp;")
}

/// Current gzip/brotli sizes joined with `<br>`, `N/A` if neither is known
fn compressed_column(record: &DiffRecord) -> String {
    let parts: Vec<String> = [("gzip", record.gzip), ("brotli", record.brotli)]
        .into_iter()
        .filter_map(|(label, metric)| {
            metric.map(|m| format!("{}: {}", label, pretty_size(m.new_size)))
        })
        .collect();

    if parts.is_empty() {
        "N/A".to_string()
    } else {
        parts.join("<br>")
    }
}

fn render_row(record: &DiffRecord, show_compressed: bool) -> String {
    let name = cell_name(&record.name);
    let raw = &record.raw;

    let mut cells: Vec<String> = match record.status {
        DiffStatus::Added => vec![
            format!("{} (added)", name),
            format!("{} file(s)", record.new_files.len()),
            format!("N/A → **{}**", pretty_size(raw.new_size)),
            "+0.00%".to_string(),
        ],
        DiffStatus::Removed => vec![
            format!("{} (removed)", name),
            "N/A".to_string(),
            format!("{} → N/A", pretty_size(raw.old_size)),
            "N/A".to_string(),
        ],
        DiffStatus::Updated if raw.difference == 0 => vec![
            name,
            format!("{} file(s)", record.new_files.len()),
            pretty_size(raw.new_size),
            "-".to_string(),
        ],
        DiffStatus::Updated => vec![
            name,
            format!("{} file(s)", record.new_files.len()),
            format!(
                "{} → **{}** ({})",
                pretty_size(raw.old_size),
                pretty_size(raw.new_size),
                signed_delta(raw.difference)
            ),
            format_percent(raw),
        ],
    };

    if show_compressed {
        let compressed = match record.status {
            DiffStatus::Removed => "N/A".to_string(),
            DiffStatus::Added | DiffStatus::Updated => compressed_column(record),
        };
        cells.insert(3, compressed);
    }

    format!("| {} |", cells.join(" | "))
}

/// Collapsible table listing the current size of every omitted artifact
fn render_details(omitted: &[&DiffRecord]) -> String {
    let show_compressed = omitted.iter().any(|r| r.has_compression());

    let rows: Vec<String> = omitted
        .iter()
        .map(|record| {
            let mut cells = vec![
                cell_name(&record.name),
                format!("{} file(s)", record.new_files.len()),
                pretty_size(record.raw.new_size),
            ];
            if show_compressed {
                cells.push(compressed_column(record));
            }
            format!("| {} |", cells.join(" | "))
        })
        .collect();

    format!(
        "<details>\n<summary>{}</summary>\n\n{}{}\n\n</details>\n",
        unchanged_summary(omitted.len()),
        if show_compressed {
            DETAILS_WITH_COMPRESSION
        } else {
            DETAILS_WITHOUT_COMPRESSION
        },
        rows.join("\n")
    )
}

/// `1 unchanged artifact` / `2 unchanged artifacts`
fn unchanged_summary(count: usize) -> String {
    if count == 1 {
        "1 unchanged artifact".to_string()
    } else {
        format!("{} unchanged artifacts", count)
    }
}
