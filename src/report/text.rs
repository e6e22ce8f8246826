//! Plain text backend for snapshot comparisons

use super::{colorize, FormatOptions, NO_CHANGES};
use crate::diff::{filter_unchanged, DiffRecord, DiffStatus, MetricDiff};
use crate::fmt::{pretty_size, signed_count, signed_delta};

/// Separator between artifacts
const RECORD_SEPARATOR: &str = "\n\n";

pub(super) fn render(records: &[DiffRecord], options: &FormatOptions) -> String {
    let filtered = filter_unchanged(records, options.unchanged);

    if filtered.is_empty() {
        return if options.header {
            NO_CHANGES.to_string()
        } else {
            String::new()
        };
    }

    filtered
        .iter()
        .map(|record| match record.status {
            DiffStatus::Removed => format!("{}: {}", record.name, record.status.as_str()),
            DiffStatus::Added | DiffStatus::Updated => render_record(record, options.color),
        })
        .collect::<Vec<_>>()
        .join(RECORD_SEPARATOR)
}

fn render_record(record: &DiffRecord, color: bool) -> String {
    let mut parts = vec![
        format!(
            "files={} ({})",
            colorize(&record.new_files.len().to_string(), color),
            signed_count(record.file_count_delta())
        ),
        metric("size", &record.raw, color),
    ];

    if let Some(gzip) = &record.gzip {
        parts.push(metric("gzip", gzip, color));
    }
    if let Some(brotli) = &record.brotli {
        parts.push(metric("brotli", brotli, color));
    }

    format!("{}: {}", record.name, parts.join(", "))
}

/// `label=<new size> (<delta>)`
fn metric(label: &str, metric: &MetricDiff, color: bool) -> String {
    format!(
        "{}={} ({})",
        label,
        colorize(&pretty_size(metric.new_size), color),
        signed_delta(metric.difference)
    )
}
