//! Shared formatting utilities for size display

use crate::diff::MetricDiff;

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;

/// Format a byte count as a compact human-readable size
///
/// Sizes below 1 KiB are printed as whole bytes, larger sizes use one decimal
/// place (rounded half-up) in KiB or MiB.
///
/// # Examples
///
/// ```
/// use artifact_size::fmt::pretty_size;
///
/// assert_eq!(pretty_size(512), "512B");
/// assert_eq!(pretty_size(1024), "1.0KiB");
/// assert_eq!(pretty_size(1_572_864), "1.5MiB");
/// ```
pub fn pretty_size(bytes: u64) -> String {
    if bytes >= MIB {
        format!("{}MiB", one_decimal(bytes, MIB))
    } else if bytes >= KIB {
        format!("{}KiB", one_decimal(bytes, KIB))
    } else {
        format!("{}B", bytes)
    }
}

/// Divide with one decimal of precision using integer arithmetic
fn one_decimal(bytes: u64, unit: u64) -> String {
    let tenths = (u128::from(bytes) * 10 + u128::from(unit) / 2) / u128::from(unit);
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Sign prefix for a delta; zero counts as growth
fn sign(value: i64) -> char {
    if value >= 0 {
        '+'
    } else {
        '-'
    }
}

/// Format a signed byte delta, e.g. `+512B` or `-1.5KiB`
///
/// # Examples
///
/// ```
/// use artifact_size::fmt::signed_delta;
///
/// assert_eq!(signed_delta(0), "+0B");
/// assert_eq!(signed_delta(-1536), "-1.5KiB");
/// ```
pub fn signed_delta(bytes: i64) -> String {
    format!("{}{}", sign(bytes), pretty_size(bytes.unsigned_abs()))
}

/// Format a signed count delta, e.g. `+1` or `-2`
pub fn signed_count(count: i64) -> String {
    format!("{}{}", sign(count), count.unsigned_abs())
}

/// Format the relative change of a metric as a percentage
///
/// A zero baseline always reads `+0.00%`, an unchanged size reads `-`.
///
/// # Examples
///
/// ```
/// use artifact_size::diff::MetricDiff;
/// use artifact_size::fmt::format_percent;
///
/// assert_eq!(format_percent(&MetricDiff::new(100, 160)), "+60.00%");
/// assert_eq!(format_percent(&MetricDiff::new(100, 100)), "-");
/// assert_eq!(format_percent(&MetricDiff::new(0, 100)), "+0.00%");
/// ```
pub fn format_percent(metric: &MetricDiff) -> String {
    if metric.old_size == 0 {
        return "+0.00%".to_string();
    }

    if metric.old_size == metric.new_size {
        return "-".to_string();
    }

    // Hundredths of a percent, ties rounded away from zero
    let old = u128::from(metric.old_size);
    let hundredths = (u128::from(metric.difference.unsigned_abs()) * 10_000 + old / 2) / old;
    format!(
        "{}{}.{:02}%",
        sign(metric.difference),
        hundredths / 100,
        hundredths % 100
    )
}
