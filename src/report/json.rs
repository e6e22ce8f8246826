//! JSON backend

use serde::Serialize;

/// Pretty-print `value` as JSON
///
/// Records and snapshots only contain strings, integers and lists, for which
/// serialization cannot fail.
pub(super) fn render<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
