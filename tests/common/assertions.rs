//! Test assertion helpers
//!
//! Helpers for output that is not byte-for-byte stable, such as compressed
//! sizes, and for the GitHub Actions output file format.

use artifact_size::snapshot::ArtifactSnapshot;

/// Parse `analyze --format json` output, panicking with the raw text on failure
#[allow(dead_code)]
pub fn parse_snapshot(json: &str) -> Vec<ArtifactSnapshot> {
    serde_json::from_str(json)
        .unwrap_or_else(|e| panic!("Output should be snapshot JSON ({}), got:\n{}", e, json))
}

/// Assert that a compressed size was measured and is plausible
///
/// Compressed sizes depend on the encoder implementation, so only bounds are
/// checked: non-zero, and not more than the raw size plus container overhead.
#[allow(dead_code)]
pub fn assert_compressed(size: Option<u64>, raw: u64) {
    let size = size.expect("Compressed size should be measured");
    assert!(size > 0, "Compressed size should be non-zero");
    assert!(
        size <= raw + 32,
        "Compressed size {} unreasonably large for {} raw bytes",
        size,
        raw
    );
}

/// Split a `$GITHUB_OUTPUT` file into `(key, value)` pairs
///
/// Each entry has the form `key<<EOF\nvalue\nEOF\n`.
#[allow(dead_code)]
pub fn parse_github_output(content: &str) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    let mut rest = content;
    while !rest.is_empty() {
        let (key, after) = rest
            .split_once("<<EOF\n")
            .unwrap_or_else(|| panic!("Malformed GitHub output: {:?}", rest));
        let (value, after) = after
            .split_once("\nEOF\n")
            .unwrap_or_else(|| panic!("Unterminated GitHub output: {:?}", after));
        entries.push((key.to_string(), value.to_string()));
        rest = after;
    }
    entries
}
