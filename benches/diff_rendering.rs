//! Diff and Report Rendering Benchmarks
//!
//! **Purpose:** Measure snapshot comparison and report rendering over large
//! artifact lists
//!
//! **Regression Threshold:** >20% slower than baseline
//!
//! **How to Run:**
//! ```bash
//! cargo bench --bench diff_rendering
//! ```
//!
//! **What's Being Measured:**
//! 1. `compare artifacts` - Matching base and current snapshots by id
//! 2. `format diff` - Rendering a diff in each format and unchanged mode
//! 3. `config load` - Parsing and validating a config with many artifacts
//!
//! **Performance Notes:**
//! - Snapshots are synthetic: a quarter of the artifacts change, some are
//!   added or removed, the rest are size-identical
//! - Comparison is a single pass over each side with a hash lookup

use artifact_size::config::ConfigLoader;
use artifact_size::diff::compare_artifacts;
use artifact_size::report::{format_diff, Format, FormatOptions, UnchangedMode};
use artifact_size::snapshot::{ArtifactSnapshot, Compression, FileEntry};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::fs;
use std::hint::black_box;
use tempfile::TempDir;

const SIZES: [usize; 3] = [10, 100, 1000];

fn artifact(index: usize, growth: u64) -> ArtifactSnapshot {
    let files = (0..4)
        .map(|file| {
            let size = 10_000 + (index as u64 * 37 + file) * 11 + growth;
            FileEntry {
                filename: format!("dist/chunk-{}-{}.js", index, file),
                size,
                gzip: Some(size / 3),
                brotli: Some(size / 4),
            }
        })
        .collect();
    ArtifactSnapshot::from_files(
        format!("artifact-{}", index),
        format!("Artifact {}", index),
        files,
        Compression::ALL,
    )
}

/// Base and current snapshots with `count` artifacts each
fn snapshots(count: usize) -> (Vec<ArtifactSnapshot>, Vec<ArtifactSnapshot>) {
    let base = (0..count).map(|i| artifact(i, 0)).collect();
    let current = (count / 10..count + count / 10)
        .map(|i| artifact(i, if i % 4 == 0 { 512 } else { 0 }))
        .collect();
    (base, current)
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare artifacts");

    for count in SIZES {
        let (base, current) = snapshots(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| black_box(compare_artifacts(black_box(&base), black_box(&current))));
        });
    }

    group.finish();
}

fn bench_format_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("format diff");
    let (base, current) = snapshots(1000);
    let diff = compare_artifacts(&base, &current);

    for format in Format::ALL {
        for unchanged in [UnchangedMode::Show, UnchangedMode::Collapse] {
            let options = FormatOptions {
                unchanged,
                ..Default::default()
            };
            group.bench_with_input(
                BenchmarkId::new(format.name(), unchanged),
                &options,
                |b, options| {
                    b.iter(|| black_box(format_diff(black_box(&diff), format, options)));
                },
            );
        }
    }

    group.finish();
}

fn bench_config_load(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let artifacts: Vec<String> = (0..200)
        .map(|i| {
            format!(
                r#"{{ "id": "a{}", "name": "Artifact {}", "include": ["dist/{}/**/*.js"], "exclude": "**/*.map", "compression": ["gzip", "brotli"] }}"#,
                i, i, i
            )
        })
        .collect();
    let config_path = temp_dir.path().join("artifact-size.json");
    fs::write(
        &config_path,
        format!(r#"{{ "artifacts": [{}] }}"#, artifacts.join(",")),
    )
    .unwrap();

    c.bench_function("config load (200 artifacts)", |b| {
        b.iter(|| black_box(ConfigLoader::load(&config_path)).unwrap());
    });
}

criterion_group!(benches, bench_compare, bench_format_diff, bench_config_load);
criterion_main!(benches);
