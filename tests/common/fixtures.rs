//! Test fixture helpers for creating test projects
//!
//! Provides temporary workspaces containing a `dist/` directory of build
//! outputs, an artifact config, and snapshot files.

#![allow(dead_code)]

use artifact_size::snapshot::{ArtifactSnapshot, Compression, FileEntry};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Config measuring scripts with both algorithms and styles without compression
pub const CONFIG_JSON: &str = r#"{
    "artifacts": [
        { "id": "app", "name": "app", "include": "dist/**/*.js", "exclude": "dist/**/*.test.js" },
        { "id": "styles", "name": "styles", "include": ["dist/*.css"], "compression": false }
    ]
}"#;

/// Same artifacts as [`CONFIG_JSON`], in TOML
pub const CONFIG_TOML: &str = r#"
[[artifacts]]
id = "app"
name = "app"
include = "dist/**/*.js"
exclude = "dist/**/*.test.js"

[[artifacts]]
id = "styles"
name = "styles"
include = ["dist/*.css"]
compression = false
"#;

/// A temporary project directory, removed on drop
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Empty workspace
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Workspace with build outputs and `artifact-size.json`
    ///
    /// - `dist/app.js`: 50 bytes
    /// - `dist/chunks/lazy.js`: 30 bytes
    /// - `dist/app.test.js`: excluded
    /// - `dist/app.css`: 12 bytes
    pub fn with_project() -> Self {
        let workspace = Self::new();
        workspace.write("dist/app.js", "a".repeat(50));
        workspace.write("dist/chunks/lazy.js", "b".repeat(30));
        workspace.write("dist/app.test.js", "c".repeat(500));
        workspace.write("dist/app.css", "d".repeat(12));
        workspace.write("artifact-size.json", CONFIG_JSON);
        workspace
    }

    /// Root directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the root, creating parent directories
    pub fn write(&self, relative: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Read a file relative to the root
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative)).expect("Failed to read test file")
    }

    /// Check whether a file exists relative to the root
    pub fn exists(&self, relative: &str) -> bool {
        self.dir.path().join(relative).exists()
    }
}

/// Single-file artifact with the given sizes
pub fn artifact(id: &str, size: u64, gzip: Option<u64>, brotli: Option<u64>) -> ArtifactSnapshot {
    let compression = Compression {
        gzip: gzip.is_some(),
        brotli: brotli.is_some(),
    };
    let file = FileEntry {
        filename: format!("dist/{}.js", id),
        size,
        gzip,
        brotli,
    };
    ArtifactSnapshot::from_files(id, id, vec![file], compression)
}

/// Serialize a snapshot list the way `analyze --format json` does
pub fn snapshot_json(artifacts: &[ArtifactSnapshot]) -> String {
    serde_json::to_string_pretty(artifacts).expect("Failed to serialize snapshot")
}

/// Workspace with `base.json` and `current.json`
///
/// - `app`: 1000B → 1200B (gzip 400B → 450B, brotli 350B → 380B)
/// - `vendor`: unchanged 2000B
/// - `legacy`: removed
/// - `worker`: added
pub fn compare_workspace() -> Workspace {
    let workspace = Workspace::new();
    let base = vec![
        artifact("app", 1000, Some(400), Some(350)),
        artifact("vendor", 2000, Some(700), Some(600)),
        artifact("legacy", 300, Some(150), Some(120)),
    ];
    let current = vec![
        artifact("app", 1200, Some(450), Some(380)),
        artifact("vendor", 2000, Some(700), Some(600)),
        artifact("worker", 500, Some(200), Some(180)),
    ];
    workspace.write("base.json", snapshot_json(&base));
    workspace.write("current.json", snapshot_json(&current));
    workspace
}
