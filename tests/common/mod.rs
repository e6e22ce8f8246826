//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - A handle on the compiled binary with a clean environment
//! - Temporary project workspaces with build outputs and configs
//! - Snapshot JSON builders for `compare`
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures::Workspace;
//!
//! fn test_analyze() {
//!     let workspace = Workspace::with_project();
//!     common::bin()
//!         .current_dir(workspace.path())
//!         .args(["analyze", "-c", "artifact-size.json"])
//!         .assert()
//!         .success();
//! }
//! ```

pub mod assertions;
pub mod fixtures;

use assert_cmd::Command;

/// The artifact-size binary, isolated from CI and color settings of the host
#[allow(dead_code)]
pub fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_artifact-size"));
    cmd.env_remove("GITHUB_OUTPUT")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("RUST_LOG");
    cmd
}
