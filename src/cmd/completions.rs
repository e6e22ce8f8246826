//! Completions command implementation
//!
//! Handles the `artifact-size completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Binary name completions are generated for
pub const BIN_NAME: &str = "artifact-size";

/// Generate a shell completion script for `cmd` into `out`
///
/// `cmd` is the CLI definition (`Cli::command()` in the binary).
///
/// # Examples
///
/// ```bash
/// # Bash
/// artifact-size completions bash > /etc/bash_completion.d/artifact-size
///
/// # Zsh
/// artifact-size completions zsh > ~/.zfunc/_artifact-size
///
/// # Fish
/// artifact-size completions fish > ~/.config/fish/completions/artifact-size.fish
/// ```
pub fn cmd_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    generate(shell, cmd, BIN_NAME, out);
}
