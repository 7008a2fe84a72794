//! Git command runner for hunkrev.
//!
//! Provides a thin wrapper around git commands with captured stdout/stderr
//! and structured error handling. All git invocations go through this module.

use crate::error::{HunkError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Captured output of a git query that exited successfully.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output minus trailing `\n` terminators.
    ///
    /// Everything else is kept byte for byte, including leading whitespace
    /// and a final `\r` on CRLF content, so diff text reaches the
    /// segmenter unchanged.
    pub stdout: String,
    /// Standard error (trimmed), used in failure messages.
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout)
                .trim_end_matches('\n')
                .to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Text describing why the query failed: stderr, or stdout when git
    /// wrote nothing to stderr.
    fn failure_detail(&self) -> &str {
        if self.stderr.is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }
}

/// Run a read-only git query in `cwd`.
///
/// `args` excludes the leading `git`. Both a spawn failure and a non-zero
/// exit become `HunkError::GitError` naming the git subcommand; the
/// resolver treats either as a failed attempt.
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let subcommand = args.first().copied().unwrap_or("");

    let output = Command::new("git")
        .current_dir(cwd.as_ref())
        .args(args)
        .output()
        .map_err(|e| HunkError::GitError(format!("failed to execute git {}: {}", subcommand, e)))?;

    let git_output = GitOutput::from_output(&output);
    if output.status.success() {
        return Ok(git_output);
    }

    Err(HunkError::GitError(format!(
        "git {} failed (exit code {}): {}",
        subcommand,
        output.status.code().unwrap_or(-1),
        git_output.failure_detail()
    )))
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// Returns a `GitError` when `cwd` is not inside a git repository.
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let output = run_git(cwd, &["rev-parse", "--show-toplevel"])?;
    Ok(PathBuf::from(&output.stdout))
}
