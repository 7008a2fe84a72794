//! Read-only git queries used by the resolver.

use crate::error::Result;
use crate::git::run_git;
use std::path::PathBuf;

/// A read-only git query returning stdout.
///
/// Any `Err` is treated by the resolver as a plain failure signal for the
/// attempt that issued it.
pub trait GitQuery {
    fn query(&self, args: &[&str]) -> Result<String>;
}

/// Runs queries against the `git` binary in a fixed directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    cwd: PathBuf,
}

impl GitCli {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }
}

impl GitQuery for GitCli {
    fn query(&self, args: &[&str]) -> Result<String> {
        run_git(&self.cwd, args).map(|output| output.stdout)
    }
}
