//! CLI argument parsing for hunkrev.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hunkrev: split diffs into reviewable hunks.
///
/// Both commands print a single JSON value to stdout. Resolution problems
/// are reported in the value's `error` field, not through the exit code.
#[derive(Parser, Debug)]
#[command(name = "hunkrev")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for hunkrev.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split a unified diff into hunk records.
    ///
    /// Reads the diff from --file, or from stdin when no file is given.
    Parse(ParseArgs),

    /// Pick the diff to review and detect the commit language.
    ///
    /// No refs: staged changes, else workspace changes.
    /// One ref: that commit. Two refs: the range between them.
    Resolve(ResolveArgs),
}

/// Arguments for the `parse` command.
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Diff file to read instead of stdin.
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Arguments for the `resolve` command.
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Repository directory to run git in.
    #[arg(short = 'C', long = "repo", value_name = "DIR", default_value = ".")]
    pub repo: PathBuf,

    /// Commit to review, or the two ends of a range.
    #[arg(value_name = "REF", num_args = 0..=2)]
    pub refs: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
