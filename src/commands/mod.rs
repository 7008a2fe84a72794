//! Command implementations for hunkrev.
//!
//! Each command builds its result value and prints it as JSON on stdout.

mod parse;
mod resolve;

use crate::cli::Command;
use crate::error::{HunkError, Result};
use serde::Serialize;
use std::io::Write;

pub use parse::{cmd_parse, read_diff};
pub use resolve::{cmd_resolve, resolve_in};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Parse(args) => cmd_parse(args),
        Command::Resolve(args) => cmd_resolve(args),
    }
}

/// Write `value` as JSON followed by a newline.
///
/// Non-ASCII text is written as-is.
fn write_json<W: Write, T: Serialize>(mut out: W, value: &T, pretty: bool) -> Result<()> {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| HunkError::IoError(format!("failed to encode result: {}", e)))?;

    writeln!(out, "{}", encoded)
        .and_then(|_| out.flush())
        .map_err(|e| HunkError::IoError(format!("failed to write result: {}", e)))
}
