//! Implementation of the `hunkrev parse` command.

use super::write_json;
use crate::cli::ParseArgs;
use crate::diff::parse_hunks;
use crate::error::{HunkError, Result};
use std::io::Read;
use std::path::Path;

/// Execute the `hunkrev parse` command.
pub fn cmd_parse(args: ParseArgs) -> Result<()> {
    let diff_text = read_diff(args.file.as_deref())?;
    let result = parse_hunks(&diff_text);
    log::debug!("parsed {} hunks", result.total);
    write_json(std::io::stdout().lock(), &result, true)
}

/// Read the diff from `file`, or from stdin when `None`.
pub fn read_diff(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            HunkError::IoError(format!("failed to read '{}': {}", path.display(), e))
        }),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| HunkError::IoError(format!("failed to read stdin: {}", e)))?;
            Ok(text)
        }
    }
}
