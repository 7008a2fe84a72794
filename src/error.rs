//! Error types for the hunkrev CLI.
//!
//! Uses thiserror for derive macros. Parsing never produces an error and
//! resolution failures are reported inside the result value, so these
//! variants only cover the process boundary and the git runner.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for hunkrev operations.
#[derive(Error, Debug)]
pub enum HunkError {
    /// User provided invalid arguments or an invalid config file.
    #[error("{0}")]
    UserError(String),

    /// Reading the diff or writing the result failed.
    #[error("I/O failed: {0}")]
    IoError(String),

    /// Git could not be run or exited non-zero.
    #[error("Git operation failed: {0}")]
    GitError(String),
}

impl HunkError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            HunkError::UserError(_) => exit_codes::USER_ERROR,
            HunkError::IoError(_) => exit_codes::IO_FAILURE,
            HunkError::GitError(_) => exit_codes::GIT_FAILURE,
        }
    }
}

/// Result type alias for hunkrev operations.
pub type Result<T> = std::result::Result<T, HunkError>;
