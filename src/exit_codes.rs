//! Exit code constants for the hunkrev CLI.
//!
//! - 0: Success (including results that carry a data-level `error` field)
//! - 1: User error (bad args, invalid config)
//! - 2: I/O failure (unreadable input, failed output)
//! - 3: Git invocation failure
//!
//! `parse` and `resolve` never exit with 3: the resolver folds every git
//! failure into the JSON `error` field and config discovery falls back to
//! defaults outside a repository. The code exists so `HunkError::GitError`
//! still maps to a distinct status for library callers that propagate it.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an invalid config file.
pub const USER_ERROR: i32 = 1;

/// I/O failure: the diff could not be read or the result could not be written.
pub const IO_FAILURE: i32 = 2;

/// Git invocation failure: git could not be spawned or exited non-zero.
pub const GIT_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, IO_FAILURE, GIT_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
        assert_ne!(USER_ERROR, 0);
        assert_ne!(IO_FAILURE, 0);
        assert_ne!(GIT_FAILURE, 0);
    }
}
