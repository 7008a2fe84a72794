//! Hunkrev: split unified diffs into reviewable hunks.
//!
//! Two pieces make up the crate:
//! - [`diff`] segments diff text into ordered [`diff::HunkRecord`]s
//! - [`resolve`] decides which diff to review (staged, workspace, a commit
//!   or a range) and tags it with the commit-history language

pub mod cli;
pub mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod locale;
pub mod resolve;

#[cfg(test)]
mod test_support;
