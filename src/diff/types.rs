//! Records produced by the hunk segmenter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a file was affected by the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Deleted,
    Renamed,
    Binary,
    #[default]
    Modified,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChangeKind::Added => "added",
            ChangeKind::Deleted => "deleted",
            ChangeKind::Renamed => "renamed",
            ChangeKind::Binary => "binary",
            ChangeKind::Modified => "modified",
        };
        write!(f, "{}", s)
    }
}

/// Review state of a hunk.
///
/// The parser only ever produces `Pending`; the other states belong to
/// whatever review workflow consumes the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HunkStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

/// One reviewable unit of a diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HunkRecord {
    /// 1-based position in the parse output.
    pub index: usize,
    /// Destination path of the file section, or `"unknown"`.
    pub file: String,
    /// Raw `@@` range line; empty for binary pseudo-hunks.
    pub header: String,
    /// Body lines joined with `\n`, markers included.
    pub body: String,
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub status: HunkStatus,
    pub reason: Option<String>,
}

impl HunkRecord {
    /// Mark the hunk as accepted, clearing any previous reason.
    pub fn accept(&mut self) {
        self.status = HunkStatus::Accepted;
        self.reason = None;
    }

    /// Mark the hunk as rejected with the reviewer's reason.
    pub fn reject(&mut self, reason: impl Into<String>) {
        self.status = HunkStatus::Rejected;
        self.reason = Some(reason.into());
    }
}

/// Ordered hunks of one diff.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParseResult {
    pub total: usize,
    pub hunks: Vec<HunkRecord>,
}

impl From<Vec<HunkRecord>> for ParseResult {
    fn from(hunks: Vec<HunkRecord>) -> Self {
        Self {
            total: hunks.len(),
            hunks,
        }
    }
}
