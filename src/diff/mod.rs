//! Unified diff segmentation for hunkrev.
//!
//! Turns the text of a `git diff` (or `git diff-tree -p`) into an ordered
//! list of hunk records, one per `@@` block plus one pseudo-hunk per binary
//! file. Parsing is best-effort and never fails:
//! - file sections start at `diff --git ` lines
//! - metadata lines decide the change kind (added/deleted/renamed/binary/modified)
//! - hunk bodies are kept verbatim, markers included
//!
//! A body line that itself starts with `diff --git ` is read as a new file
//! section. Diffs that quote other diffs inside their content are not
//! supported.

mod classify;
mod header;
mod segmenter;
mod types;


pub use header::UNKNOWN_PATH;
pub use segmenter::parse_hunks;
pub use types::{ChangeKind, HunkRecord, HunkStatus, ParseResult};
