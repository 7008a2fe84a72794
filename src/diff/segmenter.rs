//! Hunk segmenter: a single-pass state machine over diff lines.
//!
//! The segmenter never fails. Malformed input only changes the shape of the
//! output: orphan hunks before any file start are dropped, unparseable file
//! lines get the `"unknown"` path, and unmarked sections default to
//! `modified`.

use super::classify::{LineKind, classify_line};
use super::header::{detect_change_kind, is_binary_marker, parse_file_path};
use super::types::{ChangeKind, HunkRecord, HunkStatus, ParseResult};

/// Context of the file section currently being read.
#[derive(Debug)]
struct FileSection {
    path: String,
    /// Metadata lines seen so far, starting with the file-start line.
    metadata: Vec<String>,
    kind: ChangeKind,
    /// Set once a binary pseudo-hunk has been emitted for this section.
    binary_emitted: bool,
}

impl FileSection {
    fn new(file_start: &str) -> Self {
        Self {
            path: parse_file_path(file_start),
            metadata: vec![file_start.to_string()],
            kind: ChangeKind::Modified,
            binary_emitted: false,
        }
    }
}

/// Body accumulator of the hunk currently open.
#[derive(Debug)]
struct OpenHunk {
    header: String,
    body: Vec<String>,
}

/// Segmenter state. `open` is `Some` exactly when in the `IN_HUNK` state.
#[derive(Debug, Default)]
pub(super) struct Segmenter {
    section: Option<FileSection>,
    open: Option<OpenHunk>,
    hunks: Vec<HunkRecord>,
}

impl Segmenter {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Feed one line (without its terminator).
    pub(super) fn push_line(&mut self, line: &str) {
        match classify_line(line, self.open.is_some()) {
            LineKind::FileStart => {
                self.close_hunk();
                self.section = Some(FileSection::new(line));
            }
            LineKind::HunkStart => self.start_hunk(line),
            LineKind::Metadata => self.push_metadata(line),
            LineKind::HunkBody => {
                if let Some(open) = self.open.as_mut() {
                    open.body.push(line.to_string());
                }
            }
        }
    }

    /// Close any open hunk and return the parse result.
    pub(super) fn finish(mut self) -> ParseResult {
        self.close_hunk();
        ParseResult::from(self.hunks)
    }

    fn push_metadata(&mut self, line: &str) {
        // Lines before the first file start carry no context.
        let Some(section) = self.section.as_mut() else {
            return;
        };

        section.metadata.push(line.to_string());
        if is_binary_marker(line) {
            section.kind = ChangeKind::Binary;
            section.binary_emitted = true;
            let path = section.path.clone();
            self.emit(path, String::new(), line.to_string(), ChangeKind::Binary);
        }
    }

    fn start_hunk(&mut self, line: &str) {
        self.close_hunk();

        if let Some(section) = self.section.as_mut() {
            section.kind = detect_change_kind(&section.metadata);
            if section.kind == ChangeKind::Binary || section.binary_emitted {
                // Already represented by the binary pseudo-hunk.
                return;
            }
        }

        self.open = Some(OpenHunk {
            header: line.to_string(),
            body: Vec::new(),
        });
    }

    fn close_hunk(&mut self) {
        let Some(open) = self.open.take() else {
            return;
        };

        match self.section.as_ref() {
            Some(section) => {
                let path = section.path.clone();
                let kind = section.kind;
                self.emit(path, open.header, open.body.join("\n"), kind);
            }
            None => log::debug!("dropping hunk before any file header: {}", open.header),
        }
    }

    fn emit(&mut self, file: String, header: String, body: String, kind: ChangeKind) {
        let index = self.hunks.len() + 1;
        self.hunks.push(HunkRecord {
            index,
            file,
            header,
            body,
            kind,
            status: HunkStatus::Pending,
            reason: None,
        });
    }
}

/// Split a unified diff into ordered hunk records.
///
/// Lines are split on `\n` only, so a `\r` from CRLF content stays part of
/// the line. A single trailing `\n` does not start an extra empty line.
/// Total over all inputs: any text produces a result, possibly empty.
pub fn parse_hunks(diff_text: &str) -> ParseResult {
    let text = diff_text.strip_suffix('\n').unwrap_or(diff_text);
    if text.is_empty() {
        return ParseResult::default();
    }

    let mut segmenter = Segmenter::new();
    for line in text.split('\n') {
        segmenter.push_line(line);
    }
    segmenter.finish()
}
