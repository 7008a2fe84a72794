//! Line classification for the hunk segmenter.

/// Prefix of the line that opens a file section.
pub(super) const FILE_START_PREFIX: &str = "diff --git ";

/// Prefix of a hunk range line.
pub(super) const HUNK_START_PREFIX: &str = "@@";

/// Structural category of a single diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LineKind {
    FileStart,
    HunkStart,
    /// Between a file start and its first hunk.
    Metadata,
    /// Inside an open hunk.
    HunkBody,
}

/// Classify one line (without its terminator).
///
/// File and hunk markers are recognised anywhere; every other line is
/// metadata or body depending on whether a hunk is open.
pub(super) fn classify_line(line: &str, in_hunk: bool) -> LineKind {
    if line.starts_with(FILE_START_PREFIX) {
        LineKind::FileStart
    } else if line.starts_with(HUNK_START_PREFIX) {
        LineKind::HunkStart
    } else if in_hunk {
        LineKind::HunkBody
    } else {
        LineKind::Metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_start_wins_in_any_context() {
        let line = "diff --git a/src/lib.rs b/src/lib.rs";
        assert_eq!(classify_line(line, false), LineKind::FileStart);
        assert_eq!(classify_line(line, true), LineKind::FileStart);
    }

    #[test]
    fn hunk_start_wins_in_any_context() {
        let line = "@@ -1,2 +1,3 @@ fn main() {";
        assert_eq!(classify_line(line, false), LineKind::HunkStart);
        assert_eq!(classify_line(line, true), LineKind::HunkStart);
    }

    #[test]
    fn other_lines_depend_on_context() {
        assert_eq!(classify_line("index 1234..5678 100644", false), LineKind::Metadata);
        assert_eq!(classify_line("+added", true), LineKind::HunkBody);
        assert_eq!(classify_line("", true), LineKind::HunkBody);
        assert_eq!(classify_line("", false), LineKind::Metadata);
    }

    #[test]
    fn near_miss_file_marker_is_not_a_file_start() {
        // No trailing space after "--git".
        assert_eq!(classify_line("diff --gitx", true), LineKind::HunkBody);
        assert_eq!(classify_line(" diff --git a/x b/x", true), LineKind::HunkBody);
    }
}
