//! File-section header interpretation.

use regex::Regex;
use std::sync::LazyLock;

use super::types::ChangeKind;

/// Path reported when the file-start line has no recognisable `b/` side.
pub const UNKNOWN_PATH: &str = "unknown";

/// Marker git prints instead of hunks for binary content.
pub(super) const BINARY_MARKER: &str = "Binary files";

/// Change-kind markers in precedence order; the first rule with a matching
/// marker decides.
const CHANGE_KIND_RULES: &[(&[&str], ChangeKind)] = &[
    (&["new file mode"], ChangeKind::Added),
    (&["deleted file mode"], ChangeKind::Deleted),
    (&["rename from", "rename to"], ChangeKind::Renamed),
    (&[BINARY_MARKER], ChangeKind::Binary),
];

// Greedy first group so a path containing " b/" still yields the last one.
static FILE_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^diff --git a/.+ b/(.+)").expect("file-start pattern is valid")
});

/// Determine the change kind from a file section's metadata lines.
///
/// The lines include the file-start line itself. Falls back to
/// `Modified` when no marker is present.
pub(super) fn detect_change_kind<S: AsRef<str>>(metadata: &[S]) -> ChangeKind {
    let text = metadata
        .iter()
        .map(|line| line.as_ref())
        .collect::<Vec<&str>>()
        .join("\n");

    CHANGE_KIND_RULES
        .iter()
        .find(|(markers, _)| markers.iter().any(|m| text.contains(*m)))
        .map(|&(_, kind)| kind)
        .unwrap_or_default()
}

/// Whether a metadata line announces binary content.
pub(super) fn is_binary_marker(line: &str) -> bool {
    line.contains(BINARY_MARKER)
}

/// Extract the destination (`b/`) path from a `diff --git` line.
///
/// A `\r` left over from a CRLF-terminated diff is not part of the path.
pub(super) fn parse_file_path(line: &str) -> String {
    FILE_START_RE
        .captures(line.trim_end_matches('\r'))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_PATH.to_string())
}
