//! Fallback chains for each kind of diff request.

use super::DiffSource;
use crate::error::{HunkError, Result};

/// What the caller asked to review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Staged changes, falling back to workspace changes.
    Auto,
    /// A single commit against its parent.
    Commit(String),
    /// The direct diff between two commits.
    Range(String, String),
}

impl Request {
    /// Build a request from zero, one or two positional refs.
    pub fn from_refs(refs: &[String]) -> Result<Self> {
        match refs {
            [] => Ok(Request::Auto),
            [commit] => Ok(Request::Commit(commit.clone())),
            [from, to] => Ok(Request::Range(from.clone(), to.clone())),
            _ => Err(HunkError::UserError(format!(
                "expected at most two commit references, got {}",
                refs.len()
            ))),
        }
    }

    /// Attempts to try in order; the first success wins.
    pub(super) fn attempts(&self) -> Vec<Attempt> {
        match self {
            Request::Auto => vec![
                Attempt {
                    source: DiffSource::Staged,
                    reference: None,
                    precheck: Some(args(&["diff", "--cached", "--stat"])),
                    diff: args(&["diff", "--cached"]),
                },
                Attempt {
                    source: DiffSource::Workspace,
                    reference: None,
                    precheck: Some(args(&["diff", "--stat"])),
                    diff: args(&["diff"]),
                },
            ],
            Request::Commit(commit) => vec![
                Attempt {
                    source: DiffSource::Commit,
                    reference: Some(commit.clone()),
                    precheck: None,
                    diff: vec!["diff".to_string(), format!("{}~1", commit), commit.clone()],
                },
                // Root commits have no parent; diff against the empty tree.
                Attempt {
                    source: DiffSource::Commit,
                    reference: Some(commit.clone()),
                    precheck: None,
                    diff: vec![
                        "diff-tree".to_string(),
                        "-p".to_string(),
                        "--root".to_string(),
                        commit.clone(),
                    ],
                },
            ],
            Request::Range(from, to) => vec![Attempt {
                source: DiffSource::Commit,
                reference: Some(format!("{}..{}", from, to)),
                precheck: None,
                diff: vec!["diff".to_string(), from.clone(), to.clone()],
            }],
        }
    }

    /// Error reported once every attempt has failed.
    pub(super) fn failure_message(&self) -> String {
        match self {
            Request::Auto => "No changes detected (no staged or workspace diff).".to_string(),
            Request::Commit(commit) => format!("Failed to diff commit {}", commit),
            Request::Range(from, to) => format!("Failed to diff {}..{}", from, to),
        }
    }
}

/// One step of a fallback chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Attempt {
    pub source: DiffSource,
    pub reference: Option<String>,
    /// Query whose output must be non-empty before `diff` is run.
    pub precheck: Option<Vec<String>>,
    pub diff: Vec<String>,
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn from_refs_by_count() {
        assert_eq!(Request::from_refs(&[]).unwrap(), Request::Auto);
        assert_eq!(
            Request::from_refs(&refs(&["abc123"])).unwrap(),
            Request::Commit("abc123".to_string())
        );
        assert_eq!(
            Request::from_refs(&refs(&["v1", "v2"])).unwrap(),
            Request::Range("v1".to_string(), "v2".to_string())
        );
    }

    #[test]
    fn from_refs_rejects_three() {
        let err = Request::from_refs(&refs(&["a", "b", "c"])).unwrap_err();
        assert!(matches!(err, HunkError::UserError(_)));
    }

    #[test]
    fn auto_tries_staged_then_workspace() {
        let attempts = Request::Auto.attempts();
        let sources: Vec<_> = attempts.iter().map(|a| a.source).collect();
        assert_eq!(sources, vec![DiffSource::Staged, DiffSource::Workspace]);
        assert!(attempts.iter().all(|a| a.precheck.is_some()));
        assert!(attempts.iter().all(|a| a.reference.is_none()));
    }

    #[test]
    fn commit_tries_parent_then_root() {
        let attempts = Request::Commit("abc".to_string()).attempts();
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].diff, refs(&["diff", "abc~1", "abc"]));
        assert_eq!(attempts[1].diff, refs(&["diff-tree", "-p", "--root", "abc"]));
        assert!(
            attempts
                .iter()
                .all(|a| a.reference.as_deref() == Some("abc"))
        );
    }

    #[test]
    fn range_has_single_attempt() {
        let attempts = Request::Range("a".to_string(), "b".to_string()).attempts();
        assert_eq!(attempts.len(), 1);
        assert_eq!(attempts[0].reference.as_deref(), Some("a..b"));
        assert_eq!(attempts[0].diff, refs(&["diff", "a", "b"]));
    }

    #[test]
    fn failure_messages_name_the_refs() {
        assert!(
            Request::Commit("abc".to_string())
                .failure_message()
                .contains("abc")
        );
        let msg = Request::Range("v1".to_string(), "v2".to_string()).failure_message();
        assert!(msg.contains("v1") && msg.contains("v2"));
    }
}
