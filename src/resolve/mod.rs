//! Diff source resolution for hunkrev.
//!
//! Decides which diff to review and the language of the surrounding commit
//! history:
//! - no refs: staged changes, else workspace changes
//! - one ref: that commit against its parent, or against the empty tree
//!   for a root commit
//! - two refs: the direct diff between them
//!
//! Git failures never escape: they advance the fallback chain, and when the
//! chain is exhausted the result carries an `error` message instead.

mod plan;
mod query;


pub use plan::Request;
pub use query::{GitCli, GitQuery};

use crate::config::Config;
use crate::locale::{Locale, detect_locale};
use plan::Attempt;
use serde::{Deserialize, Serialize};

/// Where a resolved diff came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffSource {
    Staged,
    Workspace,
    Commit,
}

/// Outcome of a resolution.
///
/// Either `diff` is set or `error` is, except that a commit or range may
/// legitimately resolve to an empty diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveResult {
    pub source: Option<DiffSource>,
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    pub language: Locale,
    pub diff: String,
    pub error: Option<String>,
}

impl ResolveResult {
    fn failed(language: Locale, error: String) -> Self {
        Self {
            source: None,
            reference: None,
            language,
            diff: String::new(),
            error: Some(error),
        }
    }
}

/// Resolve `request` using `git`.
pub fn resolve<Q: GitQuery>(git: &Q, request: &Request, config: &Config) -> ResolveResult {
    let language = commit_language(git, config);

    for attempt in request.attempts() {
        if let Some(diff) = run_attempt(git, &attempt) {
            log::info!(
                "resolved {:?} diff ({} bytes)",
                attempt.source,
                diff.len()
            );
            return ResolveResult {
                source: Some(attempt.source),
                reference: attempt.reference,
                language,
                diff,
                error: None,
            };
        }
    }

    let message = request.failure_message();
    log::warn!("{}", message);
    ResolveResult::failed(language, message)
}

fn run_attempt<Q: GitQuery>(git: &Q, attempt: &Attempt) -> Option<String> {
    if let Some(precheck) = &attempt.precheck {
        match run_query(git, precheck) {
            Ok(stat) if !stat.trim().is_empty() => {}
            Ok(_) => {
                log::debug!("{:?}: no changes", attempt.source);
                return None;
            }
            Err(e) => {
                log::debug!("{:?}: precheck failed: {}", attempt.source, e);
                return None;
            }
        }
    }

    match run_query(git, &attempt.diff) {
        Ok(diff) => Some(diff),
        Err(e) => {
            log::debug!("{:?}: {}", attempt.source, e);
            None
        }
    }
}

/// Language of recent commit subjects, or the configured override.
fn commit_language<Q: GitQuery>(git: &Q, config: &Config) -> Locale {
    if let Some(language) = config.language {
        return language;
    }

    let depth = format!("-{}", config.log_depth);
    match git.query(&["log", "--oneline", &depth]) {
        Ok(log) => detect_locale(&log),
        Err(e) => {
            log::debug!("commit log unavailable, assuming default language: {}", e);
            Locale::default()
        }
    }
}

fn run_query<Q: GitQuery>(git: &Q, args: &[String]) -> crate::error::Result<String> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    git.query(&args)
}
