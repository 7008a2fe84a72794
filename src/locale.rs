//! Commit-language detection from recent commit subjects.
//!
//! Counts characters per script and picks the best-scoring locale.
//! Japanese is only a candidate when kana are present, so Chinese-only
//! text is never reported as Japanese.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Locale tag attached to a resolved diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
    Ja,
    Ko,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Locale::En => "en",
            Locale::Zh => "zh",
            Locale::Ja => "ja",
            Locale::Ko => "ko",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct ScriptCounts {
    cjk: usize,
    kana: usize,
    hangul: usize,
    latin: usize,
}

impl ScriptCounts {
    fn of(text: &str) -> Self {
        let mut counts = Self::default();
        for c in text.chars() {
            match c {
                '\u{4e00}'..='\u{9fff}' => counts.cjk += 1,
                '\u{3040}'..='\u{309f}' | '\u{30a0}'..='\u{30ff}' => counts.kana += 1,
                '\u{ac00}'..='\u{d7af}' => counts.hangul += 1,
                'a'..='z' | 'A'..='Z' => counts.latin += 1,
                _ => {}
            }
        }
        counts
    }

    /// Candidate scores in tie-break order: zh, ja, ko, en.
    fn candidates(&self) -> Vec<(Locale, usize)> {
        let mut candidates = vec![(Locale::Zh, self.cjk)];
        if self.kana > 0 {
            candidates.push((Locale::Ja, self.cjk + self.kana));
        }
        candidates.push((Locale::Ko, self.hangul));
        candidates.push((Locale::En, self.latin));
        candidates
    }
}

/// Guess the locale of commit-message text.
///
/// Returns [`Locale::En`] for empty or non-linguistic text. Equal scores
/// resolve in the order zh, ja, ko, en.
pub fn detect_locale(text: &str) -> Locale {
    let mut best: Option<(Locale, usize)> = None;
    for (locale, score) in ScriptCounts::of(text).candidates() {
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((locale, score));
        }
    }

    match best {
        Some((locale, score)) if score > 0 => locale,
        _ => Locale::En,
    }
}
