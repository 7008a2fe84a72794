//! Config struct definition and default implementation.

use crate::locale::Locale;
use serde::{Deserialize, Serialize};

/// File name looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = ".hunkrev.yaml";

/// Configuration for diff resolution.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of recent commit subjects sampled for language detection.
    #[serde(default = "default_log_depth")]
    pub log_depth: usize,

    /// Fixed commit language; skips detection when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Locale>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_depth: default_log_depth(),
            language: None,
        }
    }
}

fn default_log_depth() -> usize {
    10
}
