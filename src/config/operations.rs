//! Config loading, discovery and validation.

use super::model::{CONFIG_FILE_NAME, Config};
use crate::error::{HunkError, Result};
use crate::git::get_repo_root;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(HunkError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            HunkError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| HunkError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    pub fn validate(&self) -> Result<()> {
        if self.log_depth == 0 {
            return Err(HunkError::UserError(
                "config validation failed: log_depth must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Find and load the config for the repository containing `cwd`.
    ///
    /// Outside a repository, or when the repository has no config file,
    /// the defaults apply. A config file that exists but is invalid is an
    /// error.
    pub fn discover<P: AsRef<Path>>(cwd: P) -> Result<Self> {
        let root = match get_repo_root(cwd) {
            Ok(root) => root,
            Err(e) => {
                log::debug!("no repository root, using default config: {}", e);
                return Ok(Self::default());
            }
        };

        let path = root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            log::debug!("{} not found, using default config", path.display());
            return Ok(Self::default());
        }

        Self::load(&path)
    }
}
