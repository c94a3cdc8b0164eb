//! Persistence settings, optionally loaded from a TOML file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

/// Settings applied by the file-based model operations.
///
/// Missing fields default to the behaviour of the plain `write_json` /
/// `read_json` calls.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct JstructConfig {
    /// Extension a model file is expected to carry (without the dot).
    /// Other extensions only produce a warning.
    pub extension: String,

    /// Append `\n` after the JSON text when writing.
    pub trailing_newline: bool,
}

impl Default for JstructConfig {
    fn default() -> Self {
        Self {
            extension: "json".to_string(),
            trailing_newline: false,
        }
    }
}

impl JstructConfig {
    pub fn validate(&self) -> Result<()> {
        if self.extension.trim().is_empty() {
            return Err(anyhow!("extension must not be empty"));
        }
        if self.extension.starts_with('.') {
            return Err(anyhow!(
                "extension must not start with '.' (got '{}')",
                self.extension
            ));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `JstructConfig::default()`.
pub fn load_config(path: &Path) -> Result<JstructConfig> {
    if !path.exists() {
        let cfg = JstructConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: JstructConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
