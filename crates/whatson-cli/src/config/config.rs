//! `AppConfig` struct and JSON read/write.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level application configuration.
///
/// Stored as camelCase JSON (`config.json`). Every field is optional;
/// missing fields fall back to defaults, and CLI flags override whatever
/// the file supplies.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Home country code.
    pub country: Option<String>,
    /// Default show-type filter.
    pub types: Vec<String>,
    /// Default network filter.
    pub networks: Vec<String>,
    /// Default genre filter.
    pub genres: Vec<String>,
    /// Default language filter.
    pub languages: Vec<String>,
    /// Default minimum air time.
    pub min_airtime: Option<String>,
    /// Show names dropped from every run.
    pub exclude_show_names: Vec<String>,
    /// Slack incoming-webhook URL (the `SLACK_WEBHOOK_URL` env var wins).
    pub slack_webhook_url: Option<String>,
}

impl AppConfig {
    /// Loads config from a JSON file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Saves config to a JSON file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content =
            serde_json::to_string_pretty(self).context("failed to serialize config to JSON")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }
}
