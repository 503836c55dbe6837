//! Navigation configuration.
//!
//! Loaded from an optional `nav.toml` next to the host's content. Config
//! files are sparse — only override what you need:
//!
//! ```toml
//! # Site base url, stripped off page urls before decomposition
//! base_url = "http://example.com/site"
//!
//! # Paths excluded from the default rendering (prefix-matched)
//! hide_pages = ["drafts", "internal/tools"]
//! ```
//!
//! Hosts that carry the hide list as a single comma-separated setting can
//! feed it through [`parse_hide_list`]. Unknown keys are rejected to catch
//! typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Settings for one render cycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Base url stripped off page urls before path decomposition.
    /// Trailing slash optional.
    pub base_url: String,
    /// Path prefixes excluded from the default rendering.
    pub hide_pages: Vec<String>,
}

/// Load `nav.toml` from a directory, falling back to defaults when the
/// file doesn't exist.
pub fn load_config(dir: &Path) -> Result<NavConfig, ConfigError> {
    let path = dir.join("nav.toml");
    if !path.exists() {
        return Ok(NavConfig::default());
    }
    let content = fs::read_to_string(&path)?;
    let config: NavConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Split a comma-separated hide list into clean entries.
///
/// Entries are trimmed; blanks are dropped. `"drafts, internal/tools,"`
/// yields `["drafts", "internal/tools"]`.
pub fn parse_hide_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
