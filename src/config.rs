//! Configuration file handling.
//!
//! The config lives at `<config dir>/slidesync/config.toml` unless
//! `SLIDESYNC_CONFIG` points elsewhere. Every field has a default, so a
//! partial or missing file loads fine.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::slides::{is_valid_duration, DEFAULT_SLIDE_SECONDS};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "SLIDESYNC_CONFIG";

const CONFIG_HEADER: &str = "# slidesync configuration\n\
                             # Missing fields fall back to their defaults.\n\n";

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub search: SearchConfig,
}

/// `[playback]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Duration given to newly added slides (seconds)
    pub default_slide_seconds: f64,
    /// Frames rendered per second while playing
    pub frame_rate: u32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            default_slide_seconds: DEFAULT_SLIDE_SECONDS,
            frame_rate: 60,
        }
    }
}

/// `[search]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Track search endpoint; the query is sent as `?q=`
    pub endpoint: String,
    /// Prepended verbatim to the request URL (for routing through a proxy)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_prefix: Option<String>,
    /// Maximum number of results kept per search
    pub result_limit: usize,
    /// Request timeout in seconds; unset waits indefinitely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.deezer.com/search".to_string(),
            proxy_prefix: None,
            result_limit: 10,
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("slidesync").join("config.toml"))
    }

    /// Load the config file, or defaults when it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path, or defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// The config as TOML, with a short header comment.
    pub fn to_toml(&self) -> Result<String> {
        let body = toml::to_string_pretty(self).context("Failed to serialize config")?;
        Ok(format!("{}{}", CONFIG_HEADER, body))
    }

    /// Check values that would make playback or search impossible.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_duration(self.playback.default_slide_seconds) {
            bail!(
                "playback.default_slide_seconds must be a positive number, got {}",
                self.playback.default_slide_seconds
            );
        }
        if self.playback.frame_rate == 0 {
            bail!("playback.frame_rate must be at least 1");
        }
        if self.search.result_limit == 0 {
            bail!("search.result_limit must be at least 1");
        }
        if self.search.endpoint.trim().is_empty() {
            bail!("search.endpoint must not be empty");
        }
        Ok(())
    }
}
