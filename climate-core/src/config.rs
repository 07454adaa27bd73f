use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{
    locations::DEFAULT_QUERY,
    model::LocationQuery,
    provider::open_meteo::{AIR_QUALITY_URL, FORECAST_URL},
};

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// chat_webhook_url = "https://example.org/webhook/chat"
///
/// [home]
/// latitude = 10.4806
/// longitude = -66.9036
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub forecast_url: String,
    pub air_quality_url: String,

    /// Conversational webhook receiving `{sessionId, chatInput}`.
    pub chat_webhook_url: Option<String>,

    /// Location used when a command is given no coordinates.
    pub home: Option<LocationQuery>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            forecast_url: FORECAST_URL.to_string(),
            air_quality_url: AIR_QUALITY_URL.to_string(),
            chat_webhook_url: None,
            home: None,
        }
    }
}

impl Config {
    /// Return the chat webhook, or a hint on how to set one.
    pub fn chat_webhook_url(&self) -> Result<&str> {
        self.chat_webhook_url.as_deref().filter(|url| !url.trim().is_empty()).ok_or_else(|| {
            anyhow!(
                "No chat webhook configured.\n\
                 Hint: run `climate configure` and enter the webhook URL."
            )
        })
    }

    pub fn set_chat_webhook_url(&mut self, url: String) {
        self.chat_webhook_url = Some(url);
    }

    pub fn set_home(&mut self, home: LocationQuery) {
        self.home = Some(home);
    }

    /// Configured home location, or the built-in default point.
    pub fn home_or_default(&self) -> LocationQuery {
        self.home.unwrap_or(DEFAULT_QUERY)
    }

    /// Load config from disk, or return the defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        log::info!("Saved configuration to {}", path.display());
        Ok(())
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "climate-explorer", "climate-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
