use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use anyhow::{Result, anyhow};

use crate::client::DEFAULT_BASE_URL;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    /// Command that receives shared text on stdin, e.g. `["termux-share", "-a", "send"]`
    pub share_command: Option<Vec<String>>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let config_content = fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config_content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, config_content)?;
        Ok(())
    }

    /// Base URL of the quote service: `env_url` (from `QUOTES_API_URL`), then the
    /// config file, then the default. Empty values count as unset.
    pub fn api_base_url(&self, env_url: Option<String>) -> String {
        env_url
            .filter(|url| !url.is_empty())
            .or_else(|| self.api_base_url.clone().filter(|url| !url.is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Merge command-line flags over the environment and the config file
    pub fn resolve(
        &self,
        cli_url: Option<String>,
        cli_timeout: Option<u64>,
        env_url: Option<String>,
    ) -> (String, Duration) {
        let base_url = cli_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| self.api_base_url(env_url));
        let timeout = cli_timeout
            .map(Duration::from_secs)
            .unwrap_or_else(|| self.request_timeout());
        (base_url, timeout)
    }

    fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("daily-quotes").join("config.json"))
    }
}
