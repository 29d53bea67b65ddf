use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub browser: BrowserConfig,
}

#[derive(Debug, Deserialize)]
pub struct RemoteConfig {
    /// Remote picked when none is given on the command line (case-insensitive)
    #[serde(default = "default_preferred_remote")]
    pub preferred: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct BrowserConfig {
    /// Program to open URLs with instead of the OS default handler
    #[serde(default)]
    pub command: Option<String>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            preferred: default_preferred_remote(),
        }
    }
}

fn default_preferred_remote() -> String {
    "origin".to_string()
}

impl Config {
    /// Get the config file path
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("git-browse");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from the default location, or return default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load config from `path`, or return default if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn preferred_remote(&self) -> &str {
        self.remote.preferred.as_str()
    }

    pub fn browser_command(&self) -> Option<&str> {
        self.browser
            .command
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
