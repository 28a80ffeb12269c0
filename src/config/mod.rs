//! Configuration management for taskops

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::client::gateway::DEFAULT_API_URL;
use crate::error::{Result, SessionError};

const CONFIG_FILE: &str = "config.yaml";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the task-tracking API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Config {
    /// Get the default config file path (~/.config/taskops/config.yaml)
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(SessionError::NoHome)?;
        Ok(base.join("taskops").join(CONFIG_FILE))
    }

    /// Load configuration from a specific path. A missing file is the
    /// default configuration, not an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(SessionError::from)?;
        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| SessionError::SaveError(e.to_string()))?;
        std::fs::write(path, contents)?;

        Ok(())
    }

    /// Resolve the effective API base URL: flag or env beats config beats
    /// the built-in default
    pub fn resolve_api_url(&self, override_url: Option<&str>) -> String {
        override_url
            .map(str::to_string)
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }
}

/// Path of the session file kept next to the given config file
pub fn session_path_for(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) => parent.join("session.yaml"),
        None => PathBuf::from("session.yaml"),
    }
}
