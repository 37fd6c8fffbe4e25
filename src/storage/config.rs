//! Configuration handling for wowo
//!
//! Configuration is stored in `~/.config/wowo/config.toml` (or the platform
//! equivalent). Every field is optional; command-line flags override it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::file::DEFAULT_PATH;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Order applied by the `sort` command
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Dated tasks by date, then to-dos; ties by name
    #[default]
    Date,
    /// By name only
    Name,
}

impl SortOrder {
    pub fn as_str(&self) -> &str {
        match self {
            SortOrder::Date => "date",
            SortOrder::Name => "name",
        }
    }
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Task file location (relative paths are resolved against the working directory)
    pub data_file: PathBuf,

    /// Maximum number of tasks; unbounded when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,

    /// Order used by `sort`
    pub sort_order: SortOrder,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_PATH),
            capacity: None,
            sort_order: SortOrder::Date,
        }
    }
}

impl Config {
    /// Loads configuration from a specific file; a missing file means defaults
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to load config: {}", path.display()))
    }

    /// Parses and validates configuration text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the default config file path
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the config directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "wowo", "wowo").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Checks values that parse but make no sense
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == Some(0) {
            return Err(ConfigError::Invalid(
                "capacity must be at least 1 (omit it for no limit)".to_string(),
            ));
        }
        if self.data_file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("data_file cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Saves the configuration to a specific file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }
}
