//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/flowprint/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/flowprint/` (~/.config/flowprint/)
//! - Data: `$XDG_DATA_HOME/flowprint/` (~/.local/share/flowprint/)
//! - State/Logs: `$XDG_STATE_HOME/flowprint/` (~/.local/state/flowprint/)
//!
//! Two environment variables override config values:
//! - `FLOWPRINT_DATA_PATH`: catalog data directory
//! - `FLOWPRINT_PROFILE_TTL_SECS`: profile store TTL

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_DATA_HOME or ~/.local/share
fn xdg_data_home() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/share"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Catalog data configuration
    #[serde(default)]
    pub data: DataConfig,

    /// Profile store configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Catalog data directory configuration
#[derive(Debug, Deserialize, Default)]
pub struct DataConfig {
    /// Override path for the catalog data directory
    pub path: Option<PathBuf>,
}

/// Profile store configuration
#[derive(Debug, Deserialize)]
pub struct StoreConfig {
    /// Time-to-live for cached profiles, in seconds
    #[serde(default = "default_profile_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_profile_ttl_secs(),
        }
    }
}

/// Defaults to 24 hours.
fn default_profile_ttl_secs() -> u64 {
    24 * 60 * 60
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Resolve the catalog data directory.
    ///
    /// Precedence: `FLOWPRINT_DATA_PATH` env var, then `[data] path` from the
    /// config file, then `data/` next to the current working directory.
    pub fn data_path(&self) -> PathBuf {
        if let Some(path) = std::env::var_os("FLOWPRINT_DATA_PATH") {
            return PathBuf::from(path);
        }
        if let Some(path) = &self.data.path {
            return path.clone();
        }
        PathBuf::from("data")
    }

    /// Resolve the profile store TTL in seconds.
    ///
    /// `FLOWPRINT_PROFILE_TTL_SECS` overrides the config file; an
    /// unparseable env value falls back to the configured one.
    pub fn profile_ttl_secs(&self) -> u64 {
        std::env::var("FLOWPRINT_PROFILE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.store.ttl_secs)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/flowprint/config.toml` (~/.config/flowprint/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("flowprint").join("config.toml")
    }

    /// Returns the data directory path
    ///
    /// `$XDG_DATA_HOME/flowprint/` (~/.local/share/flowprint/)
    pub fn data_dir() -> PathBuf {
        xdg_data_home().join("flowprint")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/flowprint/` (~/.local/state/flowprint/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("flowprint")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/flowprint/flowprint.log` (~/.local/state/flowprint/flowprint.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("flowprint.log")
    }
}
