use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::config::types::AppConfig;

const APP_DIR: &str = "firstrun";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/firstrun/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        config_dir().join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from an explicit path.
    ///
    /// - If the file doesn't exist, returns `AppConfig::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The sign-up URL is an http(s) URL
    /// - The IPC timeout is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.welcome.signup_url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::ValidationError {
                message: format!("signup_url must be an http(s) URL, got '{}'", url),
            });
        }

        if self.ipc.timeout_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ipc.timeout_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Settings file the host persists the API configuration to.
    pub fn store_path(&self) -> PathBuf {
        self.store
            .path
            .clone()
            .unwrap_or_else(|| config_dir().join("settings.toml"))
    }

    pub fn log_path(&self) -> PathBuf {
        self.logging.file.clone().unwrap_or_else(|| {
            dirs::state_dir()
                .or_else(dirs::cache_dir)
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
                .join("firstrun.log")
        })
    }

    pub fn ipc_timeout(&self) -> Duration {
        Duration::from_millis(self.ipc.timeout_ms)
    }
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}
