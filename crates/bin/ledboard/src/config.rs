//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `ledboard.toml` in the working directory unless another path is
//! given. Every field has a sensible default so the file is optional.
//! Environment variables take precedence over file values, and the
//! command line over both. Validation runs last.

use std::path::Path;

use ledboard_app::config::DashboardConfig;
use ledboard_domain::error::ValidationError;
use serde::Deserialize;

/// Default configuration file name.
pub const DEFAULT_PATH: &str = "ledboard.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Device connection settings.
    pub device: DeviceConfig,
    /// Polling and command settings.
    pub dashboard: DashboardConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Where the board's HTTP API lives.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Base URL of the board (its SoftAP gateway address by default).
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (or `ledboard.toml`) if present, then
    /// apply environment-variable overrides and the command-line `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if the resulting configuration is invalid.
    pub fn load(path: Option<&Path>, url: Option<String>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_required_file(path)?,
            None => Self::from_file(Path::new(DEFAULT_PATH))?,
        };
        config.with_overrides(url)
    }

    fn with_overrides(mut self, url: Option<String>) -> Result<Self, ConfigError> {
        self.apply_env_overrides();
        if let Some(url) = url {
            self.device.url = url;
        }
        self.validate()?;
        Ok(self)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn from_required_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("LEDBOARD_URL") {
            self.device.url = val;
        }
        if let Ok(val) = std::env::var("LEDBOARD_INTERVAL_MS")
            && let Ok(ms) = val.parse()
        {
            self.dashboard.refresh_interval_ms = ms;
        }
        if let Ok(val) = std::env::var("LEDBOARD_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.device.url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "device url must not be empty".to_string(),
            ));
        }
        self.dashboard.validate()?;
        Ok(())
    }

    /// Dashboard settings with the API base pointing at the device.
    #[must_use]
    pub fn dashboard(&self) -> DashboardConfig {
        DashboardConfig {
            api_base: self.device.url.clone(),
            ..self.dashboard.clone()
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            url: "http://192.168.7.1".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "ledboard=info,ledboard_app=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Dashboard settings rejected.
    #[error("invalid dashboard configuration")]
    Dashboard(#[from] ValidationError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
