//! Configuration module for the keep-alive pinger
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`RENDER_EXTERNAL_URL`, `SELF_PING_INTERVAL`, `KEEPALIVE_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use keepalive::config::KeepAliveConfig;
//!
//! let config = KeepAliveConfig::default();
//! assert_eq!(config.health_url(), "http://localhost:5000/health");
//! assert_eq!(config.ping.interval_seconds, 600);
//!
//! let toml = r#"
//! [ping]
//! interval_seconds = 60
//! "#;
//! let config: KeepAliveConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.ping.interval_seconds, 60);
//! assert_eq!(config.ping.timeout_seconds, 10);
//! ```

pub mod error;
pub mod logging;
pub mod target;

pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use target::{TargetConfig, DEFAULT_BASE_URL, HEALTH_PATH};

// Re-export PingConfig from pinger module
pub use crate::pinger::PingConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding the base URL of the service to keep alive.
pub const ENV_BASE_URL: &str = "RENDER_EXTERNAL_URL";
/// Environment variable holding the number of seconds between pings.
pub const ENV_PING_INTERVAL: &str = "SELF_PING_INTERVAL";
pub const ENV_LOG_LEVEL: &str = "KEEPALIVE_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "KEEPALIVE_LOG_FORMAT";

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "keepalive.toml";

/// Unified configuration for the keep-alive pinger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KeepAliveConfig {
    /// Service being kept awake
    pub target: TargetConfig,
    /// Ping cadence and timeouts
    pub ping: PingConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl KeepAliveConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p).map_err(|source| ConfigError::Read {
                    path: p.to_path_buf(),
                    source,
                })?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse {
                    path: p.to_path_buf(),
                    message: e.to_string(),
                })
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply overrides from the process environment.
    ///
    /// Invalid values are silently ignored (the current value is kept).
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Set-but-empty counts as unset
        if let Some(url) = lookup(ENV_BASE_URL).filter(|url| !url.trim().is_empty()) {
            self.target.base_url = url.trim().to_string();
        }
        if let Some(interval) = lookup(ENV_PING_INTERVAL) {
            if let Ok(secs) = interval.trim().parse() {
                self.ping.interval_seconds = secs;
            }
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// URL hit by every ping.
    pub fn health_url(&self) -> String {
        self.target.health_url()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        match reqwest::Url::parse(&self.target.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::Validation {
                    field: "target.base_url",
                    message: format!("unsupported scheme '{}'", url.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigError::Validation {
                    field: "target.base_url",
                    message: e.to_string(),
                });
            }
        }

        if self.ping.interval_seconds == 0 {
            return Err(ConfigError::Validation {
                field: "ping.interval_seconds",
                message: "interval must be a positive number of seconds".to_string(),
            });
        }
        if self.ping.timeout_seconds == 0 {
            return Err(ConfigError::Validation {
                field: "ping.timeout_seconds",
                message: "timeout must be a positive number of seconds".to_string(),
            });
        }

        Ok(())
    }
}
