//! Errors raised while loading or validating keep-alive settings

use std::path::PathBuf;
use thiserror::Error;

/// Why a `KeepAliveConfig` could not be produced
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A setting the pinger cannot run with, named by its TOML path
    #[error("Invalid keep-alive setting '{field}': {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// TOML path of the rejected setting, for validation failures.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ConfigError::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}
