//! Error types for the keep-alive pinger.

use crate::config::ConfigError;
use thiserror::Error;

/// Why a single ping did not confirm the service is alive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PingError {
    /// Service answered with something other than 200
    #[error("unexpected status {0}")]
    Status(u16),

    /// Request timeout
    #[error("request timeout after {0}s")]
    Timeout(u64),

    /// Connection refused, DNS failure, reset, ...
    #[error("connection failed: {0}")]
    Connection(String),

    /// Anything else raised while building or sending the request
    #[error("unexpected error: {0}")]
    Unknown(String),
}

impl PingError {
    /// Whether the request never got an HTTP answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, PingError::Timeout(_) | PingError::Connection(_))
    }
}

/// Errors raised while setting up or tearing down the keep-alive task.
#[derive(Debug, Error)]
pub enum KeepAliveError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("no tokio runtime to spawn the keep-alive task on: {0}")]
    NoRuntime(String),

    #[error("keep-alive task failed: {0}")]
    TaskFailed(String),
}
