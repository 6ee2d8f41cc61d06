//! Target service configuration

use serde::{Deserialize, Serialize};

/// Base URL used when `RENDER_EXTERNAL_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Path appended to the base URL for every ping.
pub const HEALTH_PATH: &str = "/health";

/// Service to keep awake
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub base_url: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl TargetConfig {
    /// Health-check URL derived from the base URL.
    ///
    /// Trailing slashes on the base are dropped so `https://app.example.com/`
    /// still yields `https://app.example.com/health`.
    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), HEALTH_PATH)
    }
}
