//! Configuration for the ping loop.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cadence and timeouts for keep-alive pings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PingConfig {
    /// Seconds between the end of one ping and the start of the next
    pub interval_seconds: u64,
    /// Timeout for each health request
    pub timeout_seconds: u64,
    /// Grace period before the first ping
    pub startup_delay_seconds: u64,
    /// Pause after an unexpected loop failure
    pub recovery_delay_seconds: u64,
}

impl Default for PingConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 600,
            timeout_seconds: 10,
            startup_delay_seconds: 30,
            recovery_delay_seconds: 60,
        }
    }
}

impl PingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn schedule(&self) -> Schedule {
        Schedule {
            startup_delay: Duration::from_secs(self.startup_delay_seconds),
            interval: Duration::from_secs(self.interval_seconds),
            recovery_delay: Duration::from_secs(self.recovery_delay_seconds),
        }
    }
}

/// Sleep durations driving the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub startup_delay: Duration,
    pub interval: Duration,
    pub recovery_delay: Duration,
}
