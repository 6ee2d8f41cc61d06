//! Outcome of a single ping.

use super::error::PingError;
use chrono::{DateTime, Local};

/// Result of a keep-alive ping
#[derive(Debug, Clone)]
pub enum PingResult {
    /// Health endpoint answered 200
    Alive {
        latency_ms: u32,
        at: DateTime<Local>,
    },
    /// Non-200 answer or no answer at all
    Failure { error: PingError },
}

impl PingResult {
    pub fn is_alive(&self) -> bool {
        matches!(self, PingResult::Alive { .. })
    }

    pub fn error(&self) -> Option<&PingError> {
        match self {
            PingResult::Alive { .. } => None,
            PingResult::Failure { error } => Some(error),
        }
    }
}
