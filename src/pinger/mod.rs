//! Keep-alive pinger.
//!
//! Periodically sends `GET {base_url}/health` so the hosting platform keeps
//! seeing traffic and does not suspend the service for inactivity. Pings are
//! strictly sequential; the interval is measured from the end of one ping to the
//! start of the next.

mod config;
mod error;
mod handle;
mod result;


pub use config::*;
pub use error::*;
pub use handle::*;
pub use result::*;

use crate::config::KeepAliveConfig;
use futures::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Sends keep-alive pings to a single health endpoint.
pub struct Pinger {
    /// HTTP client reused across pings
    client: reqwest::Client,
    /// Full URL of the health endpoint
    health_url: String,
    /// Cadence and timeouts
    config: PingConfig,
}

impl Pinger {
    /// Validate the configuration and build a pinger with its own HTTP client.
    pub fn new(config: &KeepAliveConfig) -> Result<Self, KeepAliveError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.ping.timeout())
            .build()?;

        Ok(Self::with_client(config, client))
    }

    /// Create a pinger with a custom HTTP client. Skips validation.
    pub fn with_client(config: &KeepAliveConfig, client: reqwest::Client) -> Self {
        let pinger = Self {
            client,
            health_url: config.health_url(),
            config: config.ping.clone(),
        };

        tracing::info!(
            url = %config.target.base_url,
            health_url = %pinger.health_url,
            interval_seconds = pinger.config.interval_seconds,
            interval_minutes = pinger.config.interval_seconds as f64 / 60.0,
            "Keep-alive initialized"
        );

        pinger
    }

    pub fn health_url(&self) -> &str {
        &self.health_url
    }

    pub fn config(&self) -> &PingConfig {
        &self.config
    }

    /// Send one ping and log the outcome. Never fails.
    pub async fn ping(&self) -> PingResult {
        let start = Instant::now();

        let result = match self
            .client
            .get(&self.health_url)
            .timeout(self.config.timeout())
            .send()
            .await
        {
            Ok(response) if response.status() == reqwest::StatusCode::OK => PingResult::Alive {
                latency_ms: start.elapsed().as_millis() as u32,
                at: chrono::Local::now(),
            },
            Ok(response) => PingResult::Failure {
                error: PingError::Status(response.status().as_u16()),
            },
            Err(e) => PingResult::Failure {
                error: Self::classify_error(e, self.config.timeout_seconds),
            },
        };

        match &result {
            PingResult::Alive { latency_ms, at } => {
                tracing::info!(
                    latency_ms = *latency_ms,
                    "Ping successful - service alive at {}",
                    at.format("%H:%M:%S")
                );
            }
            PingResult::Failure {
                error: PingError::Status(status),
            } => {
                tracing::warn!(
                    url = %self.health_url,
                    status = *status,
                    "Ping returned status {}",
                    status
                );
            }
            PingResult::Failure { error } if error.is_transport() => {
                tracing::error!(url = %self.health_url, error = %error, "Ping failed: {}", error);
            }
            PingResult::Failure { error } => {
                tracing::error!(url = %self.health_url, error = %error, "Ping error: {}", error);
            }
        }

        result
    }

    /// Classify reqwest error into PingError.
    fn classify_error(e: reqwest::Error, timeout_seconds: u64) -> PingError {
        if e.is_timeout() {
            PingError::Timeout(timeout_seconds)
        } else if e.is_connect() || e.is_request() {
            PingError::Connection(error_chain(&e))
        } else {
            PingError::Unknown(error_chain(&e))
        }
    }

    /// Run the keep-alive loop on the current task until `cancel` fires.
    pub async fn run(self, cancel: CancellationToken) {
        let schedule = self.config.schedule();
        let pinger = &self;
        drive(schedule, cancel, || pinger.ping()).await;
    }

    /// Spawn the keep-alive loop as a background task.
    /// Returns a JoinHandle that resolves when the loop stops.
    pub fn start(self, cancel: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(self.run(cancel))
    }
}

/// Loop body shared by [`Pinger::run`] and the tests.
///
/// Sleeps `startup_delay` once, then alternates `probe` and `interval`. A panic
/// escaping `probe` is logged and followed by `recovery_delay` instead of the
/// interval. Every suspension point observes `cancel`.
pub(crate) async fn drive<F, Fut>(schedule: Schedule, cancel: CancellationToken, mut probe: F)
where
    F: FnMut() -> Fut,
    Fut: Future,
{
    tracing::info!(
        startup_delay_seconds = schedule.startup_delay.as_secs(),
        "Starting keep-alive loop"
    );

    if sleep_or_cancel(schedule.startup_delay, &cancel).await {
        loop {
            let attempt = AssertUnwindSafe(async { probe().await }).catch_unwind();

            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                outcome = attempt => outcome,
            };

            let pause = match outcome {
                Ok(_) => schedule.interval,
                Err(panic) => {
                    tracing::error!(
                        error = %panic_message(panic.as_ref()),
                        recovery_delay_seconds = schedule.recovery_delay.as_secs(),
                        "Keep-alive loop error, pausing before next attempt"
                    );
                    schedule.recovery_delay
                }
            };

            if !sleep_or_cancel(pause, &cancel).await {
                break;
            }
        }
    }

    tracing::info!("Keep-alive stopped");
}

/// Returns false if cancelled before `duration` elapsed.
async fn sleep_or_cancel(duration: Duration, cancel: &CancellationToken) -> bool {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => false,
        _ = tokio::time::sleep(duration) => true,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Join an error with its sources so the root cause ("connection refused",
/// "dns error", ...) makes it into the log line.
fn error_chain(e: &(dyn std::error::Error + 'static)) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
