//! Shared test utilities for keep-alive integration tests.

#![allow(dead_code)]

use keepalive::config::KeepAliveConfig;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

/// Config pointing at `base_url` that pings immediately and times out fast.
pub fn fast_config(base_url: &str, interval_seconds: u64) -> KeepAliveConfig {
    let mut config = KeepAliveConfig::default();
    config.target.base_url = base_url.to_string();
    config.ping.interval_seconds = interval_seconds;
    config.ping.timeout_seconds = 1;
    config.ping.startup_delay_seconds = 0;
    config.ping.recovery_delay_seconds = 1;
    config
}

/// Base URL of a local port nothing is listening on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

// =============================================================================
// Log Capture
// =============================================================================

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Capture INFO and above on the current thread until the guard drops.
///
/// Only events emitted on this thread are recorded, so use it with the
/// default current-thread `#[tokio::test]` runtime.
pub fn capture_logs() -> (LogBuffer, DefaultGuard) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}
