//! Background keep-alive task started explicitly by a host process.

use super::{KeepAliveError, Pinger};
use crate::config::KeepAliveConfig;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Handle to a running keep-alive task.
///
/// Dropping the handle detaches the task; it keeps pinging for as long as the
/// runtime lives.
#[derive(Debug)]
pub struct KeepAliveHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl KeepAliveHandle {
    /// Ask the loop to stop at its next suspension point.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Token controlling the loop, for wiring into a host's own shutdown.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Cancel the loop and wait for it to exit.
    pub async fn shutdown(self) -> Result<(), KeepAliveError> {
        self.cancel.cancel();
        self.task
            .await
            .map_err(|e| KeepAliveError::TaskFailed(e.to_string()))
    }
}

/// Start the keep-alive loop in the background of the current tokio runtime.
///
/// Must be called from within a runtime; otherwise returns
/// [`KeepAliveError::NoRuntime`] instead of panicking.
///
/// ```no_run
/// # async fn host() -> Result<(), keepalive::KeepAliveError> {
/// let config = keepalive::KeepAliveConfig::default().with_env_overrides();
/// let keep_alive = keepalive::start_keep_alive(&config)?;
///
/// // ... serve traffic ...
///
/// keep_alive.shutdown().await?;
/// # Ok(())
/// # }
/// ```
pub fn start_keep_alive(config: &KeepAliveConfig) -> Result<KeepAliveHandle, KeepAliveError> {
    let runtime = tokio::runtime::Handle::try_current()
        .map_err(|e| KeepAliveError::NoRuntime(e.to_string()))?;

    let pinger = Pinger::new(config)?;
    let cancel = CancellationToken::new();
    let task = runtime.spawn(pinger.run(cancel.clone()));

    tracing::info!("Keep-alive task started in background");

    Ok(KeepAliveHandle { cancel, task })
}
