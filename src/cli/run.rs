//! `run` and `check` command implementations

use crate::cli::CommonArgs;
use crate::config::{KeepAliveConfig, DEFAULT_CONFIG_FILE};
use crate::logging::init_tracing;
use crate::pinger::Pinger;
use std::path::Path;
use tokio_util::sync::CancellationToken;

/// Load configuration with env and CLI overrides, then validate it.
pub fn load_config_with_overrides(
    args: &CommonArgs,
) -> Result<KeepAliveConfig, Box<dyn std::error::Error>> {
    // An explicit path must exist; the implicit default is optional
    let mut config = match &args.config {
        Some(path) => KeepAliveConfig::load(Some(path))?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            KeepAliveConfig::load(Some(Path::new(DEFAULT_CONFIG_FILE)))?
        }
        None => KeepAliveConfig::default(),
    };

    // Apply environment variable overrides
    config = config.with_env_overrides();

    // Apply CLI overrides (highest priority)
    if let Some(ref url) = args.url {
        config.target.base_url = url.clone();
    }
    if let Some(interval) = args.interval {
        config.ping.interval_seconds = interval;
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }
    if let Some(format) = args.log_format {
        config.logging.format = format;
    }

    config.validate()?;
    Ok(config)
}

/// Wait for shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, stopping keep-alive");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, stopping keep-alive");
        }
    }

    cancel_token.cancel();
}

/// Run the keep-alive loop on the main task until interrupted.
pub async fn run_keep_alive(args: &CommonArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_overrides(args)?;
    init_tracing(&config.logging)?;

    tracing::debug!(?config, "Loaded configuration");

    let pinger = Pinger::new(&config)?;
    let cancel_token = CancellationToken::new();
    let signals = tokio::spawn(shutdown_signal(cancel_token.clone()));

    pinger.run(cancel_token).await;

    signals.abort();
    Ok(())
}

/// Ping once, skipping the startup delay.
pub async fn run_check(args: &CommonArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_overrides(args)?;
    init_tracing(&config.logging)?;

    let pinger = Pinger::new(&config)?;
    match pinger.ping().await.error() {
        None => Ok(()),
        Some(error) => {
            Err(format!("health check against {} failed: {}", pinger.health_url(), error).into())
        }
    }
}
