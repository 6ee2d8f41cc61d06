//! Keep-alive pinger
//!
//! Keeps a hosted service from being suspended for inactivity by periodically
//! requesting its `/health` endpoint. Run it as the `keepalive` binary, or start
//! it from a host process with [`start_keep_alive`].

pub mod cli;
pub mod config;
pub mod logging;
pub mod pinger;

pub use config::KeepAliveConfig;
pub use pinger::{
    start_keep_alive, KeepAliveError, KeepAliveHandle, PingConfig, PingError, PingResult, Pinger,
};
