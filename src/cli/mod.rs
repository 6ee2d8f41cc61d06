//! CLI module for the keep-alive pinger
//!
//! # Commands
//!
//! - `run` - Ping the health endpoint forever (default when no command is given)
//! - `check` - Ping once and exit non-zero unless the service answered 200
//!
//! # Example
//!
//! ```bash
//! # Keep the service named by RENDER_EXTERNAL_URL awake
//! keepalive
//!
//! # One-off check against another URL
//! keepalive check --url https://my-app.onrender.com
//! ```

pub mod run;

use crate::config::LogFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Keep-alive pinger for idle-suspended services
#[derive(Parser, Debug)]
#[command(
    name = "keepalive",
    version,
    about = "Periodically pings a service's /health endpoint so its host never idles it out"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub options: CommonArgs,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run the keep-alive loop until interrupted
    Run,
    /// Send a single ping and report the result
    Check,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Path to configuration file (defaults to ./keepalive.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the base URL of the service
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    /// Override seconds between pings
    #[arg(short, long, global = true)]
    pub interval: Option<u64>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Set log format (compact, pretty, json)
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,
}
