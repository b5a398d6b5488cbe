//! File logging
//!
//! The UI owns stdout, so records go to `<data_dir>/intered-admin/logs`. `RUST_LOG`
//! wins over the configured level. `log` records from the core crate are picked up
//! by the subscriber's `tracing-log` bridge.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE: &str = "intered-admin.log";

/// Directory the log file is written to.
pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("intered-admin").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Installs the global subscriber. Keep the guard alive for the life of the program.
pub fn init_logging(level: &str) -> Result<WorkerGuard> {
    let dir = log_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .with(env_filter)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(guard)
}
