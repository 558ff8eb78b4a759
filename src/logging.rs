//! Tracing setup. Logs go to a daily rolling file because the terminal
//! belongs to the UI.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_FILE_PREFIX: &str = "gamepal.log";

/// Platform data directory for logs, or `./logs` when there is none.
pub fn default_log_dir() -> PathBuf {
    match dirs::data_local_dir() {
        Some(mut path) => {
            path.push("gamepal");
            path.push("logs");
            path
        }
        None => PathBuf::from("logs"),
    }
}

/// Install the global subscriber. Keep the guard alive until exit so
/// buffered lines are flushed.
pub fn init_tracing(log_dir: &Path, level: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
