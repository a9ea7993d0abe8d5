// Rust guideline compliant 2026-10-16

//! Tracing initialisation for the `patitas` binary.

use anyhow::{bail, Result};
use std::fs::OpenOptions;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Installs the global subscriber.
///
/// Logs go to stderr, or as JSON lines to `log_file` when given. The
/// returned guard flushes the file writer and must be held until exit.
///
/// # Errors
///
/// Returns an error if the level is unknown, the log file cannot be opened,
/// or a global subscriber is already installed.
pub fn init(level: &str, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = parse_log_level(level)?;

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(None)
}

/// Parses a log level name.
///
/// # Errors
///
/// Returns an error for anything but error, warn, info and debug.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        other => bail!("Invalid log level: {other}"),
    }
}
