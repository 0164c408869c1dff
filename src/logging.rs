// src/logging.rs

//! Logging setup for `feasrun` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log level:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `FEASRUN_LOG` environment variable (e.g. "info", "debug")
//! 3. default to `info`
//!
//! Logs are sent to STDERR so that stdout stays free for the schedule
//! listing and the terminal run status.

use anyhow::Result;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let level = cli_level
        .map(LogLevel::as_tracing)
        .or_else(|| {
            std::env::var("FEASRUN_LOG")
                .ok()
                .and_then(|s| s.trim().parse().ok())
        })
        .unwrap_or(tracing::Level::INFO);

    // Send logs to stderr; keep stdout free for schedule output.
    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
