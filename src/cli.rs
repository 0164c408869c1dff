// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `feasrun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "feasrun",
    version,
    about = "Enumerate feasible task orderings and run one under deadline supervision.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a task-set file (TOML).
    ///
    /// When omitted, a built-in demonstration task set is used.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Index of the feasible schedule to execute, in enumeration order.
    #[arg(long, value_name = "INDEX", default_value_t = 0)]
    pub schedule: usize,

    /// Enumerate and print the feasible schedules without executing any.
    #[arg(long)]
    pub list: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `FEASRUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The corresponding `tracing` level.
    pub fn as_tracing(self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
