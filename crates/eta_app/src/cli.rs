use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::platform::logging::LogDestination;

/// Command-line arguments. Flags given here override the config file.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Estimate when a long-running task will finish from its status document",
    long_about = None
)]
pub struct Cli {
    /// Status document to read; omit or pass `-` for stdin.
    pub input: Option<PathBuf>,

    /// RON configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Milliseconds between re-estimates.
    #[arg(short, long)]
    pub interval_ms: Option<u64>,

    #[arg(short, long, value_enum)]
    pub log_level: Option<LogLevel>,

    #[arg(long, value_enum)]
    pub log_destination: Option<LogDestination>,

    /// Show `{percent}% {task id}` in the terminal title.
    #[arg(short, long, default_value_t = false)]
    pub title: bool,

    /// Print the current estimate once instead of refreshing it.
    #[arg(long, default_value_t = false)]
    pub once: bool,
}

#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
