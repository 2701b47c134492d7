use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::error::{Error, Result};

/// Jump between pages with Control+Shift shortcuts.
#[derive(Debug, Clone, Parser)]
#[command(name = "shortcut-nav", version, about)]
pub struct Config {
    /// Path to open first
    #[arg(long, default_value = "/")]
    pub start: String,

    /// Event poll interval in milliseconds
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u64).range(1..=1000))]
    pub tick_rate_ms: u64,

    /// Directory for log files
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Minimum level written to the log file
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.start.starts_with('/') {
            Ok(())
        } else {
            Err(Error::StartLocation(self.start.clone()))
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
