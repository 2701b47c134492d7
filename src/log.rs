//! Logging bootstrap.
//!
//! The terminal belongs to the UI, so records only go to a daily rolling file.
//! [`init`] may be called more than once; the first configuration wins.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

const ENV_FILTER_VARS: [&str; 2] = ["SHORTCUT_NAV_LOG", "RUST_LOG"];

static LOG_HANDLE: OnceLock<LogHandle> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub directory: PathBuf,
    pub file_prefix: String,
    pub level: LevelFilter,
    /// Filter directive such as `shortcut_nav=debug`. Falls back to the
    /// environment, then to `level`.
    pub env_filter: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: default_log_directory(),
            file_prefix: "shortcut-nav".to_string(),
            level: LevelFilter::INFO,
            env_filter: None,
        }
    }
}

impl LogConfig {
    pub fn with_directory<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.directory = path.into();
        self
    }

    pub fn with_level(mut self, level: impl Into<LevelFilter>) -> Self {
        self.level = level.into();
        self
    }
}

/// Owns the background writer; dropping it flushes and stops file logging.
#[derive(Debug)]
pub struct LogHandle {
    _guard: tracing_appender::non_blocking::WorkerGuard,
    directory: PathBuf,
}

impl LogHandle {
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

pub fn init(config: LogConfig) -> Result<&'static LogHandle> {
    if let Some(handle) = LOG_HANDLE.get() {
        return Ok(handle);
    }

    let handle = setup(config)?;
    Ok(LOG_HANDLE.get_or_init(|| handle))
}

fn setup(config: LogConfig) -> Result<LogHandle> {
    fs::create_dir_all(&config.directory).map_err(|source| Error::LogDirectory {
        path: config.directory.clone(),
        source,
    })?;

    let appender = tracing_appender::rolling::daily(&config.directory, &config.file_prefix);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let directive = config
        .env_filter
        .or_else(|| ENV_FILTER_VARS.iter().find_map(|var| std::env::var(var).ok()))
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| config.level.to_string().to_lowercase());
    let env_filter = EnvFilter::try_new(&directive).map_err(|source| Error::LogFilter {
        directive: directive.clone(),
        source,
    })?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(writer)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .map_err(|_| Error::LogInstalled)?;

    Ok(LogHandle {
        _guard: guard,
        directory: config.directory,
    })
}

fn default_log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "shortcut-nav").map_or_else(
        || std::env::temp_dir().join("shortcut-nav-logs"),
        |dirs| dirs.data_dir().join("logs"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let temp = tempfile::tempdir().expect("temp dir");
        let config = LogConfig::default()
            .with_directory(temp.path().join("logs"))
            .with_level(LevelFilter::DEBUG);

        let first = init(config.clone()).expect("init once");
        assert!(first.directory().exists());

        let second = init(config).expect("init twice");
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn default_directory_is_named_for_the_app() {
        let config = LogConfig::default();
        assert!(config.directory.to_string_lossy().contains("shortcut-nav"));
    }
}
