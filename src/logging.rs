//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI, so events go to
//! `<data dir>/tipcalc/tipcalc.log`. Logging is off unless `TIPCALC_LOG` or
//! the config's `log_filter` supplies filter directives.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Environment variable holding `tracing` filter directives.
pub const LOG_ENV: &str = "TIPCALC_LOG";

/// Errors that can occur while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log file could not be created or opened.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The filter directives could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber was already installed.
    #[error("could not install log subscriber: {0}")]
    Init(String),

    /// The platform does not provide a data directory.
    #[error("could not determine data directory")]
    NoDataDir,
}

/// Picks the filter directives: the environment first, then the config.
pub fn filter_directives(env_value: Option<String>, config: &Config) -> Option<String> {
    env_value
        .filter(|value| !value.is_empty())
        .or_else(|| config.log_filter.clone())
}

/// Returns `<data dir>/tipcalc/tipcalc.log`.
pub fn default_log_path() -> Result<PathBuf, LoggingError> {
    let dir = dirs::data_dir().ok_or(LoggingError::NoDataDir)?;
    Ok(dir.join("tipcalc").join("tipcalc.log"))
}

/// Installs the global subscriber if logging is enabled.
///
/// Returns the log file path when a subscriber was installed.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init(config: &Config) -> Result<Option<PathBuf>, LoggingError> {
    let Some(directives) = filter_directives(std::env::var(LOG_ENV).ok(), config) else {
        return Ok(None);
    };
    let path = default_log_path()?;
    init_at(&directives, &path)?;
    Ok(Some(path))
}

/// Installs the global subscriber writing to `path` with the given filter.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init_at(directives: &str, path: &Path) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(directives)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}
