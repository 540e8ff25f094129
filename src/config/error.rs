use std::path::PathBuf;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON or has unexpected fields.
    #[error("invalid config file {path}: {source}")]
    Json {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying parse error.
        source: serde_json::Error,
    },

    /// The configured locale has no built-in currency format.
    #[error("unsupported locale: {0}")]
    UnknownLocale(String),

    /// The platform does not provide a config directory.
    #[error("could not determine config directory")]
    NoConfigDir,
}
