use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::error::ConfigError;
use crate::model::CurrencyFormat;

/// Settings read from `config.json`.
///
/// ```json
/// { "locale": "de_DE", "round_up": true, "log_filter": "tipcalc=debug" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Locale tag whose currency format replaces the one from the environment.
    pub locale: Option<String>,
    /// Initial state of the round-up toggle.
    pub round_up: bool,
    /// `tracing` filter directives; logging stays off when unset.
    pub log_filter: Option<String>,
}

/// Returns `<config dir>/tipcalc/config.json`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(dir.join("tipcalc").join("config.json"))
}

impl Config {
    /// Loads the config from [`default_config_path`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&default_config_path()?)
    }

    /// Loads the config from `path`, returning defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config: Self = serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(locale) = &config.locale
            && CurrencyFormat::for_locale(locale).is_none()
        {
            return Err(ConfigError::UnknownLocale(locale.clone()));
        }

        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// The currency format to display tips in.
    ///
    /// Uses the configured locale when set, otherwise the process locale.
    pub fn currency_format(&self) -> CurrencyFormat {
        if let Some(format) = self.locale.as_deref().and_then(CurrencyFormat::for_locale) {
            return format;
        }

        let format = CurrencyFormat::active();
        if let Some(tag) = CurrencyFormat::env_locale(|name| std::env::var(name).ok())
            && CurrencyFormat::for_locale(&tag).is_none()
        {
            tracing::debug!(
                locale = %tag,
                fallback = format.locale(),
                "no currency format for locale"
            );
        }
        format
    }
}
