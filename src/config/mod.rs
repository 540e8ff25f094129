//! User configuration, read from a JSON file in the platform config directory.
//!
//! A missing file is not an error: every setting has a default, so the
//! calculator runs unconfigured.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{Config, default_config_path};
