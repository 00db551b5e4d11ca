//! Configuration loading and management.
//!
//! Every setting has a default, so a configuration file is optional. Files
//! are TOML with `[matching]` and `[display]` sections.

mod config_data;
mod config_update;

use std::fs;
use std::path::Path;

pub use config_data::{Config, DisplaySettings, MatchSettings};
pub use config_update::ConfigUpdate;

use crate::errors::Result;

/// Reads and validates configuration from a TOML file.
pub fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let update: ConfigUpdate = toml::from_str(&content)?;
    let config = update.merge_into(&Config::default());
    config.validate()?;
    Ok(config)
}

/// Reads configuration from a specific file, or returns default if no file is given.
pub fn read_config_or_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => read_config_file(path),
        None => Ok(Config::default()),
    }
}
