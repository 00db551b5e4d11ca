//! Configuration update and merging.

use serde::{Deserialize, Serialize};

use super::config_data::{Config, DisplaySettings, MatchSettings};

/// Partial configuration update that can be merged into a Config.
///
/// All fields are optional. Only specified fields will override the base config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigUpdate {
    /// Matching thresholds.
    #[serde(default)]
    pub matching: Option<MatchSettings>,

    /// Report limits.
    #[serde(default)]
    pub display: Option<DisplaySettings>,

    /// Shortcut for `display.max_candidates`, applied last.
    #[serde(default)]
    pub top: Option<usize>,
}

impl ConfigUpdate {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges this update into a base configuration, returning a new Config.
    pub fn merge_into(self, base: &Config) -> Config {
        let mut display = self.display.unwrap_or(base.display);
        if let Some(top) = self.top {
            display.max_candidates = top;
        }

        Config {
            matching: self.matching.unwrap_or(base.matching),
            display,
        }
    }
}

impl From<ConfigUpdate> for Config {
    fn from(update: ConfigUpdate) -> Self {
        update.merge_into(&Config::default())
    }
}
