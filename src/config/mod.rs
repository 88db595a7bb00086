pub mod loader;

use serde::{Deserialize, Serialize};

use crate::state::{Level, Theme};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub preferences: Preferences,
}

// Values the player picks once and expects to find again on the next launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    pub level: Level,
}

impl Config {
    // Load from the resolved config path, falling back to defaults on any error
    #[must_use]
    pub fn load() -> Self {
        match loader::load_config_from_file() {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Falling back to default configuration: {err}");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), loader::ConfigError> {
        loader::save_config_to_file(self)
    }
}
