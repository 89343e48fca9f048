use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::store::StoreConfig;
use self::ui::UiConfig;

pub mod store;
pub mod ui;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Load from the default config file location, then apply env overrides.
    pub fn load() -> Self {
        Self::load_from(Self::config_path().as_deref())
    }

    /// Load from `path` (or defaults when `None`/absent/unparseable), then
    /// apply env overrides. A broken config file logs a warning and falls
    /// back to defaults rather than failing startup.
    pub fn load_from(path: Option<&Path>) -> Self {
        let mut config = match path {
            Some(path) => match fs::read_to_string(path) {
                Ok(contents) => match serde_json::from_str(&contents) {
                    Ok(config) => config,
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "unparseable config, using defaults");
                        Self::default()
                    }
                },
                Err(_) => Self::default(),
            },
            None => Self::default(),
        };

        config.apply_env();
        config
    }

    fn apply_env(&mut self) {
        if let Some(path) = env::var("RECNIK_DICTIONARY_FILE").ok().map(PathBuf::from) {
            self.store.path = Some(path);
        }

        if let Some(max) = env::var("RECNIK_MAX_RESULTS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.ui.max_results = max;
        }
    }

    /// Platform config file, e.g. `~/.config/recnik/config.json` on Linux.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("recnik").join("config.json"))
    }
}
