use super::defaults::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::consts::{COMPONENT_ENV, CONFIG_PATH_ENV};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_records")]
    pub records: RecordSettings,
    #[serde(default = "default_logging")]
    pub logging: LoggingSettings,
}

/// Where and under which owner key records live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSettings {
    pub component: String,
    pub namespace: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            records: default_records(),
            logging: default_logging(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(component) = std::env::var(COMPONENT_ENV) {
            if !component.is_empty() {
                self.records.component = component;
            }
        }
    }
}

/// Config file location: `$ENCRYPTION_CONFIG`, else the user config dir
pub fn config_path() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) => Some(PathBuf::from(path)),
        None => dirs::config_dir().map(|dir| dir.join("encryption-config").join("config.toml")),
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config at runtime, falling back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let mut conf = match config_path() {
            Some(path) if path.exists() => Config::from_path(&path).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), error = %err, "invalid config, using built-in defaults");
                Config::default()
            }),
            _ => Config::default(),
        };

        conf.apply_env_overrides();
        conf
    })
}
