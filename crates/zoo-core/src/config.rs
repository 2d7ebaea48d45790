//! Layered configuration.
//!
//! Sources in priority order, highest wins:
//! 1. Environment variables (`ZOO_` prefix, e.g. `ZOO_DATA_FILE`)
//! 2. `zoo.toml` in the working directory (or the path given to [`ZooConfig::load_from`])
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default config file, relative to the working directory.
pub const CONFIG_FILE: &str = "zoo.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZooConfig {
    /// JSON file holding the animal collection
    pub data_file: PathBuf,
    /// Register animals whose species is not in the catalog
    pub allow_unknown_species: bool,
    /// Only place animals in habitats that list their species
    pub enforce_habitat_species: bool,
}

impl Default for ZooConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("zoo_data.json"),
            allow_unknown_species: false,
            enforce_habitat_species: true,
        }
    }
}

impl ZooConfig {
    /// Load from defaults, `zoo.toml` and `ZOO_*` environment variables.
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load using a specific TOML file. A missing file is skipped.
    pub fn load_from<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let config: Self = Self::figment(path.as_ref()).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the provider chain.
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("ZOO_"))
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "data_file".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}
