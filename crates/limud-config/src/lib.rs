//! # limud-config
//!
//! Layered configuration loading for Limud using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LIMUD_*` prefix, `__` as separator)
//! 2. Project-level `.limud/config.toml`
//! 3. User-level `~/.config/limud/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LIMUD_FLASHCARDS__RANDOM_SEED` -> `flashcards.random_seed`,
//! `LIMUD_STORAGE__DATA_DIR` -> `storage.data_dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use limud_config::LimudConfig;
//!
//! let config = LimudConfig::load_with_dotenv().expect("config");
//! if let Some(seed) = config.flashcards.random_seed {
//!     println!("Shuffles are reproducible (seed {seed})");
//! }
//! ```

mod conjugation;
mod error;
mod flashcards;
mod storage;

pub use conjugation::ConjugationConfig;
pub use error::ConfigError;
pub use flashcards::FlashcardsConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct LimudConfig {
    #[serde(default)]
    pub flashcards: FlashcardsConfig,
    #[serde(default)]
    pub conjugation: ConjugationConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl LimudConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is not an error.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on extraction or validation failure.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".limud/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("LIMUD_").split("__"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.data_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.data_dir".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("limud").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = LimudConfig::default();
        assert!(config.flashcards.prompt_side_is_hebrew);
        assert!(!config.conjugation.exclude_waw_consecutives);
        assert!(!config.conjugation.exclude_jussive_and_cohortatives);
        assert_eq!(config.storage.data_dir, ".limud");
    }

    #[test]
    fn empty_data_dir_is_invalid() {
        let mut config = LimudConfig::default();
        config.storage.data_dir = "  ".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
