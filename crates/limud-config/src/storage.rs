//! Local storage locations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_data_dir() -> String {
    ".limud".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding the vocabulary database and the session slot.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("vocabulary.db")
    }

    #[must_use]
    pub fn session_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("session.json")
    }
}
