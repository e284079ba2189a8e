use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration, loaded from `podium.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodiumConfig {
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the binary record file.
    pub db_path: String,
}

impl Default for PodiumConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: "competition.dat".to_string(),
        }
    }
}

impl PodiumConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    /// A present-but-malformed file is still an error: silently ignoring a
    /// typo'd config would point the CLI at the wrong database file.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
