//! Configuration management for Libris

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Path of the JSON snapshot file
    pub snapshot_path: String,
    /// Save a snapshot after every successful mutation
    pub autosave: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LendingConfig {
    /// Refuse to deregister a user who still holds borrowed books.
    /// Off by default: the compatible behavior removes the user and the
    /// borrowed books become unreachable.
    #[serde(default)]
    pub strict_deregistration: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub lending: LendingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix LIBRIS_)
            .add_source(
                Environment::with_prefix("LIBRIS")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override snapshot path from LIBRIS_SNAPSHOT env var if present
            .set_override_option(
                "storage.snapshot_path",
                env::var("LIBRIS_SNAPSHOT").ok(),
            )?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            storage: StorageConfig::default(),
            lending: LendingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            snapshot_path: "library.json".to_string(),
            autosave: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_compatible_mode() {
        let config = AppConfig::default();
        assert!(!config.lending.strict_deregistration);
        assert!(config.storage.autosave);
        assert_eq!(config.logging.level, "info");
    }
}
