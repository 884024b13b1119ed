//! Application configuration

use anyhow::{Context, Result};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment};
use serde::Deserialize;

/// Prefix for environment overrides, e.g. `CHARFORGE_SERVER_PORT`
const ENV_PREFIX: &str = "CHARFORGE";

/// Where characters are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Sqlite,
}

/// Application configuration: compiled defaults overlaid by environment
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server port
    pub server_port: u16,
    pub storage_backend: StorageBackend,
    /// SQLite database file, used by the sqlite backend
    pub sqlite_path: String,
    /// Fixed RNG seed for reproducible dice
    #[serde(default)]
    pub dice_seed: Option<u64>,
    /// Upper bound on dice per roll request
    pub max_dice_count: i32,
}

impl AppConfig {
    /// Load configuration from defaults and `CHARFORGE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::load(defaults()?.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true)))
    }

    fn load(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>> {
    Ok(Config::builder()
        .set_default("server_port", 3000_i64)?
        .set_default("storage_backend", "memory")?
        .set_default("sqlite_path", "./data/characters.db")?
        .set_default("max_dice_count", 100_i64)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    #[test]
    fn test_defaults() {
        let config = AppConfig::load(defaults().unwrap()).unwrap();

        assert_eq!(config.server_port, 3000);
        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(config.dice_seed, None);
        assert_eq!(config.max_dice_count, 100);
    }

    #[test]
    fn test_overrides() {
        let source = "storage_backend = \"sqlite\"\ndice_seed = 42\nserver_port = 8080";
        let builder = defaults().unwrap().add_source(File::from_str(source, FileFormat::Toml));

        let config = AppConfig::load(builder).unwrap();

        assert_eq!(config.storage_backend, StorageBackend::Sqlite);
        assert_eq!(config.dice_seed, Some(42));
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let builder = defaults()
            .unwrap()
            .add_source(File::from_str("storage_backend = \"neo4j\"", FileFormat::Toml));

        assert!(AppConfig::load(builder).is_err());
    }
}
