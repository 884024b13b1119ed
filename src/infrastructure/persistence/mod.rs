//! Persistence adapters
//!
//! Characters live either in process memory or in a SQLite database,
//! selected by configuration. Items come from a fixed in-memory catalog.

mod memory_character_repository;
mod memory_item_repository;
mod sqlite_character_repository;

pub use memory_character_repository::InMemoryCharacterRepository;
pub use memory_item_repository::InMemoryItemRepository;
pub use sqlite_character_repository::SqliteCharacterRepository;

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::application::ports::outbound::CharacterRepositoryPort;
use crate::infrastructure::config::{AppConfig, StorageBackend};

/// Build the character repository for the configured backend
pub async fn create_character_repository(
    config: &AppConfig,
) -> Result<Arc<dyn CharacterRepositoryPort>> {
    match config.storage_backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory character storage");
            Ok(Arc::new(InMemoryCharacterRepository::new()))
        }
        StorageBackend::Sqlite => {
            if let Some(parent) = std::path::Path::new(&config.sqlite_path).parent() {
                std::fs::create_dir_all(parent)
                    .context("Failed to create character database directory")?;
            }

            let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", config.sqlite_path))
                .await
                .context("Failed to connect to SQLite character database")?;
            tracing::info!("Connected to SQLite character database: {}", config.sqlite_path);

            let repository = SqliteCharacterRepository::new(pool)
                .await
                .context("Failed to initialize character table")?;
            Ok(Arc::new(repository))
        }
    }
}
