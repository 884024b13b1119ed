//! Repository ports - Interfaces for data persistence
//!
//! These traits define the contracts that infrastructure repositories must implement.
//! Application services depend on these traits, not concrete implementations.

use async_trait::async_trait;

use crate::domain::entities::{Character, Item};
use crate::domain::value_objects::{CharacterId, ItemId};

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Storage-level uniqueness on character names
    #[error("A character named '{0}' already exists")]
    Duplicate(String),

    /// The character disappeared before the write reached storage
    #[error("Character {0} does not exist")]
    NotFound(CharacterId),

    /// The stored version moved on since the aggregate was loaded
    #[error("Character {0} was modified concurrently")]
    Conflict(CharacterId),
}

impl From<serde_json::Error> for RepoError {
    fn from(e: serde_json::Error) -> Self {
        RepoError::Serialization(e.to_string())
    }
}

// =============================================================================
// Character Repository Port
// =============================================================================

/// Repository port for Character aggregate persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepositoryPort: Send + Sync {
    /// Get a character by ID
    async fn get_by_id(&self, id: CharacterId) -> Result<Option<Character>, RepoError>;

    /// Find a character by name, ignoring case
    async fn get_by_name(&self, name: &str) -> Result<Option<Character>, RepoError>;

    /// List all characters ordered by name
    async fn list(&self) -> Result<Vec<Character>, RepoError>;

    /// Insert a new character
    async fn add(&self, character: &Character) -> Result<(), RepoError>;

    /// Store a modified character.
    ///
    /// Succeeds only if the stored version equals `character.version`;
    /// returns the new version. A missing record is `RepoError::NotFound`.
    async fn update(&self, character: &Character) -> Result<u64, RepoError>;

    /// Delete a character, returning whether it existed
    async fn delete(&self, id: CharacterId) -> Result<bool, RepoError>;
}

// =============================================================================
// Item Repository Port
// =============================================================================

/// Read-only lookup of catalog items for equip operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepositoryPort: Send + Sync {
    async fn get_by_id(&self, id: ItemId) -> Result<Option<Item>, RepoError>;

    async fn list(&self) -> Result<Vec<Item>, RepoError>;
}
