//! SQLite character repository
//!
//! Each character is stored as a JSON document next to the columns needed
//! for lookups. The `name` column carries the case-insensitive uniqueness
//! rule and `version` drives the conditional update.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::application::ports::outbound::{CharacterRepositoryPort, RepoError};
use crate::domain::entities::Character;
use crate::domain::value_objects::CharacterId;

pub struct SqliteCharacterRepository {
    pool: SqlitePool,
}

impl SqliteCharacterRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS characters (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL UNIQUE COLLATE NOCASE,
                version INTEGER NOT NULL,
                data TEXT NOT NULL,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
        "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    async fn exists(&self, id: CharacterId) -> Result<bool, RepoError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT id FROM characters WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;
        Ok(row.is_some())
    }
}

fn database_error(e: sqlx::Error) -> RepoError {
    RepoError::Database(e.to_string())
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

/// The `version` column is authoritative over the copy inside the document
fn decode((version, data): (i64, String)) -> Result<Character, RepoError> {
    let mut character: Character = serde_json::from_str(&data)?;
    character.version = version as u64;
    Ok(character)
}

#[async_trait]
impl CharacterRepositoryPort for SqliteCharacterRepository {
    async fn get_by_id(&self, id: CharacterId) -> Result<Option<Character>, RepoError> {
        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT version, data FROM characters WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await
                .map_err(database_error)?;
        row.map(decode).transpose()
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Character>, RepoError> {
        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT version, data FROM characters WHERE name = ?")
                .bind(name)
                .fetch_optional(&self.pool)
                .await
                .map_err(database_error)?;
        row.map(decode).transpose()
    }

    async fn list(&self) -> Result<Vec<Character>, RepoError> {
        let rows: Vec<(i64, String)> =
            sqlx::query_as("SELECT version, data FROM characters ORDER BY name")
                .fetch_all(&self.pool)
                .await
                .map_err(database_error)?;
        rows.into_iter().map(decode).collect()
    }

    async fn add(&self, character: &Character) -> Result<(), RepoError> {
        let data = serde_json::to_string(character)?;
        sqlx::query("INSERT INTO characters (id, name, version, data) VALUES (?, ?, ?, ?)")
            .bind(character.id.to_string())
            .bind(&character.name)
            .bind(character.version as i64)
            .bind(data)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    RepoError::Duplicate(character.name.clone())
                } else {
                    database_error(e)
                }
            })?;

        tracing::debug!("Created character: {}", character.name);
        Ok(())
    }

    async fn update(&self, character: &Character) -> Result<u64, RepoError> {
        let version = character.version + 1;
        let mut stored = character.clone();
        stored.version = version;
        let data = serde_json::to_string(&stored)?;

        let result = sqlx::query(
            "UPDATE characters SET version = ?, data = ?, updated_at = CURRENT_TIMESTAMP \
             WHERE id = ? AND version = ?",
        )
        .bind(version as i64)
        .bind(data)
        .bind(character.id.to_string())
        .bind(character.version as i64)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return if self.exists(character.id).await? {
                Err(RepoError::Conflict(character.id))
            } else {
                Err(RepoError::NotFound(character.id))
            };
        }

        Ok(version)
    }

    async fn delete(&self, id: CharacterId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM characters WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(database_error)?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::AbilityScores;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn repository() -> SqliteCharacterRepository {
        // A single connection keeps every query on the same in-memory database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        SqliteCharacterRepository::new(pool).await.unwrap()
    }

    fn character(name: &str) -> Character {
        Character::new(name, "Elf", Some("High Elf".into()), "Wizard", AbilityScores::uniform(12))
    }

    #[tokio::test]
    async fn test_add_and_load() {
        let repository = repository().await;
        let gandalf = character("Gandalf");
        repository.add(&gandalf).await.unwrap();

        let loaded = repository.get_by_id(gandalf.id).await.unwrap().unwrap();
        assert_eq!(loaded, gandalf);

        let by_name = repository.get_by_name("GANDALF").await.unwrap().unwrap();
        assert_eq!(by_name.id, gandalf.id);
    }

    #[tokio::test]
    async fn test_duplicate_name_ignoring_case() {
        let repository = repository().await;
        repository.add(&character("Gandalf")).await.unwrap();

        let result = repository.add(&character("gandalf")).await;
        assert!(matches!(result, Err(RepoError::Duplicate(name)) if name == "gandalf"));
        assert_eq!(repository.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_versioned_update() {
        let repository = repository().await;
        let gandalf = character("Gandalf");
        repository.add(&gandalf).await.unwrap();

        let mut first = repository.get_by_id(gandalf.id).await.unwrap().unwrap();
        let stale = first.clone();
        first.modify_hit_points(-4);

        assert_eq!(repository.update(&first).await.unwrap(), 1);
        assert!(matches!(
            repository.update(&stale).await,
            Err(RepoError::Conflict(_))
        ));

        let loaded = repository.get_by_id(gandalf.id).await.unwrap().unwrap();
        assert_eq!(loaded.version, 1);
        assert_eq!(loaded.hit_points(), first.hit_points());
    }

    #[tokio::test]
    async fn test_update_missing_character_is_not_found() {
        let repository = repository().await;
        let ghost = character("Ghost");
        let result = repository.update(&ghost).await;
        assert!(matches!(result, Err(RepoError::NotFound(id)) if id == ghost.id));
    }

    #[tokio::test]
    async fn test_delete() {
        let repository = repository().await;
        let gandalf = character("Gandalf");
        repository.add(&gandalf).await.unwrap();

        assert!(repository.delete(gandalf.id).await.unwrap());
        assert!(!repository.delete(gandalf.id).await.unwrap());
        assert!(repository.get_by_id(gandalf.id).await.unwrap().is_none());
    }
}
