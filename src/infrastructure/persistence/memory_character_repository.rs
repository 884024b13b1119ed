//! In-memory character repository

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::outbound::{CharacterRepositoryPort, RepoError};
use crate::domain::entities::Character;
use crate::domain::value_objects::CharacterId;

/// Process-local character storage.
///
/// A single write lock covers the name check and the insert in `add`, so
/// concurrent creations with the same name cannot both succeed here.
#[derive(Default)]
pub struct InMemoryCharacterRepository {
    characters: RwLock<HashMap<CharacterId, Character>>,
}

impl InMemoryCharacterRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

#[async_trait]
impl CharacterRepositoryPort for InMemoryCharacterRepository {
    async fn get_by_id(&self, id: CharacterId) -> Result<Option<Character>, RepoError> {
        Ok(self.characters.read().await.get(&id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Character>, RepoError> {
        Ok(self
            .characters
            .read()
            .await
            .values()
            .find(|c| same_name(&c.name, name))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Character>, RepoError> {
        let mut characters: Vec<Character> = self.characters.read().await.values().cloned().collect();
        characters.sort_by_key(|c| c.name.to_ascii_lowercase());
        Ok(characters)
    }

    async fn add(&self, character: &Character) -> Result<(), RepoError> {
        let mut characters = self.characters.write().await;
        if characters.values().any(|c| same_name(&c.name, &character.name)) {
            return Err(RepoError::Duplicate(character.name.clone()));
        }
        characters.insert(character.id, character.clone());
        tracing::debug!("Created character: {}", character.name);
        Ok(())
    }

    async fn update(&self, character: &Character) -> Result<u64, RepoError> {
        let mut characters = self.characters.write().await;
        let stored = characters
            .get_mut(&character.id)
            .ok_or(RepoError::NotFound(character.id))?;
        if stored.version != character.version {
            return Err(RepoError::Conflict(character.id));
        }

        let mut updated = character.clone();
        updated.version += 1;
        let version = updated.version;
        *stored = updated;
        Ok(version)
    }

    async fn delete(&self, id: CharacterId) -> Result<bool, RepoError> {
        Ok(self.characters.write().await.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::AbilityScores;

    fn character(name: &str) -> Character {
        Character::new(name, "Human", None, "Fighter", AbilityScores::default())
    }

    #[tokio::test]
    async fn test_name_lookup_ignores_case() {
        let repository = InMemoryCharacterRepository::new();
        repository.add(&character("Aragorn")).await.unwrap();

        assert!(repository.get_by_name("aRaGoRn").await.unwrap().is_some());
        assert!(repository.get_by_name("Boromir").await.unwrap().is_none());
        assert!(matches!(
            repository.add(&character("ARAGORN")).await,
            Err(RepoError::Duplicate(_))
        ));
    }

    #[tokio::test]
    async fn test_stale_update_conflicts() {
        let repository = InMemoryCharacterRepository::new();
        let aragorn = character("Aragorn");
        repository.add(&aragorn).await.unwrap();

        let mut first = repository.get_by_id(aragorn.id).await.unwrap().unwrap();
        let mut second = first.clone();
        first.modify_hit_points(-3);
        second.modify_hit_points(-5);

        assert_eq!(repository.update(&first).await.unwrap(), 1);
        assert!(matches!(
            repository.update(&second).await,
            Err(RepoError::Conflict(id)) if id == aragorn.id
        ));

        let stored = repository.get_by_id(aragorn.id).await.unwrap().unwrap();
        assert_eq!(stored.hit_points(), first.hit_points());
        assert_eq!(stored.version, 1);
    }

    #[tokio::test]
    async fn test_update_after_delete_is_not_found() {
        let repository = InMemoryCharacterRepository::new();
        let aragorn = character("Aragorn");
        repository.add(&aragorn).await.unwrap();
        repository.delete(aragorn.id).await.unwrap();

        assert!(matches!(
            repository.update(&aragorn).await,
            Err(RepoError::NotFound(id)) if id == aragorn.id
        ));
        assert!(repository.get_by_id(aragorn.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_and_delete() {
        let repository = InMemoryCharacterRepository::new();
        let legolas = character("Legolas");
        repository.add(&legolas).await.unwrap();
        repository.add(&character("aragorn")).await.unwrap();

        let names: Vec<String> = repository.list().await.unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["aragorn", "Legolas"]);

        assert!(repository.delete(legolas.id).await.unwrap());
        assert!(!repository.delete(legolas.id).await.unwrap());
    }
}
