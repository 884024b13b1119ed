//! Load-mutate-save helper shared by the character-scoped services

use std::sync::Arc;

use crate::application::ports::outbound::{CharacterRepositoryPort, RepoError};
use crate::application::services::ServiceError;
use crate::domain::entities::Character;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::CharacterId;

#[derive(Clone)]
pub struct CharacterStore {
    repository: Arc<dyn CharacterRepositoryPort>,
}

impl CharacterStore {
    pub fn new(repository: Arc<dyn CharacterRepositoryPort>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &dyn CharacterRepositoryPort {
        self.repository.as_ref()
    }

    pub async fn load(&self, id: CharacterId) -> Result<Character, ServiceError> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::character_not_found(id))
    }

    /// Load a character, apply `change` and persist the result.
    ///
    /// Nothing is written when `change` fails, so a rejected operation
    /// leaves the stored aggregate untouched. A character deleted between the
    /// load and the write is reported as not found.
    pub async fn mutate<T, F>(&self, id: CharacterId, change: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut Character) -> Result<T, DomainError> + Send,
        T: Send,
    {
        let mut character = self.load(id).await?;
        let output = change(&mut character)?;
        self.repository
            .update(&character)
            .await
            .map_err(|e| match e {
                RepoError::NotFound(id) => ServiceError::character_not_found(id),
                other => other.into(),
            })?;
        Ok(output)
    }
}
