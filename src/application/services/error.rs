//! Errors returned by the application services

use crate::application::ports::outbound::RepoError;
use crate::domain::errors::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Character or item absent
    #[error("{0} not found")]
    NotFound(String),

    #[error("A character named '{0}' already exists")]
    NameTaken(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl ServiceError {
    pub(crate) fn character_not_found(id: impl std::fmt::Display) -> Self {
        ServiceError::NotFound(format!("Character {}", id))
    }

    pub(crate) fn item_not_found(id: impl std::fmt::Display) -> Self {
        ServiceError::NotFound(format!("Item {}", id))
    }
}
