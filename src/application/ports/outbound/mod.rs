//! Outbound ports - Interfaces that the application requires from external systems

mod repository_port;

pub use repository_port::{CharacterRepositoryPort, ItemRepositoryPort, RepoError};

#[cfg(test)]
pub use repository_port::{MockCharacterRepositoryPort, MockItemRepositoryPort};
