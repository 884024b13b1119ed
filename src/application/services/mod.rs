//! Application services - Use case implementations
//!
//! This module contains the application services that implement the use cases
//! for the CharForge Engine. Each service follows hexagonal architecture principles,
//! accepting repository dependencies and returning domain entities or DTOs.

pub mod character_service;
mod character_store;
pub mod dice_service;
mod error;
pub mod wealth_service;

pub use character_service::{CharacterService, CharacterServiceImpl, CreateCharacterRequest};
pub use character_store::CharacterStore;
pub use dice_service::{DiceService, DEFAULT_MAX_DICE_COUNT};
pub use error::ServiceError;
pub use wealth_service::{WealthService, WealthServiceImpl};
