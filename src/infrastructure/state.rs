//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::services::{CharacterServiceImpl, DiceService, WealthServiceImpl};
use crate::domain::services::DiceRoller;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::{create_character_repository, InMemoryItemRepository};

/// Shared application state
pub struct AppState {
    // Application services
    pub character_service: CharacterServiceImpl,
    pub wealth_service: WealthServiceImpl,
    pub dice_service: DiceService,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let characters = create_character_repository(config).await?;
        let items = Arc::new(InMemoryItemRepository::with_standard_catalog());

        // One RNG shared by every service so a configured seed reproduces a whole session
        let dice = Arc::new(match config.dice_seed {
            Some(seed) => {
                tracing::info!("Dice seeded with {}", seed);
                DiceRoller::seeded(seed)
            }
            None => DiceRoller::new(),
        });

        let character_service =
            CharacterServiceImpl::new(characters.clone(), items, dice.clone());
        let wealth_service = WealthServiceImpl::new(characters, dice.clone());
        let dice_service = DiceService::new(dice, config.max_dice_count);

        Ok(Self {
            character_service,
            wealth_service,
            dice_service,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{CharacterService, CreateCharacterRequest, WealthService};
    use crate::infrastructure::config::StorageBackend;

    fn config(seed: u64) -> AppConfig {
        AppConfig {
            server_port: 0,
            storage_backend: StorageBackend::Memory,
            sqlite_path: String::new(),
            dice_seed: Some(seed),
            max_dice_count: 10,
        }
    }

    async fn session(seed: u64) -> (Vec<i32>, i32) {
        let state = AppState::new(&config(seed)).await.unwrap();
        let character = state
            .character_service
            .create_character(CreateCharacterRequest {
                name: "Samwise".into(),
                race: "Halfling".into(),
                subrace: None,
                class: "Rogue".into(),
                ability_scores: None,
            })
            .await
            .unwrap();
        let wealth = state.wealth_service.initialize_currency(character.id).await.unwrap();
        let rolls = state.dice_service.roll_dice(20, 3).unwrap();
        (rolls, wealth.gold)
    }

    #[tokio::test]
    async fn test_seeded_state_is_reproducible() {
        assert_eq!(session(7).await, session(7).await);
    }

    #[tokio::test]
    async fn test_dice_limit_comes_from_config() {
        let state = AppState::new(&config(1)).await.unwrap();
        assert!(state.dice_service.roll_dice(6, 10).is_ok());
        assert!(state.dice_service.roll_dice(6, 11).is_err());
    }
}
