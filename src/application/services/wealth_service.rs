//! Wealth Service - Coin ledger use cases
//!
//! Starting wealth is rolled once per character; afterwards coins only
//! move through guarded modify and exchange operations.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use super::{CharacterStore, ServiceError};
use crate::application::ports::outbound::CharacterRepositoryPort;
use crate::domain::entities::Wealth;
use crate::domain::errors::DomainError;
use crate::domain::services::{roll_starting_wealth, DiceRoller};
use crate::domain::value_objects::{CharacterId, CurrencyType};

#[async_trait]
pub trait WealthService: Send + Sync {
    async fn get_wealth(&self, id: CharacterId) -> Result<Wealth, ServiceError>;

    /// Roll starting wealth; fails if it was already rolled
    async fn initialize_currency(&self, id: CharacterId) -> Result<Wealth, ServiceError>;

    /// Apply signed deltas, rejecting the whole batch if any coin would go negative
    async fn modify_currency(
        &self,
        id: CharacterId,
        changes: HashMap<CurrencyType, i32>,
    ) -> Result<Wealth, ServiceError>;

    async fn exchange_currency(
        &self,
        id: CharacterId,
        from: CurrencyType,
        to: CurrencyType,
        amount: i32,
    ) -> Result<Wealth, ServiceError>;
}

pub struct WealthServiceImpl {
    store: CharacterStore,
    dice: Arc<DiceRoller>,
}

impl WealthServiceImpl {
    pub fn new(characters: Arc<dyn CharacterRepositoryPort>, dice: Arc<DiceRoller>) -> Self {
        Self {
            store: CharacterStore::new(characters),
            dice,
        }
    }
}

#[async_trait]
impl WealthService for WealthServiceImpl {
    #[instrument(skip(self))]
    async fn get_wealth(&self, id: CharacterId) -> Result<Wealth, ServiceError> {
        debug!(character_id = %id, "Fetching wealth");
        Ok(*self.store.load(id).await?.wealth())
    }

    #[instrument(skip(self))]
    async fn initialize_currency(&self, id: CharacterId) -> Result<Wealth, ServiceError> {
        let dice = Arc::clone(&self.dice);
        let wealth = self
            .store
            .mutate(id, move |character| {
                if character.is_currency_initialized() {
                    return Err(DomainError::CurrencyAlreadyInitialized);
                }
                let starting = roll_starting_wealth(&dice)?;
                character.initialize_currency(starting).copied()
            })
            .await?;
        info!(
            character_id = %id,
            gold = wealth.gold,
            silver = wealth.silver,
            copper = wealth.copper,
            "Initialized currency"
        );
        Ok(wealth)
    }

    #[instrument(skip(self))]
    async fn modify_currency(
        &self,
        id: CharacterId,
        changes: HashMap<CurrencyType, i32>,
    ) -> Result<Wealth, ServiceError> {
        let wealth = self
            .store
            .mutate(id, |character| character.modify_currency(&changes).copied())
            .await?;
        info!(character_id = %id, ?changes, "Modified currency");
        Ok(wealth)
    }

    #[instrument(skip(self))]
    async fn exchange_currency(
        &self,
        id: CharacterId,
        from: CurrencyType,
        to: CurrencyType,
        amount: i32,
    ) -> Result<Wealth, ServiceError> {
        let wealth = self
            .store
            .mutate(id, |character| character.exchange_currency(from, to, amount).copied())
            .await?;
        info!(character_id = %id, %from, %to, amount, "Exchanged currency");
        Ok(wealth)
    }
}
