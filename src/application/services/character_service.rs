//! Character Service - Application service for character management
//!
//! This service provides use case implementations for creating, reading and
//! deleting characters, adjusting hit points and managing equipment.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use super::{CharacterStore, ServiceError};
use crate::application::dto::CharacterSheetDto;
use crate::application::ports::outbound::{CharacterRepositoryPort, ItemRepositoryPort, RepoError};
use crate::domain::entities::{Character, Equipment, EquipmentSlot, Item};
use crate::domain::services::{roll_ability_scores, CharacterValidator, DiceRoller};
use crate::domain::value_objects::{AbilityScores, CharacterId, ItemId};

/// Request to create a new character
#[derive(Debug, Clone)]
pub struct CreateCharacterRequest {
    pub name: String,
    pub race: String,
    pub subrace: Option<String>,
    pub class: String,
    /// Pre-rolled scores; when absent every ability is rolled 4d6 drop lowest
    pub ability_scores: Option<AbilityScores>,
}

/// Character service trait defining the application use cases
#[async_trait]
pub trait CharacterService: Send + Sync {
    /// Validate, roll ability scores and persist a new level 1 character
    async fn create_character(&self, request: CreateCharacterRequest) -> Result<Character, ServiceError>;

    async fn get_character(&self, id: CharacterId) -> Result<Character, ServiceError>;

    async fn list_characters(&self) -> Result<Vec<Character>, ServiceError>;

    async fn delete_character(&self, id: CharacterId) -> Result<(), ServiceError>;

    /// Derived stats for a character in its current state
    async fn character_sheet(&self, id: CharacterId) -> Result<CharacterSheetDto, ServiceError>;

    /// Apply damage or healing, returning the clamped hit points
    async fn modify_hit_points(&self, id: CharacterId, delta: i32) -> Result<i32, ServiceError>;

    async fn equip_weapon(
        &self,
        id: CharacterId,
        item_id: ItemId,
        off_hand: bool,
    ) -> Result<Equipment, ServiceError>;

    async fn equip_armor(&self, id: CharacterId, item_id: ItemId) -> Result<Equipment, ServiceError>;

    async fn equip_shield(&self, id: CharacterId, item_id: ItemId) -> Result<Equipment, ServiceError>;

    async fn unequip(&self, id: CharacterId, slot: EquipmentSlot) -> Result<Equipment, ServiceError>;

    /// Items that can be passed to the equip operations
    async fn list_items(&self) -> Result<Vec<Item>, ServiceError>;
}

/// Default implementation of CharacterService over the repository ports
pub struct CharacterServiceImpl {
    store: CharacterStore,
    items: Arc<dyn ItemRepositoryPort>,
    dice: Arc<DiceRoller>,
    validator: CharacterValidator,
}

impl CharacterServiceImpl {
    pub fn new(
        characters: Arc<dyn CharacterRepositoryPort>,
        items: Arc<dyn ItemRepositoryPort>,
        dice: Arc<DiceRoller>,
    ) -> Self {
        Self {
            store: CharacterStore::new(characters),
            items,
            dice,
            validator: CharacterValidator::new(),
        }
    }

    async fn load_item(&self, item_id: ItemId) -> Result<Item, ServiceError> {
        self.items
            .get_by_id(item_id)
            .await?
            .ok_or_else(|| ServiceError::item_not_found(item_id))
    }
}

#[async_trait]
impl CharacterService for CharacterServiceImpl {
    #[instrument(skip(self), fields(name = %request.name))]
    async fn create_character(&self, request: CreateCharacterRequest) -> Result<Character, ServiceError> {
        self.validator.validate(
            &request.name,
            &request.race,
            request.subrace.as_deref(),
            &request.class,
        )?;

        // Check-then-insert is not atomic; adapters with a unique name
        // constraint report the loser of a race as Duplicate.
        if self.store.repository().get_by_name(&request.name).await?.is_some() {
            return Err(ServiceError::NameTaken(request.name));
        }

        let ability_scores = match request.ability_scores {
            Some(scores) => scores,
            None => roll_ability_scores(&self.dice)?,
        };
        let character = Character::new(
            request.name,
            request.race,
            request.subrace,
            request.class,
            ability_scores,
        );

        self.store
            .repository()
            .add(&character)
            .await
            .map_err(|e| match e {
                RepoError::Duplicate(name) => ServiceError::NameTaken(name),
                other => other.into(),
            })?;

        info!(
            character_id = %character.id,
            race = %character.race,
            class = %character.class,
            hit_points = character.hit_points(),
            "Created character: {}",
            character.name
        );
        Ok(character)
    }

    #[instrument(skip(self))]
    async fn get_character(&self, id: CharacterId) -> Result<Character, ServiceError> {
        debug!(character_id = %id, "Fetching character");
        self.store.load(id).await
    }

    #[instrument(skip(self))]
    async fn list_characters(&self) -> Result<Vec<Character>, ServiceError> {
        debug!("Listing characters");
        Ok(self.store.repository().list().await?)
    }

    #[instrument(skip(self))]
    async fn delete_character(&self, id: CharacterId) -> Result<(), ServiceError> {
        if !self.store.repository().delete(id).await? {
            return Err(ServiceError::character_not_found(id));
        }
        info!(character_id = %id, "Deleted character");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn character_sheet(&self, id: CharacterId) -> Result<CharacterSheetDto, ServiceError> {
        let character = self.store.load(id).await?;
        Ok(CharacterSheetDto::from(&character))
    }

    #[instrument(skip(self))]
    async fn modify_hit_points(&self, id: CharacterId, delta: i32) -> Result<i32, ServiceError> {
        let hit_points = self
            .store
            .mutate(id, |character| Ok(character.modify_hit_points(delta)))
            .await?;
        info!(character_id = %id, delta, hit_points, "Modified hit points");
        Ok(hit_points)
    }

    #[instrument(skip(self))]
    async fn equip_weapon(
        &self,
        id: CharacterId,
        item_id: ItemId,
        off_hand: bool,
    ) -> Result<Equipment, ServiceError> {
        let item = self.load_item(item_id).await?;
        let name = item.name.clone();
        let equipment = self
            .store
            .mutate(id, |character| character.equip_weapon(item, off_hand).cloned())
            .await?;
        info!(character_id = %id, item = %name, off_hand, "Equipped weapon");
        Ok(equipment)
    }

    #[instrument(skip(self))]
    async fn equip_armor(&self, id: CharacterId, item_id: ItemId) -> Result<Equipment, ServiceError> {
        let item = self.load_item(item_id).await?;
        let name = item.name.clone();
        let equipment = self
            .store
            .mutate(id, |character| character.equip_armor(item).cloned())
            .await?;
        info!(character_id = %id, item = %name, "Equipped armor");
        Ok(equipment)
    }

    #[instrument(skip(self))]
    async fn equip_shield(&self, id: CharacterId, item_id: ItemId) -> Result<Equipment, ServiceError> {
        let item = self.load_item(item_id).await?;
        let name = item.name.clone();
        let equipment = self
            .store
            .mutate(id, |character| character.equip_shield(item).cloned())
            .await?;
        info!(character_id = %id, item = %name, "Equipped shield");
        Ok(equipment)
    }

    #[instrument(skip(self))]
    async fn unequip(&self, id: CharacterId, slot: EquipmentSlot) -> Result<Equipment, ServiceError> {
        let equipment = self
            .store
            .mutate(id, |character| {
                character.unequip(slot);
                Ok(character.equipment().clone())
            })
            .await?;
        info!(character_id = %id, slot = %slot, "Unequipped slot");
        Ok(equipment)
    }

    #[instrument(skip(self))]
    async fn list_items(&self) -> Result<Vec<Item>, ServiceError> {
        debug!("Listing item catalog");
        Ok(self.items.list().await?)
    }
}
