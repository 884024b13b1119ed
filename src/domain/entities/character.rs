//! Character entity - The aggregate root for one player character
//!
//! Owns the raw attributes, the equipment slots and the coin ledger. Derived
//! values (max HP, AC, proficiency, modifiers) are never stored; they are
//! recomputed from the current state through [`StatCalculator`].

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Equipment, EquipmentSlot, Item, Wealth};
use crate::domain::errors::DomainError;
use crate::domain::services::StatCalculator;
use crate::domain::value_objects::{
    Ability, AbilityModifiers, AbilityScores, CharacterId, CurrencyType, InitializationFlags,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub race: String,
    pub subrace: Option<String>,
    pub class: String,
    level: u32,
    hit_points: i32,
    ability_scores: AbilityScores,
    equipment: Equipment,
    wealth: Wealth,
    flags: InitializationFlags,
    /// Optimistic concurrency token, bumped by the repository on every update
    pub version: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Character {
    /// A fresh level 1 character at full health with no gear and no coin
    pub fn new(
        name: impl Into<String>,
        race: impl Into<String>,
        subrace: Option<String>,
        class: impl Into<String>,
        ability_scores: AbilityScores,
    ) -> Self {
        let now = Utc::now();
        let mut character = Self {
            id: CharacterId::new(),
            name: name.into(),
            race: race.into(),
            subrace: subrace.filter(|s| !s.is_empty()),
            class: class.into(),
            level: 1,
            hit_points: 0,
            ability_scores,
            equipment: Equipment::new(),
            wealth: Wealth::new(),
            flags: InitializationFlags::empty(),
            version: 0,
            created_at: now,
            updated_at: now,
        };
        character.hit_points = character.max_hit_points();
        character
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn hit_points(&self) -> i32 {
        self.hit_points
    }

    pub fn ability_scores(&self) -> &AbilityScores {
        &self.ability_scores
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn wealth(&self) -> &Wealth {
        &self.wealth
    }

    pub fn is_currency_initialized(&self) -> bool {
        self.flags.contains(InitializationFlags::CURRENCY)
    }

    // ========================================================================
    // Derived stats
    // ========================================================================

    pub fn ability_modifiers(&self) -> AbilityModifiers {
        StatCalculator::ability_modifiers(&self.ability_scores)
    }

    pub fn ability_modifier(&self, ability: Ability) -> i32 {
        StatCalculator::ability_modifier(self.ability_scores.get(ability))
    }

    pub fn max_hit_points(&self) -> i32 {
        StatCalculator::max_hit_points(self.level, self.ability_modifier(Ability::Constitution))
    }

    pub fn proficiency_bonus(&self) -> i32 {
        StatCalculator::proficiency_bonus(self.level)
    }

    pub fn armor_class(&self) -> i32 {
        StatCalculator::armor_class(&self.equipment, &self.ability_modifiers())
    }

    pub fn weapon_damage_ability(&self) -> Ability {
        StatCalculator::weapon_damage_ability(&self.equipment, &self.ability_modifiers())
    }

    pub fn weapon_damage_modifier(&self) -> i32 {
        StatCalculator::weapon_damage_modifier(&self.equipment, &self.ability_modifiers())
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Apply damage (negative) or healing (positive), clamped to `[0, max]`
    pub fn modify_hit_points(&mut self, delta: i32) -> i32 {
        let max = self.max_hit_points().max(0);
        self.hit_points = self.hit_points.saturating_add(delta).clamp(0, max);
        self.touch();
        self.hit_points
    }

    pub fn equip_weapon(&mut self, item: Item, off_hand: bool) -> Result<&Equipment, DomainError> {
        self.equipment.equip_weapon(item, off_hand)?;
        self.touch();
        Ok(&self.equipment)
    }

    pub fn equip_shield(&mut self, item: Item) -> Result<&Equipment, DomainError> {
        self.equipment.equip_shield(item)?;
        self.touch();
        Ok(&self.equipment)
    }

    pub fn equip_armor(&mut self, item: Item) -> Result<&Equipment, DomainError> {
        self.equipment.equip_armor(item)?;
        self.touch();
        Ok(&self.equipment)
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Item> {
        let removed = self.equipment.unequip(slot);
        if removed.is_some() {
            self.touch();
        }
        removed
    }

    /// Seed the ledger with generated starting wealth. Allowed exactly once.
    pub fn initialize_currency(&mut self, starting: Wealth) -> Result<&Wealth, DomainError> {
        if self.is_currency_initialized() {
            return Err(DomainError::CurrencyAlreadyInitialized);
        }
        self.wealth = starting;
        self.flags.insert(InitializationFlags::CURRENCY);
        self.touch();
        Ok(&self.wealth)
    }

    pub fn modify_currency(
        &mut self,
        changes: &HashMap<CurrencyType, i32>,
    ) -> Result<&Wealth, DomainError> {
        self.require_currency()?;
        self.wealth.modify(changes)?;
        self.touch();
        Ok(&self.wealth)
    }

    pub fn exchange_currency(
        &mut self,
        from: CurrencyType,
        to: CurrencyType,
        amount: i32,
    ) -> Result<&Wealth, DomainError> {
        self.require_currency()?;
        self.wealth.exchange(from, to, amount)?;
        self.touch();
        Ok(&self.wealth)
    }

    fn require_currency(&self) -> Result<(), DomainError> {
        if self.is_currency_initialized() {
            Ok(())
        } else {
            Err(DomainError::CurrencyNotInitialized)
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
