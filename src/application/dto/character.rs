use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Character, Equipment, Wealth};
use crate::domain::value_objects::{Ability, ItemId};

#[derive(Debug, Deserialize)]
pub struct CreateCharacterRequestDto {
    pub name: String,
    pub race: String,
    #[serde(default)]
    pub subrace: Option<String>,
    pub class: String,
}

#[derive(Debug, Serialize)]
pub struct CharacterResponseDto {
    pub id: String,
    pub name: String,
    pub race: String,
    pub subrace: Option<String>,
    pub class: String,
    pub level: u32,
    pub hit_points: i32,
    pub ability_scores: BTreeMap<Ability, i32>,
    pub equipment: Equipment,
    pub wealth: Wealth,
    pub currency_initialized: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Character> for CharacterResponseDto {
    fn from(c: Character) -> Self {
        Self {
            id: c.id.to_string(),
            level: c.level(),
            hit_points: c.hit_points(),
            ability_scores: c.ability_scores().iter().collect(),
            equipment: c.equipment().clone(),
            wealth: *c.wealth(),
            currency_initialized: c.is_currency_initialized(),
            created_at: c.created_at.to_rfc3339(),
            updated_at: c.updated_at.to_rfc3339(),
            name: c.name,
            race: c.race,
            subrace: c.subrace,
            class: c.class,
        }
    }
}

/// Derived statistics for a character's current state
#[derive(Debug, Clone, Serialize)]
pub struct CharacterSheetDto {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub hit_points: i32,
    pub max_hit_points: i32,
    pub proficiency_bonus: i32,
    pub armor_class: i32,
    pub ability_modifiers: BTreeMap<Ability, i32>,
    pub weapon_damage_ability: Ability,
    pub weapon_damage_modifier: i32,
}

impl From<&Character> for CharacterSheetDto {
    fn from(c: &Character) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name.clone(),
            level: c.level(),
            hit_points: c.hit_points(),
            max_hit_points: c.max_hit_points(),
            proficiency_bonus: c.proficiency_bonus(),
            armor_class: c.armor_class(),
            ability_modifiers: c.ability_modifiers().into_iter().collect(),
            weapon_damage_ability: c.weapon_damage_ability(),
            weapon_damage_modifier: c.weapon_damage_modifier(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ModifyHitPointsRequestDto {
    pub delta: i32,
}

#[derive(Debug, Serialize)]
pub struct HitPointsResponseDto {
    pub hit_points: i32,
}

#[derive(Debug, Deserialize)]
pub struct EquipWeaponRequestDto {
    pub item_id: ItemId,
    #[serde(default)]
    pub off_hand: bool,
}

#[derive(Debug, Deserialize)]
pub struct EquipItemRequestDto {
    pub item_id: ItemId,
}
