//! Stat Calculator - Pure derivations of combat statistics
//!
//! Nothing here holds state. Inputs are a character's raw attributes and
//! its equipment; outputs are the derived numbers shown on a sheet.

use crate::domain::entities::Equipment;
use crate::domain::value_objects::{Ability, AbilityModifiers, AbilityScores};

/// Hit points before the Constitution contribution
pub const BASE_HIT_POINTS: i32 = 10;

pub struct StatCalculator;

impl StatCalculator {
    /// `floor((score - 10) / 2)`
    pub fn ability_modifier(score: i32) -> i32 {
        (score - 10).div_euclid(2)
    }

    pub fn ability_modifiers(scores: &AbilityScores) -> AbilityModifiers {
        scores
            .iter()
            .map(|(ability, score)| (ability, Self::ability_modifier(score)))
            .collect()
    }

    pub fn max_hit_points(level: u32, constitution_modifier: i32) -> i32 {
        let level = i32::try_from(level).unwrap_or(i32::MAX);
        BASE_HIT_POINTS.saturating_add(constitution_modifier.saturating_mul(level))
    }

    pub fn proficiency_bonus(level: u32) -> i32 {
        match level {
            17.. => 6,
            13.. => 5,
            9.. => 4,
            5.. => 3,
            _ => 2,
        }
    }

    pub fn armor_class(equipment: &Equipment, modifiers: &AbilityModifiers) -> i32 {
        let dexterity = modifiers.get(&Ability::Dexterity).copied().unwrap_or(0);
        equipment.calculate_armor_class(dexterity)
    }

    pub fn weapon_damage_ability(equipment: &Equipment, modifiers: &AbilityModifiers) -> Ability {
        equipment.weapon_damage_ability(modifiers)
    }

    pub fn weapon_damage_modifier(equipment: &Equipment, modifiers: &AbilityModifiers) -> i32 {
        equipment.calculate_weapon_damage_modifier(modifiers)
    }
}
