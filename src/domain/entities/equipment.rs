//! Equipment - The three equipment slots of a character
//!
//! Slots are coupled: a two-handed weapon in the main hand never shares the
//! character's hands with an off-hand occupant, the off hand only takes a
//! one-handed weapon or a shield, and the armor slot only takes armor. Every
//! transition below leaves those invariants intact.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Item;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Ability, AbilityModifiers, ArmorTier, EquipmentKind, RangeType};

/// Unarmored base armor class
pub const UNARMORED_BASE_AC: i32 = 10;

/// Dexterity bonus cap for medium armor
pub const MEDIUM_ARMOR_DEX_CAP: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    MainHand,
    OffHand,
    Armor,
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquipmentSlot::MainHand => write!(f, "main hand"),
            EquipmentSlot::OffHand => write!(f, "off hand"),
            EquipmentSlot::Armor => write!(f, "armor"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    main_hand: Option<Item>,
    off_hand: Option<Item>,
    armor: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn main_hand(&self) -> Option<&Item> {
        self.main_hand.as_ref()
    }

    pub fn off_hand(&self) -> Option<&Item> {
        self.off_hand.as_ref()
    }

    pub fn armor(&self) -> Option<&Item> {
        self.armor.as_ref()
    }

    fn wields_two_handed(&self) -> bool {
        self.main_hand.as_ref().is_some_and(Item::is_two_handed)
    }

    /// Equip a weapon into the main hand, or the off hand when `off_hand` is set.
    ///
    /// A two-handed weapon always takes the main hand and empties the off
    /// hand. A one-handed weapon displaces a two-handed one entirely before
    /// taking its hand; otherwise the other hand is left alone.
    pub fn equip_weapon(&mut self, item: Item, off_hand: bool) -> Result<(), DomainError> {
        if !item.is_weapon() {
            return Err(mismatch(&item, EquipmentKind::Weapon));
        }
        if off_hand && item.is_two_handed() {
            return Err(DomainError::IllegalEquipmentState(format!(
                "'{}' is two-handed and cannot be wielded in the off hand",
                item.name
            )));
        }

        if item.is_two_handed() {
            self.main_hand = Some(item);
            self.off_hand = None;
            return Ok(());
        }

        if self.wields_two_handed() {
            self.main_hand = None;
            self.off_hand = None;
        }
        if off_hand {
            self.off_hand = Some(item);
        } else {
            self.main_hand = Some(item);
        }
        Ok(())
    }

    /// Put a shield in the off hand, dropping a two-handed main-hand weapon
    pub fn equip_shield(&mut self, item: Item) -> Result<(), DomainError> {
        if !item.is_shield() {
            return Err(mismatch(&item, EquipmentKind::Shield));
        }
        if self.wields_two_handed() {
            self.main_hand = None;
        }
        self.off_hand = Some(item);
        Ok(())
    }

    pub fn equip_armor(&mut self, item: Item) -> Result<(), DomainError> {
        if !item.is_armor() {
            return Err(mismatch(&item, EquipmentKind::Armor));
        }
        self.armor = Some(item);
        Ok(())
    }

    /// Empty a slot, returning what was in it
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Item> {
        match slot {
            EquipmentSlot::MainHand => self.main_hand.take(),
            EquipmentSlot::OffHand => self.off_hand.take(),
            EquipmentSlot::Armor => self.armor.take(),
        }
    }

    pub fn calculate_armor_class(&self, dex_modifier: i32) -> i32 {
        let armor = self.armor.as_ref().and_then(Item::armor_stats);
        let shield_bonus = self
            .off_hand
            .as_ref()
            .filter(|item| item.is_shield())
            .map(Item::armor_bonus)
            .unwrap_or(0);

        let body = match armor {
            Some(stats) => match stats.tier {
                ArmorTier::Light => stats.base_armor_class + dex_modifier,
                ArmorTier::Medium => stats.base_armor_class + dex_modifier.min(MEDIUM_ARMOR_DEX_CAP),
                ArmorTier::Heavy => stats.base_armor_class,
            },
            None => UNARMORED_BASE_AC + dex_modifier,
        };
        body + shield_bonus
    }

    /// Ability that drives damage for the main-hand weapon.
    ///
    /// Finesse takes the better of Strength and Dexterity (Strength on ties),
    /// ranged weapons use Dexterity, everything else (bare hands included)
    /// uses Strength.
    pub fn weapon_damage_ability(&self, modifiers: &AbilityModifiers) -> Ability {
        let Some(weapon) = self.main_hand.as_ref() else {
            return Ability::Strength;
        };

        if weapon.is_finesse() {
            let strength = modifiers.get(&Ability::Strength).copied().unwrap_or(0);
            let dexterity = modifiers.get(&Ability::Dexterity).copied().unwrap_or(0);
            if dexterity > strength {
                Ability::Dexterity
            } else {
                Ability::Strength
            }
        } else if weapon.range() == Some(RangeType::Ranged) {
            Ability::Dexterity
        } else {
            Ability::Strength
        }
    }

    pub fn calculate_weapon_damage_modifier(&self, modifiers: &AbilityModifiers) -> i32 {
        let ability = self.weapon_damage_ability(modifiers);
        modifiers.get(&ability).copied().unwrap_or(0)
    }
}

fn mismatch(item: &Item, expected: EquipmentKind) -> DomainError {
    DomainError::TypeMismatch {
        item: item.name.clone(),
        expected,
        actual: item.kind_label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{EquipmentStats, WeaponProperties};

    fn longsword() -> Item {
        Item::new(1, "Longsword").with_stats(EquipmentStats::weapon(
            WeaponProperties::VERSATILE,
            RangeType::Melee,
        ))
    }

    fn dagger() -> Item {
        Item::new(2, "Dagger").with_stats(EquipmentStats::weapon(
            WeaponProperties::FINESSE | WeaponProperties::LIGHT | WeaponProperties::THROWN,
            RangeType::Melee,
        ))
    }

    fn greataxe() -> Item {
        Item::new(3, "Greataxe").with_stats(EquipmentStats::weapon(
            WeaponProperties::HEAVY | WeaponProperties::TWO_HANDED,
            RangeType::Melee,
        ))
    }

    fn longbow() -> Item {
        Item::new(4, "Longbow").with_stats(EquipmentStats::weapon(
            WeaponProperties::AMMUNITION | WeaponProperties::HEAVY | WeaponProperties::TWO_HANDED,
            RangeType::Ranged,
        ))
    }

    fn shield() -> Item {
        Item::new(5, "Shield").with_stats(EquipmentStats::shield(2))
    }

    fn armor(tier: ArmorTier, base: i32) -> Item {
        Item::new(6, "Armor").with_stats(EquipmentStats::armor(tier, base))
    }

    fn modifiers(strength: i32, dexterity: i32) -> AbilityModifiers {
        [(Ability::Strength, strength), (Ability::Dexterity, dexterity)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_two_handed_weapon_clears_off_hand() {
        let mut equipment = Equipment::new();
        equipment.equip_weapon(longsword(), false).unwrap();
        equipment.equip_weapon(dagger(), true).unwrap();

        equipment.equip_weapon(greataxe(), false).unwrap();

        assert_eq!(equipment.main_hand().map(|i| i.name.as_str()), Some("Greataxe"));
        assert!(equipment.off_hand().is_none());
    }

    #[test]
    fn test_two_handed_weapon_clears_shield() {
        let mut equipment = Equipment::new();
        equipment.equip_shield(shield()).unwrap();

        equipment.equip_weapon(greataxe(), false).unwrap();

        assert!(equipment.off_hand().is_none());
        assert!(equipment.main_hand().unwrap().is_two_handed());
    }

    #[test]
    fn test_one_handed_weapon_replaces_two_handed_in_either_hand() {
        let mut equipment = Equipment::new();
        equipment.equip_weapon(greataxe(), false).unwrap();
        equipment.equip_weapon(dagger(), true).unwrap();

        assert!(equipment.main_hand().is_none());
        assert_eq!(equipment.off_hand().map(|i| i.name.as_str()), Some("Dagger"));

        let mut equipment = Equipment::new();
        equipment.equip_weapon(greataxe(), false).unwrap();
        equipment.equip_weapon(longsword(), false).unwrap();

        assert_eq!(equipment.main_hand().map(|i| i.name.as_str()), Some("Longsword"));
        assert!(equipment.off_hand().is_none());
    }

    #[test]
    fn test_one_handed_weapon_leaves_other_hand_alone() {
        let mut equipment = Equipment::new();
        equipment.equip_shield(shield()).unwrap();
        equipment.equip_weapon(longsword(), false).unwrap();

        assert!(equipment.off_hand().unwrap().is_shield());
        assert_eq!(equipment.main_hand().map(|i| i.name.as_str()), Some("Longsword"));
    }

    #[test]
    fn test_two_handed_weapon_rejected_for_off_hand() {
        let mut equipment = Equipment::new();
        equipment.equip_weapon(longsword(), false).unwrap();

        let result = equipment.equip_weapon(greataxe(), true);

        assert!(matches!(result, Err(DomainError::IllegalEquipmentState(_))));
        assert_eq!(equipment.main_hand().map(|i| i.name.as_str()), Some("Longsword"));
    }

    #[test]
    fn test_slot_kind_mismatches() {
        let mut equipment = Equipment::new();

        assert!(matches!(
            equipment.equip_weapon(shield(), true),
            Err(DomainError::TypeMismatch { expected: EquipmentKind::Weapon, .. })
        ));
        assert!(matches!(
            equipment.equip_shield(longsword()),
            Err(DomainError::TypeMismatch { expected: EquipmentKind::Shield, .. })
        ));
        assert!(matches!(
            equipment.equip_armor(shield()),
            Err(DomainError::TypeMismatch { expected: EquipmentKind::Armor, .. })
        ));
        assert!(matches!(
            equipment.equip_armor(Item::new(9, "Rope")),
            Err(DomainError::TypeMismatch { .. })
        ));
        assert_eq!(equipment, Equipment::new());
    }

    #[test]
    fn test_shield_drops_two_handed_weapon() {
        let mut equipment = Equipment::new();
        equipment.equip_weapon(greataxe(), false).unwrap();

        equipment.equip_shield(shield()).unwrap();

        assert!(equipment.main_hand().is_none());
        assert!(equipment.off_hand().unwrap().is_shield());
    }

    #[test]
    fn test_armor_class_by_tier() {
        let mut equipment = Equipment::new();
        assert_eq!(equipment.calculate_armor_class(2), 12);

        equipment.equip_armor(armor(ArmorTier::Light, 11)).unwrap();
        assert_eq!(equipment.calculate_armor_class(2), 13);

        equipment.equip_armor(armor(ArmorTier::Medium, 13)).unwrap();
        assert_eq!(equipment.calculate_armor_class(4), 15);

        equipment.equip_armor(armor(ArmorTier::Heavy, 18)).unwrap();
        assert_eq!(equipment.calculate_armor_class(2), 18);

        equipment.equip_shield(shield()).unwrap();
        assert_eq!(equipment.calculate_armor_class(2), 20);
    }

    #[test]
    fn test_shield_bonus_applies_unarmored() {
        let mut equipment = Equipment::new();
        equipment.equip_shield(shield()).unwrap();
        assert_eq!(equipment.calculate_armor_class(-1), 11);
    }

    #[test]
    fn test_weapon_damage_ability() {
        let mut equipment = Equipment::new();
        assert_eq!(equipment.weapon_damage_ability(&modifiers(0, 3)), Ability::Strength);

        equipment.equip_weapon(dagger(), false).unwrap();
        assert_eq!(equipment.weapon_damage_ability(&modifiers(1, 3)), Ability::Dexterity);
        assert_eq!(equipment.weapon_damage_ability(&modifiers(3, 1)), Ability::Strength);
        assert_eq!(equipment.weapon_damage_ability(&modifiers(2, 2)), Ability::Strength);

        equipment.equip_weapon(longbow(), false).unwrap();
        assert_eq!(equipment.weapon_damage_ability(&modifiers(4, -1)), Ability::Dexterity);
        assert_eq!(equipment.calculate_weapon_damage_modifier(&modifiers(4, -1)), -1);

        equipment.equip_weapon(longsword(), false).unwrap();
        assert_eq!(equipment.calculate_weapon_damage_modifier(&modifiers(4, 1)), 4);
    }

    #[test]
    fn test_unequip_returns_item() {
        let mut equipment = Equipment::new();
        equipment.equip_armor(armor(ArmorTier::Light, 11)).unwrap();

        let removed = equipment.unequip(EquipmentSlot::Armor);

        assert_eq!(removed.map(|i| i.name), Some("Armor".to_string()));
        assert!(equipment.armor().is_none());
        assert!(equipment.unequip(EquipmentSlot::MainHand).is_none());
    }
}
