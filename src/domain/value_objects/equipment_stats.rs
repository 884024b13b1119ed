//! Equipment stats - What an item does once it sits in a slot

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Which slot family an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentKind {
    Weapon,
    Armor,
    Shield,
}

impl fmt::Display for EquipmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Armor weight tier, decides how much Dexterity counts toward AC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArmorTier {
    Light,
    Medium,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorStats {
    pub base_armor_class: i32,
    pub tier: ArmorTier,
}

bitflags! {
    /// Weapon properties
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct WeaponProperties: u16 {
        const LIGHT = 1 << 0;
        const HEAVY = 1 << 1;
        const TWO_HANDED = 1 << 2;
        const VERSATILE = 1 << 3;
        const THROWN = 1 << 4;
        const FINESSE = 1 << 5;
        const LOADING = 1 << 6;
        const AMMUNITION = 1 << 7;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeType {
    Melee,
    Ranged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponStats {
    pub properties: WeaponProperties,
    pub range: RangeType,
}

/// Kind-specific part of [`EquipmentStats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum EquipmentDetails {
    Weapon(WeaponStats),
    Armor(ArmorStats),
    Shield,
}

/// Combat stats carried by an equippable item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentStats {
    pub armor_bonus: i32,
    pub damage_bonus: i32,
    pub details: EquipmentDetails,
}

impl EquipmentStats {
    pub fn weapon(properties: WeaponProperties, range: RangeType) -> Self {
        Self {
            armor_bonus: 0,
            damage_bonus: 0,
            details: EquipmentDetails::Weapon(WeaponStats { properties, range }),
        }
    }

    pub fn armor(tier: ArmorTier, base_armor_class: i32) -> Self {
        Self {
            armor_bonus: 0,
            damage_bonus: 0,
            details: EquipmentDetails::Armor(ArmorStats {
                base_armor_class,
                tier,
            }),
        }
    }

    pub fn shield(armor_bonus: i32) -> Self {
        Self {
            armor_bonus,
            damage_bonus: 0,
            details: EquipmentDetails::Shield,
        }
    }

    pub fn kind(&self) -> EquipmentKind {
        match self.details {
            EquipmentDetails::Weapon(_) => EquipmentKind::Weapon,
            EquipmentDetails::Armor(_) => EquipmentKind::Armor,
            EquipmentDetails::Shield => EquipmentKind::Shield,
        }
    }

    pub fn weapon_stats(&self) -> Option<&WeaponStats> {
        match &self.details {
            EquipmentDetails::Weapon(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn armor_stats(&self) -> Option<&ArmorStats> {
        match &self.details {
            EquipmentDetails::Armor(stats) => Some(stats),
            _ => None,
        }
    }
}
