//! Item entity - Catalog entries that can be equipped

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    ArmorStats, EquipmentKind, EquipmentStats, ItemId, RangeType, WeaponProperties,
};

/// An item from the catalog. Items without stats cannot be equipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub stats: Option<EquipmentStats>,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stats: None,
        }
    }

    pub fn with_stats(mut self, stats: EquipmentStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn kind(&self) -> Option<EquipmentKind> {
        self.stats.as_ref().map(EquipmentStats::kind)
    }

    pub fn is_weapon(&self) -> bool {
        self.kind() == Some(EquipmentKind::Weapon)
    }

    pub fn is_shield(&self) -> bool {
        self.kind() == Some(EquipmentKind::Shield)
    }

    pub fn is_armor(&self) -> bool {
        self.kind() == Some(EquipmentKind::Armor)
    }

    fn weapon_properties(&self) -> WeaponProperties {
        self.stats
            .as_ref()
            .and_then(EquipmentStats::weapon_stats)
            .map(|w| w.properties)
            .unwrap_or_default()
    }

    pub fn is_two_handed(&self) -> bool {
        self.weapon_properties().contains(WeaponProperties::TWO_HANDED)
    }

    pub fn is_finesse(&self) -> bool {
        self.weapon_properties().contains(WeaponProperties::FINESSE)
    }

    pub fn range(&self) -> Option<RangeType> {
        self.stats
            .as_ref()
            .and_then(EquipmentStats::weapon_stats)
            .map(|w| w.range)
    }

    pub fn armor_stats(&self) -> Option<&ArmorStats> {
        self.stats.as_ref().and_then(EquipmentStats::armor_stats)
    }

    pub fn armor_bonus(&self) -> i32 {
        self.stats.as_ref().map(|s| s.armor_bonus).unwrap_or(0)
    }

    /// Human-readable kind for error messages
    pub(crate) fn kind_label(&self) -> String {
        self.kind()
            .map(|k| k.to_string())
            .unwrap_or_else(|| "not equippable".to_string())
    }
}
