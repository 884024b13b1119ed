//! In-memory item catalog

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::application::ports::outbound::{ItemRepositoryPort, RepoError};
use crate::domain::entities::Item;
use crate::domain::value_objects::{ArmorTier, EquipmentStats, ItemId, RangeType, WeaponProperties};

/// Immutable item catalog keyed by id
pub struct InMemoryItemRepository {
    items: BTreeMap<ItemId, Item>,
}

impl InMemoryItemRepository {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: items.into_iter().map(|item| (item.id, item)).collect(),
        }
    }

    /// Catalog of common weapons, armor and a shield
    pub fn with_standard_catalog() -> Self {
        Self::new(standard_catalog())
    }
}

fn weapon(id: i32, name: &str, properties: WeaponProperties, range: RangeType) -> Item {
    Item::new(id, name).with_stats(EquipmentStats::weapon(properties, range))
}

fn armor(id: i32, name: &str, tier: ArmorTier, base_armor_class: i32) -> Item {
    Item::new(id, name).with_stats(EquipmentStats::armor(tier, base_armor_class))
}

fn standard_catalog() -> Vec<Item> {
    use RangeType::{Melee, Ranged};
    use WeaponProperties as P;

    vec![
        weapon(1, "Dagger", P::FINESSE | P::LIGHT | P::THROWN, Melee),
        weapon(2, "Shortsword", P::FINESSE | P::LIGHT, Melee),
        weapon(3, "Longsword", P::VERSATILE, Melee),
        weapon(4, "Rapier", P::FINESSE, Melee),
        weapon(5, "Greataxe", P::HEAVY | P::TWO_HANDED, Melee),
        weapon(6, "Greatsword", P::HEAVY | P::TWO_HANDED, Melee),
        weapon(7, "Handaxe", P::LIGHT | P::THROWN, Melee),
        weapon(8, "Shortbow", P::AMMUNITION | P::TWO_HANDED, Ranged),
        weapon(9, "Longbow", P::AMMUNITION | P::HEAVY | P::TWO_HANDED, Ranged),
        weapon(10, "Light Crossbow", P::AMMUNITION | P::LOADING | P::TWO_HANDED, Ranged),
        armor(20, "Leather Armor", ArmorTier::Light, 11),
        armor(21, "Studded Leather", ArmorTier::Light, 12),
        armor(22, "Scale Mail", ArmorTier::Medium, 14),
        armor(23, "Half Plate", ArmorTier::Medium, 15),
        armor(24, "Chain Mail", ArmorTier::Heavy, 16),
        armor(25, "Plate Armor", ArmorTier::Heavy, 18),
        Item::new(30, "Shield").with_stats(EquipmentStats::shield(2)),
        Item::new(40, "Torch"),
    ]
}

#[async_trait]
impl ItemRepositoryPort for InMemoryItemRepository {
    async fn get_by_id(&self, id: ItemId) -> Result<Option<Item>, RepoError> {
        Ok(self.items.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Item>, RepoError> {
        Ok(self.items.values().cloned().collect())
    }
}
