//! Value objects - Immutable objects defined by their attributes

mod ability;
mod currency;
mod equipment_stats;
mod flags;
mod ids;

pub use ability::{Ability, AbilityModifiers, AbilityScores, DEFAULT_ABILITY_SCORE};
pub use currency::{CurrencyType, ExchangeRate};
pub use equipment_stats::{
    ArmorStats, ArmorTier, EquipmentDetails, EquipmentKind, EquipmentStats, RangeType,
    WeaponProperties, WeaponStats,
};
pub use flags::InitializationFlags;
pub use ids::{CharacterId, ItemId};
