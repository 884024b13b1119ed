//! Domain entities - Core business objects with identity

mod character;
mod equipment;
mod item;
mod wealth;

pub use character::Character;
pub use equipment::{Equipment, EquipmentSlot, MEDIUM_ARMOR_DEX_CAP, UNARMORED_BASE_AC};
pub use item::Item;
pub use wealth::Wealth;
