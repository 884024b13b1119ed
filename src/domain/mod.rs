//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Character aggregate, Equipment slots, Wealth ledger, Item
//! - Value Objects: Abilities, currencies, equipment stats, identifiers
//! - Domain Services: Stat calculation, dice, generation and validation
//! - Errors: The rule violations every operation can report

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
