//! Domain services - Stateless rules that operate on domain objects

mod character_generator;
mod character_validator;
mod dice_roller;
mod stat_calculator;

pub use character_generator::{roll_ability_score, roll_ability_scores, roll_starting_wealth};
pub use character_validator::{CharacterValidator, MAX_NAME_LENGTH, MIN_NAME_LENGTH};
pub use dice_roller::DiceRoller;
pub use stat_calculator::{StatCalculator, BASE_HIT_POINTS};
