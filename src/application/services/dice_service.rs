//! Dice Service - Public dice rolling restricted to standard polyhedral dice

use std::sync::Arc;

use tracing::{debug, instrument};

use super::ServiceError;
use crate::domain::errors::DomainError;
use crate::domain::services::DiceRoller;

/// Die sizes accepted at the service boundary
pub const ALLOWED_SIDES: [i32; 6] = [4, 6, 8, 10, 12, 20];

/// Default cap on dice per request
pub const DEFAULT_MAX_DICE_COUNT: i32 = 100;

pub struct DiceService {
    dice: Arc<DiceRoller>,
    max_count: i32,
}

impl DiceService {
    pub fn new(dice: Arc<DiceRoller>, max_count: i32) -> Self {
        Self { dice, max_count }
    }

    #[instrument(skip(self))]
    pub fn roll_dice(&self, sides: i32, count: i32) -> Result<Vec<i32>, ServiceError> {
        if !ALLOWED_SIDES.contains(&sides) {
            return Err(DomainError::InvalidDiceRoll(format!(
                "d{} is not a standard die, expected one of {:?}",
                sides, ALLOWED_SIDES
            ))
            .into());
        }
        if !(1..=self.max_count).contains(&count) {
            return Err(DomainError::InvalidDiceRoll(format!(
                "count must be between 1 and {}, got {}",
                self.max_count, count
            ))
            .into());
        }

        let rolls = self.dice.roll(sides, count)?;
        debug!(sides, count, total = rolls.iter().sum::<i32>(), "Rolled dice");
        Ok(rolls)
    }
}
