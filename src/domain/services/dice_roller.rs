//! Dice Roller - Uniform integer rolls from an owned RNG

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::errors::DomainError;

/// Rolls dice of any size. Which sizes are allowed is decided by callers.
pub struct DiceRoller {
    rng: Mutex<StdRng>,
}

impl DiceRoller {
    /// Roller seeded from OS entropy
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic roller, for tests and reproducible sessions
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Roll `count` dice with `sides` faces, each in `1..=sides`
    pub fn roll(&self, sides: i32, count: i32) -> Result<Vec<i32>, DomainError> {
        if count <= 0 {
            return Err(DomainError::InvalidDiceRoll(format!(
                "dice count must be positive, got {}",
                count
            )));
        }
        if sides < 1 {
            return Err(DomainError::InvalidDiceRoll(format!(
                "a die needs at least one side, got {}",
                sides
            )));
        }

        // A poisoned lock only means another roll panicked; the RNG is still usable.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok((0..count).map(|_| rng.gen_range(1..=sides)).collect())
    }

    pub fn roll_sum(&self, sides: i32, count: i32) -> Result<i32, DomainError> {
        Ok(self.roll(sides, count)?.iter().sum())
    }
}

impl Default for DiceRoller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolls_stay_in_range() {
        let roller = DiceRoller::seeded(7);
        for sides in [1, 4, 6, 8, 10, 12, 20, 100] {
            let rolls = roller.roll(sides, 200).unwrap();
            assert_eq!(rolls.len(), 200);
            assert!(rolls.iter().all(|r| (1..=sides).contains(r)));
        }
    }

    #[test]
    fn test_d6_average_is_close_to_expected() {
        let roller = DiceRoller::seeded(42);
        let rolls = roller.roll(6, 1000).unwrap();

        let average = rolls.iter().sum::<i32>() as f64 / rolls.len() as f64;

        assert!((average - 3.5).abs() < 0.35, "average was {}", average);
    }

    #[test]
    fn test_same_seed_same_rolls() {
        let a = DiceRoller::seeded(1234).roll(20, 10).unwrap();
        let b = DiceRoller::seeded(1234).roll(20, 10).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_parameters() {
        let roller = DiceRoller::seeded(0);
        assert!(matches!(roller.roll(6, 0), Err(DomainError::InvalidDiceRoll(_))));
        assert!(matches!(roller.roll(6, -3), Err(DomainError::InvalidDiceRoll(_))));
        assert!(matches!(roller.roll(0, 1), Err(DomainError::InvalidDiceRoll(_))));
    }
}
