//! Randomized generation of starting ability scores and starting wealth

use super::DiceRoller;
use crate::domain::entities::Wealth;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Ability, AbilityScores, CurrencyType};

/// Roll 4d6 and keep the highest three
pub fn roll_ability_score(roller: &DiceRoller) -> Result<i32, DomainError> {
    Ok(sum_dropping_lowest(roller.roll(6, 4)?))
}

fn sum_dropping_lowest(mut rolls: Vec<i32>) -> i32 {
    rolls.sort_unstable();
    rolls.iter().skip(1).sum()
}

pub fn roll_ability_scores(roller: &DiceRoller) -> Result<AbilityScores, DomainError> {
    Ability::ALL
        .iter()
        .map(|ability| Ok((*ability, roll_ability_score(roller)?)))
        .collect::<Result<Vec<_>, DomainError>>()
        .map(|scores| scores.into_iter().collect())
}

/// Starting purse: 1d20 gold, 3d10 silver and 5d10 copper
pub fn roll_starting_wealth(roller: &DiceRoller) -> Result<Wealth, DomainError> {
    Ok(Wealth::new()
        .with(CurrencyType::Gold, roller.roll_sum(20, 1)?)
        .with(CurrencyType::Silver, roller.roll_sum(10, 3)?)
        .with(CurrencyType::Copper, roller.roll_sum(10, 5)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_scores_in_range() {
        let roller = DiceRoller::seeded(99);
        for _ in 0..50 {
            let scores = roll_ability_scores(&roller).unwrap();
            assert!(scores.iter().all(|(_, s)| (3..=18).contains(&s)));
        }
    }

    #[test]
    fn test_lowest_die_is_dropped() {
        assert_eq!(sum_dropping_lowest(vec![1, 6, 3, 5]), 14);
        assert_eq!(sum_dropping_lowest(vec![6, 6, 6, 6]), 18);
        assert_eq!(sum_dropping_lowest(vec![4, 2, 2, 3]), 9);
    }

    #[test]
    fn test_ability_score_keeps_highest_three_of_four() {
        for seed in 0..20 {
            let rolls = DiceRoller::seeded(seed).roll(6, 4).unwrap();
            let expected = rolls.iter().sum::<i32>() - rolls.iter().min().unwrap();

            assert_eq!(roll_ability_score(&DiceRoller::seeded(seed)).unwrap(), expected);
        }
    }

    #[test]
    fn test_starting_wealth_in_range() {
        let roller = DiceRoller::seeded(5);
        for _ in 0..50 {
            let wealth = roll_starting_wealth(&roller).unwrap();
            assert!((1..=20).contains(&wealth.gold));
            assert!((3..=30).contains(&wealth.silver));
            assert!((5..=50).contains(&wealth.copper));
            assert_eq!(wealth.electrum, 0);
            assert_eq!(wealth.platinum, 0);
        }
    }
}
