//! Ability scores - The six raw stats every character carries

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The six ability kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Ability::Strength => "STR",
            Ability::Dexterity => "DEX",
            Ability::Constitution => "CON",
            Ability::Intelligence => "INT",
            Ability::Wisdom => "WIS",
            Ability::Charisma => "CHA",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// Score used for an ability that has never been set
pub const DEFAULT_ABILITY_SCORE: i32 = 10;

/// Mapping of every ability to its raw score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityScores(HashMap<Ability, i32>);

impl AbilityScores {
    /// All six abilities at the same score
    pub fn uniform(score: i32) -> Self {
        Self(Ability::ALL.iter().map(|a| (*a, score)).collect())
    }

    pub fn get(&self, ability: Ability) -> i32 {
        self.0.get(&ability).copied().unwrap_or(DEFAULT_ABILITY_SCORE)
    }

    pub fn set(&mut self, ability: Ability, score: i32) {
        self.0.insert(ability, score);
    }

    pub fn with(mut self, ability: Ability, score: i32) -> Self {
        self.set(ability, score);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
        Ability::ALL.iter().map(move |a| (*a, self.get(*a)))
    }
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self::uniform(DEFAULT_ABILITY_SCORE)
    }
}

impl FromIterator<(Ability, i32)> for AbilityScores {
    fn from_iter<I: IntoIterator<Item = (Ability, i32)>>(iter: I) -> Self {
        let mut scores = Self::default();
        for (ability, score) in iter {
            scores.set(ability, score);
        }
        scores
    }
}

/// Derived modifier per ability
pub type AbilityModifiers = HashMap<Ability, i32>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_abilities_default_to_ten() {
        let scores: AbilityScores = [(Ability::Strength, 16)].into_iter().collect();
        assert_eq!(scores.get(Ability::Strength), 16);
        assert_eq!(scores.get(Ability::Wisdom), DEFAULT_ABILITY_SCORE);
        assert_eq!(scores.iter().count(), 6);
    }
}
