//! Character Validator - Table-driven checks on new characters

use crate::domain::errors::DomainError;

pub const MIN_NAME_LENGTH: usize = 3;
pub const MAX_NAME_LENGTH: usize = 15;

/// Races and the subraces each one allows
const RACES: &[(&str, &[&str])] = &[
    ("Dragonborn", &[]),
    ("Dwarf", &["Hill", "Mountain"]),
    ("Elf", &["High", "Wood", "Dark"]),
    ("Gnome", &["Forest", "Rock"]),
    ("Half-Elf", &[]),
    ("Half-Orc", &[]),
    ("Halfling", &["Lightfoot", "Stout"]),
    ("Human", &[]),
    ("Tiefling", &[]),
];

const CLASSES: &[&str] = &[
    "Barbarian", "Bard", "Cleric", "Druid", "Fighter", "Monk", "Paladin", "Ranger", "Rogue",
    "Sorcerer", "Warlock", "Wizard",
];

const BLOCKED_NAMES: &[&str] = &[
    "admin", "administrator", "moderator", "gamemaster", "bastard", "damn", "crap", "idiot",
    "moron", "stupid", "loser", "nazi",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterValidator;

impl CharacterValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(
        &self,
        name: &str,
        race: &str,
        subrace: Option<&str>,
        class: &str,
    ) -> Result<(), DomainError> {
        self.validate_name(name)?;
        self.validate_race(race, subrace)?;
        self.validate_class(class)
    }

    pub fn validate_name(&self, name: &str) -> Result<(), DomainError> {
        if name.is_empty() {
            return Err(DomainError::InvalidCharacterName(
                "name cannot be empty".to_string(),
            ));
        }
        let length = name.chars().count();
        if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) {
            return Err(DomainError::InvalidCharacterName(format!(
                "name must be between {} and {} letters, got {}",
                MIN_NAME_LENGTH, MAX_NAME_LENGTH, length
            )));
        }
        // ASCII only, so every storage backend folds case the same way
        if !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidCharacterName(
                "name may only contain letters A-Z".to_string(),
            ));
        }
        if BLOCKED_NAMES.iter().any(|blocked| blocked.eq_ignore_ascii_case(name)) {
            return Err(DomainError::InappropriateName(name.to_string()));
        }
        Ok(())
    }

    pub fn validate_race(&self, race: &str, subrace: Option<&str>) -> Result<(), DomainError> {
        if race.is_empty() {
            return Err(DomainError::InvalidRace("race cannot be empty".to_string()));
        }
        let (_, subraces) = RACES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(race))
            .ok_or_else(|| DomainError::InvalidRace(format!("unknown race '{}'", race)))?;

        match subrace.filter(|s| !s.is_empty()) {
            None => Ok(()),
            Some(subrace) if subraces.is_empty() => Err(DomainError::InvalidRace(format!(
                "{} has no subraces, got '{}'",
                race, subrace
            ))),
            Some(subrace) if subraces.iter().any(|s| s.eq_ignore_ascii_case(subrace)) => Ok(()),
            Some(subrace) => Err(DomainError::InvalidRace(format!(
                "'{}' is not a subrace of {}",
                subrace, race
            ))),
        }
    }

    pub fn validate_class(&self, class: &str) -> Result<(), DomainError> {
        if class.is_empty() {
            return Err(DomainError::InvalidCharacterClass(
                "class cannot be empty".to_string(),
            ));
        }
        if CLASSES.iter().any(|known| known.eq_ignore_ascii_case(class)) {
            Ok(())
        } else {
            Err(DomainError::InvalidCharacterClass(format!(
                "unknown class '{}'",
                class
            )))
        }
    }
}
