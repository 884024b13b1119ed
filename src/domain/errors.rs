//! Domain errors - Rule violations raised by the character rules engine
//!
//! Every variant is a rejected operation on a single aggregate. The domain
//! never logs or retries; callers decide how to surface these.

use crate::domain::value_objects::{CurrencyType, EquipmentKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Equipment of the wrong kind for the requested slot or operation
    #[error("Expected {expected} but item '{item}' is {actual}")]
    TypeMismatch {
        item: String,
        expected: EquipmentKind,
        actual: String,
    },

    /// The transition would break a slot invariant
    #[error("Illegal equipment state: {0}")]
    IllegalEquipmentState(String),

    #[error("Currency has not been initialized for this character")]
    CurrencyNotInitialized,

    #[error("Currency has already been initialized for this character")]
    CurrencyAlreadyInitialized,

    #[error("Not enough {currency}: have {available}, need {required}")]
    NotEnoughCurrency {
        currency: CurrencyType,
        available: i32,
        required: i32,
    },

    /// The resulting balance does not fit in a coin counter
    #[error("{currency} balance would overflow")]
    CurrencyOverflow { currency: CurrencyType },

    #[error("Cannot exchange {from} to {to}")]
    InvalidCurrencyExchange { from: CurrencyType, to: CurrencyType },

    /// Non-positive amount, or too little to buy one coin of the target
    #[error("Cannot exchange {amount} {from} to {to}")]
    InvalidExchangeAmount {
        from: CurrencyType,
        to: CurrencyType,
        amount: i32,
    },

    #[error("Invalid dice roll: {0}")]
    InvalidDiceRoll(String),

    #[error("Invalid character name: {0}")]
    InvalidCharacterName(String),

    #[error("Name '{0}' is not allowed")]
    InappropriateName(String),

    #[error("Invalid race: {0}")]
    InvalidRace(String),

    #[error("Invalid character class: {0}")]
    InvalidCharacterClass(String),
}

impl DomainError {
    /// True for failures caused by malformed creation input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidCharacterName(_)
                | Self::InappropriateName(_)
                | Self::InvalidRace(_)
                | Self::InvalidCharacterClass(_)
        )
    }
}
