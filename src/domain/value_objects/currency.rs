//! Currency denominations and the fixed exchange ladder

use std::fmt;

use serde::{Deserialize, Serialize};

/// The five coin denominations, lowest value first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CurrencyType {
    Copper,
    Silver,
    Electrum,
    Gold,
    Platinum,
}

impl CurrencyType {
    pub const ALL: [CurrencyType; 5] = [
        CurrencyType::Copper,
        CurrencyType::Silver,
        CurrencyType::Electrum,
        CurrencyType::Gold,
        CurrencyType::Platinum,
    ];

    pub fn abbreviation(&self) -> &'static str {
        match self {
            CurrencyType::Copper => "cp",
            CurrencyType::Silver => "sp",
            CurrencyType::Electrum => "ep",
            CurrencyType::Gold => "gp",
            CurrencyType::Platinum => "pp",
        }
    }
}

impl fmt::Display for CurrencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// How many units of the lower denomination make one of the higher one.
/// Each entry is usable in both directions.
const EXCHANGE_RATES: [(CurrencyType, CurrencyType, i32); 5] = [
    (CurrencyType::Copper, CurrencyType::Silver, 10),
    (CurrencyType::Silver, CurrencyType::Electrum, 5),
    (CurrencyType::Electrum, CurrencyType::Gold, 2),
    (CurrencyType::Silver, CurrencyType::Gold, 10),
    (CurrencyType::Gold, CurrencyType::Platinum, 10),
];

/// Direction and rate of a permitted exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeRate {
    /// `from` is worth more: one `from` yields `rate` of `to`
    Down(i32),
    /// `from` is worth less: `rate` of `from` yields one `to`
    Up(i32),
}

impl ExchangeRate {
    /// Look up the rate for a pair; `None` when the pair is not on the ladder
    pub fn between(from: CurrencyType, to: CurrencyType) -> Option<Self> {
        EXCHANGE_RATES.iter().find_map(|&(lower, higher, rate)| {
            if from == higher && to == lower {
                Some(ExchangeRate::Down(rate))
            } else if from == lower && to == higher {
                Some(ExchangeRate::Up(rate))
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_are_symmetric() {
        assert_eq!(
            ExchangeRate::between(CurrencyType::Gold, CurrencyType::Silver),
            Some(ExchangeRate::Down(10))
        );
        assert_eq!(
            ExchangeRate::between(CurrencyType::Silver, CurrencyType::Gold),
            Some(ExchangeRate::Up(10))
        );
        assert_eq!(
            ExchangeRate::between(CurrencyType::Electrum, CurrencyType::Silver),
            Some(ExchangeRate::Down(5))
        );
    }

    #[test]
    fn test_pairs_off_the_ladder_have_no_rate() {
        assert_eq!(ExchangeRate::between(CurrencyType::Copper, CurrencyType::Gold), None);
        assert_eq!(ExchangeRate::between(CurrencyType::Platinum, CurrencyType::Copper), None);
        assert_eq!(ExchangeRate::between(CurrencyType::Gold, CurrencyType::Gold), None);
    }
}
