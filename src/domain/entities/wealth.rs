//! Wealth - Per-character coin ledger
//!
//! The ledger itself does not forbid negative balances through `set`;
//! `modify` and `exchange` are the guarded paths and never leave a counter
//! below zero. Whether the ledger may be touched at all is decided by the
//! owning character's initialization flag.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{CurrencyType, ExchangeRate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wealth {
    pub copper: i32,
    pub silver: i32,
    pub electrum: i32,
    pub gold: i32,
    pub platinum: i32,
}

impl Wealth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, currency: CurrencyType) -> i32 {
        match currency {
            CurrencyType::Copper => self.copper,
            CurrencyType::Silver => self.silver,
            CurrencyType::Electrum => self.electrum,
            CurrencyType::Gold => self.gold,
            CurrencyType::Platinum => self.platinum,
        }
    }

    pub fn set(&mut self, currency: CurrencyType, amount: i32) {
        let counter = match currency {
            CurrencyType::Copper => &mut self.copper,
            CurrencyType::Silver => &mut self.silver,
            CurrencyType::Electrum => &mut self.electrum,
            CurrencyType::Gold => &mut self.gold,
            CurrencyType::Platinum => &mut self.platinum,
        };
        *counter = amount;
    }

    pub fn with(mut self, currency: CurrencyType, amount: i32) -> Self {
        self.set(currency, amount);
        self
    }

    /// Apply a batch of signed deltas, all or nothing.
    ///
    /// Every resulting balance is computed first; if any would drop below
    /// zero or overflow the ledger is left untouched. Currencies are checked
    /// from copper up, so the reported failure does not depend on map order.
    pub fn modify(&mut self, changes: &HashMap<CurrencyType, i32>) -> Result<(), DomainError> {
        let mut updated = *self;
        for currency in CurrencyType::ALL {
            let Some(&delta) = changes.get(&currency) else {
                continue;
            };
            let current = updated.get(currency);
            let next = current
                .checked_add(delta)
                .ok_or(DomainError::CurrencyOverflow { currency })?;
            if next < 0 {
                return Err(DomainError::NotEnoughCurrency {
                    currency,
                    available: current,
                    required: delta.saturating_neg(),
                });
            }
            updated.set(currency, next);
        }
        *self = updated;
        Ok(())
    }

    /// Trade `amount` coins of `from` for the equivalent in `to`.
    ///
    /// Exchanging down the ladder always converts the full amount. Exchanging
    /// up converts whole coins only; the remainder stays in `from`.
    pub fn exchange(
        &mut self,
        from: CurrencyType,
        to: CurrencyType,
        amount: i32,
    ) -> Result<(), DomainError> {
        if from == to {
            return Err(DomainError::InvalidCurrencyExchange { from, to });
        }
        let rate = ExchangeRate::between(from, to)
            .ok_or(DomainError::InvalidCurrencyExchange { from, to })?;
        if amount <= 0 {
            return Err(DomainError::InvalidExchangeAmount { from, to, amount });
        }
        let available = self.get(from);
        if available < amount {
            return Err(DomainError::NotEnoughCurrency {
                currency: from,
                available,
                required: amount,
            });
        }

        let (spent, gained) = match rate {
            ExchangeRate::Down(rate) => (
                amount,
                amount
                    .checked_mul(rate)
                    .ok_or(DomainError::CurrencyOverflow { currency: to })?,
            ),
            ExchangeRate::Up(rate) => {
                let gained = amount / rate;
                if gained == 0 {
                    return Err(DomainError::InvalidExchangeAmount { from, to, amount });
                }
                (gained * rate, gained)
            }
        };

        let balance = self
            .get(to)
            .checked_add(gained)
            .ok_or(DomainError::CurrencyOverflow { currency: to })?;
        self.set(from, available - spent);
        self.set(to, balance);
        Ok(())
    }
}
