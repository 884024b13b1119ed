use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::value_objects::CurrencyType;

#[derive(Debug, Deserialize)]
pub struct ModifyCurrencyRequestDto {
    pub changes: HashMap<CurrencyType, i32>,
}

#[derive(Debug, Deserialize)]
pub struct ExchangeCurrencyRequestDto {
    pub from: CurrencyType,
    pub to: CurrencyType,
    pub amount: i32,
}
