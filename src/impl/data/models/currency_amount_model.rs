use std::str::FromStr;

use fractic_server_error::ServerError;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::InvalidCurrencyAmount;

/// Receipt amount. Accepts `42.5`, `"42.50"`, `"$1,042.50"`; accounting-style
/// negatives like `"(12.00)"` are read as refunds.
#[derive(Debug)]
pub(crate) struct CurrencyAmountModel(pub Decimal);
impl FromStr for CurrencyAmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(",", "");
        let raw = raw.trim();
        let (is_negative, numeric_part) = match raw.strip_prefix('(') {
            Some(inner) => match inner.strip_suffix(')') {
                Some(inner) => (true, inner),
                None => return Err(InvalidCurrencyAmount::new(s)),
            },
            None if raw.ends_with(')') => return Err(InvalidCurrencyAmount::new(s)),
            None => (false, raw),
        };
        let numeric_part = numeric_part.trim().trim_start_matches('$');
        let amount = Decimal::from_str(numeric_part)
            .or_else(|_| Decimal::from_scientific(numeric_part))
            .map_err(|e| InvalidCurrencyAmount::with_debug(s, &e))?;
        Ok(CurrencyAmountModel(if is_negative { -amount } else { amount }))
    }
}

#[derive(serde_derive::Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Text(String),
    Number(serde_json::Number),
}

impl<'de> Deserialize<'de> for CurrencyAmountModel {
    fn deserialize<D>(deserializer: D) -> Result<CurrencyAmountModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = match RawAmount::deserialize(deserializer)? {
            RawAmount::Text(s) => s,
            RawAmount::Number(n) => n.to_string(),
        };
        CurrencyAmountModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<CurrencyAmountModel> for Decimal {
    fn from(model: CurrencyAmountModel) -> Self {
        model.0
    }
}
