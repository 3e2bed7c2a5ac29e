//! Parsing helpers for the numeric fields the subgraphs return.
//!
//! `BigDecimal` and `BigInt` fields arrive as JSON strings. A field that is
//! absent, `null` or not a number is read as `None` rather than failing the
//! whole entity, so a partially indexed snapshot still joins.
//!
//! Fields that are written back to the cache use [`Numeric`], which keeps the
//! subgraph's text and only parses it when a metric needs the value.

use crate::error::DomainError;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Parses a decimal string, accepting scientific notation.
///
/// # Errors
/// Returns [`DomainError::InvalidDecimal`] if the string is not a number.
pub fn parse_decimal(raw: &str) -> Result<Decimal, DomainError> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| DomainError::InvalidDecimal(raw.to_string()))
}

/// Converts a JSON value into a decimal if it holds one.
#[must_use]
pub fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(raw) => parse_decimal(raw).ok(),
        Value::Number(number) => number
            .as_i64()
            .map(Decimal::from)
            .or_else(|| number.as_u64().map(Decimal::from))
            .or_else(|| number.as_f64().and_then(Decimal::from_f64)),
        _ => None,
    }
}

/// Serde adapter for optional decimal fields.
///
/// Use together with `#[serde(default)]` so missing fields become `None`.
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(decimal_from_value))
}

/// A subgraph number kept exactly as received.
///
/// Serializes back to the original JSON value, so precision beyond what a
/// [`Decimal`] holds is not lost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Numeric(Value);

impl Numeric {
    /// The value as a decimal, or `None` if it is not a number or does not
    /// fit in 96 bits.
    #[must_use]
    pub fn decimal(&self) -> Option<Decimal> {
        decimal_from_value(&self.0)
    }

    /// The JSON value as received.
    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.0
    }
}

impl From<&str> for Numeric {
    fn from(raw: &str) -> Self {
        Self(Value::String(raw.to_string()))
    }
}

impl From<Decimal> for Numeric {
    fn from(value: Decimal) -> Self {
        Self(Value::String(value.to_string()))
    }
}

/// Decimal value of an optional subgraph number.
#[must_use]
pub fn decimal_of(value: Option<&Numeric>) -> Option<Decimal> {
    value.and_then(Numeric::decimal)
}

/// Parses a block number.
///
/// # Errors
/// Returns [`DomainError::InvalidBlockNumber`] if the value is not an unsigned integer.
pub fn parse_block_number(raw: &str) -> Result<u64, DomainError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| DomainError::InvalidBlockNumber(raw.to_string()))
}
