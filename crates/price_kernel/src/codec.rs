//! Canonical wire shape
//!
//! Amounts are encoded the same way for text, JSON and binary envelopes:
//!
//! ```json
//! {"amount": "12.345", "currency": "EUR"}
//! ```
//!
//! The amount travels as a decimal string so no precision is lost. An empty
//! currency is omitted on encode and defaults to empty on decode. Field names
//! are also accepted capitalised (`Amount`, `Currency`).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::amount::Amount;
use crate::error::MoneyError;

/// The serialized form of an [`Amount`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountWire {
    #[serde(alias = "Amount", default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(alias = "Currency", default, skip_serializing_if = "String::is_empty")]
    pub currency: String,
}

impl From<Amount> for AmountWire {
    fn from(amount: Amount) -> Self {
        Self {
            amount: Some(amount.value().to_string()),
            currency: amount.currency().to_string(),
        }
    }
}

impl TryFrom<AmountWire> for Amount {
    type Error = MoneyError;

    fn try_from(wire: AmountWire) -> Result<Self, Self::Error> {
        let raw = wire
            .amount
            .ok_or_else(|| MoneyError::decode("missing field `amount`"))?;
        Ok(Amount::from_decimal(parse_decimal(&raw)?, wire.currency))
    }
}

/// Parses an exact decimal in plain or scientific notation
pub fn parse_decimal(raw: &str) -> Result<Decimal, MoneyError> {
    let raw = raw.trim();
    Decimal::from_str_exact(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|error| MoneyError::decode(format!("invalid amount {raw:?}: {error}")))
}

impl Amount {
    /// Encodes the amount as canonical JSON bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    /// Decodes an amount from canonical JSON bytes
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Decode` for malformed JSON and for a missing or
    /// malformed `amount` field.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MoneyError> {
        serde_json::from_slice(bytes).map_err(|error| MoneyError::decode(error.to_string()))
    }
}

/// Text encoding: the canonical JSON object
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for Amount {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map_err(|error| MoneyError::decode(error.to_string()))
    }
}

/// Flattened projection with a native float amount
///
/// Lossy. Only for mapping frameworks that cannot run custom serialization
/// hooks on write; never use it as the stored form of record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatAmount {
    pub amount: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub currency: String,
}

impl From<&Amount> for FlatAmount {
    fn from(amount: &Amount) -> Self {
        Self {
            amount: amount.to_f64(),
            currency: amount.currency().to_string(),
        }
    }
}

impl FlatAmount {
    /// Converts back into an exact amount via the shortest float decimal
    pub fn to_amount(&self) -> Result<Amount, MoneyError> {
        Amount::from_float(self.amount, self.currency.as_str())
    }
}
