//! Column codec
//!
//! Pricing values are stored as the JSON bytes of their canonical wire shape.
//! Scanning accepts only byte columns; text or numeric columns are rejected
//! rather than guessed at.

use serde::de::DeserializeOwned;
use serde::Serialize;

use domain_charges::{Charge, Discount};
use price_kernel::Amount;

use crate::error::DatabaseError;

/// A driver-neutral column value
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Null,
    Bytes(Vec<u8>),
    Text(String),
    Integer(i64),
    Float(f64),
}

impl ColumnValue {
    fn type_name(&self) -> &'static str {
        match self {
            ColumnValue::Null => "null",
            ColumnValue::Bytes(_) => "bytes",
            ColumnValue::Text(_) => "text",
            ColumnValue::Integer(_) => "integer",
            ColumnValue::Float(_) => "float",
        }
    }
}

/// Values stored as JSON bytes in a single column
pub trait JsonColumn: Serialize + DeserializeOwned {
    /// Encodes the value for writing
    fn to_column(&self) -> Result<ColumnValue, DatabaseError> {
        Ok(ColumnValue::Bytes(serde_json::to_vec(self)?))
    }

    /// Decodes a scanned column
    ///
    /// # Errors
    ///
    /// - `DatabaseError::TypeMismatch` unless the column holds bytes
    /// - `DatabaseError::Serialization` for malformed JSON
    fn from_column(value: ColumnValue) -> Result<Self, DatabaseError> {
        match value {
            ColumnValue::Bytes(bytes) => Ok(serde_json::from_slice(&bytes)?),
            other => Err(DatabaseError::TypeMismatch(format!(
                "expected bytes, got {}",
                other.type_name()
            ))),
        }
    }
}

impl JsonColumn for Amount {}

impl JsonColumn for Discount {}

impl JsonColumn for Charge {}
