//! Charges domain errors

use price_kernel::MoneyError;
use thiserror::Error;

/// Errors that can occur in the charges domain
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChargeError {
    /// Two charges of different types were combined
    #[error("Charge type mismatch: cannot add {right} to {left}")]
    TypeMismatch { left: String, right: String },

    /// The underlying amount arithmetic failed
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}
