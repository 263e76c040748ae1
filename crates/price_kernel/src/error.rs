//! Kernel error types

use thiserror::Error;

/// Errors that can occur during amount operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Invalid split count {0}: count must be greater than zero")]
    InvalidSplitCount(usize),

    #[error("No amount given")]
    EmptyAggregate,

    #[error("Cannot decode amount: {0}")]
    Decode(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Overflow during calculation")]
    Overflow,
}

impl MoneyError {
    pub(crate) fn decode(message: impl Into<String>) -> Self {
        MoneyError::Decode(message.into())
    }
}

/// Top-level error for the kernel, covering configuration as well as arithmetic
#[derive(Debug, Error)]
pub enum KernelError {
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl KernelError {
    pub fn configuration(message: impl Into<String>) -> Self {
        KernelError::Configuration(message.into())
    }
}

impl From<config::ConfigError> for KernelError {
    fn from(error: config::ConfigError) -> Self {
        KernelError::Configuration(error.to_string())
    }
}
