//! Database error types

use price_kernel::MoneyError;
use thiserror::Error;

/// Errors that can occur while persisting or loading prices
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// No row stored under the requested key
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// A column held a value of an unexpected type
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// Encoding or decoding a column value failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A stored amount could not be decoded
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// Connection pool exhausted
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Generic SQL error
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

impl DatabaseError {
    /// Creates a not found error for a kind of entity and its key
    ///
    /// ```rust
    /// use infra_db::DatabaseError;
    ///
    /// let error = DatabaseError::not_found("Price", "sku-1");
    /// assert!(error.to_string().contains("sku-1"));
    /// ```
    pub fn not_found(entity: &str, key: impl std::fmt::Display) -> Self {
        DatabaseError::NotFound(format!("{entity} with key '{key}' not found"))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DatabaseError::NotFound(_))
    }

    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted
        )
    }
}

impl From<serde_json::Error> for DatabaseError {
    fn from(error: serde_json::Error) -> Self {
        DatabaseError::Serialization(error.to_string())
    }
}

/// Maps SQLx errors onto the more specific variants
impl From<&sqlx::Error> for DatabaseError {
    fn from(error: &sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => DatabaseError::NotFound("Record not found".to_string()),
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::ColumnDecode { index, source } => {
                DatabaseError::TypeMismatch(format!("column {index}: {source}"))
            }
            sqlx::Error::Database(db_err) => DatabaseError::QueryFailed(db_err.message().to_string()),
            _ => DatabaseError::QueryFailed(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found() {
        let error = DatabaseError::not_found("Price", "sku-1");
        assert!(error.is_not_found());
        assert!(!error.is_connection_error());
        assert_eq!(error.to_string(), "Entity not found: Price with key 'sku-1' not found");
    }

    #[test]
    fn test_sqlx_mapping() {
        assert!(DatabaseError::from(&sqlx::Error::RowNotFound).is_not_found());
        assert!(DatabaseError::from(&sqlx::Error::PoolTimedOut).is_connection_error());
    }

    #[test]
    fn test_money_error_conversion() {
        let error: DatabaseError = MoneyError::Decode("bad".to_string()).into();
        assert!(matches!(error, DatabaseError::Money(MoneyError::Decode(_))));
    }
}
