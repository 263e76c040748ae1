//! Price stores
//!
//! A price store keeps amounts under string keys, for example a SKU. Both
//! implementations persist the column encoding of [`JsonColumn`], so a price
//! written by one decodes identically in the other.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use price_kernel::Amount;

use crate::column::{ColumnValue, JsonColumn};
use crate::error::DatabaseError;

const DEFAULT_TABLE: &str = "prices";

/// Port for persisting named prices
#[async_trait]
pub trait PriceStore: Send + Sync {
    /// Stores `amount` under `key`, replacing any previous price
    async fn save(&self, key: &str, amount: &Amount) -> Result<(), DatabaseError>;

    /// Loads the price stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if nothing is stored under `key`
    async fn load(&self, key: &str) -> Result<Amount, DatabaseError>;

    /// Removes the price under `key`; returns whether one existed
    async fn delete(&self, key: &str) -> Result<bool, DatabaseError>;

    /// Loads the price under `key` if present
    async fn find(&self, key: &str) -> Result<Option<Amount>, DatabaseError> {
        match self.load(key).await {
            Ok(amount) => Ok(Some(amount)),
            Err(error) if error.is_not_found() => Ok(None),
            Err(error) => Err(error),
        }
    }
}

/// Process-local price store
#[derive(Debug, Default)]
pub struct InMemoryPriceStore {
    rows: RwLock<HashMap<String, ColumnValue>>,
}

impl InMemoryPriceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    /// Stores a raw column value, bypassing the encoder
    pub async fn insert_raw(&self, key: &str, value: ColumnValue) {
        self.rows.write().await.insert(key.to_string(), value);
    }
}

#[async_trait]
impl PriceStore for InMemoryPriceStore {
    async fn save(&self, key: &str, amount: &Amount) -> Result<(), DatabaseError> {
        let column = amount.to_column()?;
        self.rows.write().await.insert(key.to_string(), column);
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Amount, DatabaseError> {
        let column = self
            .rows
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| DatabaseError::not_found("Price", key))?;
        Amount::from_column(column)
    }

    async fn delete(&self, key: &str) -> Result<bool, DatabaseError> {
        Ok(self.rows.write().await.remove(key).is_some())
    }
}

/// PostgreSQL price store
///
/// Prices live in a two-column table: a text primary key and a `BYTEA` holding
/// the JSON wire shape.
#[derive(Debug, Clone)]
pub struct PgPriceStore {
    pool: PgPool,
    table: String,
}

impl PgPriceStore {
    pub fn new(pool: PgPool) -> Self {
        Self::with_table(pool, DEFAULT_TABLE)
    }

    /// Uses `table` instead of `prices`
    ///
    /// The name is interpolated into SQL and must be a trusted identifier.
    pub fn with_table(pool: PgPool, table: impl Into<String>) -> Self {
        Self {
            pool,
            table: table.into(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Creates the price table if it does not exist
    #[instrument(skip(self), fields(table = %self.table))]
    pub async fn ensure_schema(&self) -> Result<(), DatabaseError> {
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} (price_key TEXT PRIMARY KEY, price BYTEA NOT NULL)",
            self.table
        );
        sqlx::query(&sql)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))?;
        Ok(())
    }
}

#[async_trait]
impl PriceStore for PgPriceStore {
    #[instrument(skip(self, amount), fields(table = %self.table))]
    async fn save(&self, key: &str, amount: &Amount) -> Result<(), DatabaseError> {
        let bytes = match amount.to_column()? {
            ColumnValue::Bytes(bytes) => bytes,
            _ => return Err(DatabaseError::TypeMismatch("price encoder must produce bytes".to_string())),
        };

        let sql = format!(
            "INSERT INTO {} (price_key, price) VALUES ($1, $2) \
             ON CONFLICT (price_key) DO UPDATE SET price = EXCLUDED.price",
            self.table
        );
        sqlx::query(&sql)
            .bind(key)
            .bind(bytes)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))?;

        debug!(key, "price saved");
        Ok(())
    }

    #[instrument(skip(self), fields(table = %self.table))]
    async fn load(&self, key: &str) -> Result<Amount, DatabaseError> {
        let sql = format!("SELECT price FROM {} WHERE price_key = $1", self.table);
        let bytes = sqlx::query_scalar::<_, Vec<u8>>(&sql)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))?
            .ok_or_else(|| DatabaseError::not_found("Price", key))?;

        Amount::from_column(ColumnValue::Bytes(bytes))
    }

    #[instrument(skip(self), fields(table = %self.table))]
    async fn delete(&self, key: &str) -> Result<bool, DatabaseError> {
        let sql = format!("DELETE FROM {} WHERE price_key = $1", self.table);
        let result = sqlx::query(&sql)
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))?;

        Ok(result.rows_affected() > 0)
    }
}
