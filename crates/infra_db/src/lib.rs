//! Infrastructure Database Layer
//!
//! Persistence hooks for the pricing types. The kernel only knows how to
//! encode and decode its canonical wire shape; this crate maps that shape onto
//! database columns and provides an async store for named prices.
//!
//! # Column Codec
//!
//! [`JsonColumn`] writes a value as its JSON bytes and reads it back from a
//! byte column. Reading any other column type fails with
//! [`DatabaseError::TypeMismatch`].
//!
//! # Stores
//!
//! - [`PgPriceStore`]: PostgreSQL, one `BYTEA` column per price
//! - [`InMemoryPriceStore`]: process-local, for tests and tooling
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, PgPriceStore, PriceStore};
//! use price_kernel::Amount;
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/pricing")).await?;
//! let store = PgPriceStore::new(pool);
//! store.ensure_schema().await?;
//! store.save("sku-1", &Amount::from_scaled_int(1999, 100, "EUR")).await?;
//! ```

pub mod column;
pub mod error;
pub mod pool;
pub mod store;

pub use column::{ColumnValue, JsonColumn};
pub use error::DatabaseError;
pub use pool::{create_pool, DatabaseConfig, DatabasePool};
pub use store::{InMemoryPriceStore, PgPriceStore, PriceStore};
