//! Test Utilities Crate
//!
//! Shared test infrastructure for the pricing crates.
//!
//! # Modules
//!
//! - `fixtures`: Ready-made amounts and charges
//! - `builders`: Builders for charges and ledgers
//! - `database`: Opt-in PostgreSQL settings for store tests
//! - `assertions`: Assertions with readable failure messages
//! - `generators`: Proptest strategies
//! - `logging`: Tracing subscriber for test output

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;
pub mod logging;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
pub use logging::init_tracing;
