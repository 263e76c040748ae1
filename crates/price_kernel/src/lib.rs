//! Price Kernel - Exact money arithmetic for pricing
//!
//! This crate provides the arithmetic engine used by every pricing component:
//! - `Amount`: an immutable exact-decimal value tagged with a currency code
//! - The currency guard consulted before two amounts are combined
//! - Rounding to a payable amount under four rounding modes
//! - Largest-remainder splitting of a payable amount into payable parts
//! - The canonical `{"amount", "currency"}` wire shape
//!
//! # Example
//!
//! ```rust
//! use price_kernel::Amount;
//! use rust_decimal_macros::dec;
//!
//! let price = Amount::from_decimal(dec!(12.456), "EUR");
//! let parts = price.split_in_payables(6).unwrap();
//!
//! let total = Amount::sum_all(parts).unwrap();
//! assert_eq!(total, price.get_payable());
//! ```

pub mod amount;
pub mod codec;
pub mod currency;
pub mod error;
pub mod guard;
pub mod policy;
pub mod rounding;
pub mod settings;
pub mod split;

pub use amount::Amount;
pub use codec::FlatAmount;
pub use currency::Currency;
pub use error::{KernelError, MoneyError};
pub use guard::resolve_currency;
pub use policy::PayablePolicy;
pub use rounding::{RoundingMode, RoundingRule};
pub use settings::PricingConfig;
