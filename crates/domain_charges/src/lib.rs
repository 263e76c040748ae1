//! Charges Domain - Grouping prices by charge type
//!
//! A product or cart line can be paid with several charges at once, for
//! example the main price and a gift card portion. Each charge carries the
//! price actually paid and its value in a base currency.
//!
//! # Charge Ledger
//!
//! `Charges` maps a (type, reference) qualifier to a charge:
//! - Adding a charge with an existing qualifier merges both and rounds the sum
//!   to a payable amount
//! - Lookups by type sum every reference of that type
//! - Every mutator consumes the ledger and returns the new one
//!
//! # Example
//!
//! ```rust
//! use domain_charges::{Charge, Charges, CHARGE_TYPE_MAIN, CHARGE_TYPE_GIFT_CARD};
//! use price_kernel::Amount;
//! use rust_decimal::Decimal;
//!
//! let charges = Charges::new()
//!     .add_charge(Charge::new(CHARGE_TYPE_MAIN, Amount::from_scaled_int(1999, 100, "EUR")))
//!     .unwrap()
//!     .add_charge(
//!         Charge::new(CHARGE_TYPE_GIFT_CARD, Amount::from_scaled_int(500, 100, "EUR"))
//!             .with_reference("GC-1234"),
//!     )
//!     .unwrap();
//!
//! let main = charges.get_by_type_forced(CHARGE_TYPE_MAIN);
//! assert_eq!(main.price.value(), Decimal::new(1999, 2));
//! ```

pub mod charge;
pub mod discount;
pub mod error;
pub mod ledger;

pub use charge::{Charge, ChargeQualifier, CHARGE_TYPE_GIFT_CARD, CHARGE_TYPE_MAIN};
pub use discount::Discount;
pub use error::ChargeError;
pub use ledger::Charges;
