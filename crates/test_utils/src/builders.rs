//! Test Data Builders
//!
//! Builders with sensible defaults so tests only spell out what matters.

use domain_charges::{Charge, ChargeError, Charges, CHARGE_TYPE_MAIN};
use price_kernel::Amount;
use rust_decimal::Decimal;

/// Builder for charges
pub struct ChargeBuilder {
    charge_type: String,
    price: Amount,
    value: Amount,
    reference: String,
}

impl Default for ChargeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChargeBuilder {
    /// A zero main charge in EUR
    pub fn new() -> Self {
        Self {
            charge_type: CHARGE_TYPE_MAIN.to_string(),
            price: Amount::zero("EUR"),
            value: Amount::zero("EUR"),
            reference: String::new(),
        }
    }

    pub fn with_type(mut self, charge_type: impl Into<String>) -> Self {
        self.charge_type = charge_type.into();
        self
    }

    pub fn with_price(mut self, price: Amount) -> Self {
        self.price = price;
        self
    }

    /// Sets the price from a decimal in the current price currency
    pub fn with_price_value(mut self, value: Decimal) -> Self {
        self.price = Amount::from_decimal(value, self.price.currency());
        self
    }

    pub fn with_value(mut self, value: Amount) -> Self {
        self.value = value;
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    pub fn build(self) -> Charge {
        Charge::new(self.charge_type, self.price)
            .with_value(self.value)
            .with_reference(self.reference)
    }
}

/// Builder for charge ledgers
#[derive(Default)]
pub struct ChargesBuilder {
    charges: Vec<Charge>,
}

impl ChargesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_charge(mut self, charge: Charge) -> Self {
        self.charges.push(charge);
        self
    }

    /// Adds every charge in order, merging equal qualifiers
    pub fn build(self) -> Result<Charges, ChargeError> {
        self.charges
            .into_iter()
            .try_fold(Charges::new(), Charges::add_charge)
    }
}
