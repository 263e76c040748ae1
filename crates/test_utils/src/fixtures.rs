//! Pre-built Test Fixtures
//!
//! Consistent, predictable amounts and charges for unit tests.

use domain_charges::{Charge, Charges, CHARGE_TYPE_GIFT_CARD, CHARGE_TYPE_MAIN};
use price_kernel::Amount;
use rust_decimal_macros::dec;

/// Fixture for amounts
pub struct AmountFixtures;

impl AmountFixtures {
    /// 100.00 EUR
    pub fn eur_100() -> Amount {
        Amount::from_decimal(dec!(100.00), "EUR")
    }

    /// 12.456 EUR, payable as 12.46 and not evenly divisible by 6
    pub fn eur_uneven() -> Amount {
        Amount::from_decimal(dec!(12.456), "EUR")
    }

    /// Zero EUR
    pub fn eur_zero() -> Amount {
        Amount::zero("EUR")
    }

    /// 100.00 USD, for currency mismatch tests
    pub fn usd_100() -> Amount {
        Amount::from_decimal(dec!(100.00), "USD")
    }

    /// A loyalty balance that floors to whole miles
    pub fn miles_1500() -> Amount {
        Amount::from_decimal(dec!(1500.7), "miles")
    }

    /// A refund
    pub fn eur_refund() -> Amount {
        Amount::from_decimal(dec!(-50.00), "EUR")
    }
}

/// Fixture for charges
pub struct ChargeFixtures;

impl ChargeFixtures {
    /// Main charge of 19.99 EUR valued at the same amount
    pub fn main_eur() -> Charge {
        let price = Amount::from_scaled_int(1999, 100, "EUR");
        Charge::new(CHARGE_TYPE_MAIN, price.clone()).with_value(price)
    }

    /// Gift card charge of 5.00 EUR
    pub fn gift_card(reference: &str) -> Charge {
        let price = Amount::from_scaled_int(500, 100, "EUR");
        Charge::new(CHARGE_TYPE_GIFT_CARD, price.clone())
            .with_value(price)
            .with_reference(reference)
    }

    /// Main charge paid in miles, valued in EUR
    pub fn main_miles() -> Charge {
        Charge::new(CHARGE_TYPE_MAIN, Amount::from_decimal(dec!(2000), "miles"))
            .with_value(Amount::from_decimal(dec!(20.00), "EUR"))
    }

    /// A cart paid with the main charge and two gift cards
    pub fn cart() -> Charges {
        Charges::new()
            .add_charge(Self::main_eur())
            .and_then(|charges| charges.add_charge(Self::gift_card("GC-1")))
            .and_then(|charges| charges.add_charge(Self::gift_card("GC-2")))
            .expect("cart fixture charges must merge")
    }
}
