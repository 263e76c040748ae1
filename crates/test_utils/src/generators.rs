//! Property-Based Test Generators
//!
//! Proptest strategies for amounts and charges.

use domain_charges::{Charge, CHARGE_TYPE_GIFT_CARD, CHARGE_TYPE_MAIN};
use price_kernel::{Amount, RoundingMode};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for monetary currency codes
pub fn currency_code_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("EUR"), Just("USD"), Just("GBP"), Just("CHF")]
}

/// Strategy for rounding modes
pub fn rounding_mode_strategy() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![
        Just(RoundingMode::Floor),
        Just(RoundingMode::Ceiling),
        Just(RoundingMode::HalfUp),
        Just(RoundingMode::HalfDown),
    ]
}

/// Strategy for cent counts, including negatives
pub fn cents_strategy() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..1_000_000_000i64
}

/// Strategy for amounts with up to six decimal places
pub fn amount_strategy() -> impl Strategy<Value = Amount> {
    (-1_000_000_000_000i64..1_000_000_000_000i64, 0u32..=6, currency_code_strategy())
        .prop_map(|(mantissa, scale, code)| Amount::from_decimal(Decimal::new(mantissa, scale), code))
}

/// Strategy for EUR amounts with up to six decimal places
pub fn eur_amount_strategy() -> impl Strategy<Value = Amount> {
    (-1_000_000_000_000i64..1_000_000_000_000i64, 0u32..=6)
        .prop_map(|(mantissa, scale)| Amount::from_decimal(Decimal::new(mantissa, scale), "EUR"))
}

/// Strategy for split counts
pub fn split_count_strategy() -> impl Strategy<Value = usize> {
    1usize..50
}

/// Strategy for EUR charges of the main or gift card type
pub fn charge_strategy() -> impl Strategy<Value = Charge> {
    (
        prop_oneof![Just(CHARGE_TYPE_MAIN), Just(CHARGE_TYPE_GIFT_CARD)],
        0i64..1_000_000,
        prop::option::of("[A-Z0-9]{4,8}"),
    )
        .prop_map(|(charge_type, cents, reference)| {
            let price = Amount::from_scaled_int(cents, 100, "EUR");
            Charge::new(charge_type, price.clone())
                .with_value(price)
                .with_reference(reference.unwrap_or_default())
        })
}
