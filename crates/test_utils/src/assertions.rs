//! Custom Test Assertions
//!
//! Assertions for pricing types with more useful failure messages than a
//! plain `assert_eq!`.

use price_kernel::Amount;
use rust_decimal::Decimal;

/// Asserts that two amounts have the same currency and differ by at most `tolerance`
pub fn assert_amount_approx_eq(actual: &Amount, expected: &Amount, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.value() - expected.value()).abs();
    assert!(
        diff <= tolerance,
        "Amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.value(),
        expected.value(),
        diff,
        tolerance
    );
}

/// Asserts that two amounts are likely equal
pub fn assert_amount_likely_eq(actual: &Amount, expected: &Amount) {
    assert!(
        actual.likely_equal(expected),
        "Expected {actual} to be likely equal to {expected}"
    );
}

/// Asserts that an amount needs no further rounding
pub fn assert_payable(amount: &Amount) {
    assert!(
        amount.is_payable(),
        "Expected a payable amount, got {} (payable {})",
        amount,
        amount.get_payable()
    );
}

/// Asserts that split parts sum to the payable of `original`, are payable
/// themselves, and never grow from first to last
pub fn assert_split_matches_payable(original: &Amount, parts: &[Amount]) {
    let payable = original.get_payable();

    let sum: Decimal = parts.iter().map(Amount::value).sum();
    assert_eq!(
        sum,
        payable.value(),
        "Split parts sum to {sum}, expected payable {}",
        payable.value()
    );

    for part in parts {
        assert_eq!(part.currency(), original.currency());
        assert_payable(part);
    }

    for pair in parts.windows(2) {
        assert!(
            pair[0].value().abs() >= pair[1].value().abs(),
            "Split parts are not ordered by size: {} before {}",
            pair[0].value(),
            pair[1].value()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_approx_eq_within_tolerance() {
        let a = Amount::from_decimal(dec!(10.001), "EUR");
        let b = Amount::from_decimal(dec!(10.000), "EUR");
        assert_amount_approx_eq(&a, &b, dec!(0.01));
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_approx_eq_currency_mismatch() {
        let a = Amount::from_decimal(dec!(10), "EUR");
        let b = Amount::from_decimal(dec!(10), "USD");
        assert_amount_approx_eq(&a, &b, dec!(0.01));
    }

    #[test]
    #[should_panic(expected = "Expected a payable amount")]
    fn test_assert_payable_fails_on_sub_cent() {
        assert_payable(&Amount::from_decimal(dec!(1.005), "EUR"));
    }

    #[test]
    fn test_split_assertion() {
        let amount = Amount::from_decimal(dec!(10), "EUR");
        let parts = amount.split_in_payables(3).unwrap();
        assert_split_matches_payable(&amount, &parts);
    }
}
