//! Currency guard
//!
//! Every operation that combines two amounts asks the guard which currency the
//! result carries. Zero-valued operands never block the operation: a zero on
//! either side adopts the currency of the other side, so a `zero` accumulator
//! can be folded over amounts of any currency.

use crate::amount::Amount;
use crate::currency::Currency;
use crate::error::MoneyError;

/// Resolves the currency of `a op b`
///
/// # Errors
///
/// Returns `MoneyError::CurrencyMismatch` when both operands are non-zero and
/// carry different currencies. Callers must not perform the arithmetic then.
pub fn resolve_currency(a: &Amount, b: &Amount) -> Result<Currency, MoneyError> {
    if a.currency() == b.currency() {
        return Ok(b.currency().clone());
    }
    if a.is_zero() {
        return Ok(b.currency().clone());
    }
    if b.is_zero() {
        return Ok(a.currency().clone());
    }
    Err(MoneyError::CurrencyMismatch(
        a.currency().to_string(),
        b.currency().to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_same_currency_resolves() {
        let a = Amount::from_decimal(dec!(1), "EUR");
        let b = Amount::from_decimal(dec!(2), "EUR");
        assert_eq!(resolve_currency(&a, &b).unwrap(), Currency::new("EUR"));
    }

    #[test]
    fn test_zero_operand_adopts_other_currency() {
        let zero = Amount::zero("USD");
        let eur = Amount::from_decimal(dec!(2), "EUR");

        assert_eq!(resolve_currency(&zero, &eur).unwrap(), Currency::new("EUR"));
        assert_eq!(resolve_currency(&eur, &zero).unwrap(), Currency::new("EUR"));
    }

    #[test]
    fn test_blank_amount_is_neutral() {
        let blank = Amount::default();
        let miles = Amount::from_decimal(dec!(500), "miles");
        assert_eq!(resolve_currency(&blank, &miles).unwrap(), Currency::new("miles"));
    }

    #[test]
    fn test_mismatch_is_rejected() {
        let usd = Amount::from_decimal(dec!(1), "USD");
        let eur = Amount::from_decimal(dec!(1), "EUR");

        let result = resolve_currency(&usd, &eur);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
    }
}
