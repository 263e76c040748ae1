//! Largest-remainder splitting into payable parts
//!
//! Splitting 12.456 EUR (payable 12.46) into 6 parts gives 2.076 each, which is
//! not payable. Rounding every part to 2.08 would overshoot the total, so the
//! payable total is converted to cents, divided evenly, and the leftover cents
//! are handed out one at a time to the first parts:
//!
//! ```text
//! 2.08 + 2.08 + 2.08 + 2.08 + 2.07 + 2.07 = 12.46
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::amount::Amount;
use crate::error::MoneyError;
use crate::policy::PayablePolicy;

impl Amount {
    /// Splits the payable amount into `count` payable parts
    ///
    /// The parts sum up exactly to [`Amount::get_payable`]. Earlier parts are
    /// never smaller than later ones.
    ///
    /// # Errors
    ///
    /// - `MoneyError::InvalidSplitCount` if `count` is zero
    /// - `MoneyError::Overflow` if the amount is too large to round, in which
    ///   case [`Amount::get_payable`] returns it unrounded
    pub fn split_in_payables(&self, count: usize) -> Result<Vec<Amount>, MoneyError> {
        self.split_in_payables_with(PayablePolicy::global(), count)
    }

    /// Splits using the rounding rule `policy` assigns to this currency
    pub fn split_in_payables_with(
        &self,
        policy: &PayablePolicy,
        count: usize,
    ) -> Result<Vec<Amount>, MoneyError> {
        if count == 0 {
            return Err(MoneyError::InvalidSplitCount(count));
        }

        let rule = policy.rule_for(self.currency());
        let scale = Decimal::from(rule.precision);

        // an amount too large to round has no payable total to distribute
        let payable = rule.apply(self.value()).ok_or(MoneyError::Overflow)?;

        // the remainder distribution only works on non-negative totals
        let negative = payable.is_sign_negative() && !payable.is_zero();
        let magnitude = payable.abs();

        let total = magnitude
            .checked_mul(scale)
            .and_then(|units| units.round().to_i128())
            .ok_or(MoneyError::Overflow)?;

        let parts = i128::try_from(count).map_err(|_| MoneyError::Overflow)?;
        let base = total / parts;
        let remainder = total % parts;

        (0..parts)
            .map(|index| {
                let share = if index < remainder { base + 1 } else { base };
                let share = if negative { -share } else { share };
                let units = Decimal::try_from_i128_with_scale(share, 0)
                    .map_err(|_| MoneyError::Overflow)?;
                Ok(Amount::from_decimal(units / scale, self.currency()))
            })
            .collect()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn split_sum_equals_payable(
            units in -10_000_000_000i64..10_000_000_000i64,
            scale in 0u32..6u32,
            count in 1usize..50usize
        ) {
            let amount = Amount::from_decimal(Decimal::new(units, scale), "EUR");
            let parts = amount.split_in_payables(count).unwrap();

            prop_assert_eq!(parts.len(), count);
            prop_assert_eq!(Amount::sum_all(&parts).unwrap(), amount.get_payable());
            prop_assert!(parts.iter().all(Amount::is_payable));
        }

        #[test]
        fn split_parts_differ_by_at_most_one_unit(
            cents in 0i64..1_000_000_000i64,
            count in 1usize..50usize
        ) {
            let amount = Amount::from_scaled_int(cents, 100, "USD");
            let parts = amount.split_in_payables(count).unwrap();

            let max = parts.iter().map(Amount::value).max().unwrap();
            let min = parts.iter().map(Amount::value).min().unwrap();
            prop_assert!(max - min <= Decimal::new(1, 2));
        }
    }
}
