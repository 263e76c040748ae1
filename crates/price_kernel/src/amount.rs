//! Amount: an exact decimal value tagged with a currency
//!
//! `Amount` uses `rust_decimal` for exact base-10 arithmetic. It is an immutable
//! value type: every operation returns a new `Amount` and nothing mutates the
//! receiver.
//!
//! Operations that combine two amounts go through the currency guard
//! (`crate::guard`), which lets zero-valued operands of any currency through.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::ops::{Div, Mul, Neg};

use crate::currency::Currency;
use crate::error::MoneyError;
use crate::guard::resolve_currency;
use crate::policy::PayablePolicy;
use crate::rounding::{round_to_precision, RoundingMode, RoundingRule};

/// Values closer than this are considered likely equal
const TOLERANCE: Decimal = dec!(0.000000001);

const HUNDRED: Decimal = dec!(100);

/// A monetary amount with associated currency
///
/// Equality is exact: both the numeric value and the currency code must match
/// (`1.0 EUR == 1.00 EUR`, `1 EUR != 1 eur`). Use [`Amount::likely_equal`] for a
/// tolerance-based comparison.
///
/// `Amount::default()` is zero with an empty currency. Being zero, it combines
/// with amounts of any currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "crate::codec::AmountWire", into = "crate::codec::AmountWire")]
pub struct Amount {
    value: Decimal,
    currency: Currency,
}

impl Amount {
    /// Creates an amount from an exact decimal
    pub fn from_decimal(value: Decimal, currency: impl Into<Currency>) -> Self {
        Self {
            value,
            currency: currency.into(),
        }
    }

    /// Creates an amount from a float
    ///
    /// The float is converted to the shortest decimal that represents it, so
    /// `0.1` becomes exactly `0.1` rather than its binary expansion.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` for NaN, infinities and values outside
    /// the decimal range.
    pub fn from_float(value: f64, currency: impl Into<Currency>) -> Result<Self, MoneyError> {
        let value = Decimal::from_f64(value)
            .ok_or_else(|| MoneyError::InvalidAmount(format!("{value} is not representable")))?;
        Ok(Self::from_decimal(value, currency))
    }

    /// Creates an amount from a count of smallest units
    ///
    /// `from_scaled_int(245, 100, "EUR")` is 2.45 EUR. A `scale` of zero yields
    /// a zero amount.
    pub fn from_scaled_int(amount: i64, scale: u32, currency: impl Into<Currency>) -> Self {
        if scale == 0 {
            return Self::zero(currency);
        }
        Self::from_decimal(Decimal::from(amount) / Decimal::from(scale), currency)
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: impl Into<Currency>) -> Self {
        Self::from_decimal(Decimal::ZERO, currency)
    }

    /// Returns the exact value
    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns the value as a float. Lossy, meant for display only.
    pub fn to_f64(&self) -> f64 {
        self.value.to_f64().unwrap_or_default()
    }

    /// Adds two amounts
    ///
    /// # Errors
    ///
    /// - `MoneyError::CurrencyMismatch` when both amounts are non-zero and their
    ///   currencies differ
    /// - `MoneyError::Overflow` when the sum leaves the decimal range
    pub fn add(&self, other: &Amount) -> Result<Amount, MoneyError> {
        let currency = resolve_currency(self, other)?;
        let value = self
            .value
            .checked_add(other.value)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self { value, currency })
    }

    /// Subtracts `other` from this amount, with the same rules as [`Amount::add`]
    pub fn subtract(&self, other: &Amount) -> Result<Amount, MoneyError> {
        let currency = resolve_currency(self, other)?;
        let value = self
            .value
            .checked_sub(other.value)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self { value, currency })
    }

    /// Adds `other`, returning this amount unchanged if the addition fails
    ///
    /// Lossy: a currency mismatch silently drops `other`. Only use where an
    /// approximate result is acceptable, e.g. display paths.
    pub fn force_add(&self, other: &Amount) -> Amount {
        match self.add(other) {
            Ok(sum) => sum,
            Err(error) => {
                tracing::debug!(%error, amount = %self, ignored = %other, "force_add dropped operand");
                self.clone()
            }
        }
    }

    /// Multiplies by an integer quantity
    ///
    /// # Panics
    ///
    /// Panics if the product leaves the decimal range.
    pub fn multiply(&self, qty: i64) -> Amount {
        Self::from_decimal(self.value * Decimal::from(qty), &self.currency)
    }

    /// Divides by an integer quantity
    ///
    /// Dividing by zero yields a zero amount of the same currency instead of an
    /// error. Use [`Amount::checked_divide`] to get the error.
    pub fn divide(&self, qty: i64) -> Amount {
        self.checked_divide(qty).unwrap_or_else(|_| {
            tracing::debug!(amount = %self, "division by zero yields zero");
            Self::zero(&self.currency)
        })
    }

    /// Divides by an integer quantity
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::DivisionByZero` if `qty` is zero.
    pub fn checked_divide(&self, qty: i64) -> Result<Amount, MoneyError> {
        if qty == 0 {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self::from_decimal(self.value / Decimal::from(qty), &self.currency))
    }

    /// Returns the amount multiplied by -1
    pub fn negate(&self) -> Amount {
        Self::from_decimal(-self.value, &self.currency)
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Amount {
        Self::from_decimal(self.value.abs(), &self.currency)
    }

    /// Returns the amount reduced by `percent` percent
    ///
    /// # Panics
    ///
    /// Panics if an intermediate result leaves the decimal range.
    pub fn discounted(&self, percent: Decimal) -> Amount {
        Self::from_decimal(self.value * (HUNDRED - percent) / HUNDRED, &self.currency)
    }

    /// Returns the amount plus tax, assuming this amount is net
    ///
    /// # Panics
    ///
    /// Panics if an intermediate result leaves the decimal range.
    pub fn taxed(&self, percent: Decimal) -> Amount {
        Self::from_decimal(self.value + self.tax_from_net(percent).value, &self.currency)
    }

    /// Returns the tax part, assuming this amount is net (100%)
    ///
    /// # Panics
    ///
    /// Panics if an intermediate result leaves the decimal range.
    pub fn tax_from_net(&self, percent: Decimal) -> Amount {
        Self::from_decimal(self.value * percent / HUNDRED, &self.currency)
    }

    /// Returns the tax part, assuming this amount is gross (100% + `percent`)
    ///
    /// A `percent` of -100 has no gross base and yields zero.
    ///
    /// # Panics
    ///
    /// Panics if an intermediate result leaves the decimal range.
    pub fn tax_from_gross(&self, percent: Decimal) -> Amount {
        let value = (self.value * percent)
            .checked_div(HUNDRED + percent)
            .unwrap_or(Decimal::ZERO);
        Self::from_decimal(value, &self.currency)
    }

    /// Exact comparison of value and currency
    pub fn equal(&self, other: &Amount) -> bool {
        self == other
    }

    /// Compares with a tolerance of `1e-9`
    ///
    /// Amounts in different currencies are never likely equal, not even when
    /// both are zero.
    pub fn likely_equal(&self, other: &Amount) -> bool {
        if self.currency != other.currency {
            return false;
        }
        self.value
            .checked_sub(other.value)
            .is_some_and(|diff| diff.abs() < TOLERANCE)
    }

    /// Returns true if the amount is zero within the `likely_equal` tolerance
    pub fn is_zero(&self) -> bool {
        self.likely_equal(&Self::zero(&self.currency))
    }

    pub fn is_negative(&self) -> bool {
        self.less_than_value(Decimal::ZERO)
    }

    pub fn is_positive(&self) -> bool {
        self.greater_than_value(Decimal::ZERO)
    }

    /// Returns false when the currencies differ
    pub fn less_than(&self, other: &Amount) -> bool {
        self.currency == other.currency && self.value < other.value
    }

    /// Returns false when the currencies differ
    pub fn greater_than(&self, other: &Amount) -> bool {
        self.currency == other.currency && self.value > other.value
    }

    /// Compares the value with a bare decimal, ignoring the currency
    pub fn less_than_value(&self, value: Decimal) -> bool {
        self.value < value
    }

    /// Compares the value with a bare decimal, ignoring the currency
    pub fn greater_than_value(&self, value: Decimal) -> bool {
        self.value > value
    }

    /// Returns true if the amount is already rounded to its payable value
    pub fn is_payable(&self) -> bool {
        self.get_payable() == *self
    }

    /// Returns the rounding rule the built-in policy applies to this currency
    pub fn payable_rule(&self) -> RoundingRule {
        PayablePolicy::global().rule_for(&self.currency)
    }

    /// Rounds to an amount that can actually be paid
    ///
    /// `miles` and `points` are floored to whole units, every other currency is
    /// rounded half up to cents: 1.23344 EUR becomes 1.23 EUR.
    pub fn get_payable(&self) -> Amount {
        self.get_payable_with(PayablePolicy::global())
    }

    /// Rounds to an amount that can actually be paid under `policy`
    pub fn get_payable_with(&self, policy: &PayablePolicy) -> Amount {
        let rule = policy.rule_for(&self.currency);
        self.get_payable_by_mode(rule.mode, rule.precision)
    }

    /// Rounds with an explicit mode and precision
    ///
    /// With precision 100:
    ///
    /// ```text
    ///  1.115 ->  1.12 (HalfUp) /  1.11 (Floor)
    /// -1.115 -> -1.12 (HalfUp) / -1.12 (Floor)
    /// ```
    ///
    /// Amounts whose scaled magnitude does not fit an `i64` are returned
    /// unrounded.
    pub fn get_payable_by_mode(&self, mode: RoundingMode, precision: u32) -> Amount {
        match round_to_precision(self.value, mode, precision) {
            Some(value) => Self::from_decimal(value, &self.currency),
            None => self.clone(),
        }
    }

    /// Sums all amounts, failing on the first currency mismatch
    ///
    /// # Errors
    ///
    /// - `MoneyError::EmptyAggregate` if no amount is given
    /// - any error returned by [`Amount::add`]
    pub fn sum_all<I>(amounts: I) -> Result<Amount, MoneyError>
    where
        I: IntoIterator,
        I::Item: Borrow<Amount>,
    {
        let mut amounts = amounts.into_iter();
        let first = amounts.next().ok_or(MoneyError::EmptyAggregate)?;
        amounts.try_fold(first.borrow().clone(), |total, amount| {
            total.add(amount.borrow())
        })
    }
}

impl PartialOrd for Amount {
    /// Amounts in different currencies are unordered
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            return None;
        }
        self.value.partial_cmp(&other.value)
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            value: -self.value,
            currency: self.currency,
        }
    }
}

impl Neg for &Amount {
    type Output = Amount;

    fn neg(self) -> Amount {
        self.negate()
    }
}

impl Mul<i64> for Amount {
    type Output = Self;

    fn mul(self, qty: i64) -> Self {
        self.multiply(qty)
    }
}

impl Div<i64> for Amount {
    type Output = Self;

    fn div(self, qty: i64) -> Self {
        self.divide(qty)
    }
}
