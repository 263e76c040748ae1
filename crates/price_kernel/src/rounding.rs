//! Rounding engine
//!
//! Rounds an exact decimal to a multiple of `1 / precision`, where `precision`
//! is the number of smallest payable units per currency unit (100 for cents,
//! 1 for integral currencies).
//!
//! The sign is tracked separately and the engine always reasons about the
//! unsigned magnitude, then reapplies the sign:
//!
//! | value  | Floor | Ceiling | HalfUp | HalfDown |
//! |--------|-------|---------|--------|----------|
//! |  2.5   |   2   |    3    |   3    |    2     |
//! | -2.5   |  -3   |   -2    |  -3    |   -2     |
//! | -1.1   |  -2   |   -1    |  -1    |   -1     |
//!
//! The remainder is computed in exact decimal arithmetic, so values sitting
//! exactly on a `.5` boundary are always classified as ties.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MoneyError;

/// Policy selector for payable rounding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Round toward negative infinity
    Floor,
    /// Round toward positive infinity
    #[serde(alias = "ceil")]
    Ceiling,
    /// Round half away from zero
    HalfUp,
    /// Round half toward zero
    HalfDown,
}

impl RoundingMode {
    /// Returns the canonical lower-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundingMode::Floor => "floor",
            RoundingMode::Ceiling => "ceiling",
            RoundingMode::HalfUp => "halfup",
            RoundingMode::HalfDown => "halfdown",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundingMode {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "floor" => Ok(RoundingMode::Floor),
            "ceil" | "ceiling" => Ok(RoundingMode::Ceiling),
            "halfup" => Ok(RoundingMode::HalfUp),
            "halfdown" => Ok(RoundingMode::HalfDown),
            _ => Err(MoneyError::InvalidAmount(format!("Unknown rounding mode: {s}"))),
        }
    }
}

/// A rounding mode together with the precision it rounds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundingRule {
    pub mode: RoundingMode,
    pub precision: u32,
}

impl RoundingRule {
    /// Cents, rounded half up
    pub const CENTS_HALF_UP: RoundingRule = RoundingRule::new(RoundingMode::HalfUp, 100);

    /// Whole units, always rounded down
    pub const UNITS_FLOOR: RoundingRule = RoundingRule::new(RoundingMode::Floor, 1);

    pub const fn new(mode: RoundingMode, precision: u32) -> Self {
        Self { mode, precision }
    }

    /// Rounds `value` with this rule, see [`round_to_precision`]
    pub fn apply(&self, value: Decimal) -> Option<Decimal> {
        round_to_precision(value, self.mode, self.precision)
    }
}

const HALF: Decimal = dec!(0.5);

/// Rounds `value` to a multiple of `1 / precision`
///
/// Returns `None` when the value cannot be rounded: a zero precision, or a
/// scaled magnitude that does not fit a signed 64-bit integer. Callers keep
/// the unrounded value in that case.
pub fn round_to_precision(value: Decimal, mode: RoundingMode, precision: u32) -> Option<Decimal> {
    if precision == 0 {
        tracing::warn!(%value, "rounding skipped: precision must be greater than zero");
        return None;
    }

    let negative = value.is_sign_negative() && !value.is_zero();
    let scale = Decimal::from(precision);

    let magnitude = match value.abs().checked_mul(scale) {
        Some(magnitude) if magnitude < Decimal::from(i64::MAX) => magnitude,
        _ => {
            tracing::warn!(%value, precision, "rounding skipped: scaled amount exceeds i64 range");
            return None;
        }
    };

    let integer = magnitude.trunc();
    let fraction = magnitude - integer;

    let increment = match mode {
        RoundingMode::Floor => negative && !fraction.is_zero(),
        RoundingMode::Ceiling => !negative && !fraction.is_zero(),
        RoundingMode::HalfUp => fraction >= HALF,
        RoundingMode::HalfDown => fraction > HALF,
    };

    let rounded = if increment { integer + Decimal::ONE } else { integer };
    let signed = if negative { -rounded } else { rounded };

    Some(signed / scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(value: Decimal, mode: RoundingMode, precision: u32) -> Decimal {
        round_to_precision(value, mode, precision).unwrap()
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("floor".parse::<RoundingMode>().unwrap(), RoundingMode::Floor);
        assert_eq!("ceil".parse::<RoundingMode>().unwrap(), RoundingMode::Ceiling);
        assert_eq!("HalfUp".parse::<RoundingMode>().unwrap(), RoundingMode::HalfUp);
        assert_eq!("halfdown".parse::<RoundingMode>().unwrap(), RoundingMode::HalfDown);
        assert!("bankers".parse::<RoundingMode>().is_err());
    }

    #[test]
    fn test_exact_ties() {
        assert_eq!(round(dec!(2.5), RoundingMode::HalfUp, 1), dec!(3));
        assert_eq!(round(dec!(-2.5), RoundingMode::HalfUp, 1), dec!(-3));
        assert_eq!(round(dec!(2.5), RoundingMode::HalfDown, 1), dec!(2));
        assert_eq!(round(dec!(-2.5), RoundingMode::HalfDown, 1), dec!(-2));
        assert_eq!(round(dec!(1.115), RoundingMode::HalfUp, 100), dec!(1.12));
        assert_eq!(round(dec!(-1.115), RoundingMode::HalfUp, 100), dec!(-1.12));
    }

    #[test]
    fn test_just_below_tie_is_not_rounded_up() {
        assert_eq!(round(dec!(2.4999), RoundingMode::HalfUp, 1), dec!(2));
        assert_eq!(round(dec!(-0.0001), RoundingMode::Floor, 1), dec!(-1));
    }

    #[test]
    fn test_zero_stays_zero() {
        for mode in [RoundingMode::Floor, RoundingMode::Ceiling, RoundingMode::HalfUp, RoundingMode::HalfDown] {
            assert_eq!(round(Decimal::ZERO, mode, 100), Decimal::ZERO);
        }
    }

    #[test]
    fn test_non_decimal_precision() {
        // quarters
        assert_eq!(round(dec!(1.13), RoundingMode::HalfUp, 4), dec!(1.25));
        assert_eq!(round(dec!(1.12), RoundingMode::HalfUp, 4), dec!(1));
    }

    #[test]
    fn test_unroundable_inputs() {
        assert!(round_to_precision(dec!(1.5), RoundingMode::HalfUp, 0).is_none());
        assert!(round_to_precision(Decimal::from(i64::MAX), RoundingMode::HalfUp, 100).is_none());
        assert!(round_to_precision(Decimal::MAX, RoundingMode::Floor, 100).is_none());
    }
}
