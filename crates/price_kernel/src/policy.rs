//! Payable rounding policy
//!
//! Maps a currency to the rounding rule that produces a payable amount.
//! Lookups are case-insensitive. The built-in table rounds loyalty currencies
//! (`miles`, `points`) down to whole units and everything else half up to cents.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::currency::Currency;
use crate::rounding::RoundingRule;

static DEFAULT_POLICY: Lazy<PayablePolicy> = Lazy::new(PayablePolicy::builtin);

/// Per-currency rounding rules with a fallback rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayablePolicy {
    fallback: RoundingRule,
    overrides: HashMap<String, RoundingRule>,
}

impl PayablePolicy {
    /// Creates a policy that applies `fallback` to every currency
    pub fn new(fallback: RoundingRule) -> Self {
        Self {
            fallback,
            overrides: HashMap::new(),
        }
    }

    /// The built-in policy
    pub fn builtin() -> Self {
        Self::new(RoundingRule::CENTS_HALF_UP)
            .with_currency("miles", RoundingRule::UNITS_FLOOR)
            .with_currency("points", RoundingRule::UNITS_FLOOR)
    }

    /// Returns the shared built-in policy used by `Amount::get_payable`
    pub fn global() -> &'static PayablePolicy {
        &DEFAULT_POLICY
    }

    /// Adds or replaces the rule for a currency code
    pub fn with_currency(mut self, code: impl AsRef<str>, rule: RoundingRule) -> Self {
        self.overrides.insert(code.as_ref().to_lowercase(), rule);
        self
    }

    /// Replaces the rule used when no override matches
    pub fn with_fallback(mut self, rule: RoundingRule) -> Self {
        self.fallback = rule;
        self
    }

    /// Returns the rule used when no override matches
    pub fn fallback(&self) -> RoundingRule {
        self.fallback
    }

    /// Returns the rule for the given currency
    pub fn rule_for(&self, currency: &Currency) -> RoundingRule {
        self.overrides
            .get(&currency.lookup_key())
            .copied()
            .unwrap_or(self.fallback)
    }
}

impl Default for PayablePolicy {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rounding::RoundingMode;

    #[test]
    fn test_builtin_table() {
        let policy = PayablePolicy::builtin();

        assert_eq!(policy.rule_for(&Currency::new("EUR")), RoundingRule::CENTS_HALF_UP);
        assert_eq!(policy.rule_for(&Currency::new("Miles")), RoundingRule::UNITS_FLOOR);
        assert_eq!(policy.rule_for(&Currency::new("POINTS")), RoundingRule::UNITS_FLOOR);
        assert_eq!(policy.rule_for(&Currency::default()), RoundingRule::CENTS_HALF_UP);
    }

    #[test]
    fn test_override() {
        let policy = PayablePolicy::builtin()
            .with_currency("JPY", RoundingRule::new(RoundingMode::HalfUp, 1));

        assert_eq!(policy.rule_for(&Currency::new("jpy")).precision, 1);
        assert_eq!(PayablePolicy::global(), &PayablePolicy::builtin());
    }
}
