//! Pricing configuration
//!
//! Loads the payable rounding table with the `config` crate. Overrides are
//! layered on top of the built-in table, so a configuration that only adds
//! `JPY` still floors `miles` and `points`.
//!
//! ```toml
//! [default]
//! mode = "halfup"
//! precision = 100
//!
//! [currencies.jpy]
//! mode = "halfup"
//! precision = 1
//! ```
//!
//! The same keys can be given as environment variables:
//! `PRICING__DEFAULT__MODE=floor`, `PRICING__CURRENCIES__JPY__PRECISION=1`.

use serde::Deserialize;
use std::collections::HashMap;

use crate::error::KernelError;
use crate::policy::PayablePolicy;
use crate::rounding::{RoundingMode, RoundingRule};

const ENV_PREFIX: &str = "PRICING";

/// A rounding rule as written in configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleConfig {
    /// One of `floor`, `ceil`, `halfup`, `halfdown` (case-insensitive)
    pub mode: String,
    /// Smallest payable units per currency unit, e.g. 100 for cents
    pub precision: u32,
}

impl RuleConfig {
    fn to_rule(&self, scope: &str) -> Result<RoundingRule, KernelError> {
        let mode: RoundingMode = self
            .mode
            .parse()
            .map_err(|_| KernelError::configuration(format!("{scope}: unknown rounding mode '{}'", self.mode)))?;
        if self.precision == 0 {
            return Err(KernelError::configuration(format!(
                "{scope}: precision must be greater than zero"
            )));
        }
        Ok(RoundingRule::new(mode, self.precision))
    }
}

/// Pricing configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PricingConfig {
    /// Rule for currencies without an override; the built-in fallback if absent
    #[serde(default)]
    pub default: Option<RuleConfig>,
    /// Per-currency overrides keyed by currency code
    #[serde(default)]
    pub currencies: HashMap<String, RuleConfig>,
}

impl PricingConfig {
    /// Loads configuration from `PRICING__*` environment variables
    pub fn from_env() -> Result<Self, KernelError> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Loads configuration from a file; the format follows the extension
    pub fn from_file(path: &str) -> Result<Self, KernelError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Parses configuration from TOML text
    pub fn from_toml_str(toml: &str) -> Result<Self, KernelError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validates the configuration and builds the payable policy
    ///
    /// # Errors
    ///
    /// Returns `KernelError::Configuration` for unknown rounding modes and zero
    /// precisions.
    pub fn into_policy(self) -> Result<PayablePolicy, KernelError> {
        let mut policy = PayablePolicy::builtin();

        if let Some(default) = &self.default {
            policy = policy.with_fallback(default.to_rule("default")?);
        }
        for (code, rule) in &self.currencies {
            policy = policy.with_currency(code, rule.to_rule(code)?);
        }

        tracing::debug!(
            fallback = %policy.fallback().mode,
            overrides = self.currencies.len(),
            "payable policy loaded"
        );
        Ok(policy)
    }
}
