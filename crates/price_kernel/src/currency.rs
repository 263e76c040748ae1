//! Currency codes
//!
//! Currencies are opaque codes. Besides ISO 4217 codes the pricing layer deals
//! with loyalty units such as `miles` or `points`, so the code is kept as a
//! plain string and compared case-sensitively.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque currency code (e.g. `"EUR"`, `"miles"`)
///
/// The empty code is valid and tags the blank amount returned by
/// `Amount::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Creates a currency from its code, keeping the case as given
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the currency code
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Returns true for the empty currency code
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the lower-cased code used for policy lookups
    pub(crate) fn lookup_key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&Currency> for Currency {
    fn from(currency: &Currency) -> Self {
        currency.clone()
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
