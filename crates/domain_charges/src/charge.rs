//! Charges and charge qualifiers

use serde::{Deserialize, Serialize};

use price_kernel::Amount;
use crate::error::ChargeError;

/// Charge type used for gift card payments
pub const CHARGE_TYPE_GIFT_CARD: &str = "giftcard";

/// Default charge type
pub const CHARGE_TYPE_MAIN: &str = "main";

/// An amount of a certain type
///
/// `price` is what is paid, possibly in a non-monetary currency such as miles;
/// `value` is the same charge expressed in a base currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charge {
    /// Price that is paid
    pub price: Amount,
    /// Value of the price in the base currency
    #[serde(default)]
    pub value: Amount,
    /// Type of the charge, e.g. [`CHARGE_TYPE_MAIN`]
    #[serde(rename = "type")]
    pub charge_type: String,
    /// Distinguishes charges of the same type, e.g. a gift card number
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reference: String,
}

impl Charge {
    /// Creates a charge with a zero value and no reference
    pub fn new(charge_type: impl Into<String>, price: Amount) -> Self {
        Self {
            price,
            value: Amount::default(),
            charge_type: charge_type.into(),
            reference: String::new(),
        }
    }

    /// Sets the base currency value
    pub fn with_value(mut self, value: Amount) -> Self {
        self.value = value;
        self
    }

    /// Sets the reference
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    /// Returns the ledger key of this charge
    pub fn qualifier(&self) -> ChargeQualifier {
        ChargeQualifier::new(&self.charge_type, &self.reference)
    }

    /// Adds price and value of `other`; the reference of `self` is kept
    ///
    /// # Errors
    ///
    /// - `ChargeError::TypeMismatch` if the charge types differ
    /// - `ChargeError::Money` if price or value currencies are incompatible
    pub fn add(&self, other: &Charge) -> Result<Charge, ChargeError> {
        if self.charge_type != other.charge_type {
            return Err(ChargeError::TypeMismatch {
                left: self.charge_type.clone(),
                right: other.charge_type.clone(),
            });
        }

        Ok(Charge {
            price: self.price.add(&other.price)?,
            value: self.value.add(&other.value)?,
            charge_type: self.charge_type.clone(),
            reference: self.reference.clone(),
        })
    }

    /// Rounds price and value to payable amounts
    pub fn get_payable(&self) -> Charge {
        Charge {
            price: self.price.get_payable(),
            value: self.value.get_payable(),
            ..self.clone()
        }
    }

    /// Multiplies price and value by `qty`
    pub fn mul(&self, qty: i64) -> Charge {
        Charge {
            price: self.price.multiply(qty),
            value: self.value.multiply(qty),
            ..self.clone()
        }
    }
}

/// Key that distinguishes charges by type and reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChargeQualifier {
    #[serde(rename = "type")]
    pub charge_type: String,
    #[serde(default)]
    pub reference: String,
}

impl ChargeQualifier {
    pub fn new(charge_type: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            charge_type: charge_type.into(),
            reference: reference.into(),
        }
    }
}
