//! Discounts

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use price_kernel::{Amount, MoneyError};

/// A discount given either as an absolute price or as a percentage
///
/// A non-zero percentage takes priority over the price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Amount>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub percentage: i32,
}

fn is_zero(percentage: &i32) -> bool {
    *percentage == 0
}

impl Discount {
    pub fn from_percentage(percentage: i32) -> Self {
        Self {
            price: None,
            percentage,
        }
    }

    pub fn from_price(price: Amount) -> Self {
        Self {
            price: Some(price),
            percentage: 0,
        }
    }

    /// Returns true if the discount changes nothing
    pub fn is_empty(&self) -> bool {
        self.percentage == 0 && self.price.as_ref().map_or(true, Amount::is_zero)
    }

    /// Applies the discount to `amount`
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` if an absolute discount is in a
    /// different currency than `amount`.
    pub fn apply_to(&self, amount: &Amount) -> Result<Amount, MoneyError> {
        if self.percentage != 0 {
            return Ok(amount.discounted(Decimal::from(self.percentage)));
        }
        match &self.price {
            Some(price) => amount.subtract(price),
            None => Ok(amount.clone()),
        }
    }
}
