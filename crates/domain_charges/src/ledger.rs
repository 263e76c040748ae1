//! Charge ledger
//!
//! Maps charge qualifiers to charges. Merging two charges with the same
//! qualifier rounds the sum to a payable amount right away, so repeated merges
//! never accumulate sub-cent drift. The flip side is that rounding happens per
//! merge rather than once at the end; callers needing an exact total should sum
//! the amounts directly.
//!
//! # Invariants
//!
//! - Qualifiers are unique
//! - Mutators consume the ledger and return the new one; a cloned snapshot is
//!   never affected by later changes to the other copy

use std::collections::{BTreeMap, HashMap};

use crate::charge::{Charge, ChargeQualifier};
use crate::error::ChargeError;

/// Charges keyed by type and reference
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Charges {
    by_qualifier: BTreeMap<ChargeQualifier, Charge>,
}

impl Charges {
    /// Creates an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from charges keyed by type
    ///
    /// The map key is the type: it overrides the charge's own `charge_type`.
    /// The qualifier is that type plus the reference of each charge.
    pub fn from_types(charges_by_type: HashMap<String, Charge>) -> Self {
        let by_qualifier = charges_by_type
            .into_iter()
            .map(|(charge_type, charge)| {
                let charge = Charge {
                    charge_type,
                    ..charge
                };
                (charge.qualifier(), charge)
            })
            .collect();
        Self { by_qualifier }
    }

    /// Returns the number of distinct qualifiers
    pub fn len(&self) -> usize {
        self.by_qualifier.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_qualifier.is_empty()
    }

    /// Adds a charge, merging it with an existing charge of the same qualifier
    ///
    /// # Errors
    ///
    /// Returns `ChargeError::Money` if the merged amounts have incompatible
    /// currencies.
    pub fn add_charge(mut self, charge: Charge) -> Result<Self, ChargeError> {
        let qualifier = charge.qualifier();
        self.merge_entry(qualifier, charge)?;
        Ok(self)
    }

    /// Merges another ledger into this one
    ///
    /// Colliding qualifiers are summed and rounded like in [`Charges::add_charge`].
    pub fn add(mut self, other: Charges) -> Result<Self, ChargeError> {
        for (qualifier, charge) in other.by_qualifier {
            self.merge_entry(qualifier, charge)?;
        }
        Ok(self)
    }

    fn merge_entry(&mut self, qualifier: ChargeQualifier, charge: Charge) -> Result<(), ChargeError> {
        let merged = match self.by_qualifier.get(&qualifier) {
            Some(existing) => {
                tracing::trace!(
                    charge_type = %qualifier.charge_type,
                    reference = %qualifier.reference,
                    "merging charges with equal qualifier"
                );
                existing.add(&charge)?.get_payable()
            }
            None => charge,
        };
        self.by_qualifier.insert(qualifier, merged);
        Ok(())
    }

    /// Multiplies price and value of every charge by `qty`
    pub fn mul(self, qty: i64) -> Self {
        let by_qualifier = self
            .by_qualifier
            .into_iter()
            .map(|(qualifier, charge)| (qualifier, charge.mul(qty)))
            .collect();
        Self { by_qualifier }
    }

    /// Returns true if any charge has the given type
    pub fn has_type(&self, charge_type: &str) -> bool {
        self.by_qualifier
            .keys()
            .any(|qualifier| qualifier.charge_type == charge_type)
    }

    /// Returns true if a charge with exactly this qualifier exists
    pub fn has_qualifier(&self, qualifier: &ChargeQualifier) -> bool {
        self.by_qualifier.contains_key(qualifier)
    }

    /// Returns the sum of all charges of a type
    ///
    /// The result has no reference. Returns `Ok(None)` if no charge has this
    /// type. The sum is not rounded.
    ///
    /// # Errors
    ///
    /// Returns `ChargeError::Money` if the charges of this type carry
    /// incompatible currencies.
    pub fn get_by_type(&self, charge_type: &str) -> Result<Option<Charge>, ChargeError> {
        if !self.has_type(charge_type) {
            return Ok(None);
        }

        let empty = Charge {
            charge_type: charge_type.to_string(),
            ..Charge::default()
        };
        self.by_qualifier
            .iter()
            .filter(|(qualifier, _)| qualifier.charge_type == charge_type)
            .try_fold(empty, |total, (_, charge)| total.add(charge))
            .map(Some)
    }

    /// Like [`Charges::get_by_type`] but returns a zero charge when nothing is found
    ///
    /// Meant for display code that should render a missing charge as zero.
    pub fn get_by_type_forced(&self, charge_type: &str) -> Charge {
        match self.get_by_type(charge_type) {
            Ok(Some(charge)) => charge,
            Ok(None) => Charge::default(),
            Err(error) => {
                tracing::debug!(%error, charge_type, "charges of type could not be summed");
                Charge::default()
            }
        }
    }

    /// Returns the charge stored under `qualifier`
    pub fn get_by_qualifier(&self, qualifier: &ChargeQualifier) -> Option<&Charge> {
        self.by_qualifier.get(qualifier)
    }

    /// Like [`Charges::get_by_qualifier`] but returns a zero charge when nothing is found
    pub fn get_by_qualifier_forced(&self, qualifier: &ChargeQualifier) -> Charge {
        self.get_by_qualifier(qualifier).cloned().unwrap_or_default()
    }

    /// Returns all charges keyed by qualifier
    pub fn all_charges(&self) -> &BTreeMap<ChargeQualifier, Charge> {
        &self.by_qualifier
    }

    /// Returns all charges of a type keyed by qualifier
    pub fn all_by_type(&self, charge_type: &str) -> BTreeMap<ChargeQualifier, Charge> {
        self.by_qualifier
            .iter()
            .filter(|(qualifier, _)| qualifier.charge_type == charge_type)
            .map(|(qualifier, charge)| (qualifier.clone(), charge.clone()))
            .collect()
    }

    /// Returns all charges ordered by qualifier
    pub fn items(&self) -> Vec<Charge> {
        self.by_qualifier.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charge::{CHARGE_TYPE_GIFT_CARD, CHARGE_TYPE_MAIN};
    use price_kernel::Amount;
    use rust_decimal_macros::dec;

    #[test]
    fn test_merge_rounds_sum() {
        let charges = Charges::new()
            .add_charge(Charge::new(CHARGE_TYPE_MAIN, Amount::from_decimal(dec!(1.004), "EUR")))
            .unwrap()
            .add_charge(Charge::new(CHARGE_TYPE_MAIN, Amount::from_decimal(dec!(1.004), "EUR")))
            .unwrap();

        let charge = charges.get_by_qualifier_forced(&ChargeQualifier::new(CHARGE_TYPE_MAIN, ""));
        assert_eq!(charge.price.value(), dec!(2.01));
        assert_eq!(charges.len(), 1);
    }

    #[test]
    fn test_snapshots_do_not_share_state() {
        let base = Charges::new()
            .add_charge(Charge::new(CHARGE_TYPE_MAIN, Amount::from_scaled_int(100, 1, "EUR")))
            .unwrap();
        let snapshot = base.clone();

        let doubled = base.mul(2);

        assert_eq!(
            snapshot.get_by_type_forced(CHARGE_TYPE_MAIN).price,
            Amount::from_scaled_int(100, 1, "EUR")
        );
        assert_eq!(
            doubled.get_by_type_forced(CHARGE_TYPE_MAIN).price,
            Amount::from_scaled_int(200, 1, "EUR")
        );
    }

    #[test]
    fn test_from_types_key_sets_charge_type() {
        let mut by_type = HashMap::new();
        by_type.insert(
            CHARGE_TYPE_GIFT_CARD.to_string(),
            Charge::new(CHARGE_TYPE_MAIN, Amount::from_scaled_int(500, 100, "EUR")).with_reference("GC-7"),
        );

        let charges = Charges::from_types(by_type);
        let gift = charges.get_by_type(CHARGE_TYPE_GIFT_CARD).unwrap().unwrap();

        assert_eq!(gift.charge_type, CHARGE_TYPE_GIFT_CARD);
        assert_eq!(gift.price.value(), dec!(5));
        assert!(!charges.has_type(CHARGE_TYPE_MAIN));
        assert!(charges.has_qualifier(&ChargeQualifier::new(CHARGE_TYPE_GIFT_CARD, "GC-7")));
    }

    #[test]
    fn test_mismatched_merge_fails() {
        let result = Charges::new()
            .add_charge(Charge::new(CHARGE_TYPE_MAIN, Amount::from_scaled_int(100, 1, "EUR")))
            .unwrap()
            .add_charge(Charge::new(CHARGE_TYPE_MAIN, Amount::from_scaled_int(100, 1, "USD")));

        assert!(matches!(result, Err(ChargeError::Money(_))));
    }
}
