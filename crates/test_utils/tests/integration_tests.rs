//! Integration Tests for the pricing crates
//!
//! Cross-crate workflows: building a cart from charges, splitting payables,
//! loading rounding policies from configuration and persisting prices.

use domain_charges::{Charge, ChargeQualifier, Charges, Discount, CHARGE_TYPE_GIFT_CARD, CHARGE_TYPE_MAIN};
use price_kernel::{Amount, PricingConfig, RoundingMode};
use rust_decimal_macros::dec;
use test_utils::*;

mod cart_workflow {
    use super::*;

    /// A cart paid partly with gift cards keeps both references apart
    #[test]
    fn test_cart_with_gift_cards() {
        init_tracing();
        let cart = ChargeFixtures::cart();

        assert_eq!(cart.len(), 3);
        assert_eq!(
            cart.get_by_type_forced(CHARGE_TYPE_GIFT_CARD).price,
            Amount::from_scaled_int(1000, 100, "EUR")
        );
        assert!(cart.has_qualifier(&ChargeQualifier::new(CHARGE_TYPE_GIFT_CARD, "GC-2")));
    }

    /// Quantities multiply every charge; the grand total stays payable
    #[test]
    fn test_cart_quantity_and_total() {
        let cart = ChargeFixtures::cart().mul(3);

        let total = Amount::sum_all(cart.items().iter().map(|charge| charge.price.clone())).unwrap();

        assert_eq!(total.value(), dec!(89.97));
        assert_payable(&total);
    }

    /// Applying a discount before booking the main charge
    #[test]
    fn test_discounted_main_charge() {
        let list_price = AmountFixtures::eur_100();
        let discounted = Discount::from_percentage(15).apply_to(&list_price).unwrap();

        let cart = Charges::new()
            .add_charge(Charge::new(CHARGE_TYPE_MAIN, discounted))
            .unwrap();

        assert_eq!(cart.get_by_type_forced(CHARGE_TYPE_MAIN).price.value(), dec!(85));
    }

    /// Merging two carts rounds colliding charges
    #[test]
    fn test_merge_carts() {
        let first = ChargesBuilder::new()
            .with_charge(ChargeBuilder::new().with_price_value(dec!(10.005)).build())
            .build()
            .unwrap();
        let second = ChargesBuilder::new()
            .with_charge(ChargeBuilder::new().with_price_value(dec!(0.001)).build())
            .with_charge(ChargeFixtures::gift_card("GC-9"))
            .build()
            .unwrap();

        let merged = first.add(second).unwrap();

        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get_by_type_forced(CHARGE_TYPE_MAIN).price.value(), dec!(10.01));
    }

    /// Charges paid in miles keep their EUR value
    #[test]
    fn test_loyalty_charge() {
        let charge = ChargeFixtures::main_miles().get_payable();

        assert_eq!(charge.price, Amount::from_decimal(dec!(2000), "miles"));
        assert_eq!(charge.value.value(), dec!(20));
    }
}

mod split_workflow {
    use super::*;

    #[test]
    fn test_split_uneven_amount() {
        let amount = AmountFixtures::eur_uneven();
        let parts = amount.split_in_payables(6).unwrap();

        assert_eq!(parts.len(), 6);
        assert_eq!(parts[0].value(), dec!(2.08));
        assert_eq!(parts[5].value(), dec!(2.07));
        assert_split_matches_payable(&amount, &parts);
    }

    #[test]
    fn test_split_refund() {
        let refund = AmountFixtures::eur_refund();
        let parts = refund.split_in_payables(3).unwrap();

        assert_split_matches_payable(&refund, &parts);
        assert_eq!(parts[0].value(), dec!(-16.67));
    }

    #[test]
    fn test_split_miles_in_whole_units() {
        let miles = AmountFixtures::miles_1500();
        let parts = miles.split_in_payables(4).unwrap();

        assert_eq!(parts.iter().map(|p| p.value()).collect::<Vec<_>>(), [dec!(375); 4]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn split_always_matches_payable(
                amount in eur_amount_strategy(),
                count in split_count_strategy(),
            ) {
                let parts = amount.split_in_payables(count).unwrap();
                prop_assert_eq!(parts.len(), count);
                assert_split_matches_payable(&amount, &parts);
            }

            #[test]
            fn rounding_is_idempotent(amount in amount_strategy(), mode in rounding_mode_strategy()) {
                let once = amount.get_payable_by_mode(mode, 100);
                prop_assert_eq!(once.get_payable_by_mode(mode, 100), once);
            }

            #[test]
            fn merged_ledger_totals_are_payable(charges in prop::collection::vec(charge_strategy(), 1..10)) {
                let mut builder = ChargesBuilder::new();
                for charge in charges {
                    builder = builder.with_charge(charge);
                }
                let ledger = builder.build().unwrap();

                for charge in ledger.items() {
                    assert_payable(&charge.price);
                }
            }
        }
    }
}

mod configured_policy {
    use super::*;

    #[test]
    fn test_policy_from_toml() {
        let policy = PricingConfig::from_toml_str(
            r#"
            [default]
            mode = "floor"
            precision = 100

            [currencies.jpy]
            mode = "halfup"
            precision = 1
            "#,
        )
        .unwrap()
        .into_policy()
        .unwrap();

        let eur = Amount::from_decimal(dec!(9.999), "EUR").get_payable_with(&policy);
        let yen = Amount::from_decimal(dec!(1234.5), "JPY").get_payable_with(&policy);

        assert_eq!(eur.value(), dec!(9.99));
        assert_eq!(yen.value(), dec!(1235));
    }

    #[test]
    fn test_split_follows_policy() {
        let policy = PricingConfig::from_toml_str(
            r#"
            [currencies.jpy]
            mode = "halfup"
            precision = 1
            "#,
        )
        .unwrap()
        .into_policy()
        .unwrap();

        let yen = Amount::from_decimal(dec!(1000), "JPY");
        let parts = yen.split_in_payables_with(&policy, 3).unwrap();

        assert_eq!(
            parts.iter().map(|p| p.value()).collect::<Vec<_>>(),
            [dec!(334), dec!(333), dec!(333)]
        );
        assert_eq!(
            Amount::from_decimal(dec!(0.5), "JPY").get_payable_by_mode(RoundingMode::HalfDown, 1).value(),
            dec!(0)
        );
    }
}

mod persistence {
    use super::*;
    use infra_db::{ColumnValue, InMemoryPriceStore, JsonColumn, PriceStore};

    #[tokio::test]
    async fn test_store_keeps_exact_amount() {
        init_tracing();
        let store = InMemoryPriceStore::new();
        let price = Amount::from_decimal(dec!(55.123333444444444), "USD");

        store.save("sku-1", &price).await.unwrap();
        let loaded = store.load("sku-1").await.unwrap();

        assert!(loaded.equal(&price));
        assert_amount_likely_eq(&loaded, &price);
    }

    #[tokio::test]
    async fn test_store_overwrites_and_deletes() {
        let store = InMemoryPriceStore::new();

        store.save("sku-1", &AmountFixtures::eur_100()).await.unwrap();
        store.save("sku-1", &AmountFixtures::usd_100()).await.unwrap();
        assert_eq!(store.load("sku-1").await.unwrap(), AmountFixtures::usd_100());

        assert!(store.delete("sku-1").await.unwrap());
        assert!(store.is_empty().await);
    }

    #[test]
    fn test_charge_column() {
        let charge = ChargeFixtures::gift_card("GC-1");
        let column = charge.to_column().unwrap();

        assert!(matches!(column, ColumnValue::Bytes(_)));
        assert_eq!(Charge::from_column(column).unwrap(), charge);
    }
}
