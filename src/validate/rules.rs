//! Standard validation rules
//!
//! The rules run in a fixed order and the first failure wins:
//! deletion, availability window, product rows, promotion codes.
//! Reasons are written to read as `Bundle '<name>' <reason>` in
//! shopper-facing warnings.

use chrono::{DateTime, Utc};

use crate::basket::Basket;
use crate::bundle::Bundle;
use crate::error::Result;
use crate::validate::{BundleValidator, Validity};

/// The stock validator used by every built-in flow
///
/// Carries the instant it judges availability windows against, so a
/// whole reconciliation pass sees one consistent clock.
#[derive(Debug, Clone, Copy)]
pub struct StandardValidator {
    now: DateTime<Utc>,
}

impl StandardValidator {
    /// Creates a validator that judges windows against the given instant
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    fn check(&self, bundle: &Bundle, basket: &Basket) -> Validity {
        if bundle.is_deleted() {
            return Validity::invalid("is no longer available");
        }
        if bundle.starts_after(self.now) {
            return Validity::invalid("is not yet available");
        }
        if bundle.ended_by(self.now) {
            return Validity::invalid("has expired");
        }

        for row in &bundle.products {
            let have = basket.quantity_of(row.product_id);
            if have < row.quantity {
                return Validity::invalid(format!(
                    "needs {} x product {} (basket has {})",
                    row.quantity, row.product_id, have
                ));
            }
        }

        if !bundle.allow_codes && basket.has_codes() {
            return Validity::invalid("cannot be combined with promotion codes");
        }

        Validity::Valid
    }
}

impl BundleValidator for StandardValidator {
    fn validate(&self, bundle: &Bundle, basket: &Basket) -> Result<Validity> {
        Ok(self.check(bundle, basket))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basket::BasketLine;
    use crate::bundle::{ProductRow, Stamp};

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().expect("valid RFC3339 timestamp")
    }

    fn validator() -> StandardValidator {
        StandardValidator::at(at("2026-06-15T12:00:00Z"))
    }

    fn bundle_with_row(product_id: u64, quantity: u32) -> Bundle {
        let mut bundle = Bundle::new(1, "Pair");
        bundle.products.push(ProductRow {
            product_id,
            quantity,
            options: Default::default(),
        });
        bundle
    }

    fn basket_with_line(product_id: u64, quantity: u32) -> Basket {
        let mut basket = Basket::new();
        basket.lines.push(BasketLine {
            product_id,
            quantity,
            unit_price: 1000,
        });
        basket
    }

    fn assert_invalid(outcome: &Validity, fragment: &str) {
        match outcome {
            Validity::Invalid { reason } => assert!(
                reason.contains(fragment),
                "reason '{reason}' should contain '{fragment}'"
            ),
            Validity::Valid => panic!("expected invalid outcome with '{fragment}'"),
        }
    }

    #[test]
    fn test_empty_bundle_on_empty_basket_is_valid() {
        let outcome = validator()
            .validate(&Bundle::new(1, "Pair"), &Basket::new())
            .unwrap();
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_deleted_bundle_is_invalid() {
        let mut bundle = Bundle::new(1, "Pair");
        bundle.deleted = Some(Stamp {
            at: at("2026-01-01T00:00:00Z"),
            by: None,
        });

        let outcome = validator().validate(&bundle, &Basket::new()).unwrap();
        assert_invalid(&outcome, "no longer available");
    }

    #[test]
    fn test_not_yet_available() {
        let mut bundle = Bundle::new(1, "Pair");
        bundle.start = Some(at("2026-07-01T00:00:00Z"));

        let outcome = validator().validate(&bundle, &Basket::new()).unwrap();
        assert_invalid(&outcome, "not yet available");
    }

    #[test]
    fn test_expired() {
        let mut bundle = Bundle::new(1, "Pair");
        bundle.end = Some(at("2026-06-01T00:00:00Z"));

        let outcome = validator().validate(&bundle, &Basket::new()).unwrap();
        assert_invalid(&outcome, "has expired");
    }

    #[test]
    fn test_window_edges_are_inclusive() {
        let mut bundle = Bundle::new(1, "Pair");
        bundle.start = Some(at("2026-06-15T12:00:00Z"));
        bundle.end = Some(at("2026-06-15T12:00:00Z"));

        let outcome = validator().validate(&bundle, &Basket::new()).unwrap();
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_missing_product_row() {
        let bundle = bundle_with_row(101, 2);
        let basket = basket_with_line(101, 1);

        let outcome = validator().validate(&bundle, &basket).unwrap();
        assert_invalid(&outcome, "needs 2 x product 101");
        assert_invalid(&outcome, "basket has 1");
    }

    #[test]
    fn test_quantity_summed_across_lines() {
        let bundle = bundle_with_row(101, 3);
        let mut basket = basket_with_line(101, 2);
        basket.lines.push(BasketLine {
            product_id: 101,
            quantity: 1,
            unit_price: 900,
        });

        let outcome = validator().validate(&bundle, &basket).unwrap();
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_codes_conflict() {
        let bundle = Bundle::new(1, "Pair");
        let mut basket = Basket::new();
        basket.codes.push("WELCOME10".to_string());

        let outcome = validator().validate(&bundle, &basket).unwrap();
        assert_invalid(&outcome, "promotion codes");
    }

    #[test]
    fn test_allow_codes_permits_codes() {
        let mut bundle = Bundle::new(1, "Pair");
        bundle.allow_codes = true;
        let mut basket = Basket::new();
        basket.codes.push("WELCOME10".to_string());

        let outcome = validator().validate(&bundle, &basket).unwrap();
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_first_failure_wins() {
        // Deleted and expired and missing products: the deletion reason leads.
        let mut bundle = bundle_with_row(101, 2);
        bundle.deleted = Some(Stamp {
            at: at("2026-01-01T00:00:00Z"),
            by: None,
        });
        bundle.end = Some(at("2026-02-01T00:00:00Z"));

        let outcome = validator().validate(&bundle, &Basket::new()).unwrap();
        assert_invalid(&outcome, "no longer available");
    }
}
