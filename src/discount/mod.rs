//! Discount construction
//!
//! A factory turns a bundle plus the basket it applies to into a
//! concrete [`Discount`]. The discount's ID is always the bundle
//! reference key it was created for; that identity is what lets
//! reconciliation converge instead of stacking duplicates.

use crate::basket::{Basket, Discount};
use crate::bundle::Bundle;
use crate::error::{RebundleError, Result};
use crate::money;

/// Builds the discount a bundle reference stands for
///
/// Factories run before validation, so they must tolerate baskets the
/// bundle does not actually fit. `Err` is reserved for data failures
/// that abort the whole pass.
pub trait DiscountFactory {
    /// Creates the discount for one reference
    ///
    /// The returned discount carries `reference_key` as its ID.
    fn create(&self, reference_key: &str, bundle: &Bundle, basket: &Basket) -> Result<Discount>;
}

/// Factory pricing a discount as the shopper's saving
///
/// The saving is the sum of the bundle's product rows at the basket's
/// unit prices, minus the bundle price in the basket currency, floored
/// at zero. Rows the basket cannot price contribute nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SavingsFactory;

impl SavingsFactory {
    pub fn new() -> Self {
        Self
    }
}

impl DiscountFactory for SavingsFactory {
    fn create(&self, reference_key: &str, bundle: &Bundle, basket: &Basket) -> Result<Discount> {
        let price = bundle.price_in(&basket.currency).ok_or_else(|| {
            RebundleError::PriceMissing {
                bundle: bundle.name.clone(),
                currency: basket.currency.clone(),
            }
        })?;

        let lines_total: i64 = bundle
            .products
            .iter()
            .map(|row| {
                basket
                    .line_for(row.product_id)
                    .map_or(0, |line| money::line_total(line.unit_price, row.quantity))
            })
            .sum();

        Ok(Discount {
            id: reference_key.to_string(),
            name: bundle.name.clone(),
            amount: money::savings(lines_total, price),
            bundle: bundle.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basket::BasketLine;
    use crate::bundle::ProductRow;

    fn bundle() -> Bundle {
        let mut bundle = Bundle::new(3, "Summer Pair");
        bundle.prices.insert("GBP".to_string(), 2500);
        bundle.products.push(ProductRow {
            product_id: 101,
            quantity: 2,
            options: Default::default(),
        });
        bundle.products.push(ProductRow {
            product_id: 205,
            quantity: 1,
            options: Default::default(),
        });
        bundle
    }

    fn basket() -> Basket {
        let mut basket = Basket::new();
        basket.lines.push(BasketLine {
            product_id: 101,
            quantity: 2,
            unit_price: 1000,
        });
        basket.lines.push(BasketLine {
            product_id: 205,
            quantity: 1,
            unit_price: 800,
        });
        basket
    }

    #[test]
    fn test_discount_id_is_the_reference_key() {
        let discount = SavingsFactory::new()
            .create("bundle_0", &bundle(), &basket())
            .unwrap();
        assert_eq!(discount.id, "bundle_0");
        assert_eq!(discount.bundle, 3);
        assert_eq!(discount.name, "Summer Pair");
    }

    #[test]
    fn test_amount_is_lines_minus_bundle_price() {
        // 2 x 1000 + 1 x 800 = 2800; bundle costs 2500; saving 300.
        let discount = SavingsFactory::new()
            .create("bundle_0", &bundle(), &basket())
            .unwrap();
        assert_eq!(discount.amount, 300);
    }

    #[test]
    fn test_amount_floors_at_zero() {
        let mut dear = bundle();
        dear.prices.insert("GBP".to_string(), 9999);

        let discount = SavingsFactory::new()
            .create("bundle_0", &dear, &basket())
            .unwrap();
        assert_eq!(discount.amount, 0);
    }

    #[test]
    fn test_row_quantity_prices_the_row() {
        // The bundle row wants 2 units; the basket line holds 5. Only the
        // bundled two count toward the saving.
        let mut bundle = Bundle::new(1, "Solo");
        bundle.prices.insert("GBP".to_string(), 1500);
        bundle.products.push(ProductRow {
            product_id: 101,
            quantity: 2,
            options: Default::default(),
        });

        let mut basket = Basket::new();
        basket.lines.push(BasketLine {
            product_id: 101,
            quantity: 5,
            unit_price: 1000,
        });

        let discount = SavingsFactory::new()
            .create("bundle_0", &bundle, &basket)
            .unwrap();
        assert_eq!(discount.amount, 500);
    }

    #[test]
    fn test_rows_without_lines_contribute_nothing() {
        let mut basket = Basket::new();
        basket.lines.push(BasketLine {
            product_id: 101,
            quantity: 2,
            unit_price: 1000,
        });
        // Product 205 is absent; 2000 - 2500 floors to 0.
        let discount = SavingsFactory::new()
            .create("bundle_0", &bundle(), &basket)
            .unwrap();
        assert_eq!(discount.amount, 0);
    }

    #[test]
    fn test_missing_currency_price_is_a_data_error() {
        let mut basket = basket();
        basket.currency = "EUR".to_string();

        let err = SavingsFactory::new()
            .create("bundle_0", &bundle(), &basket)
            .unwrap_err();
        assert!(matches!(err, RebundleError::PriceMissing { .. }));
        assert!(err.to_string().contains("EUR"));
    }
}
