//! Discount construction errors

use super::RebundleError;

/// Creates a price missing error
pub fn price_missing(bundle: impl Into<String>, currency: impl Into<String>) -> RebundleError {
    RebundleError::PriceMissing {
        bundle: bundle.into(),
        currency: currency.into(),
    }
}
