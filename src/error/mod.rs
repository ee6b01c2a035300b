//! Error types and handling for rebundle
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`reference`]: Bundle reference errors
//! - [`catalog`]: Catalog and bundle loading errors
//! - [`basket`]: Basket snapshot errors
//! - [`discount`]: Discount construction errors
//! - [`events`]: Event registry errors

#![allow(dead_code, unused_assignments)]

// Declare submodules
pub mod basket;
pub mod catalog;
pub mod discount;
pub mod events;
pub mod reference;

// Re-export convenience constructors from submodules (used in tests only)
#[allow(unused_imports)]
pub use basket::{
    not_found as basket_not_found, parse_failed as basket_parse_failed,
    read_failed as basket_read_failed, unsupported_format as basket_unsupported_format,
    write_failed as basket_write_failed,
};
#[allow(unused_imports)]
pub use catalog::{
    bundle_not_found, duplicate_id as duplicate_bundle_id, not_found as catalog_not_found,
    parse_failed as bundle_parse_failed, scan_failed as catalog_scan_failed, unknown_bundle,
};
#[allow(unused_imports)]
pub use discount::price_missing;
#[allow(unused_imports)]
pub use events::{duplicate_subscription, unknown_event};
#[allow(unused_imports)]
pub use reference::{
    malformed as malformed_reference, none_for_bundle as no_references_to_bundle,
    not_found as reference_not_found,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for rebundle operations
#[derive(Error, Diagnostic, Debug)]
pub enum RebundleError {
    // Reference errors
    #[error("Malformed bundle reference '{key}': value '{value}' is not a bundle ID")]
    #[diagnostic(
        code(rebundle::reference::malformed),
        help("Bundle reference metadata values must be whole non-negative integers")
    )]
    MalformedReference { key: String, value: String },

    #[error("Bundle reference '{key}' not found on basket")]
    #[diagnostic(code(rebundle::reference::not_found))]
    ReferenceNotFound { key: String },

    #[error("No references to bundle {id} on basket")]
    #[diagnostic(
        code(rebundle::reference::none_for_bundle),
        help("No bundle_<n> metadata entry on the basket points at this bundle")
    )]
    NoReferencesToBundle { id: u32 },

    // Catalog errors
    #[error("Catalog directory not found: {path}")]
    #[diagnostic(
        code(rebundle::catalog::not_found),
        help("Pass --catalog <DIR> or set REBUNDLE_CATALOG to a directory of bundle files")
    )]
    CatalogNotFound { path: String },

    #[error("Failed to scan catalog directory: {path}")]
    #[diagnostic(code(rebundle::catalog::scan_failed))]
    CatalogScanFailed { path: String, reason: String },

    #[error("Failed to parse bundle file: {path}")]
    #[diagnostic(code(rebundle::catalog::parse_failed))]
    BundleParseFailed { path: String, reason: String },

    #[error("Duplicate bundle ID {id} in catalog: {path}")]
    #[diagnostic(
        code(rebundle::catalog::duplicate_id),
        help("Each bundle file in the catalog must carry a unique `id`")
    )]
    DuplicateBundleId { id: u32, path: String },

    #[error("Bundle '{query}' not found in catalog")]
    #[diagnostic(code(rebundle::catalog::bundle_not_found))]
    BundleNotFound { query: String },

    #[error("Basket references bundle {id}, which is missing from the catalog")]
    #[diagnostic(
        code(rebundle::catalog::unknown_bundle),
        help(
            "A live bundle reference points at a bundle the catalog cannot supply. \
             Reconciliation refuses to run against an incomplete bundle set."
        )
    )]
    UnknownBundle { id: u32 },

    // Basket errors
    #[error("Basket file not found: {path}")]
    #[diagnostic(
        code(rebundle::basket::not_found),
        help("Pass a basket path or set REBUNDLE_BASKET")
    )]
    BasketNotFound { path: String },

    #[error("Failed to read basket file: {path}")]
    #[diagnostic(code(rebundle::basket::read_failed))]
    BasketReadFailed { path: String, reason: String },

    #[error("Failed to parse basket file: {path}")]
    #[diagnostic(code(rebundle::basket::parse_failed))]
    BasketParseFailed { path: String, reason: String },

    #[error("Failed to write basket file: {path}")]
    #[diagnostic(code(rebundle::basket::write_failed))]
    BasketWriteFailed { path: String, reason: String },

    #[error("Unsupported basket format: {path}")]
    #[diagnostic(
        code(rebundle::basket::unsupported_format),
        help("Basket files must end in .yaml, .yml or .json")
    )]
    UnsupportedBasketFormat { path: String },

    // Discount errors
    #[error("Bundle '{bundle}' has no price in currency '{currency}'")]
    #[diagnostic(
        code(rebundle::discount::price_missing),
        help("Add a price for the basket's currency to the bundle definition")
    )]
    PriceMissing { bundle: String, currency: String },

    // Event registry errors
    #[error("Event '{event}' is already registered")]
    #[diagnostic(
        code(rebundle::events::duplicate_subscription),
        help("Each order-lifecycle event must be registered exactly once")
    )]
    DuplicateSubscription { event: String },

    #[error("Unknown order-lifecycle event: {event}")]
    #[diagnostic(
        code(rebundle::events::unknown_event),
        help("Known events: bundle-add, assembler-update, create-validate")
    )]
    UnknownEvent { event: String },

    // Misc
    #[error("IO error: {message}")]
    #[diagnostic(code(rebundle::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for RebundleError {
    fn from(err: std::io::Error) -> Self {
        RebundleError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for RebundleError {
    fn from(err: inquire::InquireError) -> Self {
        RebundleError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, RebundleError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_display() {
        let err = RebundleError::UnknownBundle { id: 42 };
        assert_eq!(
            err.to_string(),
            "Basket references bundle 42, which is missing from the catalog"
        );
    }

    #[test]
    fn test_error_code() {
        let err = RebundleError::UnknownBundle { id: 42 };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("rebundle::catalog::unknown_bundle".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RebundleError = io_err.into();
        assert!(matches!(err, RebundleError::IoError { .. }));
    }

    test_error_contains!(
        test_malformed_reference_error,
        malformed_reference("bundle_0", "five"),
        "Malformed bundle reference",
        "bundle_0",
        "five",
    );

    test_error_contains!(
        test_catalog_not_found_error,
        catalog_not_found("/tmp/nowhere"),
        "Catalog directory not found",
    );

    test_error_contains!(
        test_basket_not_found_error,
        basket_not_found("/tmp/basket.yaml"),
        "Basket file not found",
    );

    #[test]
    fn test_malformed_reference_code() {
        let err = malformed_reference("bundle_2", "true");
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("rebundle::reference::malformed".to_string())
        );
    }

    #[test]
    fn test_reference_not_found() {
        let err = reference_not_found("bundle_9");
        assert!(matches!(err, RebundleError::ReferenceNotFound { .. }));
        assert!(err.to_string().contains("bundle_9"));
    }

    #[test]
    fn test_no_references_to_bundle() {
        let err = no_references_to_bundle(99);
        assert!(matches!(err, RebundleError::NoReferencesToBundle { id: 99 }));
        assert_eq!(err.to_string(), "No references to bundle 99 on basket");
    }

    #[test]
    fn test_bundle_not_found() {
        let err = bundle_not_found("Summer Pair");
        assert!(matches!(err, RebundleError::BundleNotFound { .. }));
        assert!(err.to_string().contains("Summer Pair"));
    }

    #[test]
    fn test_unknown_bundle() {
        let err = unknown_bundle(7);
        assert!(matches!(err, RebundleError::UnknownBundle { id: 7 }));
    }

    #[test]
    fn test_duplicate_bundle_id() {
        let err = duplicate_bundle_id(3, "catalog/dup.yaml");
        assert!(matches!(err, RebundleError::DuplicateBundleId { id: 3, .. }));
        assert!(err.to_string().contains("catalog/dup.yaml"));
    }

    #[test]
    fn test_bundle_parse_failed() {
        let err = bundle_parse_failed("catalog/bad.yaml", "mapping expected");
        assert!(matches!(err, RebundleError::BundleParseFailed { .. }));
        assert!(err.to_string().contains("Failed to parse bundle file"));
    }

    #[test]
    fn test_basket_read_failed() {
        let err = basket_read_failed("basket.yaml", "permission denied");
        assert!(matches!(err, RebundleError::BasketReadFailed { .. }));
        assert!(err.to_string().contains("Failed to read basket file"));
    }

    #[test]
    fn test_basket_parse_failed() {
        let err = basket_parse_failed("basket.yaml", "invalid YAML");
        assert!(matches!(err, RebundleError::BasketParseFailed { .. }));
        assert!(err.to_string().contains("Failed to parse basket file"));
    }

    #[test]
    fn test_basket_write_failed() {
        let err = basket_write_failed("basket.yaml", "disk full");
        assert!(matches!(err, RebundleError::BasketWriteFailed { .. }));
        assert!(err.to_string().contains("Failed to write basket file"));
    }

    #[test]
    fn test_basket_unsupported_format() {
        let err = basket_unsupported_format("basket.toml");
        assert!(matches!(err, RebundleError::UnsupportedBasketFormat { .. }));
        assert!(err.to_string().contains("Unsupported basket format"));
    }

    #[test]
    fn test_price_missing() {
        let err = price_missing("Summer Pair", "EUR");
        assert!(matches!(err, RebundleError::PriceMissing { .. }));
        assert!(err.to_string().contains("EUR"));
    }

    #[test]
    fn test_duplicate_subscription() {
        let err = duplicate_subscription("bundle.add");
        assert!(matches!(err, RebundleError::DuplicateSubscription { .. }));
        assert!(err.to_string().contains("already registered"));
    }

    #[test]
    fn test_unknown_event() {
        let err = unknown_event("order.deleted");
        assert!(matches!(err, RebundleError::UnknownEvent { .. }));
        assert!(err.to_string().contains("order.deleted"));
    }
}
