//! Catalog and bundle loading errors

use super::RebundleError;

/// Creates a catalog not found error
pub fn not_found(path: impl Into<String>) -> RebundleError {
    RebundleError::CatalogNotFound { path: path.into() }
}

/// Creates a catalog scan failed error
pub fn scan_failed(path: impl Into<String>, reason: impl Into<String>) -> RebundleError {
    RebundleError::CatalogScanFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a bundle parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> RebundleError {
    RebundleError::BundleParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a duplicate bundle ID error
pub fn duplicate_id(id: u32, path: impl Into<String>) -> RebundleError {
    RebundleError::DuplicateBundleId {
        id,
        path: path.into(),
    }
}

/// Creates a bundle not found error
pub fn bundle_not_found(query: impl Into<String>) -> RebundleError {
    RebundleError::BundleNotFound {
        query: query.into(),
    }
}

/// Creates an unknown bundle error
pub fn unknown_bundle(id: u32) -> RebundleError {
    RebundleError::UnknownBundle { id }
}
