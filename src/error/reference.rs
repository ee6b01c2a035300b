//! Bundle reference errors

use super::RebundleError;

/// Creates a malformed reference error
pub fn malformed(key: impl Into<String>, value: impl Into<String>) -> RebundleError {
    RebundleError::MalformedReference {
        key: key.into(),
        value: value.into(),
    }
}

/// Creates a reference not found error
pub fn not_found(key: impl Into<String>) -> RebundleError {
    RebundleError::ReferenceNotFound { key: key.into() }
}

/// Creates an error for a bundle ID no reference points at
pub fn none_for_bundle(id: u32) -> RebundleError {
    RebundleError::NoReferencesToBundle { id }
}
