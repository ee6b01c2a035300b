//! Basket snapshot errors

use super::RebundleError;

/// Creates a basket not found error
pub fn not_found(path: impl Into<String>) -> RebundleError {
    RebundleError::BasketNotFound { path: path.into() }
}

/// Creates a basket read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> RebundleError {
    RebundleError::BasketReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a basket parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> RebundleError {
    RebundleError::BasketParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a basket write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> RebundleError {
    RebundleError::BasketWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an unsupported basket format error
pub fn unsupported_format(path: impl Into<String>) -> RebundleError {
    RebundleError::UnsupportedBasketFormat { path: path.into() }
}
