//! Bundle validation
//!
//! A validator answers one question: may this bundle's discount sit on
//! this basket right now? The answer is a plain outcome, not an error.
//! `Err` from a validator means the validator itself could not run,
//! and aborts the reconciliation pass; an [`Validity::Invalid`] outcome
//! is ordinary business and only affects the one reference being
//! checked.

pub mod rules;

pub use rules::StandardValidator;

use crate::basket::Basket;
use crate::bundle::Bundle;
use crate::error::Result;

/// Outcome of checking one bundle against one basket
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    /// The bundle's discount may be applied
    Valid,
    /// The bundle's discount may not be applied
    Invalid { reason: String },
}

impl Validity {
    /// Builds an invalid outcome with the given shopper-facing reason
    pub fn invalid(reason: impl Into<String>) -> Self {
        Validity::Invalid {
            reason: reason.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }
}

/// Decides whether a bundle may apply to a basket
pub trait BundleValidator {
    /// Checks one bundle against one basket
    fn validate(&self, bundle: &Bundle, basket: &Basket) -> Result<Validity>;
}
