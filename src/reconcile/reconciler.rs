//! The reconciliation pass
//!
//! One pass drives every bundle reference on a basket to its fixed
//! point: a valid reference ends up with exactly its one discount
//! applied, an invalid one ends up with none. Running the same pass
//! again on the result changes nothing.

use std::collections::{BTreeMap, BTreeSet};

use crate::basket::Basket;
use crate::bundle::Bundle;
use crate::catalog::BundleRepository;
use crate::discount::DiscountFactory;
use crate::error::{RebundleError, Result};
use crate::events::OrderEventHandler;
use crate::reconcile::references::{self, BundleReference};
use crate::reconcile::warnings::WarningSink;
use crate::validate::{BundleValidator, Validity};

/// What one reconciliation pass did, per reference key
///
/// Reporting only; the basket itself is the source of truth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassOutcome {
    /// References whose discount was newly applied
    pub added: Vec<String>,
    /// References whose discount was withdrawn
    pub removed: Vec<String>,
    /// References already at their fixed point
    pub unchanged: Vec<String>,
}

impl PassOutcome {
    /// Whether the pass changed the basket's discounts
    pub fn changed(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }
}

/// Drives baskets to a consistent discount state
///
/// The reconciler owns no state of its own; it borrows its three
/// collaborators and leaves all persistence to the caller. When a pass
/// returns `Err` the basket may hold partial in-memory changes and
/// must be discarded, not saved.
pub struct Reconciler<'a> {
    repository: &'a dyn BundleRepository,
    validator: &'a dyn BundleValidator,
    factory: &'a dyn DiscountFactory,
}

impl<'a> Reconciler<'a> {
    pub fn new(
        repository: &'a dyn BundleRepository,
        validator: &'a dyn BundleValidator,
        factory: &'a dyn DiscountFactory,
    ) -> Self {
        Self {
            repository,
            validator,
            factory,
        }
    }

    /// Runs one reconciliation pass over the basket
    ///
    /// References are extracted first and the referenced bundles loaded
    /// in a single batch. A malformed reference or an ID the repository
    /// cannot supply aborts the pass before the basket is touched.
    pub fn reconcile(
        &self,
        basket: &mut Basket,
        warnings: &mut dyn WarningSink,
    ) -> Result<PassOutcome> {
        let refs = references::extract(basket)?;
        if refs.is_empty() {
            return Ok(PassOutcome::default());
        }

        let ids: BTreeSet<u32> = refs.iter().map(|r| r.bundle_id).collect();
        let bundles = self.repository.load_by_ids(&ids)?;
        for reference in &refs {
            if !bundles.contains_key(&reference.bundle_id) {
                return Err(RebundleError::UnknownBundle {
                    id: reference.bundle_id,
                });
            }
        }

        let mut outcome = PassOutcome::default();
        for reference in &refs {
            self.converge(reference, &bundles, basket, warnings, &mut outcome)?;
        }
        Ok(outcome)
    }

    /// Converges a single reference to its fixed point
    fn converge(
        &self,
        reference: &BundleReference,
        bundles: &BTreeMap<u32, Bundle>,
        basket: &mut Basket,
        warnings: &mut dyn WarningSink,
        outcome: &mut PassOutcome,
    ) -> Result<()> {
        let bundle = bundles
            .get(&reference.bundle_id)
            .ok_or(RebundleError::UnknownBundle {
                id: reference.bundle_id,
            })?;

        // The discount exists before the verdict does. Its identity is
        // the reference key, which is what makes re-runs converge
        // instead of stacking copies.
        let discount = self.factory.create(&reference.key, bundle, basket)?;
        let was_present = basket.discounts.has(&reference.key);

        match self.validator.validate(bundle, basket)? {
            Validity::Valid => {
                if was_present {
                    // Already applied. The stored entity stays exactly
                    // as it is; only `detach` and invalidation remove it.
                    outcome.unchanged.push(reference.key.clone());
                } else {
                    basket.discounts.add(discount);
                    outcome.added.push(reference.key.clone());
                }
            }
            Validity::Invalid { reason } => {
                if was_present {
                    basket.discounts.remove(&reference.key);
                    warnings.warn(&format!(
                        "Bundle '{}' {reason}; removing its discount",
                        bundle.name
                    ));
                    outcome.removed.push(reference.key.clone());
                } else {
                    outcome.unchanged.push(reference.key.clone());
                }
            }
        }
        Ok(())
    }
}

/// Every order-lifecycle event the add-on subscribes to runs the same
/// reconciliation pass.
impl OrderEventHandler for Reconciler<'_> {
    fn handle(&self, basket: &mut Basket, warnings: &mut dyn WarningSink) -> Result<PassOutcome> {
        self.reconcile(basket, warnings)
    }
}
