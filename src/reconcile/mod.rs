//! Discount reconciliation
//!
//! The reconciliation pass reads the bundle references off a basket,
//! loads the referenced bundles in one batch, and converges each
//! reference: valid ones get exactly their one discount, invalid ones
//! lose theirs with a shopper-facing warning. The pass is idempotent
//! and fails closed on anything it cannot fully resolve.

pub mod reconciler;
pub mod references;
pub mod warnings;

pub use reconciler::{PassOutcome, Reconciler};
pub use references::{is_reference_key, key_for, lowest_free_slot, BundleReference};
pub use warnings::{CollectedWarnings, WarningSink};
