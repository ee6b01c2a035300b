//! Bundle reference keys
//!
//! A bundle reference is a basket metadata entry whose key is the
//! literal prefix `bundle_` followed by ASCII digits, and whose value
//! names a bundle ID. The key grammar is deliberately narrow: anything
//! else in the metadata map is none of our business.

use crate::basket::Basket;
use crate::error::{RebundleError, Result};

/// Prefix every bundle reference key starts with
pub const REFERENCE_PREFIX: &str = "bundle_";

/// One extracted bundle reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleReference {
    /// The metadata key, `bundle_<n>`
    pub key: String,
    /// The bundle the reference points at
    pub bundle_id: u32,
}

/// Whether a metadata key is a bundle reference key
///
/// Exactly `bundle_` plus one or more ASCII digits. Leading zeroes are
/// fine; an empty suffix, non-digits or anything around the key are
/// not.
pub fn is_reference_key(key: &str) -> bool {
    match key.strip_prefix(REFERENCE_PREFIX) {
        Some(suffix) => !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Builds the reference key for a slot number
pub fn key_for(slot: u32) -> String {
    format!("{REFERENCE_PREFIX}{slot}")
}

/// Extracts every bundle reference from a basket's metadata
///
/// References come back in the metadata map's key order. A reference
/// key whose value cannot name a bundle ID fails the whole extraction;
/// a half-read reference set must never drive reconciliation.
pub fn extract(basket: &Basket) -> Result<Vec<BundleReference>> {
    let mut references = Vec::new();

    for (key, value) in &basket.metadata {
        if !is_reference_key(key) {
            continue;
        }
        let bundle_id = value
            .as_bundle_id()
            .ok_or_else(|| RebundleError::MalformedReference {
                key: key.clone(),
                value: value.to_string(),
            })?;
        references.push(BundleReference {
            key: key.clone(),
            bundle_id,
        });
    }

    Ok(references)
}

/// Smallest slot number not yet used by a reference key
pub fn lowest_free_slot(basket: &Basket) -> u32 {
    let mut slot = 0;
    while basket.metadata.contains_key(&key_for(slot)) {
        slot += 1;
    }
    slot
}
