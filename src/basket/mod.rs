//! Basket snapshot data structures
//!
//! A basket is the order-in-progress: product lines, promotion codes,
//! scalar metadata and the discounts currently applied. Bundle
//! references live in the metadata map under `bundle_<n>` keys and are
//! the input to reconciliation.

pub mod discounts;
pub mod metadata;
pub mod store;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use discounts::{Discount, DiscountCollection};
pub use metadata::MetadataValue;

/// One product line in a basket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketLine {
    /// Product in the line
    pub product_id: u64,

    /// Units of the product
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Price per unit in minor units of the basket currency
    pub unit_price: i64,
}

fn default_quantity() -> u32 {
    1
}

/// A basket snapshot as persisted on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Basket {
    /// ISO currency code all amounts are denominated in
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Product lines
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<BasketLine>,

    /// Promotion codes entered by the shopper
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub codes: Vec<String>,

    /// Scalar metadata map. Bundle references are `bundle_<n>` keys here.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, MetadataValue>,

    /// Discounts currently applied to the basket
    #[serde(default, skip_serializing_if = "DiscountCollection::is_empty")]
    pub discounts: DiscountCollection,
}

fn default_currency() -> String {
    "GBP".to_string()
}

impl Basket {
    /// Creates an empty basket in the default currency
    pub fn new() -> Self {
        Self {
            currency: default_currency(),
            lines: Vec::new(),
            codes: Vec::new(),
            metadata: BTreeMap::new(),
            discounts: DiscountCollection::new(),
        }
    }

    /// Total units of a product across all lines
    pub fn quantity_of(&self, product_id: u64) -> u32 {
        self.lines
            .iter()
            .filter(|line| line.product_id == product_id)
            .map(|line| line.quantity)
            .sum()
    }

    /// First line carrying the given product, if any
    pub fn line_for(&self, product_id: u64) -> Option<&BasketLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    /// Whether the shopper has entered any promotion codes
    pub fn has_codes(&self) -> bool {
        !self.codes.is_empty()
    }

    /// Metadata value stored under a key
    pub fn metadata_value(&self, key: &str) -> Option<&MetadataValue> {
        self.metadata.get(key)
    }

    /// Writes a bundle reference into the metadata map
    pub fn set_reference(&mut self, key: impl Into<String>, bundle_id: u32) {
        self.metadata
            .insert(key.into(), MetadataValue::Int(i64::from(bundle_id)));
    }

    /// Removes a bundle reference from the metadata map
    ///
    /// Returns true when the key was present.
    pub fn remove_reference(&mut self, key: &str) -> bool {
        self.metadata.remove(key).is_some()
    }
}

impl Default for Basket {
    fn default() -> Self {
        Self::new()
    }
}
