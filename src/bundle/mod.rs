//! Bundle definitions
//!
//! A bundle is a named grouping of products sold together at a per-currency
//! price. Bundles live as individual files in a catalog directory and are
//! referenced from baskets by numeric ID.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One product row inside a bundle definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRow {
    /// Product the row refers to
    pub product_id: u64,

    /// How many units of the product the bundle includes
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Free-form variant options (size, colour)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, String>,
}

fn default_quantity() -> u32 {
    1
}

/// Authorship stamp recording when and by whom a change was made
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stamp {
    pub at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,
}

/// A discount bundle as stored in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    /// Numeric bundle ID, unique across the catalog
    pub id: u32,

    /// Human-readable bundle name
    pub name: String,

    /// Whether promotion codes may be combined with this bundle
    #[serde(default)]
    pub allow_codes: bool,

    /// Earliest instant the bundle is available (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,

    /// Latest instant the bundle is available (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,

    /// Optional marketing image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<u64>,

    /// Bundle price per ISO currency code, in integer minor units
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub prices: BTreeMap<String, i64>,

    /// Product rows the basket must contain for the bundle to apply
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<ProductRow>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Stamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<Stamp>,

    /// Soft-delete marker. A deleted bundle stays on disk but no longer
    /// validates against any basket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<Stamp>,
}

impl Bundle {
    /// Creates a bundle with the given ID and name and empty everything else
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            allow_codes: false,
            start: None,
            end: None,
            image_id: None,
            prices: BTreeMap::new(),
            products: Vec::new(),
            created: None,
            updated: None,
            deleted: None,
        }
    }

    /// Whether the bundle has been soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted.is_some()
    }

    /// Price of the bundle in the given currency, if one is defined
    pub fn price_in(&self, currency: &str) -> Option<i64> {
        self.prices.get(currency).copied()
    }

    /// Whether the bundle's availability window has not opened yet
    pub fn starts_after(&self, now: DateTime<Utc>) -> bool {
        self.start.is_some_and(|start| start > now)
    }

    /// Whether the bundle's availability window has already closed
    pub fn ended_by(&self, now: DateTime<Utc>) -> bool {
        self.end.is_some_and(|end| end < now)
    }
}
