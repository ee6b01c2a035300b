//! Applied discounts
//!
//! Each bundle reference on a basket owns at most one discount, keyed
//! by the reference key itself. The collection preserves insertion
//! order so repeated reconciliation passes keep a stable layout on
//! disk.

use serde::{Deserialize, Serialize};

/// A discount applied to a basket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    /// Identifier, equal to the bundle reference key that produced it
    pub id: String,

    /// Display name, taken from the bundle
    pub name: String,

    /// Amount taken off the basket total, in minor units
    pub amount: i64,

    /// Bundle the discount belongs to
    pub bundle: u32,
}

/// The ordered set of discounts on a basket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountCollection {
    entries: Vec<Discount>,
}

impl DiscountCollection {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a discount
    ///
    /// Callers check [`has`](Self::has) first; the collection never
    /// holds two discounts with the same ID.
    pub fn add(&mut self, discount: Discount) {
        self.entries.push(discount);
    }

    /// Removes the discount with the given ID
    pub fn remove(&mut self, id: &str) -> Option<Discount> {
        let pos = self.entries.iter().position(|d| d.id == id)?;
        Some(self.entries.remove(pos))
    }

    /// Finds a discount by ID
    pub fn find(&self, id: &str) -> Option<&Discount> {
        self.entries.iter().find(|d| d.id == id)
    }

    /// Whether a discount with the given ID exists
    pub fn has(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Iterates the discounts in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Discount> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discount(id: &str, amount: i64) -> Discount {
        Discount {
            id: id.to_string(),
            name: format!("Bundle {id}"),
            amount,
            bundle: 1,
        }
    }

    #[test]
    fn test_add_and_lookup() {
        let mut discounts = DiscountCollection::new();
        discounts.add(discount("bundle_0", 300));
        assert_eq!(discounts.len(), 1);
        assert!(discounts.has("bundle_0"));
        assert_eq!(discounts.find("bundle_0").map(|d| d.amount), Some(300));
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut discounts = DiscountCollection::new();
        discounts.add(discount("bundle_1", 150));
        discounts.add(discount("bundle_0", 450));

        let order: Vec<&str> = discounts.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(order, vec!["bundle_1", "bundle_0"]);
    }

    #[test]
    fn test_remove() {
        let mut discounts = DiscountCollection::new();
        discounts.add(discount("bundle_0", 300));

        let removed = discounts.remove("bundle_0");
        assert_eq!(removed.map(|d| d.amount), Some(300));
        assert!(discounts.is_empty());
        assert!(discounts.remove("bundle_0").is_none());
    }

    #[test]
    fn test_transparent_serialization() {
        let mut discounts = DiscountCollection::new();
        discounts.add(discount("bundle_2", 99));

        let yaml = serde_yaml::to_string(&discounts).unwrap();
        // Serializes as a bare sequence, not a wrapper map.
        assert!(yaml.trim_start().starts_with('-'));

        let parsed: DiscountCollection = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, discounts);
    }
}
