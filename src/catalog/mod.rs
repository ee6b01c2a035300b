//! Bundle catalog
//!
//! The catalog is the read side of bundle storage: a directory of
//! bundle files loaded once at startup and queried in memory. Lookups
//! exclude soft-deleted bundles unless a method says otherwise.

pub mod scan;

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::bundle::Bundle;
use crate::error::{RebundleError, Result};

/// Batch read access to bundles, as reconciliation needs it
///
/// Reconciliation loads every referenced bundle up front in one batch
/// before touching the basket. Implementations return only the bundles
/// they can supply; callers decide what a missing ID means.
pub trait BundleRepository {
    /// Loads the given bundle IDs in one batch
    ///
    /// IDs the repository cannot supply are absent from the result map.
    fn load_by_ids(&self, ids: &BTreeSet<u32>) -> Result<BTreeMap<u32, Bundle>>;
}

/// A directory-backed bundle catalog
#[derive(Debug)]
pub struct Catalog {
    root: PathBuf,
    bundles: BTreeMap<u32, Bundle>,
}

impl Catalog {
    /// Opens a catalog directory, scanning it eagerly
    ///
    /// Fails when the directory does not exist or any bundle file in
    /// it is unreadable, malformed or shares an ID with another.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(RebundleError::CatalogNotFound {
                path: root.display().to_string(),
            });
        }
        let bundles = scan::scan_dir(&root)?;
        Ok(Self { root, bundles })
    }

    /// Directory the catalog was opened from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Looks up a live bundle by ID
    pub fn by_id(&self, id: u32) -> Option<&Bundle> {
        self.bundles.get(&id).filter(|b| !b.is_deleted())
    }

    /// Looks up a bundle by ID, soft-deleted ones included
    pub fn by_id_including_deleted(&self, id: u32) -> Option<&Bundle> {
        self.bundles.get(&id)
    }

    /// Looks up a live bundle by exact name
    pub fn by_name(&self, name: &str) -> Option<&Bundle> {
        self.all().find(|b| b.name == name)
    }

    /// Iterates live bundles in ID order
    pub fn all(&self) -> impl Iterator<Item = &Bundle> {
        self.bundles.values().filter(|b| !b.is_deleted())
    }

    /// Iterates every bundle in ID order, soft-deleted ones included
    pub fn all_including_deleted(&self) -> impl Iterator<Item = &Bundle> {
        self.bundles.values()
    }
}

impl BundleRepository for Catalog {
    /// Batch load for reconciliation
    ///
    /// Soft-deleted bundles are supplied here on purpose: a basket
    /// holding a reference to a deleted bundle must reconcile to a
    /// warning and a removal, not to a hard unknown-bundle failure.
    fn load_by_ids(&self, ids: &BTreeSet<u32>) -> Result<BTreeMap<u32, Bundle>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.bundles.get(id).map(|b| (*id, b.clone())))
            .collect())
    }
}
