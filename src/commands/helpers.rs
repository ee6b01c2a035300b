//! Command helper utilities

use std::path::PathBuf;

use crate::bundle::Bundle;
use crate::catalog::Catalog;
use crate::error::{RebundleError, Result};
use crate::progress::ScanSpinner;

/// Resolve catalog directory from optional argument
///
/// If a catalog path is provided, use it. Otherwise, resolve to
/// `catalog` under the current directory.
pub fn resolve_catalog_path(catalog: Option<PathBuf>) -> PathBuf {
    catalog.unwrap_or_else(|| PathBuf::from("catalog"))
}

/// Resolve basket file from optional argument
///
/// If a basket path is provided, use it. Otherwise, resolve to
/// `basket.yaml` under the current directory.
pub fn resolve_basket_path(basket: Option<PathBuf>) -> PathBuf {
    basket.unwrap_or_else(|| PathBuf::from("basket.yaml"))
}

/// Open the catalog behind a scan spinner
pub fn open_catalog(catalog: Option<PathBuf>) -> Result<Catalog> {
    let root = resolve_catalog_path(catalog);

    let spinner = ScanSpinner::start("Scanning catalog...");
    match Catalog::open(root) {
        Ok(catalog) => {
            spinner.finish();
            Ok(catalog)
        }
        Err(e) => {
            spinner.abandon();
            Err(e)
        }
    }
}

/// Resolve a bundle query to a live catalog bundle
///
/// An all-digits query is looked up by ID, anything else by exact name.
pub fn resolve_bundle<'a>(catalog: &'a Catalog, query: &str) -> Result<&'a Bundle> {
    let found = if query.chars().all(|c| c.is_ascii_digit()) && !query.is_empty() {
        query.parse::<u32>().ok().and_then(|id| catalog.by_id(id))
    } else {
        catalog.by_name(query)
    };

    found.ok_or_else(|| RebundleError::BundleNotFound {
        query: query.to_string(),
    })
}

/// Map a "id: name" menu item back to the bundle ID query
pub fn selection_query(item: &str) -> &str {
    item.split(':').next().unwrap_or(item).trim()
}
