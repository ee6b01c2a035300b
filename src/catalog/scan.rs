//! Catalog directory scanning
//!
//! Walks a catalog directory and parses every bundle file found.
//! Scanning is strict: unreadable entries, unparseable bundle files
//! and duplicate bundle IDs all fail the scan rather than thinning
//! the bundle set silently.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::bundle::Bundle;
use crate::error::{RebundleError, Result};

/// File extensions treated as bundle definitions
const BUNDLE_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Scans a directory tree for bundle files
///
/// Returns the bundles keyed by ID, soft-deleted ones included.
pub fn scan_dir(root: &Path) -> Result<BTreeMap<u32, Bundle>> {
    let mut bundles = BTreeMap::new();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(|e| RebundleError::CatalogScanFailed {
            path: root.display().to_string(),
            reason: e.to_string(),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !is_bundle_file(path) {
            continue;
        }

        let bundle = parse_bundle_file(path)?;
        if bundles.contains_key(&bundle.id) {
            return Err(RebundleError::DuplicateBundleId {
                id: bundle.id,
                path: path.display().to_string(),
            });
        }
        bundles.insert(bundle.id, bundle);
    }

    Ok(bundles)
}

fn is_bundle_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| BUNDLE_EXTENSIONS.contains(&ext))
}

fn parse_bundle_file(path: &Path) -> Result<Bundle> {
    let content = fs::read_to_string(path).map_err(|e| RebundleError::CatalogScanFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == "json");

    if is_json {
        serde_json::from_str(&content).map_err(|e| RebundleError::BundleParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    } else {
        serde_yaml::from_str(&content).map_err(|e| RebundleError::BundleParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
