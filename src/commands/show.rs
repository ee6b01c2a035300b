//! Show command implementation

use std::path::PathBuf;

use chrono::Utc;
use inquire::Select;

use crate::bundle::Bundle;
use crate::catalog::Catalog;
use crate::cli::ShowArgs;
use crate::commands::helpers;
use crate::error::{RebundleError, Result};
use crate::ui::display;

/// Run show command
pub fn run(catalog: Option<PathBuf>, args: ShowArgs) -> Result<()> {
    let catalog = helpers::open_catalog(catalog)?;

    let query = match args.bundle {
        Some(query) => query,
        None => match select_bundle_interactively(&catalog)? {
            Some(query) => query,
            None => return Ok(()),
        },
    };

    let bundle = resolve_including_deleted(&catalog, &query)?;

    println!();
    display::display_bundle_detailed(bundle, Utc::now());

    Ok(())
}

/// Resolve a bundle query, allowing soft-deleted bundles by ID
///
/// A retired bundle can still be inspected, which is how a shopkeeper
/// finds out why its discounts stopped applying.
fn resolve_including_deleted<'a>(catalog: &'a Catalog, query: &str) -> Result<&'a Bundle> {
    let found = if query.chars().all(|c| c.is_ascii_digit()) && !query.is_empty() {
        query
            .parse::<u32>()
            .ok()
            .and_then(|id| catalog.by_id_including_deleted(id))
    } else {
        catalog.by_name(query)
    };

    found.ok_or_else(|| RebundleError::BundleNotFound {
        query: query.to_string(),
    })
}

/// Pick any catalog bundle, retired ones marked as such
fn select_bundle_interactively(catalog: &Catalog) -> Result<Option<String>> {
    let items: Vec<String> = catalog
        .all_including_deleted()
        .map(|b| {
            if b.is_deleted() {
                format!("{}: {} (retired)", b.id, b.name)
            } else {
                format!("{}: {}", b.id, b.name)
            }
        })
        .collect();

    if items.is_empty() {
        println!("No bundles in catalog.");
        return Ok(None);
    }

    let selection = match Select::new("Select bundle to show", items)
        .with_starting_cursor(0)
        .with_page_size(10)
        .without_filtering()
        .with_help_message("↑↓ to move, ENTER to select, ESC/q to cancel")
        .prompt_skippable()?
    {
        Some(choice) => choice,
        None => return Ok(None),
    };

    Ok(Some(helpers::selection_query(&selection).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn catalog_with(files: &[(&str, &str)]) -> (TempDir, Catalog) {
        let temp = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(temp.path().join(name), content).unwrap();
        }
        let catalog = Catalog::open(temp.path()).unwrap();
        (temp, catalog)
    }

    #[test]
    fn test_resolve_including_deleted_by_id() {
        let (_temp, catalog) = catalog_with(&[(
            "retired.yaml",
            "id: 4\nname: Retired Pair\ndeleted:\n  at: 2026-01-15T12:00:00Z\n",
        )]);

        let bundle = resolve_including_deleted(&catalog, "4").unwrap();
        assert!(bundle.is_deleted());
    }

    #[test]
    fn test_resolve_by_name_excludes_deleted() {
        let (_temp, catalog) = catalog_with(&[(
            "retired.yaml",
            "id: 4\nname: Retired Pair\ndeleted:\n  at: 2026-01-15T12:00:00Z\n",
        )]);

        let err = resolve_including_deleted(&catalog, "Retired Pair").unwrap_err();
        assert!(matches!(err, RebundleError::BundleNotFound { .. }));
    }

    #[test]
    fn test_resolve_live_bundle_by_name() {
        let (_temp, catalog) = catalog_with(&[("pair.yaml", "id: 3\nname: Summer Pair\n")]);

        let bundle = resolve_including_deleted(&catalog, "Summer Pair").unwrap();
        assert_eq!(bundle.id, 3);
    }
}
