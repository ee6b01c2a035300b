//! List command implementation
//!
//! This command lists catalog bundles with their status, product
//! counts and, in detailed mode, prices and availability windows.

use std::path::PathBuf;

use chrono::Utc;

use crate::bundle::Bundle;
use crate::catalog::Catalog;
use crate::cli::ListArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::ui;
use crate::ui::display;

/// Run list command
pub fn run(catalog: Option<PathBuf>, verbose: bool, args: ListArgs) -> Result<()> {
    let catalog = helpers::open_catalog(catalog)?;

    if verbose {
        ui::info(&format!("Catalog: {}", catalog.root().display()));
    }

    list_bundles(&catalog, args)
}

/// List bundles in the catalog
fn list_bundles(catalog: &Catalog, args: ListArgs) -> Result<()> {
    let bundles: Vec<&Bundle> = if args.deleted {
        catalog.all_including_deleted().collect()
    } else {
        catalog.all().collect()
    };

    if bundles.is_empty() {
        println!("No bundles in catalog.");
        return Ok(());
    }

    println!("Catalog bundles ({}):", bundles.len());
    println!();

    let now = Utc::now();
    for bundle in &bundles {
        if args.detailed {
            display::display_bundle_detailed(bundle, now);
            println!();
        } else {
            display::display_bundle_line(bundle, now);
        }
    }

    Ok(())
}
