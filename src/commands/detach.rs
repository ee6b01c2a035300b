//! Detach command implementation
//!
//! Removes bundle references and their discounts from the basket, then
//! replays the assembler event so the remaining references converge
//! again. The argument names either one reference key or a bundle ID;
//! an ID detaches every reference pointing at that bundle.

use std::path::PathBuf;

use chrono::Utc;
use inquire::{Confirm, MultiSelect};

use crate::basket::{store, Basket};
use crate::catalog::Catalog;
use crate::cli::DetachArgs;
use crate::commands::helpers;
use crate::discount::SavingsFactory;
use crate::error::{RebundleError, Result};
use crate::events::{self, EventRegistry, ASSEMBLER_UPDATE};
use crate::reconcile::{is_reference_key, Reconciler};
use crate::ui;
use crate::validate::StandardValidator;

/// Run detach command
pub fn run(
    catalog: Option<PathBuf>,
    basket: Option<PathBuf>,
    verbose: bool,
    args: DetachArgs,
) -> Result<()> {
    let catalog = helpers::open_catalog(catalog)?;
    let basket_path = helpers::resolve_basket_path(basket);
    let mut basket = store::load(&basket_path)?;

    let keys = match args.reference {
        Some(query) => resolve_detach_keys(&basket, &query)?,
        None => select_references_interactively(&basket, &catalog)?,
    };

    if keys.is_empty() {
        return Ok(());
    }

    if !args.yes && !confirm_detach(&keys)? {
        println!("Cancelled.");
        return Ok(());
    }

    for key in &keys {
        basket.remove_reference(key);
        basket.discounts.remove(key);
    }

    // Remaining references are reconciled in one pass.
    let validator = StandardValidator::at(Utc::now());
    let factory = SavingsFactory::new();
    let reconciler = Reconciler::new(&catalog, &validator, &factory);

    let mut registry = EventRegistry::new();
    events::register_order_events(&mut registry, &reconciler)?;

    let mut warnings = ui::ConsoleWarnings::new();
    registry.dispatch(ASSEMBLER_UPDATE, &mut basket, &mut warnings)?;

    store::save(&basket, &basket_path)?;

    let reference_label = if keys.len() == 1 {
        "reference"
    } else {
        "references"
    };
    ui::success(&format!("Detached {} {}", keys.len(), reference_label));

    if verbose {
        ui::display::display_discounts(&basket.discounts, &basket.currency);
    }

    Ok(())
}

/// Resolve the detach argument to reference keys
///
/// A `bundle_<n>` argument names one reference. An all-digits argument
/// names a bundle ID and resolves to every reference pointing at that
/// bundle, however many slots it occupies.
fn resolve_detach_keys(basket: &Basket, query: &str) -> Result<Vec<String>> {
    if is_reference_key(query) {
        if basket.metadata_value(query).is_none() {
            return Err(RebundleError::ReferenceNotFound {
                key: query.to_string(),
            });
        }
        return Ok(vec![query.to_string()]);
    }

    if let Ok(id) = query.parse::<u32>() {
        let keys: Vec<String> = basket
            .metadata
            .iter()
            .filter(|(key, value)| is_reference_key(key) && value.as_bundle_id() == Some(id))
            .map(|(key, _)| key.clone())
            .collect();
        if keys.is_empty() {
            return Err(RebundleError::NoReferencesToBundle { id });
        }
        return Ok(keys);
    }

    Err(RebundleError::ReferenceNotFound {
        key: query.to_string(),
    })
}

/// Pick reference keys from the basket metadata
///
/// Works from raw keys on purpose: a malformed reference can always
/// be detached even though reconciliation refuses to run with it.
fn select_references_interactively(basket: &Basket, catalog: &Catalog) -> Result<Vec<String>> {
    let items: Vec<String> = basket
        .metadata
        .iter()
        .filter(|(key, _)| is_reference_key(key))
        .map(|(key, value)| match value.as_bundle_id() {
            Some(id) => match catalog.by_id_including_deleted(id) {
                Some(bundle) => format!("{} → {} ({})", key, id, bundle.name),
                None => format!("{} → {}", key, id),
            },
            None => format!("{} → <invalid>", key),
        })
        .collect();

    if items.is_empty() {
        println!("No bundle references on basket.");
        return Ok(vec![]);
    }

    println!();

    let selection = match MultiSelect::new("Select references to detach", items)
        .with_page_size(10)
        .with_help_message(
            "  ↑↓ navigate  space select  enter confirm  type to filter  q/esc cancel",
        )
        .prompt_skippable()?
    {
        Some(sel) => sel,
        None => return Ok(vec![]),
    };

    // Map display strings back to reference keys (key is part before " →")
    Ok(selection.iter().map(|s| selection_key(s).to_string()).collect())
}

/// Map a "bundle_0 → 3 (Name)" menu item back to the reference key
fn selection_key(item: &str) -> &str {
    item.split_whitespace().next().unwrap_or(item)
}

/// Confirm detachment with user, showing what would be done
fn confirm_detach(keys: &[String]) -> Result<bool> {
    println!("\nThe following reference(s) will be detached:");
    for key in keys {
        println!("  - {key}");
    }
    println!();

    Ok(Confirm::new("Proceed with detach?")
        .with_default(true)
        .with_help_message("Press Enter to confirm, or 'n' to cancel")
        .prompt()?)
}
