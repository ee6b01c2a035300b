//! Attach command implementation
//!
//! Writes a bundle reference into the next free slot on the basket and
//! replays the bundle.add event so the discount applies immediately
//! when the basket qualifies.

use std::path::PathBuf;

use chrono::Utc;
use inquire::Select;

use crate::basket::store;
use crate::catalog::Catalog;
use crate::cli::AttachArgs;
use crate::commands::helpers;
use crate::discount::SavingsFactory;
use crate::error::Result;
use crate::events::{self, EventRegistry, BUNDLE_ADD};
use crate::money;
use crate::reconcile::{key_for, lowest_free_slot, Reconciler};
use crate::ui;
use crate::validate::{BundleValidator, StandardValidator, Validity};

/// Run attach command
pub fn run(
    catalog: Option<PathBuf>,
    basket: Option<PathBuf>,
    verbose: bool,
    args: AttachArgs,
) -> Result<()> {
    let catalog = helpers::open_catalog(catalog)?;

    let query = match args.bundle {
        Some(query) => query,
        None => match select_bundle_interactively(&catalog)? {
            Some(query) => query,
            None => return Ok(()),
        },
    };
    let bundle = helpers::resolve_bundle(&catalog, &query)?;

    let basket_path = helpers::resolve_basket_path(basket);
    let mut basket = store::load_or_default(&basket_path)?;

    let key = key_for(lowest_free_slot(&basket));
    basket.set_reference(&key, bundle.id);

    let validator = StandardValidator::at(args.at.unwrap_or_else(Utc::now));
    let factory = SavingsFactory::new();
    let reconciler = Reconciler::new(&catalog, &validator, &factory);

    let mut registry = EventRegistry::new();
    events::register_order_events(&mut registry, &reconciler)?;

    let mut warnings = ui::ConsoleWarnings::new();
    registry.dispatch(BUNDLE_ADD, &mut basket, &mut warnings)?;

    match basket.discounts.find(&key) {
        Some(discount) => ui::success(&format!(
            "Attached '{}' as {}: saves {}",
            bundle.name,
            key,
            money::format_amount(discount.amount, &basket.currency)
        )),
        None => {
            // The pass applies no discount to a non-qualifying basket.
            // Tell the shopper why instead of leaving them guessing.
            let note = match validator.validate(bundle, &basket)? {
                Validity::Invalid { reason } => {
                    format!("Attached '{}' as {}, but bundle {}", bundle.name, key, reason)
                }
                Validity::Valid => format!("Attached '{}' as {}", bundle.name, key),
            };
            ui::info(&note);
        }
    }

    if verbose {
        ui::display::display_discounts(&basket.discounts, &basket.currency);
    }

    if args.dry_run {
        ui::info("Dry run, basket not saved");
        return Ok(());
    }

    store::save(&basket, &basket_path)
}

/// Pick a live bundle from the catalog, returning its ID as a query string
fn select_bundle_interactively(catalog: &Catalog) -> Result<Option<String>> {
    let items: Vec<String> = catalog
        .all()
        .map(|b| format!("{}: {}", b.id, b.name))
        .collect();

    if items.is_empty() {
        println!("No bundles in catalog.");
        return Ok(None);
    }

    let selection = match Select::new("Select bundle to attach", items)
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
