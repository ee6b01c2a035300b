//! Reconcile command implementation
//!
//! Replays one order-lifecycle event against the basket on disk. The
//! basket is saved only when the pass added or removed a discount; a
//! failed pass leaves the file untouched.

use std::path::PathBuf;

use chrono::Utc;

use crate::basket::store;
use crate::cli::ReconcileArgs;
use crate::commands::helpers;
use crate::discount::SavingsFactory;
use crate::error::Result;
use crate::events::{self, EventRegistry};
use crate::reconcile::Reconciler;
use crate::ui;
use crate::validate::StandardValidator;

/// Run reconcile command
pub fn run(
    catalog: Option<PathBuf>,
    basket: Option<PathBuf>,
    verbose: bool,
    args: ReconcileArgs,
) -> Result<()> {
    let catalog = helpers::open_catalog(catalog)?;
    let basket_path = helpers::resolve_basket_path(basket);
    let mut basket = store::load(&basket_path)?;

    let validator = StandardValidator::at(args.at.unwrap_or_else(Utc::now));
    let factory = SavingsFactory::new();
    let reconciler = Reconciler::new(&catalog, &validator, &factory);

    let mut registry = EventRegistry::new();
    events::register_order_events(&mut registry, &reconciler)?;

    let mut warnings = ui::ConsoleWarnings::new();
    let outcome = registry.dispatch(args.event.event_name(), &mut basket, &mut warnings)?;

    if verbose {
        ui::display_outcome_detail(&outcome);
    }

    if args.dry_run {
        ui::info(&format!(
            "Dry run, basket not saved: {}",
            ui::outcome_summary(&outcome)
        ));
        return Ok(());
    }

    if outcome.changed() {
        store::save(&basket, &basket_path)?;
    }
    ui::success(&ui::outcome_summary(&outcome));

    Ok(())
}
