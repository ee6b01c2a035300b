//! Display functions for bundles and discounts
//!
//! This module renders catalog bundles and basket discounts for the
//! list and show commands, keeping layout and styling in one place.

use chrono::{DateTime, Utc};
use console::Style;

use crate::basket::DiscountCollection;
use crate::bundle::{Bundle, Stamp};
use crate::money;

macro_rules! display_opt_field {
    ($label:expr, $value:expr) => {
        if let Some(ref v) = $value {
            println!("    {} {}", Style::new().bold().apply_to($label), v);
        }
    };
}

/// Availability status of a bundle at the given instant
pub fn status_text(bundle: &Bundle, now: DateTime<Utc>) -> &'static str {
    if bundle.is_deleted() {
        "retired"
    } else if bundle.starts_after(now) {
        "not yet available"
    } else if bundle.ended_by(now) {
        "expired"
    } else {
        "active"
    }
}

fn styled_status(status: &str) -> console::StyledObject<&str> {
    match status {
        "active" => Style::new().green().apply_to(status),
        "retired" => Style::new().red().apply_to(status),
        _ => Style::new().yellow().apply_to(status),
    }
}

/// Availability window as a single line, when either edge is set
pub fn format_window(bundle: &Bundle) -> Option<String> {
    if bundle.start.is_none() && bundle.end.is_none() {
        return None;
    }
    let edge = |instant: Option<DateTime<Utc>>| match instant {
        Some(at) => at.format("%Y-%m-%d %H:%M").to_string(),
        None => "open".to_string(),
    };
    Some(format!("{} .. {}", edge(bundle.start), edge(bundle.end)))
}

/// Authorship stamp as "2026-06-01 09:00 (by merchandising)"
pub fn format_stamp(stamp: &Stamp) -> String {
    let at = stamp.at.format("%Y-%m-%d %H:%M").to_string();
    match &stamp.by {
        Some(by) => format!("{} (by {})", at, by),
        None => at,
    }
}

/// Display bundle as one line for list output
pub fn display_bundle_line(bundle: &Bundle, now: DateTime<Utc>) {
    let products = bundle.products.len();
    let product_label = if products == 1 { "product" } else { "products" };
    let status = status_text(bundle, now);

    // Pad before styling; escape codes would throw the width off.
    let mut line = format!(
        "  {}  {}  {}",
        Style::new().bold().apply_to(format!("{:>4}", bundle.id)),
        Style::new().bold().yellow().apply_to(&bundle.name),
        Style::new().dim().apply_to(format!("({} {})", products, product_label)),
    );
    if status != "active" {
        line.push_str(&format!("  [{}]", styled_status(status)));
    }
    println!("{}", line);
}

/// Display bundle in detailed format for show output
pub fn display_bundle_detailed(bundle: &Bundle, now: DateTime<Utc>) {
    println!("  {}", Style::new().bold().yellow().apply_to(&bundle.name));
    println!("    {} {}", Style::new().bold().apply_to("Id:"), bundle.id);
    println!(
        "    {} {}",
        Style::new().bold().apply_to("Status:"),
        styled_status(status_text(bundle, now))
    );

    display_opt_field!("Window:", format_window(bundle));
    display_opt_field!("Image:", bundle.image_id);

    println!(
        "    {} {}",
        Style::new().bold().apply_to("Codes allowed:"),
        if bundle.allow_codes { "yes" } else { "no" }
    );

    if !bundle.prices.is_empty() {
        println!("    {}", Style::new().bold().apply_to("Prices:"));
        for (currency, amount) in &bundle.prices {
            println!("      {}", money::format_amount(*amount, currency));
        }
    }

    if !bundle.products.is_empty() {
        println!("    {}", Style::new().bold().apply_to("Products:"));
        for row in &bundle.products {
            let mut line = format!("      {} x product {}", row.quantity, row.product_id);
            if !row.options.is_empty() {
                let options: Vec<String> = row
                    .options
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v))
                    .collect();
                line.push_str(&format!(
                    "  {}",
                    Style::new().dim().apply_to(format!("({})", options.join(", ")))
                ));
            }
            println!("{}", line);
        }
    }

    display_opt_field!("Created:", bundle.created.as_ref().map(format_stamp));
    display_opt_field!("Updated:", bundle.updated.as_ref().map(format_stamp));
    display_opt_field!("Retired:", bundle.deleted.as_ref().map(format_stamp));
}

/// Display the discounts currently applied to a basket
pub fn display_discounts(discounts: &DiscountCollection, currency: &str) {
    if discounts.is_empty() {
        println!("  {}", Style::new().dim().apply_to("No discounts applied."));
        return;
    }
    for discount in discounts.iter() {
        println!(
            "  {}  {}  saves {}",
            Style::new().bold().apply_to(&discount.id),
            discount.name,
            Style::new().green().apply_to(money::format_amount(discount.amount, currency)),
        );
    }
}
