//! Monetary amounts in integer minor units
//!
//! All prices and discount amounts are carried as `i64` minor units
//! (pence, cents) to keep arithmetic exact. Conversion to a decimal
//! form happens only at the display edge.

/// Total for one basket line: unit price times quantity.
pub fn line_total(unit_price: i64, quantity: u32) -> i64 {
    unit_price.saturating_mul(i64::from(quantity))
}

/// Savings of a bundle against the sum of its lines, floored at zero.
///
/// A bundle priced above its component lines yields no saving rather
/// than a negative discount.
pub fn savings(lines_total: i64, bundle_price: i64) -> i64 {
    lines_total.saturating_sub(bundle_price).max(0)
}

/// Formats a minor-unit amount as a decimal string with currency code.
///
/// `1099` with `"GBP"` renders as `10.99 GBP`. Negative amounts keep
/// their sign in front of the whole part.
pub fn format_amount(amount: i64, currency: &str) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{sign}{}.{:02} {currency}", abs / 100, abs % 100)
}
