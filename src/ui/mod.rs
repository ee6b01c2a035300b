//! Console presentation layer
//!
//! This module handles:
//! - Styled status lines for command output
//! - Streaming reconciliation warnings to stderr
//!
//! Bundle and basket rendering lives in the `display` submodule. All
//! warning output goes through the WarningSink trait, so commands can
//! stream warnings as a pass raises them while tests collect them.

pub mod display;

use console::Style;

use crate::reconcile::{PassOutcome, WarningSink};

/// Print a success line with a green check mark
pub fn success(message: &str) {
    println!("{} {}", Style::new().bold().green().apply_to("✓"), message);
}

/// Print a dim informational line
pub fn info(message: &str) {
    println!("{}", Style::new().dim().apply_to(message));
}

/// Print a warning line to stderr
pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        Style::new().bold().yellow().apply_to("warning:"),
        message
    );
}

/// Warning sink that streams styled warnings to stderr as they arrive
///
/// The shopper sees each warning the moment the pass raises it, not
/// in a batch after the basket is saved.
#[derive(Default)]
pub struct ConsoleWarnings {
    count: usize,
}

impl ConsoleWarnings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of warnings emitted so far
    pub fn count(&self) -> usize {
        self.count
    }
}

impl WarningSink for ConsoleWarnings {
    fn warn(&mut self, message: &str) {
        warning(message);
        self.count += 1;
    }
}

/// Render a one-line pass summary, e.g. "1 added, 2 removed, 0 unchanged"
pub fn outcome_summary(outcome: &PassOutcome) -> String {
    format!(
        "{} added, {} removed, {} unchanged",
        outcome.added.len(),
        outcome.removed.len(),
        outcome.unchanged.len()
    )
}

/// List each reference key a pass touched, grouped by what happened
pub fn display_outcome_detail(outcome: &PassOutcome) {
    for key in &outcome.added {
        println!("  {} {}", Style::new().green().apply_to("+"), key);
    }
    for key in &outcome.removed {
        println!("  {} {}", Style::new().red().apply_to("-"), key);
    }
    for key in &outcome.unchanged {
        println!("  {} {}", Style::new().dim().apply_to("="), key);
    }
}
