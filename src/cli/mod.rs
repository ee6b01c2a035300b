//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - reconcile: Reconcile command arguments
//! - attach: Attach command arguments
//! - detach: Detach command arguments
//! - list: List command arguments
//! - show: Show command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod attach;
pub mod completions;
pub mod detach;
pub mod list;
pub mod reconcile;
pub mod show;

pub use attach::AttachArgs;
pub use completions::CompletionsArgs;
pub use detach::DetachArgs;
pub use list::ListArgs;
pub use reconcile::{EventKind, ReconcileArgs};
pub use show::ShowArgs;

/// rebundle - discount bundle reconciler
///
/// Keep basket discounts consistent with the bundle references shoppers add to their orders.
#[derive(Parser, Debug)]
#[command(
    name = "rebundle",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Discount bundle reconciler for shop baskets",
    long_about = "rebundle manages the discount bundles attached to a shop basket. Every order \
                  lifecycle event replays the same reconciliation pass: bundle references that \
                  still qualify keep exactly one discount each, references that no longer \
                  qualify lose theirs with a warning.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  rebundle attach \"Summer Pair\"         \x1b[90m# Attach a bundle to the basket\x1b[0m\n   \
                  rebundle reconcile                    \x1b[90m# Reconcile before order creation\x1b[0m\n   \
                  rebundle reconcile -e assembler-update \x1b[90m# Replay the assembler event\x1b[0m\n   \
                  rebundle detach bundle_0 -y            \x1b[90m# Drop a reference and its discount\x1b[0m\n   \
                  rebundle list --deleted                \x1b[90m# List bundles, retired ones too\x1b[0m\n   \
                  rebundle show 3                        \x1b[90m# Show one bundle in detail\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Catalog directory holding bundle files (defaults to ./catalog)
    #[arg(long, short = 'c', global = true, env = "REBUNDLE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Basket file to operate on (defaults to ./basket.yaml)
    #[arg(long, short = 'b', global = true, env = "REBUNDLE_BASKET")]
    pub basket: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reconcile basket discounts with their bundle references
    Reconcile(ReconcileArgs),

    /// Attach a bundle to the basket
    Attach(AttachArgs),

    /// Detach a bundle reference and its discount from the basket
    Detach(DetachArgs),

    /// List bundles in the catalog
    List(ListArgs),

    /// Show bundle information
    Show(ShowArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
