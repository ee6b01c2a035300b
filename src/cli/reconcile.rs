use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};

/// Order lifecycle event to replay against the basket.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// A bundle reference was just added to the basket
    BundleAdd,
    /// The order assembler recalculated the basket
    AssemblerUpdate,
    /// The order is about to be created
    CreateValidate,
}

impl EventKind {
    /// The registered event name this variant dispatches as.
    pub fn event_name(&self) -> &'static str {
        match self {
            EventKind::BundleAdd => crate::events::BUNDLE_ADD,
            EventKind::AssemblerUpdate => crate::events::ASSEMBLER_UPDATE,
            EventKind::CreateValidate => crate::events::CREATE_VALIDATE,
        }
    }
}

/// Arguments for the reconcile command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Reconcile before order creation:\n    rebundle reconcile\n\n\
                  Replay the assembler update event:\n    rebundle reconcile -e assembler-update\n\n\
                  Evaluate availability windows at a fixed instant:\n    rebundle reconcile --at 2026-07-01T00:00:00Z\n\n\
                  Report changes without saving the basket:\n    rebundle reconcile --dry-run")]
pub struct ReconcileArgs {
    /// Order lifecycle event to replay
    #[arg(long, short = 'e', value_enum, default_value = "create-validate")]
    pub event: EventKind,

    /// Evaluate bundle availability at this instant instead of now (RFC 3339)
    #[arg(long)]
    pub at: Option<DateTime<Utc>>,

    /// Report what would change without saving the basket
    #[arg(long)]
    pub dry_run: bool,
}
