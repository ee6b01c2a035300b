use chrono::{DateTime, Utc};
use clap::Parser;

/// Arguments for the attach command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Attach a bundle by id:\n    rebundle attach 3\n\n\
                  Attach a bundle by name:\n    rebundle attach \"Summer Pair\"\n\n\
                  Select a bundle interactively:\n    rebundle attach\n\n\
                  Preview without saving the basket:\n    rebundle attach 3 --dry-run")]
pub struct AttachArgs {
    /// Bundle to attach: numeric id or exact name (if omitted, shows interactive menu)
    pub bundle: Option<String>,

    /// Evaluate bundle availability at this instant instead of now (RFC 3339)
    #[arg(long)]
    pub at: Option<DateTime<Utc>>,

    /// Report what would change without saving the basket
    #[arg(long)]
    pub dry_run: bool,
}
