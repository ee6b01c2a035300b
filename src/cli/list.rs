use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all bundles in the catalog:\n    rebundle list\n\n\
                  Include soft-deleted bundles:\n    rebundle list --deleted\n\n\
                  Show detailed information:\n    rebundle list --detailed\n\n\
                  Use verbose output:\n    rebundle list -v")]
pub struct ListArgs {
    /// Include soft-deleted bundles
    #[arg(long)]
    pub deleted: bool,

    /// Show detailed output
    #[arg(long)]
    pub detailed: bool,
}
