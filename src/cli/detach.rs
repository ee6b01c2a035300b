use clap::Parser;

/// Arguments for the detach command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Detach one reference:\n    rebundle detach bundle_0\n\n\
                  Detach every reference to a bundle:\n    rebundle detach 3\n\n\
                  Select references interactively:\n    rebundle detach\n\n\
                  Skip the confirmation prompt:\n    rebundle detach bundle_0 -y")]
pub struct DetachArgs {
    /// Reference key (bundle_0) or bundle ID (if omitted, shows interactive menu)
    pub reference: Option<String>,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}
