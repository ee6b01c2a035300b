use clap::Parser;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show a bundle by id:\n    rebundle show 3\n\n\
                  Show a bundle by name:\n    rebundle show \"Summer Pair\"\n\n\
                  Select a bundle interactively:\n    rebundle show")]
pub struct ShowArgs {
    /// Bundle id or exact name to show (if omitted, shows interactive menu)
    pub bundle: Option<String>,
}
