//! rebundle - discount bundle reconciler
//!
//! A command line tool that keeps shop-basket discounts consistent with the
//! bundle references shoppers attach to their orders, replaying the same
//! reconciliation pass the shop runs on every order-lifecycle event.

use clap::Parser;

mod basket;
mod bundle;
mod catalog;
mod cli;
mod commands;
mod discount;
mod error;
mod events;
mod money;
mod progress;
mod reconcile;
mod ui;
mod validate;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Reconcile(args) => {
            commands::reconcile::run(cli.catalog, cli.basket, cli.verbose, args)
        }
        Commands::Attach(args) => commands::attach::run(cli.catalog, cli.basket, cli.verbose, args),
        Commands::Detach(args) => commands::detach::run(cli.catalog, cli.basket, cli.verbose, args),
        Commands::List(args) => commands::list::run(cli.catalog, cli.verbose, args),
        Commands::Show(args) => commands::show::run(cli.catalog, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
