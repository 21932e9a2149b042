//! Parcoords CLI - dataset inspection and figure export.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Inspect { load, json } => {
            commands::inspect::run(load, cli.config.as_deref(), json, cli.verbose)
        }

        Commands::Figure {
            load,
            features,
            target,
            colorscale,
            output,
        } => commands::figure::run(
            load,
            cli.config.as_deref(),
            features,
            target,
            colorscale,
            output,
            cli.verbose,
        ),

        Commands::Palettes { count, json } => {
            commands::palettes::run(cli.config.as_deref(), count, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
