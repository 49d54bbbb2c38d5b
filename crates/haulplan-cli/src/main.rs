//! Haulplan - transport vehicle selection and fleet cost estimation
//!
//! A CLI tool that recommends vehicle classes for a cargo shipment and sizes the fleet.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
