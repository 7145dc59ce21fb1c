//! Yardstick - aggregate tonnage and concrete volume estimator
//!
//! A CLI for the material calculators, reading materials from the site's
//! content file.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("YARDSTICK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // a subscriber may already be set when embedded; keep going without ours
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
