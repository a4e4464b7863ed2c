//! Sheen CLI
//!
//! Developer tool for theme authors:
//!
//! - `sheen dump` prints a parsed color table
//! - `sheen resolve` resolves one role for a given interaction state
//! - `sheen simulate` runs a hover transition frame by frame

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;

    match &cli.command {
        Command::Dump(args) => commands::dump(&config, args),
        Command::Resolve(args) => commands::resolve(&config, args),
        Command::Simulate(args) => commands::simulate(&config, args),
    }
}
