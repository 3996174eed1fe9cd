//! relink - link normalizer for the compound knowledge base static site.

mod address;
mod cli;
mod config;
mod core;
mod logger;
mod pipeline;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::RelinkConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = RelinkConfig::load(&cli)?;

    cli::fix::run(&config, cli.is_dry_run()).map(|_| ())
}
