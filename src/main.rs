//! assetpress - static asset concatenation, minification and versioning.

#![allow(dead_code)]

mod asset;
mod cli;
mod config;
mod error;
mod filter;
mod logger;
mod pipeline;
mod version;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::PressConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbosity(cli.verbose);

    let config = PressConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Build { names, force } => cli::build::run(&config, names, *force),
        Commands::List => cli::list::run(&config),
        Commands::Clean => cli::clean::run(&config),
    }
}
