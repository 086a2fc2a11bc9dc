//! uu-index CLI Binary
//!
//! Command-line interface for the course content preprocessor.

use anyhow::Context;
use clap::Parser;
use std::process;
use uu_index::logging::init_logging;
use uu_index::tooling::cli::{Cli, CliContext};

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let context = CliContext::new(cli.content.clone(), &cli.config, cli.verbose)
        .context("initializing configuration")?;

    let logging = context
        .config()
        .logging
        .clone()
        .with_overrides(&cli.logging_overrides());
    init_logging(Some(&logging)).context("initializing logging")?;

    if context.config_file().is_none() {
        tracing::warn!(
            path = %cli.config.display(),
            "Config file not found, using defaults"
        );
    }

    let output = context.execute(&cli.command)?;
    Ok(output)
}
