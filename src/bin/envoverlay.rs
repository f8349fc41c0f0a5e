//! envoverlay CLI Binary
//!
//! Shows the environment key, value and source of every declared flag.

use anyhow::Context;
use clap::Parser;
use envoverlay::logging::init_logging;
use envoverlay::tooling::cli::{load_config, run, Cli};
use envoverlay::ProcessEnv;
use std::process;

fn execute(cli: &Cli) -> anyhow::Result<String> {
    let config = load_config(cli).context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;
    Ok(run(cli, &ProcessEnv)?)
}

fn main() {
    let cli = Cli::parse();

    match execute(&cli) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
