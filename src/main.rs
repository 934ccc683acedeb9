//! dnf-autoclean - kernel retention for dnf-based systems
//!
//! Keeps the newest installed kernel versions, removes every package built
//! from older versions through dnf, and never removes the running kernel.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod inventory;
mod logging;
mod operations;
mod policy;
mod resolver;
mod system;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::Cli;
use config::{FileConfig, Settings};
use error::Result;

fn run(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        return commands::completions::run(shell);
    }

    logging::init(cli.verbose);

    let file = FileConfig::load(cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, file)?;

    if cli.health {
        commands::health::run(&settings)
    } else {
        commands::clean::run(&settings)
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
