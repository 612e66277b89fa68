//! kathisma — generate and query group calendars of the Psalter rotation.
//!
//! Twenty readers each read one kathisma a day, stepping through all twenty
//! in turn, silent from three days before Orthodox Easter to six days after.
//!
//! ```text
//! kathisma generate --year 2025 --output ./calendar
//! kathisma today --reader 7
//! kathisma easter --from 2024 --to 2030
//! ```

mod cli;
mod config;
mod easter_cmd;
mod generate;
mod logging;
mod today;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::run(args),
        Command::Today(args) => today::run(args),
        Command::Easter(args) => easter_cmd::run(args),
    }
}
