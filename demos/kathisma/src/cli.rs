use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Kathisma rotation calendar generator.
#[derive(Parser)]
#[command(
    name = "kathisma",
    version,
    about = "Generate and query kathisma rotation calendars for a group of twenty readers"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Build a group calendar and export it as CSV.
    Generate(GenerateArgs),
    /// Print what one reader reads on a given day.
    Today(TodayArgs),
    /// Print Orthodox Easter and the blackout window for a range of years.
    Easter(EasterArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Year to generate; overrides `[calendar].year`.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Kathisma read by reader #1 on January 1 (1-20).
    #[arg(short, long)]
    pub start_offset: Option<u8>,

    /// Previous year's `assignments.csv`; reader #1 continues from it.
    #[arg(short, long)]
    pub previous: Option<PathBuf>,

    /// Output directory; overrides `[output].dir`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `today` subcommand.
#[derive(clap::Args)]
pub struct TodayArgs {
    /// Reader number (1-20).
    #[arg(short, long)]
    pub reader: u8,

    /// Date to look up (YYYY-MM-DD); defaults to today.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Kathisma read by reader #1 on January 1 of the date's year.
    #[arg(short, long)]
    pub start_offset: Option<u8>,

    /// Look the reading up in an exported `assignments.csv` instead of
    /// building the calendar.
    #[arg(long)]
    pub calendar: Option<PathBuf>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `easter` subcommand.
#[derive(clap::Args)]
pub struct EasterArgs {
    /// First year (inclusive).
    #[arg(long)]
    pub from: i32,

    /// Last year (inclusive); defaults to `--from`.
    #[arg(long)]
    pub to: Option<i32>,
}
