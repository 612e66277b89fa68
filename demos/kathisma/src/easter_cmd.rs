//! Easter command: table of Easter dates and blackout windows.

use anyhow::{Result, bail};

use kt_core::config::validate_year;
use kt_core::{BlackoutWindow, days_in_year};

use crate::cli::EasterArgs;

pub fn run(args: EasterArgs) -> Result<()> {
    let from = validate_year(args.from)?;
    let to = validate_year(args.to.unwrap_or(from))?;
    if to < from {
        bail!("--to ({to}) is before --from ({from})");
    }

    println!("year  easter      blackout                  days");
    for year in from..=to {
        let window = BlackoutWindow::for_year(year)?;
        println!(
            "{year}  {}  {} ({:>3}..={:>3})  {}",
            window.easter(),
            window,
            window.start_day(),
            window.end_day(),
            days_in_year(year)?,
        );
    }
    Ok(())
}
