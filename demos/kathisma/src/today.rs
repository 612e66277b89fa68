//! Today command: one reader's kathisma for one date.

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use tracing::info;

use kt_core::{Kathisma, ReaderNumber};
use kt_schedule::{GroupCalendar, Reading, build_group_calendar, load_calendar_csv};

use crate::cli::TodayArgs;
use crate::config::KathismaConfig;

pub fn run(args: TodayArgs) -> Result<()> {
    let reader = ReaderNumber::new(args.reader).context("invalid --reader")?;
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    let calendar: GroupCalendar = match &args.calendar {
        Some(path) => load_calendar_csv(path)
            .with_context(|| format!("failed to load calendar: {}", path.display()))?,
        None => {
            let start_offset = match args.start_offset {
                Some(n) => Kathisma::new(n).context("invalid --start-offset")?,
                None => KathismaConfig::load(args.config.as_deref())?.group_default_offset()?,
            };
            build_group_calendar(start_offset, date.year())?
        }
    };
    info!(%reader, %date, year = calendar.year, "looking up reading");

    let reading = calendar.reading(reader, date).with_context(|| {
        format!("{date} is not covered by the {} calendar", calendar.year)
    })?;
    println!("{date}  reader {reader}: {}", describe(reading));
    Ok(())
}

fn describe(reading: Reading) -> String {
    match reading {
        Reading::Kathisma(k) => format!("kathisma {k}"),
        Reading::Blackout => "no reading (Easter period)".to_string(),
        Reading::Unassigned => "no reading".to_string(),
    }
}
