//! Generate command: resolve the start offset, build, export.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use kt_core::{CalendarConfig, Kathisma};
use kt_output::{CsvWriter, export_group_calendar};
use kt_schedule::{OffsetSource, build_group_calendar, load_calendar_csv, resolve_start_offset};

use crate::cli::GenerateArgs;
use crate::config::KathismaConfig;

pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();
    let config = KathismaConfig::load(args.config.as_deref())?;

    let year = args
        .year
        .or(config.calendar.year)
        .context("no year given: pass --year or set [calendar].year")?;
    let explicit = args
        .start_offset
        .map(Kathisma::new)
        .transpose()
        .context("invalid --start-offset")?;

    let previous = match &args.previous {
        Some(path) => {
            let calendar = load_calendar_csv(path)
                .with_context(|| format!("failed to load previous calendar: {}", path.display()))?;
            if calendar.year != year - 1 {
                warn!(
                    path = %path.display(),
                    found = calendar.year,
                    expected = year - 1,
                    "previous calendar is not for the preceding year, ignoring it"
                );
            }
            Some(calendar)
        }
        None => None,
    };

    let (start_offset, source) =
        resolve_start_offset(year, explicit, previous.as_ref(), config.group_default_offset()?);
    let request = CalendarConfig::new(year, start_offset.get())?;

    let calendar = build_group_calendar(request.start_offset, request.year)
        .with_context(|| format!("failed to build calendar for {year}"))?;

    let dir = args.output.unwrap_or(config.output.dir);
    info!(dir = %dir.display(), "writing CSV");
    let mut writer = CsvWriter::new(&dir)
        .with_context(|| format!("failed to create output in {}", dir.display()))?;
    let summary = export_group_calendar(&mut writer, &calendar)?;

    let next = calendar.next_start_offset();
    println!("Calendar {year}");
    println!("  start offset   {start_offset} ({})", describe(source));
    println!("  Easter         {}", request.easter()?);
    println!("  blackout       {}", request.blackout()?);
    println!("  readers        {}", summary.readers);
    println!("  assignments    {}", summary.assignments);
    println!("  written to     {}", dir.display());
    match request.next_year(next) {
        Ok(following) => println!(
            "  next year      {} starts at kathisma {}",
            following.year, following.start_offset
        ),
        Err(e) => warn!(error = %e, "no continuation available"),
    }
    Ok(())
}

fn describe(source: OffsetSource) -> String {
    match source {
        OffsetSource::Explicit => "from --start-offset".to_string(),
        OffsetSource::Continued { from_year } => format!("continued from {from_year}"),
        OffsetSource::GroupDefault => "group default".to_string(),
    }
}
