//! `export_group_calendar` — drives an `OutputWriter` over a `GroupCalendar`.

use tracing::{debug, info};

use kt_core::{KtError, date_of_day};
use kt_schedule::GroupCalendar;

use crate::writer::OutputWriter;
use crate::{AssignmentRow, MonthGrid, OutputError, OutputResult};

/// Counts reported after an export.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub readers:     usize,
    pub assignments: usize,
}

/// Write every reader of `calendar`, in reader order, then `finish` the
/// writer.
pub fn export_group_calendar<W: OutputWriter>(
    writer:   &mut W,
    calendar: &GroupCalendar,
) -> OutputResult<ExportSummary> {
    let mut summary = ExportSummary::default();

    for (reader, schedule) in calendar.iter() {
        let rows = schedule
            .iter()
            .map(|(day_of_year, kathisma)| {
                let date = date_of_day(calendar.year, day_of_year)
                    .ok_or(KtError::DateOutOfRange(calendar.year))?;
                Ok::<_, OutputError>(AssignmentRow { reader, day_of_year, date, kathisma })
            })
            .collect::<OutputResult<Vec<_>>>()?;

        writer.write_assignments(&rows)?;
        writer.write_grid(&MonthGrid::build(calendar, reader)?)?;
        debug!(%reader, assignments = rows.len(), "exported reader");

        summary.readers += 1;
        summary.assignments += rows.len();
    }

    writer.finish()?;
    info!(
        year = calendar.year,
        readers = summary.readers,
        assignments = summary.assignments,
        "exported group calendar"
    );
    Ok(summary)
}
