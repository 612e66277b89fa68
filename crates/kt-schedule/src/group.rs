//! `GroupCalendar` — the twenty reader schedules of one group for one year.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use kt_core::{BlackoutWindow, CYCLE_LEN, Kathisma, ReaderNumber, days_in_year};

use crate::continuation::next_start_offset;
use crate::reader::{ReaderSchedule, build_reader_schedule};
use crate::rotation::KATHISMA_SEQUENCE;
use crate::{ScheduleError, ScheduleResult};

// ── Reading ──────────────────────────────────────────────────────────────────

/// What a reader reads on a given date.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reading {
    Kathisma(Kathisma),
    /// The date falls inside the Easter blackout window.
    Blackout,
    /// The date is outside the window but has no assignment (only possible
    /// for calendars loaded from an incomplete export).
    Unassigned,
}

// ── GroupCalendar ────────────────────────────────────────────────────────────

/// Reader number → reader schedule for all twenty slots of a group.
///
/// Schedules are stored in a `Vec` indexed by `ReaderNumber::index()`, so
/// iteration always runs reader 1, 2, …, 20 — the order the export relies on.
/// The calendar is produced for every slot whether or not a person currently
/// holds it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupCalendar {
    pub year:         i32,
    /// Kathisma read by reader #1 on January 1.
    pub start_offset: Kathisma,
    pub blackout:     BlackoutWindow,
    pub days_in_year: u32,
    readers:          Vec<ReaderSchedule>,
}

impl GroupCalendar {
    /// Assemble a calendar from already-built schedules (e.g. read back from
    /// an export).  Missing trailing readers get empty schedules; the start
    /// offset is taken from reader #1's January 1 entry, defaulting to 1.
    pub fn from_parts(year: i32, mut readers: Vec<ReaderSchedule>) -> ScheduleResult<Self> {
        let slots = usize::from(CYCLE_LEN);
        if readers.len() > slots {
            return Err(ScheduleError::TooManyReaders(readers.len()));
        }
        readers.resize_with(slots, ReaderSchedule::default);

        let start_offset = readers[0].get(1).unwrap_or(Kathisma::FIRST);
        Ok(Self {
            year,
            start_offset,
            blackout: BlackoutWindow::for_year(year)?,
            days_in_year: days_in_year(year)?,
            readers,
        })
    }

    pub fn reader(&self, reader: ReaderNumber) -> Option<&ReaderSchedule> {
        self.readers.get(reader.index())
    }

    /// `(reader number, schedule)` pairs in ascending reader order.
    pub fn iter(&self) -> impl Iterator<Item = (ReaderNumber, &ReaderSchedule)> + '_ {
        ReaderNumber::all().zip(self.readers.iter())
    }

    pub fn len(&self) -> usize {
        self.readers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readers.is_empty()
    }

    /// What `reader` reads on `date`, or `None` if `date` is not in this
    /// calendar's year.
    pub fn reading(&self, reader: ReaderNumber, date: NaiveDate) -> Option<Reading> {
        if date.year() != self.year {
            return None;
        }
        let schedule = self.reader(reader)?;
        Some(match schedule.get(date.ordinal()) {
            Some(k) => Reading::Kathisma(k),
            None if self.blackout.contains(date) => Reading::Blackout,
            None => Reading::Unassigned,
        })
    }

    /// Start offset for the following year: reader #1 continues where this
    /// year left off.
    pub fn next_start_offset(&self) -> Kathisma {
        self.reader(ReaderNumber::FIRST)
            .map_or(Kathisma::FIRST, next_start_offset)
    }
}

// ── Assembly ─────────────────────────────────────────────────────────────────

/// Build the calendar of `year` with reader #1 starting on `start_offset`.
///
/// Reader `r` starts on `start_offset` advanced by `r - 1` (wrapping), so
/// day-1 kathismas step by one from reader to reader.  All readers share the
/// blackout window and day count of `year`.
///
/// Fails only if `year` cannot be represented as a date.
pub fn build_group_calendar(start_offset: Kathisma, year: i32) -> ScheduleResult<GroupCalendar> {
    let blackout = BlackoutWindow::for_year(year)?;
    let days_in_year = days_in_year(year)?;
    let (blackout_start, blackout_end) = (blackout.start_day(), blackout.end_day());

    let build = |start: Kathisma| {
        build_reader_schedule(start, blackout_start, blackout_end, days_in_year, &KATHISMA_SEQUENCE)
    };
    let starts = ReaderNumber::all().map(|r| start_offset.advance(r.index() as u32));

    #[cfg(not(feature = "parallel"))]
    let readers: Vec<ReaderSchedule> = starts.map(build).collect();

    #[cfg(feature = "parallel")]
    let readers: Vec<ReaderSchedule> = {
        use rayon::prelude::*;

        // Collecting an indexed parallel iterator preserves reader order.
        starts.collect::<Vec<_>>().into_par_iter().map(build).collect()
    };

    debug!(
        year,
        %start_offset,
        easter = %blackout.easter(),
        %blackout,
        days_in_year,
        "built group calendar"
    );

    Ok(GroupCalendar { year, start_offset, blackout, days_in_year, readers })
}
