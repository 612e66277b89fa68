//! CSV calendar loader.
//!
//! # CSV format
//!
//! The long-form assignment list written by `kt-output`, one row per
//! (reader, covered day):
//!
//! ```csv
//! reader,day_of_year,date,kathisma
//! 1,1,2025-01-01,1
//! 1,2,2025-01-02,2
//! 2,1,2025-01-01,2
//! ```
//!
//! All rows must belong to the same year, and `day_of_year` must match
//! `date`.  Readers absent from the file receive an empty schedule.

use std::io::Read;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use kt_core::{CYCLE_LEN, Kathisma, ReaderNumber};

use crate::{GroupCalendar, ReaderSchedule, ScheduleError, ScheduleResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct AssignmentRecord {
    reader:      i64,
    day_of_year: u32,
    date:        String,
    kathisma:    i64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a group calendar from an `assignments.csv` export.
pub fn load_calendar_csv(path: &Path) -> ScheduleResult<GroupCalendar> {
    let file = std::fs::File::open(path)
        .map_err(ScheduleError::Io)?;
    load_calendar_reader(file)
}

/// Like [`load_calendar_csv`] but accepts any `Read` source.
pub fn load_calendar_reader<R: Read>(reader: R) -> ScheduleResult<GroupCalendar> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut readers: Vec<ReaderSchedule> = vec![ReaderSchedule::new(); usize::from(CYCLE_LEN)];
    let mut year: Option<i32> = None;

    for result in csv_reader.deserialize::<AssignmentRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;

        let date = parse_date(&row.date)?;
        if date.ordinal() != row.day_of_year {
            return Err(ScheduleError::Parse(format!(
                "day_of_year {} does not match date {date} (day {})",
                row.day_of_year,
                date.ordinal()
            )));
        }
        match year {
            None => year = Some(date.year()),
            Some(y) if y != date.year() => {
                return Err(ScheduleError::Parse(format!(
                    "mixed years in calendar: {y} and {}",
                    date.year()
                )));
            }
            Some(_) => {}
        }

        let reader = ReaderNumber::try_from(row.reader)?;
        let kathisma = Kathisma::try_from(row.kathisma)?;
        readers[reader.index()].insert(row.day_of_year, kathisma);
    }

    let year = year.ok_or_else(|| ScheduleError::Parse("calendar has no assignments".into()))?;
    GroupCalendar::from_parts(year, readers)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_date(s: &str) -> ScheduleResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| {
        ScheduleError::Parse(format!("invalid date {s:?}: expected YYYY-MM-DD ({e})"))
    })
}
