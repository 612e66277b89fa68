//! `MonthGrid` — one reader's year laid out as day-of-month × month.

use std::fmt;

use chrono::NaiveDate;

use kt_core::{Kathisma, KtError, ReaderNumber, month_day_grouping};
use kt_schedule::{GroupCalendar, Reading};

use crate::OutputResult;

pub const MONTH_HEADERS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// One grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    Kathisma(Kathisma),
    /// Inside the Easter blackout window.
    Blackout,
    /// No such date (e.g. February 30) or no assignment.
    #[default]
    Empty,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Kathisma(k) => write!(f, "{k}"),
            Cell::Blackout => f.write_str("-"),
            Cell::Empty => Ok(()),
        }
    }
}

/// 31 rows (day of month) by 12 columns (month).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthGrid {
    pub reader: ReaderNumber,
    pub year:   i32,
    cells:      [[Cell; 12]; 31],
}

impl MonthGrid {
    /// Lay out `reader`'s schedule from `calendar`.
    pub fn build(calendar: &GroupCalendar, reader: ReaderNumber) -> OutputResult<Self> {
        let year = calendar.year;
        let jan_1 = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(KtError::DateOutOfRange(year))?;

        let mut cells = [[Cell::Empty; 12]; 31];
        for (month, days) in month_day_grouping(jan_1, year) {
            for day in days {
                let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                    continue;
                };
                cells[day as usize - 1][month as usize - 1] = match calendar.reading(reader, date) {
                    Some(Reading::Kathisma(k)) => Cell::Kathisma(k),
                    Some(Reading::Blackout) => Cell::Blackout,
                    Some(Reading::Unassigned) | None => Cell::Empty,
                };
            }
        }
        Ok(Self { reader, year, cells })
    }

    /// Cell for `day` (1..=31) of `month` (1..=12); `Empty` when out of range.
    pub fn cell(&self, month: u32, day: u32) -> Cell {
        let (Some(m), Some(d)) = (month.checked_sub(1), day.checked_sub(1)) else {
            return Cell::Empty;
        };
        self.cells
            .get(d as usize)
            .and_then(|row| row.get(m as usize))
            .copied()
            .unwrap_or_default()
    }

    /// `(day of month, cells for jan..=dec)` for days 1..=31.
    pub fn rows(&self) -> impl Iterator<Item = (u32, &[Cell; 12])> + '_ {
        (1..).zip(self.cells.iter())
    }
}
