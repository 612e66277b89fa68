//! Calendar model: Easter computus, the blackout window, and year geometry.
//!
//! # Easter
//!
//! ```text
//! a = year mod 4          b = year mod 7          c = year mod 19
//! d = (19c + 15) mod 30
//! e = (2a + 4b - d + 34) mod 7
//! month = (d + e + 114) / 31
//! day   = (d + e + 114) mod 31 + 1        ← Julian calendar date
//! shift = year/100 - year/400 - 2         ← Julian → Gregorian days
//! ```
//!
//! This is the Julian computus followed by the calendar shift, so the result
//! is the Orthodox Easter expressed as a Gregorian date (2024 → May 5,
//! 2025 → April 20).  Between 1900 and 2099 it always falls on April 4 ..=
//! May 8.
//!
//! # Day numbering
//!
//! Schedules are keyed by ordinal day-of-year (`1..=365` or `1..=366`), the
//! same value as [`chrono::Datelike::ordinal`].

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, Days, NaiveDate, TimeDelta};

use crate::{KtError, KtResult};

/// Days of silence before Easter (Holy Thursday onward).
pub const BLACKOUT_DAYS_BEFORE_EASTER: u64 = 3;

/// Days of silence after Easter (through Bright Saturday).
pub const BLACKOUT_DAYS_AFTER_EASTER: u64 = 6;

fn ymd(year: i32, month: u32, day: u32) -> KtResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(KtError::DateOutOfRange(year))
}

// ── Easter ───────────────────────────────────────────────────────────────────

/// The Gregorian date of (Orthodox) Easter in `year`.
///
/// Fails only when the year is outside the range `chrono` can represent.
pub fn easter_date(year: i32) -> KtResult<NaiveDate> {
    let a = year.rem_euclid(4);
    let b = year.rem_euclid(7);
    let c = year.rem_euclid(19);
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34).rem_euclid(7);
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;

    let julian = ymd(year, month as u32, day as u32)?;
    let shift = year.div_euclid(100) - year.div_euclid(400) - 2;
    julian
        .checked_add_signed(TimeDelta::days(i64::from(shift)))
        .ok_or(KtError::DateOutOfRange(year))
}

// ── BlackoutWindow ───────────────────────────────────────────────────────────

/// The inclusive span around Easter during which no kathisma is read.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlackoutWindow {
    /// First silent day (Easter − 3 days).
    pub start: NaiveDate,
    /// Last silent day (Easter + 6 days).
    pub end: NaiveDate,
}

impl BlackoutWindow {
    pub fn from_easter(easter: NaiveDate) -> Self {
        Self {
            start: easter - Days::new(BLACKOUT_DAYS_BEFORE_EASTER),
            end: easter + Days::new(BLACKOUT_DAYS_AFTER_EASTER),
        }
    }

    /// Window for the Easter of `year`.
    pub fn for_year(year: i32) -> KtResult<Self> {
        easter_date(year).map(Self::from_easter)
    }

    /// The Easter this window was derived from.
    pub fn easter(&self) -> NaiveDate {
        self.start + Days::new(BLACKOUT_DAYS_BEFORE_EASTER)
    }

    /// Day-of-year of the first silent day.
    #[inline]
    pub fn start_day(&self) -> u32 {
        self.start.ordinal()
    }

    /// Day-of-year of the last silent day.
    #[inline]
    pub fn end_day(&self) -> u32 {
        self.end.ordinal()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }

    pub fn contains_day(&self, day: u32) -> bool {
        (self.start_day()..=self.end_day()).contains(&day)
    }

    /// Number of silent days (10 for a window built by `from_easter`).
    pub fn len_days(&self) -> u32 {
        ((self.end - self.start).num_days() + 1).max(0) as u32
    }
}

impl fmt::Display for BlackoutWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

// ── Year geometry ────────────────────────────────────────────────────────────

/// Number of days in `year`, measured as the span from Jan 1 of `year` to
/// Jan 1 of `year + 1`.
pub fn days_in_year(year: i32) -> KtResult<u32> {
    let next_year = year.checked_add(1).ok_or(KtError::DateOutOfRange(year))?;
    let start = ymd(year, 1, 1)?;
    let end = ymd(next_year, 1, 1)?;
    Ok((end - start).num_days() as u32)
}

/// The date with ordinal `day` in `year`, if it exists.
pub fn date_of_day(year: i32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_yo_opt(year, day)
}

/// Group the days of `year` by month, walking one day at a time from `start`
/// until the calendar rolls over into `year + 1`.
///
/// Returns `month (1..=12) → [day-of-month, …]` in calendar order.  Days that
/// precede `year` (when `start` lies in an earlier year) are skipped; a
/// `start` after the end of `year` yields an empty map.
pub fn month_day_grouping(start: NaiveDate, year: i32) -> BTreeMap<u32, Vec<u32>> {
    let mut months: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
    for date in start
        .iter_days()
        .skip_while(|d| d.year() < year)
        .take_while(|d| d.year() == year)
    {
        months.entry(date.month()).or_default().push(date.day());
    }
    months
}
