//! Validated generation inputs.
//!
//! The engine itself is total: it accepts any representable year and any
//! [`Kathisma`].  Range checks happen once, here, at the boundary where raw
//! numbers arrive from a configuration file, a command line, or a request.

use chrono::NaiveDate;

use crate::calendar::{self, BlackoutWindow};
use crate::{Kathisma, KtError, KtResult};

/// Years accepted by [`CalendarConfig::new`].
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2999;

/// Inputs for one group-calendar generation.
///
/// Typically assembled by the application from a TOML file plus command-line
/// overrides, then handed to `kt_schedule::build_group_calendar`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarConfig {
    /// Gregorian year to generate.
    pub year: i32,
    /// Kathisma read by reader #1 on January 1.
    pub start_offset: Kathisma,
}

impl CalendarConfig {
    /// Validate a raw `(year, start_offset)` pair.
    pub fn new(year: i32, start_offset: u8) -> KtResult<Self> {
        Ok(Self {
            year: validate_year(year)?,
            start_offset: Kathisma::new(start_offset)?,
        })
    }

    pub fn easter(&self) -> KtResult<NaiveDate> {
        calendar::easter_date(self.year)
    }

    pub fn blackout(&self) -> KtResult<BlackoutWindow> {
        BlackoutWindow::for_year(self.year)
    }

    pub fn days_in_year(&self) -> KtResult<u32> {
        calendar::days_in_year(self.year)
    }

    /// The configuration for the following year, seeded with `start_offset`
    /// (usually the continuation of this year's reader #1).
    pub fn next_year(&self, start_offset: Kathisma) -> KtResult<Self> {
        Ok(Self { year: validate_year(self.year + 1)?, start_offset })
    }
}

/// Reject years outside [`MIN_YEAR`]`..=`[`MAX_YEAR`].
pub fn validate_year(year: i32) -> KtResult<i32> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(KtError::YearOutOfRange { year, min: MIN_YEAR, max: MAX_YEAR })
    }
}
