//! Plain data row types written by output backends.

use chrono::NaiveDate;

use kt_core::{Kathisma, ReaderNumber};

/// One covered day of one reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentRow {
    pub reader:      ReaderNumber,
    pub day_of_year: u32,
    pub date:        NaiveDate,
    pub kathisma:    Kathisma,
}
