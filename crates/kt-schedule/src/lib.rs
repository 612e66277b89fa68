//! `kt-schedule` — reader rotation schedules and group calendars.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                   |
//! |------------------|------------------------------------------------------------|
//! | [`rotation`]     | `KATHISMA_SEQUENCE`, `cycle_assign`, `zero_loop`           |
//! | [`reader`]       | `ReaderSchedule`, `build_reader_schedule`                  |
//! | [`group`]        | `GroupCalendar`, `build_group_calendar`, `Reading`         |
//! | [`continuation`] | `next_start_offset`, `resolve_start_offset`, `OffsetSource`|
//! | [`loader`]       | `load_calendar_csv`, `load_calendar_reader`                |
//! | [`error`]        | `ScheduleError`, `ScheduleResult<T>`                       |
//!
//! # Rotation model (summary)
//!
//! Every reader reads one kathisma per day and moves to the next one the
//! following day, wrapping 20 → 1.  The days around Easter are skipped
//! entirely; after the break the reader resumes with the kathisma that
//! follows the last one read before it:
//!
//! ```text
//! day:      1  2 … 106 | 107 … 116 | 117 … 130 131 … 365
//! reader 1: 1  2 …   6 |  (Easter) |   7 …  20   1 …  15      (2025)
//! ```
//!
//! Reader `r` starts January 1 at `start_offset + (r - 1)` and otherwise
//! follows the same pattern, so on any covered day the twenty readers hold
//! twenty distinct kathismas.

pub mod continuation;
pub mod error;
pub mod group;
pub mod loader;
pub mod reader;
pub mod rotation;

#[cfg(test)]
mod tests;

pub use continuation::{OffsetSource, next_start_offset, resolve_start_offset};
pub use error::{ScheduleError, ScheduleResult};
pub use group::{GroupCalendar, Reading, build_group_calendar};
pub use loader::{load_calendar_csv, load_calendar_reader};
pub use reader::{ReaderSchedule, build_reader_schedule};
pub use rotation::{KATHISMA_SEQUENCE, cycle_assign, zero_loop};
