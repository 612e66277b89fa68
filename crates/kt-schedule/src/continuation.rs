//! Year-over-year continuation.
//!
//! A new year's calendar should pick up reader #1's rotation exactly where
//! the previous year stopped: no kathisma repeated, none skipped.

use tracing::debug;

use kt_core::Kathisma;

use crate::{GroupCalendar, ReaderSchedule};

/// The kathisma after reader #1's last assignment of the year, wrapping
/// 20 → 1.  An empty schedule restarts at 1.
pub fn next_start_offset(reader_one: &ReaderSchedule) -> Kathisma {
    reader_one
        .last()
        .map_or(Kathisma::FIRST, |(_, kathisma)| kathisma.next())
}

/// Where a resolved start offset came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OffsetSource {
    /// Supplied with the generation request.
    Explicit,
    /// Continued from the calendar of `from_year`.
    Continued { from_year: i32 },
    /// No request value and no previous-year calendar: the group's default.
    GroupDefault,
}

/// Pick the start offset for generating `year`.
///
/// An explicit offset wins.  Otherwise the first calendar in `previous`
/// belonging to `year - 1` is continued.  Failing both, `group_default`.
pub fn resolve_start_offset<'a, I>(
    year:          i32,
    explicit:      Option<Kathisma>,
    previous:      I,
    group_default: Kathisma,
) -> (Kathisma, OffsetSource)
where
    I: IntoIterator<Item = &'a GroupCalendar>,
{
    let resolved = if let Some(offset) = explicit {
        (offset, OffsetSource::Explicit)
    } else if let Some(prev) = previous.into_iter().find(|c| c.year == year - 1) {
        (prev.next_start_offset(), OffsetSource::Continued { from_year: prev.year })
    } else {
        (group_default, OffsetSource::GroupDefault)
    };
    debug!(year, start_offset = %resolved.0, source = ?resolved.1, "resolved start offset");
    resolved
}
