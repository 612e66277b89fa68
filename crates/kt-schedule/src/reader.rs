//! One reader's year: `ReaderSchedule` and the builder that fills it.
//!
//! # Segments
//!
//! ```text
//! 1 ─ zero loop ─┬─ full cycles ─ bs-1 │ blackout │ be+1 ─ zero loop ─┬─ full cycles ─ N
//!  start..=20    │  1, 2, … 20, 1, …   │ (absent) │  last+1 ..= 20    │  1, 2, … 20, 1, …
//! ```
//!
//! `bs`/`be` are the first and last silent days, `N` the day count of the
//! year and `last` the kathisma read on day `bs - 1`.  The post-blackout zero
//! loop never wraps: when `last` is 20 it is empty and the full cycles start
//! directly at `be + 1`.  Either way, consecutive covered days always differ
//! by exactly one kathisma, across the break included.
//!
//! Segments are clipped to the year.  An Easter so early or late that a
//! segment would fall outside `1..=N` leaves that segment empty.  Malformed
//! windows (`bs >= be`) produce partial schedules rather than errors.

use std::collections::BTreeMap;
use std::collections::btree_map;

use kt_core::Kathisma;

use crate::rotation::{cycle_assign, zero_loop, zero_loop_len};

// ── ReaderSchedule ───────────────────────────────────────────────────────────

/// Day-of-year → kathisma for one reader.  Blackout days have no entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderSchedule {
    days: BTreeMap<u32, Kathisma>,
}

impl ReaderSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `kathisma` to `day`, returning the previous assignment.
    pub fn insert(&mut self, day: u32, kathisma: Kathisma) -> Option<Kathisma> {
        self.days.insert(day, kathisma)
    }

    pub fn get(&self, day: u32) -> Option<Kathisma> {
        self.days.get(&day).copied()
    }

    pub fn contains_day(&self, day: u32) -> bool {
        self.days.contains_key(&day)
    }

    /// Earliest assigned day and its kathisma.
    pub fn first(&self) -> Option<(u32, Kathisma)> {
        self.days.first_key_value().map(|(&d, &k)| (d, k))
    }

    /// Latest assigned day and its kathisma.
    pub fn last(&self) -> Option<(u32, Kathisma)> {
        self.days.last_key_value().map(|(&d, &k)| (d, k))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Assignments in ascending day order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Kathisma)> + '_ {
        self.days.iter().map(|(&d, &k)| (d, k))
    }

    /// Assigned days in ascending order.
    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.days.keys().copied()
    }
}

impl Extend<(u32, Kathisma)> for ReaderSchedule {
    fn extend<T: IntoIterator<Item = (u32, Kathisma)>>(&mut self, iter: T) {
        self.days.extend(iter);
    }
}

impl FromIterator<(u32, Kathisma)> for ReaderSchedule {
    fn from_iter<T: IntoIterator<Item = (u32, Kathisma)>>(iter: T) -> Self {
        Self { days: iter.into_iter().collect() }
    }
}

impl IntoIterator for ReaderSchedule {
    type Item = (u32, Kathisma);
    type IntoIter = btree_map::IntoIter<u32, Kathisma>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.into_iter()
    }
}

// ── Builder ──────────────────────────────────────────────────────────────────

/// Build the schedule of a reader who reads `start` on January 1.
///
/// `blackout_start` and `blackout_end` are the first and last silent
/// days-of-year (inclusive); `sequence` is normally
/// [`KATHISMA_SEQUENCE`](crate::KATHISMA_SEQUENCE).
pub fn build_reader_schedule(
    start:          Kathisma,
    blackout_start: u32,
    blackout_end:   u32,
    days_in_year:   u32,
    sequence:       &[Kathisma],
) -> ReaderSchedule {
    let mut schedule = ReaderSchedule::new();

    // ── Before Easter ─────────────────────────────────────────────────────
    let last_before = blackout_start.saturating_sub(1).min(days_in_year);
    schedule.extend(zero_loop(1, start.get(), last_before));
    let first_cycled = zero_loop_len(start.get()) + 1;
    schedule.extend(cycle_assign(first_cycled..=last_before, sequence));

    // ── After Easter ──────────────────────────────────────────────────────
    // Resume with the kathisma after the last one read.  Nothing read before
    // the break (day 0) resumes at 1.
    let resume_from = schedule.get(last_before).map_or(1, |k| k.get() + 1);
    let first_after = blackout_end.saturating_add(1);
    schedule.extend(zero_loop(first_after, resume_from, days_in_year));
    let tail_start = first_after.saturating_add(zero_loop_len(resume_from));
    schedule.extend(cycle_assign(tail_start..=days_in_year, sequence));

    schedule
}
