//! Rotation primitives: the fixed kathisma order and the two ways of laying
//! it over a run of days.
//!
//! - [`zero_loop`] bridges from an arbitrary kathisma up to 20, one per day.
//!   It is used on January 1 and again right after the Easter break so that
//!   every following full cycle can start at kathisma 1.
//! - [`cycle_assign`] lays the full sequence over a day range, repeating it
//!   as often as needed.

use kt_core::{CYCLE_LEN, Kathisma};

/// The kathismas in reading order.
pub const KATHISMA_SEQUENCE: [Kathisma; 20] = [
    Kathisma(1),  Kathisma(2),  Kathisma(3),  Kathisma(4),  Kathisma(5),
    Kathisma(6),  Kathisma(7),  Kathisma(8),  Kathisma(9),  Kathisma(10),
    Kathisma(11), Kathisma(12), Kathisma(13), Kathisma(14), Kathisma(15),
    Kathisma(16), Kathisma(17), Kathisma(18), Kathisma(19), Kathisma(20),
];

/// Assign `sequence[i % sequence.len()]` to the i-th day of `days`.
///
/// Days are taken in the order given; no sorting or contiguity check is
/// made.  An empty `sequence` assigns nothing.
pub fn cycle_assign<I>(days: I, sequence: &[Kathisma]) -> Vec<(u32, Kathisma)>
where
    I: IntoIterator<Item = u32>,
{
    days.into_iter().zip(sequence.iter().copied().cycle()).collect()
}

/// Kathismas `from, from + 1, …, 20` on consecutive days starting at
/// `first_day`, stopping early after `last_day`.
///
/// `from` above 20 gives an empty loop: there is no wrap to 1.  Values below
/// 1 are treated as 1.
pub fn zero_loop(first_day: u32, from: u8, last_day: u32) -> Vec<(u32, Kathisma)> {
    (from.max(1)..=CYCLE_LEN)
        .map(Kathisma)
        .zip(first_day..)
        .take_while(|&(_, day)| day <= last_day)
        .map(|(k, day)| (day, k))
        .collect()
}

/// Unclipped length of a zero loop starting at `from`.
#[inline]
pub fn zero_loop_len(from: u8) -> u32 {
    u32::from(CYCLE_LEN + 1).saturating_sub(u32::from(from.max(1)))
}
