//! Strongly typed numbers for the two 1..=20 value spaces.
//!
//! Kathismas and reader slots have the same cardinality but are never
//! interchangeable: a reader number names a rotation slot, a kathisma is what
//! gets read on a given day.  Both are `Copy + Ord + Hash` and wrap
//! cyclically (20 → 1).
//!
//! The inner `u8` is `pub` so constant tables can be spelled out literally.
//! Runtime values should go through [`Kathisma::new`] / [`ReaderNumber::new`]
//! (validating) or [`Kathisma::wrapping`] (normalising).

use std::fmt;

use crate::{KtError, KtResult};

/// Number of kathismas in the Psalter, and number of reader slots in a group.
pub const CYCLE_LEN: u8 = 20;

/// Generate a cyclic 1..=20 number wrapper.
macro_rules! cyclic_number {
    ($(#[$attr:meta])* $vis:vis struct $name:ident; out_of_range = $err:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(try_from = "i64", into = "u8"))]
        $vis struct $name(pub u8);

        impl $name {
            pub const FIRST: $name = $name(1);
            pub const LAST: $name = $name(CYCLE_LEN);

            /// Validate `n` into `1..=20`.
            pub fn new(n: u8) -> KtResult<Self> {
                Self::try_from(i64::from(n))
            }

            /// Normalise any integer into `1..=20` as `((n - 1) mod 20) + 1`.
            pub fn wrapping(n: i64) -> Self {
                $name(((n - 1).rem_euclid(i64::from(CYCLE_LEN)) + 1) as u8)
            }

            /// The successor, wrapping 20 → 1.
            #[inline]
            pub fn next(self) -> Self {
                if self.0 >= CYCLE_LEN { Self::FIRST } else { $name(self.0 + 1) }
            }

            /// Step forward `n` places around the cycle.
            #[inline]
            pub fn advance(self, n: u32) -> Self {
                Self::wrapping(i64::from(self.0) + i64::from(n))
            }

            #[inline(always)]
            pub fn get(self) -> u8 {
                self.0
            }

            /// Zero-based position, for direct indexing into per-slot `Vec`s.
            #[inline(always)]
            pub fn index(self) -> usize {
                usize::from(self.0) - 1
            }

            /// All twenty values in ascending order.
            pub fn all() -> impl Iterator<Item = $name> {
                (1..=CYCLE_LEN).map($name)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::FIRST
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for u8 {
            #[inline(always)]
            fn from(n: $name) -> u8 {
                n.0
            }
        }

        impl TryFrom<i64> for $name {
            type Error = KtError;
            fn try_from(n: i64) -> KtResult<$name> {
                if (1..=i64::from(CYCLE_LEN)).contains(&n) {
                    Ok($name(n as u8))
                } else {
                    Err(KtError::$err(n))
                }
            }
        }
    };
}

cyclic_number! {
    /// One of the twenty divisions of the Psalter read in rotation.
    pub struct Kathisma;
    out_of_range = KathismaOutOfRange;
}

cyclic_number! {
    /// A reader's rotation slot within a group.  Slot `r` starts the year
    /// `r - 1` kathismas after slot 1.
    pub struct ReaderNumber;
    out_of_range = ReaderOutOfRange;
}
