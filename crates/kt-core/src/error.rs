//! Workspace error type.
//!
//! Sub-crates define their own error enums and wrap `KtError` as one variant
//! via `#[from]`, so validation failures raised here surface unchanged.

use thiserror::Error;

/// The top-level error type for `kt-core` and a common base for sub-crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KtError {
    #[error("kathisma {0} is outside 1..=20")]
    KathismaOutOfRange(i64),

    #[error("reader number {0} is outside 1..=20")]
    ReaderOutOfRange(i64),

    #[error("year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("year {0} cannot be represented as a calendar date")]
    DateOutOfRange(i32),
}

/// Shorthand result type for all `kt-*` crates.
pub type KtResult<T> = Result<T, KtError>;
