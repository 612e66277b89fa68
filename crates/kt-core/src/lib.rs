//! `kt-core` — foundational types for the kathisma rotation workspace.
//!
//! This crate is a dependency of every other `kt-*` crate.  It intentionally
//! has no `kt-*` dependencies and minimal external ones (only `chrono` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`ids`]         | `Kathisma`, `ReaderNumber` (both cyclic over 1..=20)       |
//! | [`calendar`]    | `easter_date`, `BlackoutWindow`, `days_in_year`, grouping  |
//! | [`config`]      | `CalendarConfig` — validated year + start offset           |
//! | [`error`]       | `KtError`, `KtResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod calendar;
pub mod config;
pub mod error;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use calendar::{BlackoutWindow, date_of_day, days_in_year, easter_date, month_day_grouping};
pub use config::CalendarConfig;
pub use error::{KtError, KtResult};
pub use ids::{CYCLE_LEN, Kathisma, ReaderNumber};
