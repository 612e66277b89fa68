//! `kt-output` — CSV export of group calendars.
//!
//! | File              | Content                                                     |
//! |-------------------|-------------------------------------------------------------|
//! | `assignments.csv` | one row per (reader, covered day): `reader,day_of_year,date,kathisma` |
//! | `reader_NN.csv`   | one month grid per reader: rows are days 1..=31, columns months |
//!
//! [`export_group_calendar`] drives any [`OutputWriter`] over a
//! [`GroupCalendar`](kt_schedule::GroupCalendar) in reader order.
//! `assignments.csv` reads back with `kt_schedule::load_calendar_csv`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use kt_output::{CsvWriter, export_group_calendar};
//!
//! let calendar = kt_schedule::build_group_calendar(Kathisma::FIRST, 2025)?;
//! let mut writer = CsvWriter::new(Path::new("./calendar"))?;
//! export_group_calendar(&mut writer, &calendar)?;
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod grid;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use export::{ExportSummary, export_group_calendar};
pub use grid::{Cell, MonthGrid};
pub use row::AssignmentRow;
pub use writer::OutputWriter;
