//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AssignmentRow, MonthGrid, OutputResult};

/// Sink for an exported group calendar.
pub trait OutputWriter {
    /// Write a batch of assignment rows.
    fn write_assignments(&mut self, rows: &[AssignmentRow]) -> OutputResult<()>;

    /// Write one reader's month grid.
    fn write_grid(&mut self, grid: &MonthGrid) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
