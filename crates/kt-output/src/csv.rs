//! CSV output backend.
//!
//! Creates in the configured output directory:
//! - `assignments.csv`
//! - `reader_01.csv` … `reader_20.csv`, one per written grid

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;

use crate::grid::MONTH_HEADERS;
use crate::writer::OutputWriter;
use crate::{AssignmentRow, MonthGrid, OutputResult};

/// Writes a group calendar to CSV files.
pub struct CsvWriter {
    dir:         PathBuf,
    assignments: Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open `assignments.csv` and write its header.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let mut assignments = Writer::from_path(dir.join("assignments.csv"))?;
        assignments.write_record(["reader", "day_of_year", "date", "kathisma"])?;

        Ok(Self {
            dir: dir.to_path_buf(),
            assignments,
            finished: false,
        })
    }

    /// Path of the grid file for reader `n`.
    pub fn grid_path(&self, n: u8) -> PathBuf {
        self.dir.join(format!("reader_{n:02}.csv"))
    }
}

impl OutputWriter for CsvWriter {
    fn write_assignments(&mut self, rows: &[AssignmentRow]) -> OutputResult<()> {
        for row in rows {
            self.assignments.write_record(&[
                row.reader.to_string(),
                row.day_of_year.to_string(),
                row.date.format("%Y-%m-%d").to_string(),
                row.kathisma.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_grid(&mut self, grid: &MonthGrid) -> OutputResult<()> {
        let mut w = Writer::from_path(self.grid_path(grid.reader.get()))?;
        let mut header = vec!["day"];
        header.extend(MONTH_HEADERS);
        w.write_record(&header)?;

        for (day, cells) in grid.rows() {
            let mut record = Vec::with_capacity(13);
            record.push(day.to_string());
            record.extend(cells.iter().map(ToString::to_string));
            w.write_record(&record)?;
        }
        w.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.assignments.flush()?;
        Ok(())
    }
}
