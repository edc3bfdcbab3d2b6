//! Results of a batch run and the per-iteration distance log.

use std::io::Write;

use super::BatchError;
use crate::tour::Tour;

/// Distances recorded by a [`BatchRunner`](super::BatchRunner).
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    /// Run label derived from the colony configuration.
    pub label: String,
    /// One row per iteration, one column per simulator.
    pub rows: Vec<Vec<f64>>,
    /// Shortest tour seen by any simulator in any iteration.
    pub best: Tour,
}

impl BatchReport {
    /// Number of recorded iterations.
    pub fn iterations(&self) -> usize {
        self.rows.len()
    }

    /// Shortest iteration-best distance of each row.
    pub fn best_per_iteration(&self) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| row.iter().copied().fold(f64::INFINITY, f64::min))
            .collect()
    }

    /// Writes the distance log: one comma-separated line per iteration.
    ///
    /// Write failures are reported as [`BatchError::Io`].
    pub fn write_csv<W: Write>(&self, writer: &mut W) -> Result<(), BatchError> {
        for row in &self.rows {
            let line = row
                .iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join(",");
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;
        Ok(())
    }
}
