//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DaySummaryRow, OutputResult, TruckStateRow, ZoneResidualRow};

/// Trait implemented by output backends.
///
/// Errors never reach the simulation: [`SimOutputObserver`][crate::SimOutputObserver]
/// stores them for [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one day's totals.
    fn write_day_summary(&mut self, row: &DaySummaryRow) -> OutputResult<()>;

    /// Write a batch of zone residuals.
    fn write_zone_residuals(&mut self, rows: &[ZoneResidualRow]) -> OutputResult<()>;

    /// Write one truck status change.
    fn write_truck_state(&mut self, row: &TruckStateRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
