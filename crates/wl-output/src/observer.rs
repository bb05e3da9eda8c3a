//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use tracing::warn;

use wl_core::Minute;
use wl_schedule::Event;
use wl_sim::{DaySummary, SimObserver, TruckObserver};

use crate::row::{DaySummaryRow, TruckStateRow, ZoneResidualRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes day summaries, zone residuals and truck
/// status changes to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    day:        u32,
    /// Time of the event currently executing; truck states are stamped with it.
    now:        Minute,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, day: 0, now: Minute::ZERO, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> TruckObserver for SimOutputObserver<W> {
    fn notify_truck_state(&mut self, truck: &str, status: &str, location: &str) {
        let row = TruckStateRow {
            day:      self.day,
            minute:   self.now,
            truck:    truck.to_owned(),
            status:   status.to_owned(),
            location: location.to_owned(),
        };
        let result = self.writer.write_truck_state(&row);
        self.store_err(result);
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_day_start(&mut self, day: u32) {
        self.day = day;
        self.now = Minute::ZERO;
    }

    fn on_event(&mut self, event: &Event) {
        self.now = event.time();
    }

    fn on_day_end(&mut self, summary: &DaySummary) {
        let result = self.writer.write_day_summary(&DaySummaryRow::from(summary));
        self.store_err(result);

        let rows = ZoneResidualRow::from_summary(summary);
        if !rows.is_empty() {
            let result = self.writer.write_zone_residuals(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _days: u32) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
