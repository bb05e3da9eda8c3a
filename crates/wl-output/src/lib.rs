//! `wl-output`: simulation output writers for the waste-logistics simulator.
//!
//! | Backend | Files created                                                   |
//! |---------|-----------------------------------------------------------------|
//! | CSV     | `day_summaries.csv`, `zone_residuals.csv`, `truck_states.csv`   |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `wl_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wl_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(3, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{DaySummaryRow, TruckStateRow, ZoneResidualRow};
pub use writer::OutputWriter;
