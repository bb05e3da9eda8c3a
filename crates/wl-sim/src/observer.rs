//! Simulation observer trait for progress reporting and data collection.

use wl_fleet::{NoopObserver, TruckObserver};
use wl_schedule::Event;

use crate::DaySummary;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at day and event
/// boundaries, on top of the per-truck hooks of [`TruckObserver`].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: daily tonnage printer
///
/// ```rust,ignore
/// struct Tonnage;
///
/// impl TruckObserver for Tonnage {}
///
/// impl SimObserver for Tonnage {
///     fn on_day_end(&mut self, summary: &DaySummary) {
///         println!("day {}: {} t", summary.day, summary.stats.collected_tons);
///     }
/// }
/// ```
pub trait SimObserver: TruckObserver {
    /// Called before a day's zones are regenerated.  `day` counts from 1.
    fn on_day_start(&mut self, _day: u32) {}

    /// Called before each event executes.
    fn on_event(&mut self, _event: &Event) {}

    /// Called once the day's queue has drained.
    fn on_day_end(&mut self, _summary: &DaySummary) {}

    /// Called once after the last day.
    fn on_sim_end(&mut self, _days: u32) {}
}

impl SimObserver for NoopObserver {}
