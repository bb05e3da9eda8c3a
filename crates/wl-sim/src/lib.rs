//! `wl-sim`: day loop orchestrator for the waste-logistics simulator.
//!
//! # Day loop
//!
//! ```text
//! for day in 1..=days:
//!   ① Generate   every zone redraws its daily waste.
//!   ② Plan       rebuild the small-truck fleet; one Collection event per
//!                 truck at minute 0 for its first route zone.
//!   ③ Execute    pop the earliest event, advance the clock, dispatch:
//!                   ZoneGeneration      → redraw one zone
//!                   Collection          → SmallTruck::attempt_collection
//!                   TransferStart       → draw trip time; StationArrival later
//!                   StationArrival      → TransferStation::receive
//!                   GenerateLargeTruck  → forced dispatch if still full
//!                   WaitToleranceCheck  → early partial-load dispatch
//!   ④ Summarise  DaySummary; reset the scheduler and statistics.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wl_core::SimConfig;
//! use wl_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! for summary in sim.run(3, &mut NoopObserver)? {
//!     println!("{summary}");
//! }
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod summary;
pub mod world;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::SimObserver;
pub use sim::Sim;
pub use summary::{ClassCount, DaySummary, ZoneResidual};
pub use wl_fleet::{NoopObserver, TruckObserver};
pub use world::{Executor, World};
