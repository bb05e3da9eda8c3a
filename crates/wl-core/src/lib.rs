//! `wl-core`: foundational types for the waste-logistics simulator.
//!
//! This crate is a dependency of every other `wl-*` crate.  It has no `wl-*`
//! dependencies and only `rand` and `thiserror` externally (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`ids`]     | `TruckId`, `LargeTruckId`, `ZoneId`, `StationId`, `EventId` |
//! | [`time`]    | `Minute`, `SimClock`, clock/duration formatting             |
//! | [`rng`]     | `SimRng`                                                    |
//! | [`travel`]  | `TravelModel`, `TripDuration` (peak/off-peak travel times)  |
//! | [`config`]  | `SimConfig` and its timing/station/zone/fleet tables        |
//! | [`stats`]   | `DailyStats` accumulator                                    |
//! | [`error`]   | `CoreError`, `CoreResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config, ids and `Minute`. |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod stats;
pub mod time;
pub mod travel;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{LARGE_TRUCK_CAPACITY, SimConfig, StationConfig, TimingConfig, TruckClass, ZoneSpec};
pub use error::{CoreError, CoreResult};
pub use ids::{EventId, LargeTruckId, StationId, TruckId, ZoneId};
pub use rng::SimRng;
pub use stats::DailyStats;
pub use time::{DAY_ORIGIN, Minute, SimClock, format_clock, format_duration};
pub use travel::{TravelModel, TripDuration};
