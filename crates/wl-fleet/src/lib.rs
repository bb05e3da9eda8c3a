//! `wl-fleet`: zones, trucks, transfer stations and routing.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                        |
//! |-----------------|-----------------------------------------------------------------|
//! | [`zone`]        | `Zone`: daily waste generation and collection                  |
//! | [`small_truck`] | `SmallTruck`, `CollectionOutcome`: per-stop decision logic     |
//! | [`large_truck`] | `LargeTruck`, `LargeTruckIds`                                   |
//! | [`station`]     | `TransferStation`, `StationContext`: receive / queue / dispatch |
//! | [`router`]      | `ZoneRouter`: zone name → station, day roster                  |
//! | [`planner`]     | `plan_fleet`, `route_for`: daily route distribution            |
//! | [`observer`]    | `TruckObserver` hooks, status labels                            |
//! | [`loader`]      | CSV zone and fleet tables                                       |
//! | [`error`]       | `FleetError`, `FleetResult<T>`                                  |
//!
//! # Ownership
//!
//! Zones, small trucks and stations live in plain `Vec`s owned by the
//! simulation world and are addressed by their typed ids (`ZoneId(i)` is
//! `zones[i]`, and so on).  Events carry ids, never references, so nothing
//! here holds a pointer to anything else.

pub mod error;
pub mod large_truck;
pub mod loader;
pub mod observer;
pub mod planner;
pub mod router;
pub mod small_truck;
pub mod station;
pub mod zone;


pub use error::{FleetError, FleetResult};
pub use large_truck::{LargeTruck, LargeTruckIds};
pub use loader::{load_fleet_csv, load_fleet_reader, load_zones_csv, load_zones_reader};
pub use observer::{NoopObserver, TruckObserver};
pub use planner::{plan_fleet, route_for};
pub use router::ZoneRouter;
pub use small_truck::{CollectionOutcome, SmallTruck, TruckPhase};
pub use station::{Reception, StationContext, TransferStation};
pub use zone::Zone;
