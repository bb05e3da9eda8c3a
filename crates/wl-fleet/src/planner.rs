//! Daily route planning.
//!
//! Truck `i` of a class with `trips` trips gets the route
//!
//!   [ zones[(i + j) mod Z]  for j in 0..trips ]
//!
//! so consecutive trucks of a class start one zone apart and every zone is
//! covered by the first truck of each class when `trips >= Z`.

use tracing::debug;

use wl_core::{TruckClass, TruckId, ZoneId};

use crate::{FleetResult, SmallTruck};

/// The route of truck `index` (0-based within its class).
pub fn route_for(zones: &[ZoneId], index: usize, trips: u32) -> Vec<ZoneId> {
    if zones.is_empty() {
        return Vec::new();
    }
    (0..trips as usize)
        .map(|j| zones[(index + j) % zones.len()])
        .collect()
}

/// Build the whole small-truck fleet for one day.
///
/// Trucks are numbered in class order; `TruckId(k)` is the `k`-th truck
/// built, so the returned vector is indexable by id.  Labels read
/// `C<n>-<capacity>t` with `n` counting across the whole fleet from 1.
pub fn plan_fleet(zones: &[ZoneId], classes: &[TruckClass]) -> FleetResult<Vec<SmallTruck>> {
    let mut fleet = Vec::new();
    for class in classes {
        for i in 0..class.count as usize {
            let id = TruckId(fleet.len() as u32);
            let label = format!("C{}-{}t", fleet.len() + 1, class.capacity);
            let route = route_for(zones, i, class.trips);
            fleet.push(SmallTruck::new(id, label, class.capacity, class.trips, route)?);
        }
    }
    debug!(trucks = fleet.len(), classes = classes.len(), "fleet planned");
    Ok(fleet)
}
