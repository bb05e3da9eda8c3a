//! Zone-to-station routing and the day's active roster.

use std::collections::HashMap;

use wl_core::{StationId, TruckId, ZoneId};

use crate::{FleetError, FleetResult, SmallTruck, Zone};

/// Maps zone names to the station that serves them and keeps the lists of
/// zones and small trucks in play for the current day.
///
/// Name lookup is case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct ZoneRouter {
    by_name: HashMap<String, StationId>,
    zones:   Vec<ZoneId>,
    trucks:  Vec<TruckId>,
}

impl ZoneRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard two-station split: Leste, Norte and Centro go to
    /// `first`; Sul and Sudeste go to `second`.
    pub fn two_station(first: StationId, second: StationId) -> Self {
        let mut router = Self::new();
        for name in ["Leste", "Norte", "Centro"] {
            router.assign(name, first);
        }
        for name in ["Sul", "Sudeste"] {
            router.assign(name, second);
        }
        router
    }

    /// Route `zone_name` to `station`, replacing any earlier assignment.
    pub fn assign(&mut self, zone_name: &str, station: StationId) {
        self.by_name.insert(zone_name.to_lowercase(), station);
    }

    /// The station serving `zone_name`.
    pub fn station_for(&self, zone_name: &str) -> FleetResult<StationId> {
        self.by_name
            .get(&zone_name.to_lowercase())
            .copied()
            .ok_or_else(|| FleetError::UnknownZone(zone_name.to_owned()))
    }

    /// The station serving `zone`, looked up by its name.
    pub fn station_for_zone(&self, zone: &Zone) -> FleetResult<StationId> {
        self.station_for(zone.name())
    }

    // ── Day roster ────────────────────────────────────────────────────────

    pub fn set_zones(&mut self, zones: impl IntoIterator<Item = ZoneId>) {
        self.zones = zones.into_iter().collect();
    }

    pub fn set_trucks(&mut self, trucks: impl IntoIterator<Item = TruckId>) {
        self.trucks = trucks.into_iter().collect();
    }

    pub fn zones(&self) -> &[ZoneId] {
        &self.zones
    }

    pub fn trucks(&self) -> &[TruckId] {
        &self.trucks
    }

    /// Registered trucks that still have trips left.
    pub fn active_trucks(&self, fleet: &[SmallTruck]) -> Vec<TruckId> {
        self.trucks
            .iter()
            .copied()
            .filter(|id| fleet.get(id.index()).is_some_and(SmallTruck::can_travel))
            .collect()
    }
}
