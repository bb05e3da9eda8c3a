//! Small collection trucks and their per-stop decision logic.
//!
//! A truck never touches the scheduler.  [`SmallTruck::attempt_collection`]
//! mutates the truck and the zone it stands in, then returns a
//! [`CollectionOutcome`] describing the follow-up work; the owning world
//! turns that into an event.

use tracing::{debug, trace};

use wl_core::{DailyStats, EventId, Minute, TravelModel, TruckId, ZoneId};

use crate::{FleetError, FleetResult, Zone};

/// Where a small truck is in its day.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TruckPhase {
    /// Created, first collection not yet executed.
    #[default]
    Idle,
    /// Working a zone or travelling between zones.
    Collecting,
    /// On the road to a transfer station.
    Travelling,
    /// In a station's wait line.
    Queued,
    /// Out of trips; no further events.
    Done,
}

/// Follow-up work decided at a collection stop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CollectionOutcome {
    /// Loaded at `zone`; come back to it at `at`.
    Continue { zone: ZoneId, at: Minute },
    /// Current zone was clean; the next dirty route zone is `zone`.
    Retarget { zone: ZoneId, at: Minute },
    /// Head for the station now.
    Transfer { at: Minute },
    /// Nothing left to do today.
    Stop,
}

#[derive(Debug, Clone)]
pub struct SmallTruck {
    id:              TruckId,
    label:           String,
    capacity:        u32,
    load:            u32,
    trips_remaining: u32,
    route:           Vec<ZoneId>,
    route_index:     usize,
    phase:           TruckPhase,
    /// Handle of the generate-large-truck event armed when this truck was
    /// queued, if it is still pending.
    pub pending_generation: Option<EventId>,
}

impl SmallTruck {
    /// A truck at the start of its route.  Rejects empty routes and zero
    /// capacity.
    pub fn new(
        id:       TruckId,
        label:    impl Into<String>,
        capacity: u32,
        trips:    u32,
        route:    Vec<ZoneId>,
    ) -> FleetResult<Self> {
        if route.is_empty() {
            return Err(FleetError::EmptyRoute(id));
        }
        if capacity == 0 {
            return Err(FleetError::ZeroCapacity(id));
        }
        Ok(Self {
            id,
            label: label.into(),
            capacity,
            load: 0,
            trips_remaining: trips,
            route,
            route_index: 0,
            phase: TruckPhase::Idle,
            pending_generation: None,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> TruckId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn load(&self) -> u32 {
        self.load
    }

    #[inline]
    pub fn space(&self) -> u32 {
        self.capacity - self.load
    }

    #[inline]
    pub fn trips_remaining(&self) -> u32 {
        self.trips_remaining
    }

    #[inline]
    pub fn can_travel(&self) -> bool {
        self.trips_remaining > 0
    }

    pub fn route(&self) -> &[ZoneId] {
        &self.route
    }

    /// The zone the truck is currently assigned to.
    #[inline]
    pub fn target(&self) -> ZoneId {
        self.route[self.route_index]
    }

    #[inline]
    pub fn phase(&self) -> TruckPhase {
        self.phase
    }

    pub fn set_phase(&mut self, phase: TruckPhase) {
        self.phase = phase;
    }

    // ── Load and trips ────────────────────────────────────────────────────

    /// Add `tons` if it fits.  Reports whether it was accepted.
    pub fn load_tons(&mut self, tons: u32) -> bool {
        if tons > self.space() {
            return false;
        }
        self.load += tons;
        true
    }

    /// Empty the truck and return what it carried.
    pub fn unload(&mut self) -> u32 {
        std::mem::take(&mut self.load)
    }

    /// Spend one trip.  Saturates at zero.
    pub fn consume_trip(&mut self) {
        self.trips_remaining = self.trips_remaining.saturating_sub(1);
    }

    // ── Route navigation ──────────────────────────────────────────────────

    /// Probe the route cyclically, starting after the current position, for
    /// a zone with waste.  At most one full lap; on failure the index is back
    /// where it started.
    pub fn retarget_cyclic(&mut self, zones: &[Zone]) -> bool {
        let len = self.route.len();
        for _ in 0..len {
            self.route_index = (self.route_index + 1) % len;
            let dirty = zones
                .get(self.target().index())
                .is_some_and(|z| !z.is_clean());
            if dirty {
                return true;
            }
        }
        false
    }

    /// Move to the next route entry, wrapping.  Returns the new target.
    pub fn advance_sequential(&mut self) -> ZoneId {
        self.route_index = (self.route_index + 1) % self.route.len();
        self.target()
    }

    // ── Collection ────────────────────────────────────────────────────────

    /// Work `zone_id` at `now`.
    ///
    /// * clean zone: spend a trip; if trips remain and another route zone is
    ///   dirty, retarget there after the configured delay, otherwise head to
    ///   the station immediately;
    /// * dirty zone: load `min(space, accumulated)`, record the round in
    ///   `stats`, and come back after the drawn duration if trips remain;
    ///   with no trips left but a load, spend a trip and head to the station.
    pub fn attempt_collection(
        &mut self,
        now:     Minute,
        zone_id: ZoneId,
        zones:   &mut [Zone],
        travel:  &mut TravelModel,
        stats:   &mut DailyStats,
    ) -> FleetResult<CollectionOutcome> {
        self.phase = TruckPhase::Collecting;

        let zone = zones
            .get(zone_id.index())
            .ok_or(FleetError::NoSuchZone(zone_id))?;

        if zone.is_clean() {
            self.consume_trip();
            if self.can_travel() && self.retarget_cyclic(zones) {
                let at = now + travel.timing().retarget_delay_minutes;
                debug!(truck = %self.label, from = %zone_id, to = %self.target(), "zone clean, retargeting");
                return Ok(CollectionOutcome::Retarget { zone: self.target(), at });
            }
            self.phase = TruckPhase::Travelling;
            return Ok(CollectionOutcome::Transfer { at: now });
        }

        let zone = zones
            .get_mut(zone_id.index())
            .ok_or(FleetError::NoSuchZone(zone_id))?;
        let amount = self.space().min(zone.accumulated());
        let mut round = None;
        if amount > 0 {
            zone.collect(amount);
            self.load += amount;
            let duration = travel.detailed(now, amount, false);
            stats.record_collection(amount, duration.total);
            trace!(truck = %self.label, zone = %zone_id, amount, minutes = duration.total, "collected");
            round = Some(duration.total);
        }

        match round {
            Some(minutes) if self.can_travel() => {
                Ok(CollectionOutcome::Continue { zone: zone_id, at: now + minutes })
            }
            _ if self.load > 0 => {
                self.consume_trip();
                self.phase = TruckPhase::Travelling;
                Ok(CollectionOutcome::Transfer { at: now })
            }
            _ => {
                self.phase = TruckPhase::Done;
                Ok(CollectionOutcome::Stop)
            }
        }
    }
}
