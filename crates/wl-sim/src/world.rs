//! The simulation world and the event dispatch that mutates it.

use tracing::{debug, trace};

use wl_core::{
    DailyStats, LargeTruckId, Minute, SimConfig, SimRng, StationId, TravelModel, TruckId, ZoneId,
};
use wl_fleet::observer::status;
use wl_fleet::{
    CollectionOutcome, FleetResult, LargeTruckIds, SmallTruck, StationContext, TransferStation,
    TruckObserver, TruckPhase, Zone, ZoneRouter, plan_fleet,
};
use wl_schedule::{Event, EventHandler, EventKind, EventScheduler};

use crate::{SimError, SimObserver, SimResult};

/// Every piece of mutable simulation state except the scheduler and the
/// statistics sink.  Entities are addressed by index: `ZoneId(i)` is
/// `zones[i]`, `TruckId(i)` is `trucks[i]`, `StationId(i)` is `stations[i]`.
#[derive(Debug)]
pub struct World {
    pub config:    SimConfig,
    pub zones:     Vec<Zone>,
    /// Today's small-truck fleet; rebuilt every day.
    pub trucks:    Vec<SmallTruck>,
    pub stations:  Vec<TransferStation>,
    pub router:    ZoneRouter,
    pub large_ids: LargeTruckIds,
    travel:        TravelModel,
    waste_rng:     SimRng,
}

impl World {
    pub(crate) fn new(
        config:    SimConfig,
        zones:     Vec<Zone>,
        stations:  Vec<TransferStation>,
        router:    ZoneRouter,
        large_ids: LargeTruckIds,
        travel:    TravelModel,
        waste_rng: SimRng,
    ) -> Self {
        Self {
            config,
            zones,
            trucks: Vec::new(),
            stations,
            router,
            large_ids,
            travel,
            waste_rng,
        }
    }

    pub fn travel(&self) -> &TravelModel {
        &self.travel
    }

    /// Redraw every zone's waste.  Returns the amounts in `ZoneId` order.
    pub fn generate_waste(&mut self) -> Vec<u32> {
        self.zones
            .iter_mut()
            .map(|z| z.generate_daily(&mut self.waste_rng))
            .collect()
    }

    /// Build today's fleet, publish it to the router, and schedule each
    /// truck's first collection at minute 0.
    pub fn plan_day(&mut self, scheduler: &mut EventScheduler) -> SimResult<()> {
        for station in &mut self.stations {
            station.start_day();
        }
        let zone_ids: Vec<ZoneId> = self.zones.iter().map(Zone::id).collect();
        self.trucks = plan_fleet(&zone_ids, &self.config.fleet)?;
        self.router.set_zones(zone_ids);
        self.router.set_trucks(self.trucks.iter().map(SmallTruck::id));

        for truck in &self.trucks {
            scheduler.schedule_at(Minute::ZERO, EventKind::Collection { truck: truck.id(), zone: truck.target() });
        }
        debug!(trucks = self.trucks.len(), zones = self.zones.len(), "day planned");
        Ok(())
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    fn zone(&self, id: ZoneId) -> SimResult<&Zone> {
        self.zones.get(id.index()).ok_or(SimError::UnknownZone(id))
    }

    fn truck(&self, id: TruckId) -> SimResult<&SmallTruck> {
        self.trucks.get(id.index()).ok_or(SimError::UnknownTruck(id))
    }

    fn station(&self, id: StationId) -> SimResult<&TransferStation> {
        self.stations.get(id.index()).ok_or(SimError::UnknownStation(id))
    }

    /// Run `f` against one station with the rest of the world lent as its
    /// context.
    fn with_station<T>(
        &mut self,
        id:        StationId,
        scheduler: &mut EventScheduler,
        observer:  &mut dyn TruckObserver,
        f:         impl FnOnce(&mut TransferStation, &mut StationContext<'_>) -> FleetResult<T>,
    ) -> SimResult<T> {
        let World { config, trucks, stations, large_ids, travel, .. } = self;
        let station = stations.get_mut(id.index()).ok_or(SimError::UnknownStation(id))?;
        let mut ctx = StationContext {
            trucks,
            scheduler,
            large_ids,
            timing: travel.timing(),
            config: &config.station,
            observer,
        };
        Ok(f(station, &mut ctx)?)
    }

    // ── Event handlers ────────────────────────────────────────────────────

    fn on_zone_generation(&mut self, zone: ZoneId) -> SimResult<()> {
        let z = self.zones.get_mut(zone.index()).ok_or(SimError::UnknownZone(zone))?;
        z.generate_daily(&mut self.waste_rng);
        Ok(())
    }

    fn on_collection<O: SimObserver>(
        &mut self,
        truck:     TruckId,
        zone:      ZoneId,
        now:       Minute,
        scheduler: &mut EventScheduler,
        stats:     &mut DailyStats,
        observer:  &mut O,
    ) -> SimResult<()> {
        observer.notify_truck_state(self.truck(truck)?.label(), status::COLLECTING, self.zone(zone)?.name());
        observer.pace();

        let t = self.trucks.get_mut(truck.index()).ok_or(SimError::UnknownTruck(truck))?;
        let outcome = t.attempt_collection(now, zone, &mut self.zones, &mut self.travel, stats)?;
        trace!(%truck, ?outcome, "collection outcome");

        match outcome {
            CollectionOutcome::Continue { zone, at } | CollectionOutcome::Retarget { zone, at } => {
                scheduler.schedule_at(at, EventKind::Collection { truck, zone });
            }
            CollectionOutcome::Transfer { at } => {
                scheduler.schedule_at(at, EventKind::TransferStart { truck, origin: zone });
            }
            CollectionOutcome::Stop => {
                let location = self.zones.get(zone.index()).map(Zone::name).unwrap_or_default();
                observer.notify_truck_state(t.label(), status::DAY_DONE, location);
                observer.pace();
            }
        }
        Ok(())
    }

    fn on_transfer_start<O: SimObserver>(
        &mut self,
        truck:     TruckId,
        origin:    ZoneId,
        now:       Minute,
        scheduler: &mut EventScheduler,
        stats:     &mut DailyStats,
        observer:  &mut O,
    ) -> SimResult<()> {
        let station = self.router.station_for_zone(self.zone(origin)?)?;
        let load = self.truck(truck)?.load();
        let trip = self.travel.detailed(now, load, true);
        stats.record_transfer(trip.total);

        let name = self.station(station)?.name();
        observer.notify_truck_state(self.truck(truck)?.label(), &status::to_station(name), name);
        observer.pace();

        if let Some(t) = self.trucks.get_mut(truck.index()) {
            t.set_phase(TruckPhase::Travelling);
        }
        scheduler.schedule_at(now + trip.total, EventKind::StationArrival { station, truck });
        Ok(())
    }

    fn on_station_arrival<O: SimObserver>(
        &mut self,
        station:   StationId,
        truck:     TruckId,
        now:       Minute,
        scheduler: &mut EventScheduler,
        observer:  &mut O,
    ) -> SimResult<()> {
        let reception = self.with_station(station, scheduler, observer, |s, ctx| s.receive(truck, now, ctx))?;
        trace!(%station, %truck, ?reception, "arrival handled");
        Ok(())
    }

    fn on_generate_large_truck<O: SimObserver>(
        &mut self,
        station:   StationId,
        now:       Minute,
        scheduler: &mut EventScheduler,
        observer:  &mut O,
    ) -> SimResult<()> {
        self.with_station(station, scheduler, observer, |s, ctx| s.on_generate_large_truck(now, ctx))?;
        Ok(())
    }

    fn on_tolerance_check<O: SimObserver>(
        &mut self,
        station:   StationId,
        large:     LargeTruckId,
        now:       Minute,
        scheduler: &mut EventScheduler,
        observer:  &mut O,
    ) -> SimResult<()> {
        self.with_station(station, scheduler, observer, |s, ctx| s.on_tolerance_check(large, now, ctx))?;
        Ok(())
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

/// Pairs the world with an observer for one scheduler run.
pub struct Executor<'a, O: SimObserver> {
    pub world:    &'a mut World,
    pub observer: &'a mut O,
}

impl<O: SimObserver> EventHandler for Executor<'_, O> {
    type Error = SimError;

    fn execute(
        &mut self,
        event:     &Event,
        scheduler: &mut EventScheduler,
        stats:     &mut DailyStats,
    ) -> SimResult<()> {
        self.observer.on_event(event);
        let now = event.time();
        let world = &mut *self.world;
        let observer = &mut *self.observer;

        match *event.kind() {
            EventKind::ZoneGeneration { zone } => world.on_zone_generation(zone),
            EventKind::Collection { truck, zone } => {
                world.on_collection(truck, zone, now, scheduler, stats, observer)
            }
            EventKind::TransferStart { truck, origin } => {
                world.on_transfer_start(truck, origin, now, scheduler, stats, observer)
            }
            EventKind::StationArrival { station, truck } => {
                world.on_station_arrival(station, truck, now, scheduler, observer)
            }
            EventKind::GenerateLargeTruck { station } => {
                world.on_generate_large_truck(station, now, scheduler, observer)
            }
            EventKind::WaitToleranceCheck { station, large } => {
                world.on_tolerance_check(station, large, now, scheduler, observer)
            }
        }
    }
}
