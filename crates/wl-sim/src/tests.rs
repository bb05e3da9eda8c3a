//! Integration tests for wl-sim.

use wl_core::{LargeTruckId, Minute, SimConfig, StationConfig, StationId, TruckClass, TruckId, ZoneId, ZoneSpec};
use wl_fleet::TruckObserver;
use wl_schedule::{Event, EventKind};

use crate::{DaySummary, NoopObserver, Sim, SimBuilder, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// One zone served by one station, one truck class.
fn one_zone_config(lo: u32, hi: u32, class: TruckClass) -> SimConfig {
    SimConfig {
        zones:   vec![ZoneSpec::new("Centro", lo, hi, "A")],
        fleet:   vec![class],
        station: StationConfig { names: vec!["A".into()], ..StationConfig::default() },
        ..SimConfig::default()
    }
}

fn one_truck_sim(capacity: u32, trips: u32) -> Sim {
    SimBuilder::new(one_zone_config(10, 10, TruckClass { count: 1, capacity, trips }))
        .build()
        .unwrap()
}

#[derive(Default)]
struct Recorder {
    events:     Vec<Event>,
    day_starts: Vec<u32>,
    day_ends:   Vec<u32>,
    sim_end:    Option<u32>,
    states:     Vec<(String, String)>,
}

impl TruckObserver for Recorder {
    fn notify_truck_state(&mut self, truck: &str, status: &str, _location: &str) {
        self.states.push((truck.to_owned(), status.to_owned()));
    }
}

impl SimObserver for Recorder {
    fn on_day_start(&mut self, day: u32) {
        self.day_starts.push(day);
    }

    fn on_event(&mut self, event: &Event) {
        self.events.push(*event);
    }

    fn on_day_end(&mut self, summary: &DaySummary) {
        self.day_ends.push(summary.day);
    }

    fn on_sim_end(&mut self, days: u32) {
        self.sim_end = Some(days);
    }
}

impl Recorder {
    fn saw_status(&self, prefix: &str) -> bool {
        self.states.iter().any(|(_, s)| s.starts_with(prefix))
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;
    use crate::SimError;

    #[test]
    fn default_config_builds() {
        let sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        assert_eq!(sim.world.zones.len(), 5);
        assert_eq!(sim.world.stations.len(), 2);
        assert!(sim.world.trucks.is_empty(), "fleet is planned per day");
        assert_eq!(sim.world.large_ids.total_created(), 2);
        assert_eq!(sim.world.router.station_for("sul").unwrap(), StationId(1));
        assert_eq!(sim.world.router.station_for("NORTE").unwrap(), StationId(0));
        assert_eq!(sim.day(), 0);
    }

    #[test]
    fn invalid_config_rejected() {
        let mut cfg = SimConfig::default();
        cfg.zones.clear();
        assert!(matches!(SimBuilder::new(cfg).build(), Err(SimError::Core(_))));
    }

    #[test]
    fn seed_override_applies() {
        let sim = SimBuilder::new(SimConfig::default()).seed(99).build().unwrap();
        assert_eq!(sim.world.config.seed, 99);
    }
}

// ── End-to-end scenarios ──────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;
    use wl_fleet::TruckPhase;

    #[test]
    fn a_small_truck_takes_what_fits_then_transfers() {
        let mut sim = one_truck_sim(4, 1);
        let mut obs = Recorder::default();

        let summary = sim.run_day(&mut obs).unwrap();

        assert_eq!(summary.zones[0].generated, 10);
        assert_eq!(summary.zones[0].residual, 6);
        assert_eq!(summary.stats.collected_tons, 4);
        assert_eq!(summary.stats.collection_rounds, 1);
        assert_eq!(summary.stats.transfers, 1);

        let kinds: Vec<&str> = obs.events.iter().map(|e| e.kind().label()).collect();
        assert_eq!(kinds, vec![
            "collection",
            "collection",
            "transfer-start",
            "station-arrival",
            "wait-tolerance-check",
        ]);

        // The partial load leaves after the tolerance window.
        assert_eq!(summary.landfill_trips, 1);
        assert_eq!(summary.landfill_tons, 4);
        assert_eq!(summary.large_trucks_created, 2);

        let truck = &sim.world.trucks[0];
        assert_eq!(truck.load(), 0);
        assert_eq!(truck.trips_remaining(), 0);
        assert_eq!(truck.phase(), TruckPhase::Done);
    }

    #[test]
    fn b_overflowing_unload_dispatches_and_replaces() {
        let mut sim = one_truck_sim(10, 3);
        sim.begin_day().unwrap();
        sim.scheduler.reset();
        assert!(sim.world.trucks[0].load_tons(5));
        sim.world.stations[0].active_mut().receive(18);
        sim.scheduler
            .schedule_at(Minute(60), EventKind::StationArrival { station: StationId(0), truck: TruckId(0) });

        sim.step(&mut NoopObserver).unwrap();

        let station = &sim.world.stations[0];
        assert_eq!(station.landfill_trips(), 1);
        assert_eq!(station.landfill_tons(), 20);
        assert_eq!(station.active().id(), LargeTruckId(2));
        assert_eq!(station.active().load(), 0);
        assert_eq!(sim.world.trucks[0].load(), 0);
    }

    #[test]
    fn c_queued_truck_timeout_is_cancelled_when_serviced() {
        let mut sim = one_truck_sim(10, 3);
        sim.begin_day().unwrap();
        sim.scheduler.reset();
        assert!(sim.world.trucks[0].load_tons(4));
        sim.world.stations[0].active_mut().receive(20);
        sim.scheduler
            .schedule_at(Minute(100), EventKind::StationArrival { station: StationId(0), truck: TruckId(0) });

        let mut obs = Recorder::default();
        sim.step(&mut obs).unwrap();

        let timeout = sim.world.trucks[0].pending_generation.unwrap();
        let pending: Vec<_> = sim.scheduler.pending().copied().collect();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id(), timeout);
        assert_eq!(pending[0].time(), Minute(150));
        assert_eq!(sim.world.stations[0].queue().len(), 1);
        assert!(obs.saw_status("Queued"));

        // Another truck's timeout brings a fresh large truck first.
        sim.scheduler
            .schedule_at(Minute(120), EventKind::GenerateLargeTruck { station: StationId(0) });
        sim.step(&mut obs).unwrap();

        assert!(!sim.scheduler.is_scheduled(timeout));
        assert!(sim.world.trucks[0].pending_generation.is_none());
        assert!(sim.world.stations[0].queue().is_empty());
        assert_eq!(sim.world.stations[0].active().load(), 4);

        sim.execute(&mut obs).unwrap();
        let generations = obs
            .events
            .iter()
            .filter(|e| matches!(e.kind(), EventKind::GenerateLargeTruck { .. }))
            .count();
        assert_eq!(generations, 1, "the cancelled timeout never fires");
    }

    #[test]
    fn d_zero_days_does_nothing() {
        let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        let mut obs = Recorder::default();

        let summaries = sim.run(0, &mut obs).unwrap();

        assert!(summaries.is_empty());
        assert!(obs.events.is_empty());
        assert!(obs.day_starts.is_empty());
        assert_eq!(obs.sim_end, Some(0));
        assert!(sim.stats.is_empty());
        assert!(sim.scheduler.last_executed().is_none());
        assert_eq!(sim.day(), 0);
    }
}

// ── Full runs ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run {
    use proptest::prelude::*;
    use wl_core::LARGE_TRUCK_CAPACITY;
    use wl_fleet::{FleetError, TruckPhase, ZoneRouter};

    use super::*;
    use crate::SimError;

    fn check_day_invariants(sim: &Sim, summary: &DaySummary) {
        assert_eq!(
            summary.total_generated() - summary.total_residual(),
            summary.stats.collected_tons,
            "every ton that left a zone was recorded"
        );
        assert!(sim.scheduler.is_empty());
        for station in &sim.world.stations {
            assert!(station.active().load() <= LARGE_TRUCK_CAPACITY);
            assert!(station.queue().is_empty());
        }
        for truck in &sim.world.trucks {
            assert!(truck.load() <= truck.capacity());
        }
    }

    #[test]
    fn default_day_drains_every_truck() {
        let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        let mut obs = Recorder::default();

        let summary = sim.run_day(&mut obs).unwrap();

        check_day_invariants(&sim, &summary);
        assert_eq!(summary.day, 1);
        assert_eq!(summary.events_executed, obs.events.len());
        assert_eq!(summary.end_time, obs.events.last().unwrap().time());
        assert_eq!(summary.fleet.iter().map(|c| c.count).sum::<u32>(), 20);
        for truck in &sim.world.trucks {
            assert_eq!(truck.trips_remaining(), 0);
            assert_eq!(truck.load(), 0);
            assert_eq!(truck.phase(), TruckPhase::Done);
        }
        assert!(obs.saw_status("Collecting"));
        assert!(obs.saw_status("To station"));
        assert!(obs.saw_status("Unloading"));
        assert!(obs.saw_status("Day done"));
        assert!(obs.saw_status("To landfill"));
    }

    #[test]
    fn events_run_in_time_order() {
        let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        let mut obs = Recorder::default();
        sim.run_day(&mut obs).unwrap();
        assert!(obs.events.windows(2).all(|w| w[0].time() <= w[1].time()));
    }

    #[test]
    fn same_seed_same_days() {
        let run = |seed| {
            let mut sim = SimBuilder::new(SimConfig::default()).seed(seed).build().unwrap();
            sim.run(2, &mut NoopObserver).unwrap()
        };
        assert_eq!(run(9), run(9));
    }

    #[test]
    fn multi_day_run_resets_between_days() {
        let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        let mut obs = Recorder::default();

        let summaries = sim.run(3, &mut obs).unwrap();

        assert_eq!(summaries.iter().map(|s| s.day).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(obs.day_starts, vec![1, 2, 3]);
        assert_eq!(obs.day_ends, vec![1, 2, 3]);
        assert_eq!(obs.sim_end, Some(3));
        assert!(sim.stats.is_empty());
        assert!(sim.scheduler.is_empty());
        assert!(summaries.windows(2).all(|w| w[0].large_trucks_created <= w[1].large_trucks_created));
        for s in &summaries {
            assert!(!s.stats.is_empty());
        }
    }

    #[test]
    fn zone_generation_event_redraws_one_zone() {
        let mut sim = one_truck_sim(4, 1);
        sim.scheduler
            .schedule_at(Minute(0), EventKind::ZoneGeneration { zone: ZoneId(0) });
        sim.step(&mut NoopObserver).unwrap();
        assert_eq!(sim.world.zones[0].accumulated(), 10);
    }

    #[test]
    fn unmapped_zone_fails_the_day() {
        let mut sim = SimBuilder::new(one_zone_config(10, 10, TruckClass { count: 1, capacity: 4, trips: 1 }))
            .router(ZoneRouter::new())
            .build()
            .unwrap();
        let err = sim.run_day(&mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::Fleet(FleetError::UnknownZone(ref z)) if z == "Centro"));
    }

    #[test]
    fn unknown_station_is_an_error() {
        let mut sim = one_truck_sim(4, 1);
        sim.scheduler
            .schedule_at(Minute(0), EventKind::GenerateLargeTruck { station: StationId(5) });
        assert!(matches!(sim.step(&mut NoopObserver), Err(SimError::UnknownStation(StationId(5)))));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn any_seed_keeps_invariants(seed in any::<u64>()) {
            let mut sim = SimBuilder::new(SimConfig::default()).seed(seed).build().unwrap();
            let summary = sim.run_day(&mut NoopObserver).unwrap();
            check_day_invariants(&sim, &summary);
        }
    }
}
