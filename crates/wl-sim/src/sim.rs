//! The `Sim` struct and its day loop.

use tracing::{info, warn};

use wl_core::{DailyStats, Minute};
use wl_schedule::{Event, EventScheduler};

use crate::summary::{ClassCount, ZoneResidual};
use crate::world::Executor;
use crate::{DaySummary, SimObserver, SimResult, World};

/// The main simulation runner.
///
/// One simulated day runs as:
///
/// 1. **Generate**: every zone redraws its waste.
/// 2. **Plan**: the small-truck fleet is rebuilt from the truck classes and
///    each truck gets a Collection event at minute 0 for its first zone.
/// 3. **Execute**: the scheduler pops and executes events until the queue
///    drains.
/// 4. **Summarise**: zone residuals, fleet counts and the day's statistics
///    are copied into a [`DaySummary`]; then the scheduler and statistics
///    are reset.
///
/// Stations, their large trucks and the large-truck id counter persist
/// across days.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim {
    pub world:     World,
    pub scheduler: EventScheduler,
    pub stats:     DailyStats,
    /// Days completed so far.
    day:           u32,
    /// Per-day bookkeeping captured by `begin_day`.
    generated:     Vec<u32>,
    landfill_mark: (u32, u64),
}

impl Sim {
    pub(crate) fn new(world: World) -> Self {
        Self {
            world,
            scheduler: EventScheduler::new(),
            stats: DailyStats::new(),
            day: 0,
            generated: Vec::new(),
            landfill_mark: (0, 0),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run `days` consecutive days and return one summary per day.
    ///
    /// `days == 0` executes nothing.
    pub fn run<O: SimObserver>(&mut self, days: u32, observer: &mut O) -> SimResult<Vec<DaySummary>> {
        let mut summaries = Vec::with_capacity(days as usize);
        for _ in 0..days {
            summaries.push(self.run_day(observer)?);
        }
        observer.on_sim_end(days);
        Ok(summaries)
    }

    /// Run one full day.
    pub fn run_day<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<DaySummary> {
        observer.on_day_start(self.day + 1);
        self.begin_day()?;
        let executed = self.execute(observer)?;
        let summary = self.end_day(executed);
        observer.on_day_end(&summary);
        Ok(summary)
    }

    /// Regenerate zones, plan the fleet and schedule the opening events,
    /// without executing anything.
    pub fn begin_day(&mut self) -> SimResult<()> {
        self.day += 1;
        info!(day = self.day, "day start");
        self.generated = self.world.generate_waste();
        self.landfill_mark = self.landfill_totals();
        self.world.plan_day(&mut self.scheduler)
    }

    /// Execute events until the queue drains.  Returns how many ran.
    pub fn execute<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<usize> {
        let mut executor = Executor { world: &mut self.world, observer };
        self.scheduler.run(&mut executor, &mut self.stats)
    }

    /// Execute a single event.  `None` when the queue is empty.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<Event>> {
        let mut executor = Executor { world: &mut self.world, observer };
        self.scheduler.step(&mut executor, &mut self.stats)
    }

    /// Build the day's summary, then reset the scheduler and statistics.
    pub fn end_day(&mut self, executed: usize) -> DaySummary {
        let summary = self.summarise(executed);
        for station in &self.world.stations {
            if !station.queue().is_empty() {
                warn!(station = station.name(), queued = station.queue().len(), "day ended with trucks queued");
            }
        }
        info!(
            day = summary.day,
            end = %summary.end_time,
            collected = summary.stats.collected_tons,
            residual = summary.total_residual(),
            "day end"
        );
        self.scheduler.reset();
        self.stats.reset();
        summary
    }

    /// Days completed or in progress.
    pub fn day(&self) -> u32 {
        self.day
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn landfill_totals(&self) -> (u32, u64) {
        self.world
            .stations
            .iter()
            .fold((0, 0), |(trips, tons), s| (trips + s.landfill_trips(), tons + s.landfill_tons()))
    }

    fn summarise(&self, executed: usize) -> DaySummary {
        let zones = self
            .world
            .zones
            .iter()
            .enumerate()
            .map(|(i, z)| ZoneResidual {
                zone:      z.id(),
                name:      z.name().to_owned(),
                generated: self.generated.get(i).copied().unwrap_or(0),
                residual:  z.accumulated(),
            })
            .collect();

        let mut fleet: Vec<ClassCount> = Vec::new();
        for truck in &self.world.trucks {
            match fleet.iter_mut().find(|c| c.capacity == truck.capacity()) {
                Some(c) => c.count += 1,
                None => fleet.push(ClassCount { capacity: truck.capacity(), count: 1 }),
            }
        }

        let (trips, tons) = self.landfill_totals();
        DaySummary {
            day: self.day,
            end_time: self.scheduler.last_executed().map_or(Minute::ZERO, Event::time),
            events_executed: executed,
            zones,
            fleet,
            large_trucks_created: self.world.large_ids.total_created(),
            landfill_trips: trips - self.landfill_mark.0,
            landfill_tons: tons - self.landfill_mark.1,
            stats: self.stats,
        }
    }
}
