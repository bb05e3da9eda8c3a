//! Transfer stations: receive small trucks, load large trucks, dispatch them.
//!
//! # Protocol
//!
//! | Situation on arrival            | Effect                                                        |
//! |---------------------------------|---------------------------------------------------------------|
//! | active large truck has room     | service the small truck (below); dispatch if now full         |
//! | active large truck is full      | queue the small truck; arm a generate event at `now + wait`   |
//!
//! Servicing a small truck cancels its pending generate event, moves its
//! load into the large truck (surplus beyond capacity is discarded), arms a
//! tolerance check when the large truck goes from empty to loaded, spends a
//! trip, and sends the truck back to the next route zone after the unload
//! time if it has trips left.
//!
//! Dispatching cancels the tolerance check, sends the large truck to the
//! landfill, brings in a fresh one, and services queued trucks until the
//! queue is empty or the fresh truck fills, in which case it is dispatched
//! too and draining continues.

use tracing::{debug, info, warn};

use wl_core::{EventId, LargeTruckId, Minute, StationConfig, StationId, TimingConfig, TruckId};
use wl_schedule::{EventKind, EventScheduler, FifoQueue};

use crate::observer::status;
use crate::{FleetError, FleetResult, LargeTruck, LargeTruckIds, SmallTruck, TruckObserver, TruckPhase};

/// Everything a station touches besides itself, borrowed for one call.
pub struct StationContext<'a> {
    pub trucks:    &'a mut [SmallTruck],
    pub scheduler: &'a mut EventScheduler,
    pub large_ids: &'a mut LargeTruckIds,
    pub timing:    &'a TimingConfig,
    pub config:    &'a StationConfig,
    pub observer:  &'a mut dyn TruckObserver,
}

fn truck_mut(trucks: &mut [SmallTruck], id: TruckId) -> FleetResult<&mut SmallTruck> {
    trucks.get_mut(id.index()).ok_or(FleetError::NoSuchTruck(id))
}

impl StationContext<'_> {
    fn notify(&mut self, truck: &str, status: &str, location: &str) {
        self.observer.notify_truck_state(truck, status, location);
        self.observer.pace();
    }
}

/// What `receive` did with an arriving truck.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reception {
    /// Unloaded straight into the active large truck.
    Serviced { unload_minutes: u32 },
    /// Put in the wait line at `position` (0 = head).
    Queued { position: usize },
}

#[derive(Debug)]
pub struct TransferStation {
    id:             StationId,
    name:           String,
    location:       String,
    active:         LargeTruck,
    queue:          FifoQueue<TruckId>,
    landfill_trips: u32,
    landfill_tons:  u64,
}

impl TransferStation {
    /// A station with a fresh empty large truck drawn from `large_ids`.
    pub fn new(id: StationId, name: impl Into<String>, large_ids: &mut LargeTruckIds) -> Self {
        let name = name.into();
        Self {
            id,
            location: format!("Station {name}"),
            name,
            active: LargeTruck::new(large_ids.next_id()),
            queue: FifoQueue::new(),
            landfill_trips: 0,
            landfill_tons: 0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn active(&self) -> &LargeTruck {
        &self.active
    }

    pub fn active_mut(&mut self) -> &mut LargeTruck {
        &mut self.active
    }

    pub fn queue(&self) -> &FifoQueue<TruckId> {
        &self.queue
    }

    /// `true` when the active large truck can still take waste.
    pub fn has_available_truck(&self) -> bool {
        !self.active.is_full()
    }

    /// Large trucks sent to the landfill so far.
    pub fn landfill_trips(&self) -> u32 {
        self.landfill_trips
    }

    /// Tons hauled to the landfill so far.
    pub fn landfill_tons(&self) -> u64 {
        self.landfill_tons
    }

    /// Forget per-day state before a new fleet is planned.  Small-truck ids
    /// are reissued every day, so anything still queued is dropped.
    pub fn start_day(&mut self) {
        if !self.queue.is_empty() {
            warn!(station = %self.name, dropped = self.queue.len(), "trucks still queued at day start");
            self.queue.clear();
        }
        self.active.pending_check = None;
    }

    // ── Event entry points ────────────────────────────────────────────────

    /// A small truck arrives at `now`.
    pub fn receive(&mut self, truck: TruckId, now: Minute, ctx: &mut StationContext<'_>) -> FleetResult<Reception> {
        if !self.has_available_truck() {
            let max_wait = ctx.config.max_wait_minutes;
            let station = self.id;
            let t = truck_mut(ctx.trucks, truck)?;
            t.set_phase(TruckPhase::Queued);
            let armed = t.pending_generation.is_none();
            if armed {
                let handle = ctx.scheduler.schedule_at(now + max_wait, EventKind::GenerateLargeTruck { station });
                t.pending_generation = Some(handle);
            }
            let label = t.label().to_owned();
            self.queue.enqueue(truck);
            ctx.notify(&label, status::QUEUED, &self.location);
            debug!(station = %self.name, %truck, queued = self.queue.len(), armed, "large truck full, queued");
            return Ok(Reception::Queued { position: self.queue.len() - 1 });
        }

        let unload_minutes = self.service(truck, now, ctx)?;
        if self.active.is_full() {
            self.dispatch(now + unload_minutes, ctx)?;
        }
        Ok(Reception::Serviced { unload_minutes })
    }

    /// A queued truck's wait limit expired.  Dispatches and restocks only if
    /// the active large truck is full; otherwise a no-op.  Reports whether a
    /// dispatch happened.
    pub fn on_generate_large_truck(&mut self, now: Minute, ctx: &mut StationContext<'_>) -> FleetResult<bool> {
        if self.has_available_truck() {
            return Ok(false);
        }
        info!(station = %self.name, "max wait reached, bringing in a new large truck");
        self.dispatch(now, ctx)?;
        Ok(true)
    }

    /// The tolerance window of `large` expired.  Dispatches only if `large`
    /// is still the active truck and is partially loaded.
    pub fn on_tolerance_check(
        &mut self,
        large: LargeTruckId,
        now:   Minute,
        ctx:   &mut StationContext<'_>,
    ) -> FleetResult<bool> {
        let current = &self.active;
        if current.id() != large || current.is_empty() || current.is_full() {
            return Ok(false);
        }
        info!(station = %self.name, %large, load = current.load(), "tolerance reached, leaving partially loaded");
        self.dispatch(now, ctx)?;
        Ok(true)
    }

    /// Send the active large truck to the landfill, bring in a fresh one and
    /// drain the wait line into it.
    pub fn dispatch(&mut self, now: Minute, ctx: &mut StationContext<'_>) -> FleetResult<()> {
        loop {
            if let Some(check) = self.active.pending_check.take() {
                ctx.scheduler.cancel(check);
            }
            let hauled = self.active.depart();
            self.landfill_trips += 1;
            self.landfill_tons += u64::from(hauled);
            ctx.notify(&self.active.id().to_string(), status::TO_LANDFILL, "Landfill");
            info!(station = %self.name, large = %self.active.id(), hauled, "large truck dispatched");

            self.active = LargeTruck::new(ctx.large_ids.next_id());
            ctx.notify(&self.active.id().to_string(), status::WAITING, &self.location);

            while !self.active.is_full() {
                let Some(next) = self.queue.poll() else { break };
                self.service(next, now, ctx)?;
            }
            if !self.active.is_full() {
                return Ok(());
            }
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Unload `truck` into the active large truck and schedule its next
    /// collection.  Returns the unload time.
    fn service(&mut self, truck: TruckId, now: Minute, ctx: &mut StationContext<'_>) -> FleetResult<u32> {
        let tolerance = ctx.config.large_truck_tolerance_minutes;
        let per_ton = ctx.timing.unload_minutes_per_ton;

        let t = truck_mut(ctx.trucks, truck)?;
        let pending: Option<EventId> = t.pending_generation.take();
        let tons = t.unload();
        let unload_minutes = tons * per_ton;
        let label = t.label().to_owned();

        if let Some(handle) = pending {
            ctx.scheduler.cancel(handle);
        }
        ctx.notify(&label, status::UNLOADING, &self.location);

        let was_empty = self.active.is_empty();
        let accepted = self.active.receive(tons);
        if accepted < tons {
            debug!(station = %self.name, %truck, discarded = tons - accepted, "surplus discarded");
        }
        if was_empty && !self.active.is_empty() {
            let kind = EventKind::WaitToleranceCheck { station: self.id, large: self.active.id() };
            self.active.pending_check = Some(ctx.scheduler.schedule_at(now + tolerance, kind));
        }

        let t = truck_mut(ctx.trucks, truck)?;
        t.consume_trip();
        if t.can_travel() {
            let zone = t.advance_sequential();
            t.set_phase(TruckPhase::Collecting);
            ctx.scheduler.schedule_at(now + unload_minutes, EventKind::Collection { truck, zone });
        } else {
            t.set_phase(TruckPhase::Done);
            ctx.notify(&label, status::DAY_DONE, &self.location);
        }
        debug!(station = %self.name, %truck, tons, unload_minutes, large_load = self.active.load(), "serviced");
        Ok(unload_minutes)
    }
}
