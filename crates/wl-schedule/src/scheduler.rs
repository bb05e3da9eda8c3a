//! `EventScheduler`: the global time-ordered event queue plus the clock.
//!
//! # Why a linked sequence and not a heap
//!
//! Cancellation is by handle and frequent (every serviced queued truck and
//! every early large-truck departure retracts one event), and same-time
//! ordering must follow the ordered-insert rule exactly for runs to be
//! reproducible.  An [`OrderedSeq`] gives both: `O(n)` insert/cancel over a
//! queue that rarely holds more than a few dozen events, and a tie order
//! that is part of its contract rather than an accident of heap layout.

use tracing::{debug, trace, warn};

use wl_core::{DailyStats, EventId, Minute, SimClock};

use crate::{Event, EventKind, OrderedSeq};

/// The single `execute` capability every event is dispatched through.
///
/// Implemented by whatever owns the zones, trucks and stations.  The
/// handler receives the scheduler so it can schedule follow-up work or cancel
/// pending events; no two executions interleave.
pub trait EventHandler {
    type Error;

    fn execute(
        &mut self,
        event:     &Event,
        scheduler: &mut EventScheduler,
        stats:     &mut DailyStats,
    ) -> Result<(), Self::Error>;
}

/// Time-ordered event queue and simulation clock.
#[derive(Debug, Default)]
pub struct EventScheduler {
    queue:         OrderedSeq<Event>,
    clock:         SimClock,
    last_executed: Option<Event>,
    /// Never reset, so a handle from a previous day can never match.
    next_id:       u64,
}

impl EventScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `event` by time and return its cancellation handle.
    pub fn schedule(&mut self, mut event: Event) -> EventId {
        let id = EventId(self.next_id);
        self.next_id += 1;
        event.stamp(id);

        if event.time() < self.clock.now() {
            warn!(%event, now = %self.clock, "event scheduled in the past");
        }
        trace!(%event, pending = self.queue.len() + 1, "schedule");

        self.queue.insert_sorted_by(event, Event::cmp_time);
        id
    }

    /// Shorthand for `schedule(Event::at(time, kind))`.
    pub fn schedule_at(&mut self, time: Minute, kind: EventKind) -> EventId {
        self.schedule(Event::at(time, kind))
    }

    /// Retract a pending event.  `false` if it already ran, was already
    /// cancelled, or was never scheduled.
    pub fn cancel(&mut self, id: EventId) -> bool {
        match self.queue.remove_first_by(|e| e.id() == id) {
            Some(event) => {
                debug!(%event, "cancelled");
                true
            }
            None => false,
        }
    }

    /// Pop the earliest event and move the clock to its time.
    pub fn pop_next(&mut self) -> Option<Event> {
        let event = self.queue.pop_front()?;
        self.clock.advance_to(event.time());
        self.last_executed = Some(event);
        Some(event)
    }

    /// Execute one event.  Returns the event that ran, or `None` when idle.
    pub fn step<H: EventHandler>(
        &mut self,
        handler: &mut H,
        stats:   &mut DailyStats,
    ) -> Result<Option<Event>, H::Error> {
        let Some(event) = self.pop_next() else {
            return Ok(None);
        };
        debug!(%event, "execute");
        handler.execute(&event, self, stats)?;
        Ok(Some(event))
    }

    /// Execute events until the queue drains.  Returns how many ran.
    ///
    /// There is no iteration bound: a handler that reschedules itself forever
    /// never returns.  The first handler error aborts the run and is returned;
    /// remaining events stay queued.
    pub fn run<H: EventHandler>(
        &mut self,
        handler: &mut H,
        stats:   &mut DailyStats,
    ) -> Result<usize, H::Error> {
        let mut executed = 0;
        while self.step(handler, stats)?.is_some() {
            executed += 1;
        }
        debug!(executed, end = %self.clock, "queue drained");
        Ok(executed)
    }

    /// Drop every pending event and rewind the clock.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.clock.reset();
        self.last_executed = None;
    }

    // ── Introspection ─────────────────────────────────────────────────────

    /// Time of the most recently executed event.
    #[inline]
    pub fn now(&self) -> Minute {
        self.clock.now()
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn last_executed(&self) -> Option<&Event> {
        self.last_executed.as_ref()
    }

    pub fn is_scheduled(&self, id: EventId) -> bool {
        self.queue.iter().any(|e| e.id() == id)
    }

    /// Pending events in execution order.
    pub fn pending(&self) -> impl Iterator<Item = &Event> + '_ {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
