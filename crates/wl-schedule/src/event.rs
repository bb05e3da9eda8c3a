//! Typed units of deferred work.
//!
//! The variant set is closed: every kind of work the simulator defers is one
//! `EventKind` arm carrying only the ids it needs.  The owning world
//! resolves those ids when it executes the event (see
//! [`EventHandler`][crate::EventHandler]).

use std::cmp::Ordering;
use std::fmt;

use wl_core::{EventId, LargeTruckId, Minute, StationId, TruckId, ZoneId, format_clock};

use crate::{ScheduleError, ScheduleResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// Redraw one zone's daily waste.
    ZoneGeneration { zone: ZoneId },
    /// A small truck tries to load at `zone`.
    Collection { truck: TruckId, zone: ZoneId },
    /// A small truck leaves `origin` for the station that owns it.
    TransferStart { truck: TruckId, origin: ZoneId },
    /// A small truck reaches `station`.
    StationArrival { station: StationId, truck: TruckId },
    /// A queued truck's wait limit expired; force a fresh large truck.
    GenerateLargeTruck { station: StationId },
    /// A partially loaded large truck's tolerance window expired.
    WaitToleranceCheck { station: StationId, large: LargeTruckId },
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::ZoneGeneration { .. }     => "zone-generation",
            EventKind::Collection { .. }         => "collection",
            EventKind::TransferStart { .. }      => "transfer-start",
            EventKind::StationArrival { .. }     => "station-arrival",
            EventKind::GenerateLargeTruck { .. } => "generate-large-truck",
            EventKind::WaitToleranceCheck { .. } => "wait-tolerance-check",
        }
    }
}

/// A timestamped [`EventKind`].
///
/// `id` is [`EventId::INVALID`] until the scheduler accepts the event, after
/// which it is the handle used for cancellation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Event {
    id:   EventId,
    time: Minute,
    kind: EventKind,
}

impl Event {
    /// Build an event at a known-valid time.
    pub fn at(time: Minute, kind: EventKind) -> Self {
        Self { id: EventId::INVALID, time, kind }
    }

    /// Build an event from a signed time, rejecting negative values.
    pub fn new(time: i64, kind: EventKind) -> ScheduleResult<Self> {
        Minute::try_from_signed(time)
            .map(|t| Self::at(t, kind))
            .ok_or(ScheduleError::NegativeTime(time))
    }

    #[inline]
    pub fn id(&self) -> EventId {
        self.id
    }

    #[inline]
    pub fn time(&self) -> Minute {
        self.time
    }

    #[inline]
    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    /// Order two events by time alone.
    #[inline]
    pub fn cmp_time(&self, other: &Event) -> Ordering {
        self.time.cmp(&other.time)
    }

    pub(crate) fn stamp(&mut self, id: EventId) {
        self.id = id;
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at {}", self.id, self.kind.label(), format_clock(self.time))?;
        match self.kind {
            EventKind::ZoneGeneration { zone } => write!(f, " [{zone}]"),
            EventKind::Collection { truck, zone } => write!(f, " [{truck} @ {zone}]"),
            EventKind::TransferStart { truck, origin } => write!(f, " [{truck} from {origin}]"),
            EventKind::StationArrival { station, truck } => write!(f, " [{truck} -> {station}]"),
            EventKind::GenerateLargeTruck { station } => write!(f, " [{station}]"),
            EventKind::WaitToleranceCheck { station, large } => write!(f, " [{large} @ {station}]"),
        }
    }
}
