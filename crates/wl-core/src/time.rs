//! Simulation time model.
//!
//! # Design
//!
//! Time inside a simulated day is a `Minute` counter starting at 0.  The
//! working day opens at 07:00, so the wall-clock reading of a minute is
//!
//!   wall = 07:00 + minute
//!
//! Keeping the canonical unit an unsigned integer makes event times exact and
//! rules out negative times once an event has been built.  Untrusted signed
//! input goes through [`Minute::try_from_signed`].

use std::fmt;

/// Minutes after midnight at which minute 0 of a simulated day falls (07:00).
pub const DAY_ORIGIN: u32 = 7 * 60;

// ── Minute ────────────────────────────────────────────────────────────────────

/// Minutes elapsed since the start of the simulated day.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minute(pub u32);

impl Minute {
    pub const ZERO: Minute = Minute(0);

    /// Return the minute `n` after `self`.
    #[inline]
    pub fn offset(self, n: u32) -> Minute {
        Minute(self.0 + n)
    }

    /// `None` for negative input.
    pub fn try_from_signed(raw: i64) -> Option<Minute> {
        u32::try_from(raw).ok().map(Minute)
    }

    /// Minutes after midnight (07:00 origin applied).
    #[inline]
    pub fn minute_of_day(self) -> u32 {
        DAY_ORIGIN + self.0
    }
}

impl std::ops::Add<u32> for Minute {
    type Output = Minute;
    #[inline]
    fn add(self, rhs: u32) -> Minute {
        Minute(self.0 + rhs)
    }
}

impl std::ops::Sub for Minute {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: Minute) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t+{}m", self.0)
    }
}

// ── Formatting ────────────────────────────────────────────────────────────────

/// Wall-clock reading of `m` as `HH:MM`.
///
/// Hours are not wrapped at 24 so a day that runs past midnight reads
/// `25:10` rather than silently aliasing the morning.
pub fn format_clock(m: Minute) -> String {
    let total = m.minute_of_day();
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// `"2h 5m"` or `"45m"`.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours > 0 {
        format!("{hours}h {rest}m")
    } else {
        format!("{rest}m")
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The scheduler's clock: the time of the most recently executed event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimClock {
    now: Minute,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> Minute {
        self.now
    }

    /// Move the clock to `t`.
    ///
    /// Events are popped in non-decreasing order, so in debug builds a
    /// backwards jump indicates a scheduler bug.
    #[inline]
    pub fn advance_to(&mut self, t: Minute) {
        debug_assert!(t >= self.now, "clock moved backwards: {} -> {}", self.now, t);
        self.now = t;
    }

    pub fn reset(&mut self) {
        self.now = Minute::ZERO;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", format_clock(self.now), self.now)
    }
}
