//! End-of-day summary.

use std::fmt;

use wl_core::{DailyStats, Minute, ZoneId, format_clock, format_duration};

/// One zone at the end of a day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneResidual {
    pub zone:      ZoneId,
    pub name:      String,
    /// Tons drawn at the start of the day.
    pub generated: u32,
    /// Tons left uncollected.
    pub residual:  u32,
}

/// How many small trucks of one capacity ran that day.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClassCount {
    pub capacity: u32,
    pub count:    u32,
}

/// What an orchestrator reads after the queue drains.
#[derive(Clone, Debug, PartialEq)]
pub struct DaySummary {
    /// 1-based day number.
    pub day:                  u32,
    /// Time of the last executed event.
    pub end_time:             Minute,
    pub events_executed:      usize,
    pub zones:                Vec<ZoneResidual>,
    pub fleet:                Vec<ClassCount>,
    /// Large trucks created since the simulation was built.
    pub large_trucks_created: u32,
    /// Large-truck departures to the landfill during this day.
    pub landfill_trips:       u32,
    /// Tons hauled to the landfill during this day.
    pub landfill_tons:        u64,
    pub stats:                DailyStats,
}

impl DaySummary {
    pub fn total_generated(&self) -> u64 {
        self.zones.iter().map(|z| u64::from(z.generated)).sum()
    }

    pub fn total_residual(&self) -> u64 {
        self.zones.iter().map(|z| u64::from(z.residual)).sum()
    }
}

impl fmt::Display for DaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Day {} ended at {} ({} events)", self.day, format_clock(self.end_time), self.events_executed)?;
        for z in &self.zones {
            writeln!(f, "  {:<8} generated {:>3} t, residual {:>3} t", z.name, z.generated, z.residual)?;
        }
        for c in &self.fleet {
            writeln!(f, "  {:>2} trucks of {:>2} t", c.count, c.capacity)?;
        }
        let s = &self.stats;
        writeln!(f, "  collected {} t in {} rounds", s.collected_tons, s.collection_rounds)?;
        if let Some(mean) = s.mean_collection_minutes() {
            writeln!(f, "  mean round {}", format_duration(mean.round() as u32))?;
        }
        writeln!(f, "  {} transfers, {} to the landfill ({} t)", s.transfers, self.landfill_trips, self.landfill_tons)?;
        write!(f, "  large trucks created so far: {}", self.large_trucks_created)
    }
}
