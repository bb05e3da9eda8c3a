//! Plain data row types written by output backends.

use wl_core::{Minute, format_clock};
use wl_sim::DaySummary;

/// Totals for one simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySummaryRow {
    pub day:                  u32,
    /// Minutes since the day origin of the last executed event.
    pub end_minute:           u32,
    pub events_executed:      u64,
    pub generated_tons:       u64,
    pub collected_tons:       u64,
    pub residual_tons:        u64,
    pub collection_rounds:    u32,
    pub transfers:            u32,
    pub landfill_trips:       u32,
    pub landfill_tons:        u64,
    pub large_trucks_created: u32,
}

impl From<&DaySummary> for DaySummaryRow {
    fn from(s: &DaySummary) -> Self {
        Self {
            day:                  s.day,
            end_minute:           s.end_time.0,
            events_executed:      s.events_executed as u64,
            generated_tons:       s.total_generated(),
            collected_tons:       s.stats.collected_tons,
            residual_tons:        s.total_residual(),
            collection_rounds:    s.stats.collection_rounds,
            transfers:            s.stats.transfers,
            landfill_trips:       s.landfill_trips,
            landfill_tons:        s.landfill_tons,
            large_trucks_created: s.large_trucks_created,
        }
    }
}

/// One zone's generation and leftover at the end of a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneResidualRow {
    pub day:       u32,
    pub zone:      String,
    pub generated: u32,
    pub residual:  u32,
}

impl ZoneResidualRow {
    /// One row per zone of `summary`.
    pub fn from_summary(summary: &DaySummary) -> Vec<Self> {
        summary
            .zones
            .iter()
            .map(|z| Self {
                day:       summary.day,
                zone:      z.name.clone(),
                generated: z.generated,
                residual:  z.residual,
            })
            .collect()
    }
}

/// A truck status change as reported through `TruckObserver`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruckStateRow {
    pub day:      u32,
    pub minute:   Minute,
    pub truck:    String,
    pub status:   String,
    pub location: String,
}

impl TruckStateRow {
    /// `HH:MM` reading of `minute`.
    pub fn clock(&self) -> String {
        format_clock(self.minute)
    }
}
