//! Peak-aware travel and work-time model.
//!
//! A trip's base length is drawn uniformly from the peak or off-peak bounds
//! chosen by the departure time.  The base is then walked minute by minute
//! from departure: each minute costs `ceil(multiplier)` simulated minutes,
//! where the multiplier depends on whether *that* minute is in a peak window.
//! A trip that starts just before rush hour therefore slows down part way.

use crate::{Minute, SimRng, TimingConfig};

/// Breakdown of one truck operation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TripDuration {
    /// Loading time at a zone (0 for trips to a station).
    pub operation: u32,
    /// Traffic-scaled travel time.
    pub travel:    u32,
    /// Loaded-trip surcharge (0 for collections).
    pub extra:     u32,
    /// `operation + travel + extra`.
    pub total:     u32,
}

impl TripDuration {
    pub fn new(operation: u32, travel: u32, extra: u32) -> Self {
        Self { operation, travel, extra, total: operation + travel + extra }
    }
}

/// Draws travel times.  Owns its RNG stream so travel draws never disturb
/// the waste-generation stream.
#[derive(Clone, Debug)]
pub struct TravelModel {
    timing: TimingConfig,
    rng:    SimRng,
}

impl TravelModel {
    pub fn new(timing: TimingConfig, rng: SimRng) -> Self {
        Self { timing, rng }
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Walk `base_minutes` forward from `departure`, scaling each minute by
    /// the traffic multiplier in force at that minute.
    pub fn scaled_travel(&self, departure: Minute, base_minutes: u32) -> u32 {
        let peak_cost = self.timing.peak_multiplier.ceil() as u32;
        let off_peak_cost = self.timing.off_peak_multiplier.ceil() as u32;
        let start = departure.minute_of_day();
        (0..base_minutes)
            .map(|i| if self.timing.is_peak(start + i) { peak_cost } else { off_peak_cost })
            .sum()
    }

    /// Draw the duration of a collection round (`unloading == false`) or of
    /// a loaded trip to a station (`unloading == true`) starting at `now`.
    pub fn detailed(&mut self, now: Minute, tons: u32, unloading: bool) -> TripDuration {
        let t = &self.timing;
        let (lo, hi) = if t.is_peak(now.minute_of_day()) {
            (t.peak_travel_min, t.peak_travel_max)
        } else {
            (t.off_peak_travel_min, t.off_peak_travel_max)
        };
        let base = self.rng.between(lo, hi);
        let travel = self.scaled_travel(now, base);

        if unloading {
            let extra = (travel as f64 * self.timing.loaded_travel_surcharge) as u32;
            TripDuration::new(0, travel, extra)
        } else {
            TripDuration::new(tons * self.timing.collect_minutes_per_ton, travel, 0)
        }
    }

    /// Time to unload `tons` at a station.
    #[inline]
    pub fn unload_minutes(&self, tons: u32) -> u32 {
        tons * self.timing.unload_minutes_per_ton
    }
}
