//! Per-day statistics sink.

/// Accumulates collection and transfer totals for one simulated day.
///
/// Passed by `&mut` through every event execution; the orchestrator resets
/// it between days.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyStats {
    /// Tonnes loaded into small trucks.
    pub collected_tons:     u64,
    /// Collection rounds that loaded a nonzero amount.
    pub collection_rounds:  u32,
    /// Minutes spent on those rounds (travel + loading).
    pub collection_minutes: u64,
    /// Trips started towards a station.
    pub transfers:          u32,
    /// Minutes spent on those trips.
    pub transfer_minutes:   u64,
}

impl DailyStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_collection(&mut self, tons: u32, minutes: u32) {
        self.collected_tons += tons as u64;
        self.collection_rounds += 1;
        self.collection_minutes += minutes as u64;
    }

    pub fn record_transfer(&mut self, minutes: u32) {
        self.transfers += 1;
        self.transfer_minutes += minutes as u64;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Mean minutes per collection round, or `None` before the first round.
    pub fn mean_collection_minutes(&self) -> Option<f64> {
        (self.collection_rounds > 0)
            .then(|| self.collection_minutes as f64 / self.collection_rounds as f64)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
