//! Truck state notifications.

/// Receives a notification at every meaningful truck transition.
///
/// Both methods default to no-ops.  `pace` is called after each
/// notification so an interactive front end can throttle the run; batch
/// observers leave it empty.
pub trait TruckObserver {
    /// `truck` is the display label (small trucks `C3-4t`, large trucks `G2`).
    fn notify_truck_state(&mut self, _truck: &str, _status: &str, _location: &str) {}

    fn pace(&mut self) {}
}

/// An observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl TruckObserver for NoopObserver {}

/// Status labels shared by every producer of truck notifications.
pub mod status {
    pub const WAITING:     &str = "Waiting";
    pub const COLLECTING:  &str = "Collecting";
    pub const QUEUED:      &str = "Queued";
    pub const UNLOADING:   &str = "Unloading";
    pub const TO_LANDFILL: &str = "To landfill";
    pub const DAY_DONE:    &str = "Day done";

    /// `To station <name>`.
    pub fn to_station(name: &str) -> String {
        format!("To station {name}")
    }
}
