//! Run configuration.
//!
//! Every tunable constant of the simulator lives here as plain data.  The
//! core crates only ever read it; the orchestrator decides where it comes
//! from (the `Default` reference values, a JSON file, CSV tables, …).

use crate::{CoreError, CoreResult};

/// Fixed capacity of every large (landfill) truck, in tonnes.
pub const LARGE_TRUCK_CAPACITY: u32 = 20;

// ── Timing ────────────────────────────────────────────────────────────────────

/// Work rates and travel-time bounds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimingConfig {
    /// Minutes spent loading one tonne at a zone.
    pub collect_minutes_per_ton: u32,
    /// Minutes spent unloading one tonne at a station.
    pub unload_minutes_per_ton:  u32,

    /// Base travel bounds (minutes) during peak windows.
    pub peak_travel_min:     u32,
    pub peak_travel_max:     u32,
    /// Base travel bounds (minutes) outside peak windows.
    pub off_peak_travel_min: u32,
    pub off_peak_travel_max: u32,

    /// Per-minute traffic multipliers.  Each base minute costs
    /// `ceil(multiplier)` simulated minutes.
    pub peak_multiplier:     f64,
    pub off_peak_multiplier: f64,

    /// Peak windows as inclusive `[start, end]` minutes after midnight.
    pub peak_windows: Vec<(u32, u32)>,

    /// Extra fraction of travel time charged on a loaded trip to a station.
    pub loaded_travel_surcharge: f64,

    /// Delay before a truck retries at the next dirty zone of its route
    /// after finding its target clean.
    pub retarget_delay_minutes: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            collect_minutes_per_ton: 10,
            unload_minutes_per_ton:  3,
            peak_travel_min:         20,
            peak_travel_max:         60,
            off_peak_travel_min:     20,
            off_peak_travel_max:     35,
            peak_multiplier:         1.3,
            off_peak_multiplier:     1.0,
            peak_windows:            vec![(6 * 60, 9 * 60), (17 * 60, 20 * 60)],
            loaded_travel_surcharge: 0.3,
            retarget_delay_minutes:  30,
        }
    }
}

impl TimingConfig {
    /// Is `minute_of_day` inside any peak window?
    pub fn is_peak(&self, minute_of_day: u32) -> bool {
        self.peak_windows
            .iter()
            .any(|&(start, end)| minute_of_day >= start && minute_of_day <= end)
    }
}

// ── Stations ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StationConfig {
    /// Station names, in `StationId` order.
    pub names: Vec<String>,
    /// Longest a queued small truck waits before a large truck is forced.
    pub max_wait_minutes: u32,
    /// Longest a partially loaded large truck waits before leaving early.
    pub large_truck_tolerance_minutes: u32,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            names: vec!["A".into(), "B".into()],
            max_wait_minutes: 50,
            large_truck_tolerance_minutes: 120,
        }
    }
}

// ── Zones & fleet ─────────────────────────────────────────────────────────────

/// One waste zone: daily generation bounds and its owning station.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneSpec {
    pub name:      String,
    pub waste_min: u32,
    pub waste_max: u32,
    /// Name of the station that receives this zone's waste.
    pub station:   String,
}

impl ZoneSpec {
    pub fn new(name: &str, waste_min: u32, waste_max: u32, station: &str) -> Self {
        Self {
            name: name.to_owned(),
            waste_min,
            waste_max,
            station: station.to_owned(),
        }
    }
}

/// A class of identical small trucks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TruckClass {
    pub count:    u32,
    /// Tonnes.
    pub capacity: u32,
    /// Trips per day.
    pub trips:    u32,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    pub timing:  TimingConfig,
    pub station: StationConfig,
    /// Zones in `ZoneId` order.  Route planning walks this order.
    pub zones:   Vec<ZoneSpec>,
    pub fleet:   Vec<TruckClass>,
    /// Days to simulate.
    pub days:    u32,
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed:    u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            timing:  TimingConfig::default(),
            station: StationConfig::default(),
            zones: vec![
                ZoneSpec::new("Sul", 20, 40, "B"),
                ZoneSpec::new("Sudeste", 18, 35, "B"),
                ZoneSpec::new("Centro", 10, 20, "A"),
                ZoneSpec::new("Leste", 15, 25, "A"),
                ZoneSpec::new("Norte", 15, 30, "A"),
            ],
            fleet: vec![
                TruckClass { count: 8, capacity: 2,  trips: 5 },
                TruckClass { count: 5, capacity: 4,  trips: 3 },
                TruckClass { count: 4, capacity: 8,  trips: 5 },
                TruckClass { count: 3, capacity: 10, trips: 3 },
            ],
            days: 1,
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Reject tables the simulation cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.zones.is_empty() {
            return Err(CoreError::Config("at least one zone is required".into()));
        }
        if self.station.names.is_empty() {
            return Err(CoreError::Config("at least one station is required".into()));
        }
        for zone in &self.zones {
            if zone.waste_min > zone.waste_max {
                return Err(CoreError::Config(format!(
                    "zone {}: waste_min {} exceeds waste_max {}",
                    zone.name, zone.waste_min, zone.waste_max
                )));
            }
            if !self.station.names.iter().any(|s| s.eq_ignore_ascii_case(&zone.station)) {
                return Err(CoreError::Config(format!(
                    "zone {} is mapped to unknown station {}",
                    zone.name, zone.station
                )));
            }
        }
        for (i, class) in self.fleet.iter().enumerate() {
            if class.count > 0 && class.capacity == 0 {
                return Err(CoreError::Config(format!("truck class {i} has zero capacity")));
            }
            if class.count > 0 && class.trips == 0 {
                return Err(CoreError::Config(format!("truck class {i} has zero trips")));
            }
        }
        let t = &self.timing;
        if t.peak_travel_min > t.peak_travel_max || t.off_peak_travel_min > t.off_peak_travel_max {
            return Err(CoreError::Config("travel-time bounds are inverted".into()));
        }
        if t.peak_multiplier < 0.0 || t.off_peak_multiplier < 0.0 || t.loaded_travel_surcharge < 0.0 {
            return Err(CoreError::Config("multipliers must be non-negative".into()));
        }
        Ok(())
    }

    /// Total small trucks across all classes.
    pub fn fleet_size(&self) -> u32 {
        self.fleet.iter().map(|c| c.count).sum()
    }
}
