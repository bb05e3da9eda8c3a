//! Fluent builder for constructing a [`Sim`].

use tracing::debug;

use wl_core::{SimConfig, SimRng, StationId, TravelModel, ZoneId};
use wl_fleet::{LargeTruckIds, TransferStation, Zone, ZoneRouter};

use crate::{Sim, SimError, SimResult, World};

/// RNG stream keys.  Changing them changes every run.
const WASTE_STREAM:  u64 = 1;
const TRAVEL_STREAM: u64 = 2;

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                          |
/// |-----------------|--------------------------------------------------|
/// | `.router(r)`    | built from each zone's `station` name            |
/// | `.seed(s)`      | `config.seed`                                    |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default()).seed(7).build()?;
/// let summaries = sim.run(3, &mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    router: Option<ZoneRouter>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, router: None }
    }

    /// Use an explicit zone router instead of deriving one from the config.
    pub fn router(mut self, router: ZoneRouter) -> Self {
        self.router = Some(router);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Validate the config, create zones and stations, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let config = self.config;

        let zones = config
            .zones
            .iter()
            .enumerate()
            .map(|(i, spec)| -> SimResult<Zone> { Ok(Zone::from_spec(zone_id(i)?, spec)?) })
            .collect::<SimResult<Vec<_>>>()?;

        let mut large_ids = LargeTruckIds::new();
        let mut stations = Vec::with_capacity(config.station.names.len());
        for (i, name) in config.station.names.iter().enumerate() {
            stations.push(TransferStation::new(station_id(i)?, name.as_str(), &mut large_ids));
        }

        let router = match self.router {
            Some(r) => r,
            None => {
                let mut r = ZoneRouter::new();
                for spec in &config.zones {
                    let idx = config
                        .station
                        .names
                        .iter()
                        .position(|s| s.eq_ignore_ascii_case(&spec.station))
                        .ok_or_else(|| {
                            SimError::Config(format!("zone {} maps to unknown station {}", spec.name, spec.station))
                        })?;
                    r.assign(&spec.name, station_id(idx)?);
                }
                r
            }
        };

        let mut root = SimRng::new(config.seed);
        let waste_rng = root.child(WASTE_STREAM);
        let travel = TravelModel::new(config.timing.clone(), root.child(TRAVEL_STREAM));

        debug!(
            zones = zones.len(),
            stations = stations.len(),
            fleet = config.fleet_size(),
            seed = config.seed,
            "sim built"
        );
        Ok(Sim::new(World::new(config, zones, stations, router, large_ids, travel, waste_rng)))
    }
}

fn zone_id(i: usize) -> SimResult<ZoneId> {
    ZoneId::try_from(i).map_err(|_| SimError::Config(format!("too many zones ({i})")))
}

fn station_id(i: usize) -> SimResult<StationId> {
    StationId::try_from(i).map_err(|_| SimError::Config(format!("too many stations ({i})")))
}
