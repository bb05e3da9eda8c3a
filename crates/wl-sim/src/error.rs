use thiserror::Error;

use wl_core::{CoreError, StationId, TruckId, ZoneId};
use wl_fleet::FleetError;
use wl_schedule::ScheduleError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("event references unknown station {0}")]
    UnknownStation(StationId),

    #[error("event references unknown truck {0}")]
    UnknownTruck(TruckId),

    #[error("event references unknown zone {0}")]
    UnknownZone(ZoneId),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Fleet(#[from] FleetError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

pub type SimResult<T> = Result<T, SimError>;
