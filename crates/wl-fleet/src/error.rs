use thiserror::Error;

use wl_core::{CoreError, TruckId, ZoneId};

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("unknown zone name {0:?}")]
    UnknownZone(String),

    #[error("zone {0} is not registered")]
    NoSuchZone(ZoneId),

    #[error("truck {0} is not registered")]
    NoSuchTruck(TruckId),

    #[error("zone {zone:?}: waste bounds [{min}, {max}] are inverted")]
    InvalidZoneBounds { zone: String, min: u32, max: u32 },

    #[error("truck {0} has an empty route")]
    EmptyRoute(TruckId),

    #[error("truck {0} has zero capacity")]
    ZeroCapacity(TruckId),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type FleetResult<T> = Result<T, FleetError>;
