//! CSV loaders for the zone and fleet tables.
//!
//! # Zones
//!
//! ```csv
//! name,waste_min,waste_max,station
//! Sul,20,40,B
//! Norte,15,30,A
//! ```
//!
//! # Fleet
//!
//! ```csv
//! count,capacity,trips
//! 8,2,5
//! 5,4,3
//! ```
//!
//! Rows are validated as they are read: a zone with `waste_min > waste_max`
//! or a truck class with zero capacity rejects the whole file.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use wl_core::{TruckClass, TruckId, ZoneSpec};

use crate::{FleetError, FleetResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ZoneRecord {
    name:      String,
    waste_min: u32,
    waste_max: u32,
    station:   String,
}

#[derive(Deserialize)]
struct FleetRecord {
    count:    u32,
    capacity: u32,
    trips:    u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

pub fn load_zones_csv(path: &Path) -> FleetResult<Vec<ZoneSpec>> {
    let file = std::fs::File::open(path)?;
    load_zones_reader(file)
}

/// Like [`load_zones_csv`] but accepts any `Read` source.
pub fn load_zones_reader<R: Read>(reader: R) -> FleetResult<Vec<ZoneSpec>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut zones = Vec::new();
    for result in csv_reader.deserialize::<ZoneRecord>() {
        let row = result?;
        let name = row.name.trim();
        if row.waste_min > row.waste_max {
            return Err(FleetError::InvalidZoneBounds {
                zone: name.to_owned(),
                min:  row.waste_min,
                max:  row.waste_max,
            });
        }
        zones.push(ZoneSpec::new(name, row.waste_min, row.waste_max, row.station.trim()));
    }
    Ok(zones)
}

pub fn load_fleet_csv(path: &Path) -> FleetResult<Vec<TruckClass>> {
    let file = std::fs::File::open(path)?;
    load_fleet_reader(file)
}

/// Like [`load_fleet_csv`] but accepts any `Read` source.
pub fn load_fleet_reader<R: Read>(reader: R) -> FleetResult<Vec<TruckClass>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut classes = Vec::new();
    for result in csv_reader.deserialize::<FleetRecord>() {
        let row = result?;
        if row.capacity == 0 {
            // Report against the first id the class would have been given.
            let first = classes.iter().map(|c: &TruckClass| c.count).sum::<u32>();
            return Err(FleetError::ZeroCapacity(TruckId(first)));
        }
        classes.push(TruckClass { count: row.count, capacity: row.capacity, trips: row.trips });
    }
    Ok(classes)
}
