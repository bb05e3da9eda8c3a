//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `day_summaries.csv`
//! - `zone_residuals.csv`
//! - `truck_states.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DaySummaryRow, OutputResult, TruckStateRow, ZoneResidualRow};

pub const DAY_SUMMARIES: &str = "day_summaries.csv";
pub const ZONE_RESIDUALS: &str = "zone_residuals.csv";
pub const TRUCK_STATES: &str = "truck_states.csv";

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    days:     Writer<File>,
    zones:    Writer<File>,
    states:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three CSV files and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut days = Writer::from_path(dir.join(DAY_SUMMARIES))?;
        days.write_record([
            "day",
            "end_minute",
            "events_executed",
            "generated_tons",
            "collected_tons",
            "residual_tons",
            "collection_rounds",
            "transfers",
            "landfill_trips",
            "landfill_tons",
            "large_trucks_created",
        ])?;

        let mut zones = Writer::from_path(dir.join(ZONE_RESIDUALS))?;
        zones.write_record(["day", "zone", "generated", "residual"])?;

        let mut states = Writer::from_path(dir.join(TRUCK_STATES))?;
        states.write_record(["day", "minute", "clock", "truck", "status", "location"])?;

        Ok(Self { days, zones, states, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_day_summary(&mut self, row: &DaySummaryRow) -> OutputResult<()> {
        self.days.write_record(&[
            row.day.to_string(),
            row.end_minute.to_string(),
            row.events_executed.to_string(),
            row.generated_tons.to_string(),
            row.collected_tons.to_string(),
            row.residual_tons.to_string(),
            row.collection_rounds.to_string(),
            row.transfers.to_string(),
            row.landfill_trips.to_string(),
            row.landfill_tons.to_string(),
            row.large_trucks_created.to_string(),
        ])?;
        Ok(())
    }

    fn write_zone_residuals(&mut self, rows: &[ZoneResidualRow]) -> OutputResult<()> {
        for row in rows {
            self.zones.write_record(&[
                row.day.to_string(),
                row.zone.clone(),
                row.generated.to_string(),
                row.residual.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_truck_state(&mut self, row: &TruckStateRow) -> OutputResult<()> {
        self.states.write_record(&[
            row.day.to_string(),
            row.minute.0.to_string(),
            row.clock(),
            row.truck.clone(),
            row.status.clone(),
            row.location.clone(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.days.flush()?;
        self.zones.flush()?;
        self.states.flush()?;
        Ok(())
    }
}
