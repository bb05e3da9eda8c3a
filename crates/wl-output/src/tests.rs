//! Integration tests for wl-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;
    use wl_core::Minute;

    use crate::csv::{CsvWriter, DAY_SUMMARIES, TRUCK_STATES, ZONE_RESIDUALS};
    use crate::row::{DaySummaryRow, TruckStateRow, ZoneResidualRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    fn records(path: std::path::PathBuf) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    fn day_row(day: u32) -> DaySummaryRow {
        DaySummaryRow {
            day,
            end_minute:           600,
            events_executed:      42,
            generated_tons:       100,
            collected_tons:       70,
            residual_tons:        30,
            collection_rounds:    12,
            transfers:            8,
            landfill_trips:       3,
            landfill_tons:        60,
            large_trucks_created: 5,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(DAY_SUMMARIES).exists());
        assert!(dir.path().join(ZONE_RESIDUALS).exists());
        assert!(dir.path().join(TRUCK_STATES).exists());
    }

    #[test]
    fn missing_dir_is_created() {
        let dir = tmp();
        let nested = dir.path().join("out").join("run1");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(DAY_SUMMARIES).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(dir.path().join(ZONE_RESIDUALS)), ["day", "zone", "generated", "residual"]);
        assert_eq!(
            headers(dir.path().join(TRUCK_STATES)),
            ["day", "minute", "clock", "truck", "status", "location"]
        );
        let days = headers(dir.path().join(DAY_SUMMARIES));
        assert_eq!(days.len(), 11);
        assert_eq!(days[0], "day");
        assert_eq!(days[10], "large_trucks_created");
    }

    #[test]
    fn day_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_day_summary(&day_row(2)).unwrap();
        w.finish().unwrap();

        let rows = records(dir.path().join(DAY_SUMMARIES));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "2");   // day
        assert_eq!(&rows[0][4], "70");  // collected_tons
        assert_eq!(&rows[0][9], "60");  // landfill_tons
    }

    #[test]
    fn truck_state_carries_clock() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_truck_state(&TruckStateRow {
            day:      1,
            minute:   Minute(65),
            truck:    "C1-2t".into(),
            status:   "Collecting".into(),
            location: "Sul".into(),
        })
        .unwrap();
        w.finish().unwrap();

        let rows = records(dir.path().join(TRUCK_STATES));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "65");
        assert_eq!(&rows[0][2], "08:05");
        assert_eq!(&rows[0][3], "C1-2t");
        assert_eq!(&rows[0][5], "Sul");
    }

    #[test]
    fn zone_residuals_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![
            ZoneResidualRow { day: 1, zone: "Sul".into(), generated: 30, residual: 4 },
            ZoneResidualRow { day: 1, zone: "Norte".into(), generated: 25, residual: 0 },
        ];
        w.write_zone_residuals(&rows).unwrap();
        w.write_zone_residuals(&[]).unwrap();
        w.finish().unwrap();

        let read = records(dir.path().join(ZONE_RESIDUALS));
        assert_eq!(read.len(), 2);
        assert_eq!(&read[0][1], "Sul");
        assert_eq!(&read[1][1], "Norte");
        assert_eq!(&read[0][3], "4");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use wl_core::SimConfig;
    use wl_sim::SimBuilder;

    use crate::csv::{CsvWriter, DAY_SUMMARIES, TRUCK_STATES, ZONE_RESIDUALS};
    use crate::row::{DaySummaryRow, TruckStateRow, ZoneResidualRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult, SimOutputObserver};

    /// Accepts every row until `fail_after` truck states, then errors.
    #[derive(Default)]
    struct Flaky {
        states:     usize,
        fail_after: usize,
        finished:   bool,
    }

    impl OutputWriter for Flaky {
        fn write_day_summary(&mut self, _row: &DaySummaryRow) -> OutputResult<()> {
            Ok(())
        }

        fn write_zone_residuals(&mut self, _rows: &[ZoneResidualRow]) -> OutputResult<()> {
            Ok(())
        }

        fn write_truck_state(&mut self, _row: &TruckStateRow) -> OutputResult<()> {
            self.states += 1;
            if self.states > self.fail_after {
                return Err(OutputError::Io(std::io::Error::other(format!("row {}", self.states))));
            }
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn integration_csv() {
        let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());

        let summaries = sim.run(2, &mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let count = |name: &str| {
            csv::Reader::from_path(dir.path().join(name)).unwrap().records().count()
        };
        assert_eq!(count(DAY_SUMMARIES), 2);
        assert_eq!(count(ZONE_RESIDUALS), 2 * summaries[0].zones.len());
        assert!(count(TRUCK_STATES) > 0);

        let mut rdr = csv::Reader::from_path(dir.path().join(DAY_SUMMARIES)).unwrap();
        let first = rdr.records().next().unwrap().unwrap();
        let expected = DaySummaryRow::from(&summaries[0]);
        assert_eq!(first[4].parse::<u64>().unwrap(), expected.collected_tons);
    }

    #[test]
    fn truck_states_stamped_with_event_time() {
        let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        let summary = sim.run(1, &mut obs).unwrap().remove(0);

        let mut rdr = csv::Reader::from_path(dir.path().join(TRUCK_STATES)).unwrap();
        let minutes: Vec<u32> = rdr.records().map(|r| r.unwrap()[1].parse().unwrap()).collect();
        assert!(minutes.windows(2).all(|w| w[0] <= w[1]));
        assert!(minutes.iter().all(|&m| m <= summary.end_time.0));
    }

    #[test]
    fn first_error_kept() {
        let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
        let mut obs = SimOutputObserver::new(Flaky { fail_after: 3, ..Flaky::default() });

        sim.run(1, &mut obs).unwrap();

        let err = obs.take_error().expect("writer failed");
        assert!(err.to_string().contains("row 4"));
        assert!(obs.take_error().is_none(), "error is taken once");
        assert!(obs.into_writer().finished);
    }
}
