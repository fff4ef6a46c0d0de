//! CSV report backend.
//!
//! Writes the same rows as the text backend, one record per passenger or
//! elevator.  Ticks are plain integers; met passengers are joined with `;`
//! in a single column.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{ElevatorReportRow, OutputResult, PassengerReportRow};

pub const PASSENGER_HEADER: [&str; 8] = [
    "passenger_id",
    "appear_tick",
    "origin_floor",
    "target_floor",
    "boarding_tick",
    "travel_ticks",
    "met_passengers",
    "had_overload",
];

pub const ELEVATOR_HEADER: [&str; 7] = [
    "elevator_id",
    "idle_ticks",
    "moving_ticks",
    "floors_passed",
    "total_cargo",
    "peak_load",
    "overload_count",
];

/// Writes the passenger and elevator reports to two CSV files.
pub struct CsvReportWriter {
    passengers: Writer<File>,
    elevators:  Writer<File>,
    finished:   bool,
}

impl CsvReportWriter {
    /// Create (or truncate) both files and write the header rows.
    pub fn new(passengers_path: &Path, elevators_path: &Path) -> OutputResult<Self> {
        let mut passengers = Writer::from_path(passengers_path)?;
        passengers.write_record(PASSENGER_HEADER)?;

        let mut elevators = Writer::from_path(elevators_path)?;
        elevators.write_record(ELEVATOR_HEADER)?;

        Ok(Self {
            passengers,
            elevators,
            finished: false,
        })
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_passengers(&mut self, rows: &[PassengerReportRow]) -> OutputResult<()> {
        for row in rows {
            let met = row
                .met_passengers
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(";");
            self.passengers.write_record(&[
                row.passenger_id.to_string(),
                row.appear_tick.0.to_string(),
                row.origin_floor.to_string(),
                row.target_floor.to_string(),
                row.boarding_tick.map(|t| t.0.to_string()).unwrap_or_default(),
                row.travel_ticks.map(|t| t.to_string()).unwrap_or_default(),
                met,
                (row.had_overload as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_elevators(&mut self, rows: &[ElevatorReportRow]) -> OutputResult<()> {
        for row in rows {
            self.elevators.write_record(&[
                row.elevator_id.to_string(),
                row.idle_ticks.to_string(),
                row.moving_ticks.to_string(),
                row.floors_passed.to_string(),
                row.total_cargo.to_string(),
                row.peak_load.to_string(),
                row.overload_count.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.passengers.flush()?;
        self.elevators.flush()?;
        Ok(())
    }
}
