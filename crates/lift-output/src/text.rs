//! Human-readable text report backend.
//!
//! One block per passenger or elevator, separated by a blank line:
//!
//! ```text
//! Passenger 7:
//!   Appearance time: 08:15
//!   Origin floor: 1
//!   Target floor: 4
//!   Boarding time: 08:16
//!   Total travel time: 9
//!   Met passengers: 3, 12
//!   Had overload: no
//!
//! Elevator 1:
//!   Idle time: 41
//!   Moving time: 96
//!   Floors passed: 30
//!   Total cargo: 820
//!   Max load reached: 310
//!   Overloads count: 2
//! ```
//!
//! Clock readings are printed as `hh:mm`; durations as plain minutes.

use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::writer::ReportWriter;
use crate::{ElevatorReportRow, OutputResult, PassengerReportRow};

/// Printed for a value the run never produced (e.g. a passenger that was
/// never boarded).
const MISSING: &str = "-";

/// Writes the two reports as indented text blocks.
pub struct TextReportWriter<W: Write = BufWriter<File>> {
    passengers: W,
    elevators:  W,
    finished:   bool,
}

impl TextReportWriter<BufWriter<File>> {
    /// Create (or truncate) both report files.
    pub fn create(passengers_path: &Path, elevators_path: &Path) -> OutputResult<Self> {
        Ok(Self::new(
            BufWriter::new(File::create(passengers_path)?),
            BufWriter::new(File::create(elevators_path)?),
        ))
    }
}

impl<W: Write> TextReportWriter<W> {
    pub fn new(passengers: W, elevators: W) -> Self {
        Self { passengers, elevators, finished: false }
    }

    /// Recover the underlying sinks as `(passengers, elevators)`.
    pub fn into_inner(self) -> (W, W) {
        (self.passengers, self.elevators)
    }
}

fn or_missing<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| MISSING.to_owned(), |v| v.to_string())
}

impl<W: Write> ReportWriter for TextReportWriter<W> {
    fn write_passengers(&mut self, rows: &[PassengerReportRow]) -> OutputResult<()> {
        let out = &mut self.passengers;
        for row in rows {
            let met = row
                .met_passengers
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(out, "Passenger {}:", row.passenger_id)?;
            writeln!(out, "  Appearance time: {}", row.appear_tick.clock())?;
            writeln!(out, "  Origin floor: {}", row.origin_floor)?;
            writeln!(out, "  Target floor: {}", row.target_floor)?;
            writeln!(out, "  Boarding time: {}", or_missing(row.boarding_tick.map(|t| t.clock())))?;
            writeln!(out, "  Total travel time: {}", or_missing(row.travel_ticks))?;
            if met.is_empty() {
                writeln!(out, "  Met passengers:")?;
            } else {
                writeln!(out, "  Met passengers: {met}")?;
            }
            writeln!(out, "  Had overload: {}", if row.had_overload { "yes" } else { "no" })?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_elevators(&mut self, rows: &[ElevatorReportRow]) -> OutputResult<()> {
        let out = &mut self.elevators;
        for row in rows {
            writeln!(out, "Elevator {}:", row.elevator_id)?;
            writeln!(out, "  Idle time: {}", row.idle_ticks)?;
            writeln!(out, "  Moving time: {}", row.moving_ticks)?;
            writeln!(out, "  Floors passed: {}", row.floors_passed)?;
            writeln!(out, "  Total cargo: {}", row.total_cargo)?;
            writeln!(out, "  Max load reached: {}", row.peak_load)?;
            writeln!(out, "  Overloads count: {}", row.overload_count)?;
            writeln!(out)?;
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
