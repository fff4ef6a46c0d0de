//! `lift-output`: end-of-run report writers for the lift simulator.
//!
//! Two backends are provided:
//!
//! | Backend | Type                 | Format                                      |
//! |---------|----------------------|---------------------------------------------|
//! | Text    | [`TextReportWriter`] | indented `Passenger N:` / `Elevator N:` blocks |
//! | CSV     | [`CsvReportWriter`]  | one header row plus one record per entity   |
//!
//! Both implement [`ReportWriter`] and are fed by [`write_reports`], which
//! builds the rows from a finished [`ElevatorSystem`][lift_sim::ElevatorSystem].
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{TextReportWriter, write_reports};
//!
//! let summary = system.run()?;
//! let mut writer = TextReportWriter::create(&passengers_out, &elevators_out)?;
//! write_reports(&mut writer, &system, &summary)?;
//! ```

pub mod csv;
pub mod error;
pub mod report;
pub mod row;
pub mod text;
pub mod writer;


pub use self::csv::CsvReportWriter;
pub use error::{OutputError, OutputResult};
pub use report::write_reports;
pub use row::{ElevatorReportRow, PassengerReportRow, elevator_rows, passenger_rows};
pub use text::TextReportWriter;
pub use writer::ReportWriter;
