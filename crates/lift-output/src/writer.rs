//! The `ReportWriter` trait implemented by all report backends.

use crate::{ElevatorReportRow, OutputResult, PassengerReportRow};

/// Trait implemented by the text and CSV report writers.
///
/// Each report is written in one call with rows already in id order.
pub trait ReportWriter {
    fn write_passengers(&mut self, rows: &[PassengerReportRow]) -> OutputResult<()>;

    fn write_elevators(&mut self, rows: &[ElevatorReportRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
