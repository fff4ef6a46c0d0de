//! Glue between a finished run and a [`ReportWriter`].

use lift_sim::{ElevatorSystem, RunSummary, SimObserver};

use crate::writer::ReportWriter;
use crate::{OutputResult, elevator_rows, passenger_rows};

/// Write both reports for a finished run and flush the writer.
///
/// Passengers are reported in ascending id order, elevators in ascending
/// id order, so identical runs produce identical files.
pub fn write_reports<W, O>(
    writer:  &mut W,
    system:  &ElevatorSystem<O>,
    summary: &RunSummary,
) -> OutputResult<()>
where
    W: ReportWriter,
    O: SimObserver,
{
    writer.write_passengers(&passenger_rows(system))?;
    writer.write_elevators(&elevator_rows(system, summary))?;
    writer.finish()
}
