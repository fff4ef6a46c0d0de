//! Load → simulate → report.

use anyhow::{Context, Result};
use lift_output::{CsvReportWriter, TextReportWriter, write_reports};
use lift_schedule::{load_building_file, load_schedule_file};
use lift_sim::{RunSummary, SimObserver, SystemBuilder};
use tracing::{info, warn};

use crate::{CliArgs, ReportFormat};

/// Run one full simulation described by `args`, sending every dispatcher
/// event to `observer`.
pub fn run<O: SimObserver>(args: &CliArgs, observer: O) -> Result<RunSummary> {
    let building = load_building_file(&args.elevators_config).with_context(|| {
        format!("loading elevators config {}", args.elevators_config.display())
    })?;
    info!(
        floors = building.floors_count(),
        elevators = building.elevators_count(),
        "building loaded"
    );

    let schedule = load_schedule_file(&args.passengers_schedule, &building).with_context(|| {
        format!("loading passenger schedule {}", args.passengers_schedule.display())
    })?;
    for id in &schedule.duplicate_ids {
        warn!(passenger = id.0, "duplicate passenger id ignored");
    }
    info!(passengers = schedule.len(), "schedule loaded");

    let mut system = SystemBuilder::new(building, schedule)
        .observer(observer)
        .build()
        .context("setting up the simulation")?;
    let summary = system.run().context("running the simulation")?;

    match args.report_format() {
        ReportFormat::Text => {
            let mut writer =
                TextReportWriter::create(&args.passengers_report, &args.elevators_report)
                    .context("creating report files")?;
            write_reports(&mut writer, &system, &summary).context("writing reports")?;
        }
        ReportFormat::Csv => {
            let mut writer =
                CsvReportWriter::new(&args.passengers_report, &args.elevators_report)
                    .context("creating report files")?;
            write_reports(&mut writer, &system, &summary).context("writing reports")?;
        }
    }
    info!(
        passengers = %args.passengers_report.display(),
        elevators = %args.elevators_report.display(),
        "reports written"
    );

    Ok(summary)
}
