//! Positional command-line arguments.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

pub const USAGE: &str =
    "usage: lift <elevators-config> <passengers-schedule> <passengers-report> <elevators-report>";

/// The four paths a run needs, in command-line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub elevators_config:    PathBuf,
    pub passengers_schedule: PathBuf,
    pub passengers_report:   PathBuf,
    pub elevators_report:    PathBuf,
}

impl CliArgs {
    /// Parse arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<PathBuf>,
    {
        let args: Vec<PathBuf> = args.into_iter().map(Into::into).collect();
        let count = args.len();
        let Ok([elevators_config, passengers_schedule, passengers_report, elevators_report]) =
            <[PathBuf; 4]>::try_from(args)
        else {
            bail!("expected 4 arguments, got {count}\n{USAGE}");
        };
        Ok(Self {
            elevators_config,
            passengers_schedule,
            passengers_report,
            elevators_report,
        })
    }

    pub fn report_format(&self) -> ReportFormat {
        ReportFormat::for_paths(&self.passengers_report, &self.elevators_report)
    }
}

/// Which report backend to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Csv,
}

impl ReportFormat {
    /// CSV when both report paths end in `.csv`, text otherwise.
    pub fn for_paths(passengers: &Path, elevators: &Path) -> Self {
        let is_csv = |p: &Path| {
            p.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        };
        if is_csv(passengers) && is_csv(elevators) {
            ReportFormat::Csv
        } else {
            ReportFormat::Text
        }
    }
}
