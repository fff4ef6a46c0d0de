//! Text loaders for the building configuration and the passenger schedule.
//!
//! # Building configuration
//!
//! ```text
//! 10 2
//! 1000 600.5
//! ```
//!
//! `floors_count elevators_count`, then one positive `max_load` per elevator
//! in elevator-id order.  Line breaks are insignificant; any token left over
//! after the last load is an error.
//!
//! # Passenger schedule
//!
//! ```text
//! 1 70   1 08:00 4
//! 2 82.5 3 08:02 1
//! ```
//!
//! Whitespace-separated records of five fields:
//! `id weight boarding_floor hh:mm target_floor`.  A record may span lines.
//! Duplicate ids keep the first record.
//!
//! Besides format errors the schedule loader rejects records that could
//! never be delivered (see [`load_schedule_reader`]), so a loaded schedule
//! always lets the run terminate.

use std::io::Read;
use std::path::Path;

use lift_core::{Floor, PassengerId, Tick};

use crate::{
    BuildingConfig, ConfigError, ConfigResult, Passenger, Schedule, ScheduleError, ScheduleResult,
};

const SCHEDULE_FIELDS: usize = 5;

// ── Building configuration ───────────────────────────────────────────────────

/// Load a [`BuildingConfig`] from a file.
pub fn load_building_file(path: &Path) -> ConfigResult<BuildingConfig> {
    let file = std::fs::File::open(path).map_err(ConfigError::Io)?;
    load_building_reader(file)
}

/// Like [`load_building_file`] but accepts any `Read` source.
pub fn load_building_reader<R: Read>(mut reader: R) -> ConfigResult<BuildingConfig> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    if text.trim().is_empty() {
        return Err(ConfigError::Empty);
    }

    let mut tokens = text.split_whitespace();
    let floors_count: u32 = parse_header(tokens.next())?;
    let elevators_count: usize = parse_header(tokens.next())?;
    if floors_count == 0 {
        return Err(ConfigError::ZeroFloors);
    }
    if elevators_count == 0 {
        return Err(ConfigError::ZeroElevators);
    }

    let max_loads = (1..=elevators_count)
        .map(|elevator| {
            let token = tokens.next().ok_or(ConfigError::MissingLoad {
                elevator,
                expected: elevators_count,
            })?;
            token
                .parse::<f64>()
                .ok()
                .filter(|load| load.is_finite() && *load > 0.0)
                .ok_or_else(|| ConfigError::InvalidLoad {
                    elevator,
                    value: token.to_owned(),
                })
        })
        .collect::<ConfigResult<Vec<f64>>>()?;

    if let Some(extra) = tokens.next() {
        return Err(ConfigError::TrailingData(extra.to_owned()));
    }

    BuildingConfig::new(floors_count, max_loads)
}

fn parse_header<T: std::str::FromStr>(token: Option<&str>) -> ConfigResult<T> {
    let token = token.ok_or_else(|| ConfigError::Header("missing value".into()))?;
    token
        .parse()
        .map_err(|_| ConfigError::Header(format!("{token:?} is not a non-negative integer")))
}

// ── Passenger schedule ────────────────────────────────────────────────────────

/// Load a [`Schedule`] from a file, validated against `building`.
pub fn load_schedule_file(path: &Path, building: &BuildingConfig) -> ScheduleResult<Schedule> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_schedule_reader(file, building)
}

/// Like [`load_schedule_file`] but accepts any `Read` source.
///
/// Each record is rejected if:
/// - a numeric field does not parse, or the time is not `hh:mm` with
///   minutes below 60;
/// - either floor lies outside `1..=floors_count`;
/// - boarding and target floor are the same;
/// - the weight is not positive, or exceeds the largest car's max load.
pub fn load_schedule_reader<R: Read>(
    mut reader: R,
    building:   &BuildingConfig,
) -> ScheduleResult<Schedule> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut schedule = Schedule::new();

    for (i, fields) in tokens.chunks(SCHEDULE_FIELDS).enumerate() {
        let record = i + 1;
        if fields.len() < SCHEDULE_FIELDS {
            return Err(ScheduleError::Truncated { record, found: fields.len() });
        }
        let passenger = parse_record(record, fields, building)?;
        schedule.push(passenger);
    }

    Ok(schedule)
}

fn parse_record(
    record:   usize,
    fields:   &[&str],
    building: &BuildingConfig,
) -> ScheduleResult<Passenger> {
    let [id, weight, boarding, time, target] = fields else {
        return Err(ScheduleError::Truncated { record, found: fields.len() });
    };

    let id = PassengerId(parse_field(record, "id", id)?);
    let weight: f64 = parse_field(record, "weight", weight)?;
    let boarding: u32 = parse_field(record, "boarding floor", boarding)?;
    let appear = Tick::parse_clock(time).map_err(|source| ScheduleError::Time { record, source })?;
    let target: u32 = parse_field(record, "target floor", target)?;

    let floors_count = building.floors_count();
    let boarding = Floor::checked(boarding, floors_count)
        .map_err(|source| ScheduleError::Floor { id, source })?;
    let target = Floor::checked(target, floors_count)
        .map_err(|source| ScheduleError::Floor { id, source })?;
    if boarding == target {
        return Err(ScheduleError::SameFloor { id, floor: boarding.0 });
    }

    if !(weight.is_finite() && weight > 0.0) {
        return Err(ScheduleError::InvalidWeight { id, weight });
    }
    let max_load = building.max_capacity();
    if weight > max_load {
        return Err(ScheduleError::TooHeavy { id, weight, max_load });
    }

    Ok(Passenger::new(id, appear, boarding, target, weight))
}

fn parse_field<T: std::str::FromStr>(
    record: usize,
    field:  &'static str,
    value:  &str,
) -> ScheduleResult<T> {
    value.parse().map_err(|_| ScheduleError::Parse {
        record,
        field,
        value: value.to_owned(),
    })
}
