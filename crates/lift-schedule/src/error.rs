use lift_core::{CoreError, PassengerId};
use thiserror::Error;

/// Errors in the building configuration file.  Fatal before the run starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read building configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("building configuration is empty")]
    Empty,

    #[error("failed to read number of floors and elevators: {0}")]
    Header(String),

    #[error("number of floors must be positive")]
    ZeroFloors,

    #[error("number of elevators must be positive")]
    ZeroElevators,

    #[error("missing max load for elevator {elevator}: expected {expected} values")]
    MissingLoad { elevator: usize, expected: usize },

    #[error("invalid max load for elevator {elevator}: must be a positive number (got {value:?})")]
    InvalidLoad { elevator: usize, value: String },

    #[error("unexpected data after elevator specifications: {0:?}")]
    TrailingData(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors in the passenger schedule file.  Fatal during load.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("failed to read passenger schedule: {0}")]
    Io(#[from] std::io::Error),

    #[error("record {record}: invalid {field} {value:?}")]
    Parse {
        record: usize,
        field:  &'static str,
        value:  String,
    },

    #[error("record {record}: {source}")]
    Time {
        record: usize,
        #[source]
        source: CoreError,
    },

    #[error("passenger {id}: {source}")]
    Floor {
        id:     PassengerId,
        #[source]
        source: CoreError,
    },

    #[error("passenger {id}: boarding and target floor are both {floor}")]
    SameFloor { id: PassengerId, floor: u32 },

    #[error("passenger {id}: weight must be a positive number (got {weight})")]
    InvalidWeight { id: PassengerId, weight: f64 },

    #[error("passenger {id}: weight {weight} exceeds every elevator's max load ({max_load})")]
    TooHeavy { id: PassengerId, weight: f64, max_load: f64 },

    #[error("record {record} is truncated: expected 5 fields, found {found}")]
    Truncated { record: usize, found: usize },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
