//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::Floor;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("floor {floor} is outside the building (floors 1..={floors_count})")]
    FloorOutOfRange {
        floor:        u32,
        floors_count: u32,
    },

    #[error("invalid time {0:?}: expected \"hh:mm\" with minutes < 60")]
    InvalidClockTime(String),
}

impl CoreError {
    pub fn floor_out_of_range(floor: Floor, floors_count: u32) -> Self {
        CoreError::FloorOutOfRange { floor: floor.0, floors_count }
    }
}

/// Shorthand result type for `lift-core`.
pub type CoreResult<T> = Result<T, CoreError>;
