//! Building configuration: floor count and per-elevator capacity.

use crate::{ConfigError, ConfigResult};

/// The static shape of a building.  Never changes during a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingConfig {
    floors_count: u32,
    /// Max load of each elevator, in elevator-id order (index 0 = elevator 1).
    max_loads:    Vec<f64>,
}

impl BuildingConfig {
    /// Validate and build a configuration.
    ///
    /// Fails on zero floors, zero elevators, or any non-positive or
    /// non-finite max load.
    pub fn new(floors_count: u32, max_loads: Vec<f64>) -> ConfigResult<Self> {
        if floors_count == 0 {
            return Err(ConfigError::ZeroFloors);
        }
        if max_loads.is_empty() {
            return Err(ConfigError::ZeroElevators);
        }
        if let Some((i, load)) = max_loads
            .iter()
            .enumerate()
            .find(|(_, load)| !(load.is_finite() && **load > 0.0))
        {
            return Err(ConfigError::InvalidLoad {
                elevator: i + 1,
                value:    load.to_string(),
            });
        }
        Ok(Self { floors_count, max_loads })
    }

    #[inline]
    pub fn floors_count(&self) -> u32 {
        self.floors_count
    }

    #[inline]
    pub fn elevators_count(&self) -> usize {
        self.max_loads.len()
    }

    pub fn max_loads(&self) -> &[f64] {
        &self.max_loads
    }

    /// The largest single-car capacity in the building.
    pub fn max_capacity(&self) -> f64 {
        self.max_loads.iter().copied().fold(0.0, f64::max)
    }
}
