//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Passenger IDs come straight from
//! the schedule file; elevator IDs are 1-based in configuration order.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(n: $inner) -> $name {
                $name(n)
            }
        }
    };
}

typed_id! {
    /// Passenger identifier as written in the schedule file.
    pub struct PassengerId(u64);
}

typed_id! {
    /// Elevator identifier.  `ElevatorId(1)` is the first car in the
    /// building configuration.
    pub struct ElevatorId(u32);
}

impl ElevatorId {
    /// ID of the elevator stored at position `index` of the elevator list.
    #[inline]
    pub fn from_index(index: usize) -> ElevatorId {
        ElevatorId(index as u32 + 1)
    }

    /// Position of this elevator in the elevator list.
    #[inline]
    pub fn index(self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }
}

// ── Floor ─────────────────────────────────────────────────────────────────────

/// A building floor.  Valid floors are `1..=floors_count`; floor 0 never
/// names a real floor.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u32);

impl Floor {
    pub const GROUND: Floor = Floor(1);

    /// Validate `n` against a building of `floors_count` floors.
    pub fn checked(n: u32, floors_count: u32) -> CoreResult<Floor> {
        let floor = Floor(n);
        if floor.is_within(floors_count) {
            Ok(floor)
        } else {
            Err(CoreError::floor_out_of_range(floor, floors_count))
        }
    }

    #[inline]
    pub fn is_within(self, floors_count: u32) -> bool {
        (1..=floors_count).contains(&self.0)
    }

    /// Cast to `usize` for per-floor arrays of length `floors_count + 1`.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// Iterate every floor of a building, bottom to top.
    pub fn all(floors_count: u32) -> impl DoubleEndedIterator<Item = Floor> {
        (1..=floors_count).map(Floor)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
