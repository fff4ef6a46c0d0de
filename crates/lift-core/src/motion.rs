//! Elevator motion states.

use std::fmt;

/// The four states of the per-car state machine.
///
/// ```text
/// IdleClosed ──▶ IdleOpen ──▶ IdleClosed
///                        └──▶ MovingUp / MovingDown ──▶ IdleOpen
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElevatorState {
    /// Stationary with doors shut; available for assignment.
    #[default]
    IdleClosed,
    /// Doors open while passengers alight and board.
    IdleOpen,
    MovingUp,
    MovingDown,
}

impl ElevatorState {
    #[inline]
    pub fn is_idle(self) -> bool {
        matches!(self, ElevatorState::IdleClosed | ElevatorState::IdleOpen)
    }

    #[inline]
    pub fn is_moving(self) -> bool {
        !self.is_idle()
    }

    /// Travel direction implied by the state, `None` while idle.
    #[inline]
    pub fn direction(self) -> Option<Direction> {
        match self {
            ElevatorState::MovingUp   => Some(Direction::Up),
            ElevatorState::MovingDown => Some(Direction::Down),
            _ => None,
        }
    }
}

impl fmt::Display for ElevatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ElevatorState::IdleClosed => "IdleClosed",
            ElevatorState::IdleOpen   => "IdleOpen",
            ElevatorState::MovingUp   => "MovingUp",
            ElevatorState::MovingDown => "MovingDown",
        };
        f.write_str(s)
    }
}

/// Vertical travel direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    #[inline]
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// The moving state that travels in this direction.
    #[inline]
    pub fn moving_state(self) -> ElevatorState {
        match self {
            Direction::Up   => ElevatorState::MovingUp,
            Direction::Down => ElevatorState::MovingDown,
        }
    }
}
