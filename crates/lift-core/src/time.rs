//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter; one tick is one
//! simulated minute.  Schedule files express appearance times as `hh:mm`,
//! which map onto ticks as
//!
//!   tick = hours * 60 + minutes
//!
//! Hours are not wrapped at 24, so `25:10` is tick 1510.  Using an integer
//! tick as the canonical time unit keeps all travel-time arithmetic exact.

use std::fmt;

use crate::{CoreError, CoreResult, ElevatorState, Floor};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter (one tick = one minute).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`, zero if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Parse an `hh:mm` clock reading into a tick.
    pub fn parse_clock(s: &str) -> CoreResult<Tick> {
        let invalid = || CoreError::InvalidClockTime(s.to_owned());
        let (hours, minutes) = s.split_once(':').ok_or_else(invalid)?;
        let hours: u64 = hours.parse().map_err(|_| invalid())?;
        let minutes: u64 = minutes.parse().map_err(|_| invalid())?;
        if minutes >= 60 {
            return Err(invalid());
        }
        hours
            .checked_mul(60)
            .and_then(|h| h.checked_add(minutes))
            .map(Tick)
            .ok_or_else(invalid)
    }

    /// View this tick as an `hh:mm` clock reading.
    #[inline]
    pub fn clock(self) -> ClockTime {
        ClockTime(self)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

/// Same as [`Tick::since`]: an earlier minus a later tick is zero.
impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.since(rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// `hh:mm` rendering of a [`Tick`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ClockTime(pub Tick);

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.0 / 60, self.0.0 % 60)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The single logical clock of a run.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick: advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(start: Tick) -> Self {
        Self { current_tick: start }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.current_tick, self.current_tick.clock())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration shared by every elevator.
///
/// The building itself (floor count, per-car capacity) comes from the
/// building file; this struct only holds how the run starts.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Floor every elevator starts at.  Default: 1.
    pub start_floor: Floor,

    /// State every elevator starts in.  Default: `IdleClosed`.
    pub initial_state: ElevatorState,

    /// Tick the clock starts at.  Default: 0.
    pub start_tick: Tick,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start_floor:   Floor::GROUND,
            initial_state: ElevatorState::IdleClosed,
            start_tick:    Tick::ZERO,
        }
    }
}

impl SimConfig {
    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_tick)
    }
}
