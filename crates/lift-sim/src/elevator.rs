//! Per-car state machine, motion model, and admission control.
//!
//! An elevator only knows where it is at the start and end of a leg.  While
//! moving, its position is extrapolated from the fraction of the leg's
//! travel time that has elapsed (see [`Elevator::approximate_floor`]); floors
//! in between are never visited individually.

use lift_core::{CoreError, Direction, ElevatorId, ElevatorState, Floor, PassengerId, Tick};
use lift_schedule::PassengerTable;

use crate::{SimError, SimResult};

/// Minimum ticks per floor (empty car).
pub const BASE_TICKS_PER_FLOOR: u64 = 3;

/// Extra ticks per floor added at full load.
pub const LOAD_TICKS_PER_FLOOR: f64 = 5.0;

// ── Stats ─────────────────────────────────────────────────────────────────────

/// Cumulative per-car statistics reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElevatorStats {
    pub idle_ticks:     u64,
    pub moving_ticks:   u64,
    pub floors_passed:  u64,
    /// Total weight ever boarded.
    pub total_cargo:    f64,
    /// Highest `current_load` reached.
    pub peak_load:      f64,
    /// Boarding attempts refused for lack of capacity.
    pub overload_count: u64,
}

/// Outcome of a boarding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Boarded,
    Overloaded,
}

// ── Elevator ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Elevator {
    id:            ElevatorId,
    current_floor: Floor,
    /// `None` while parked.
    target_floor:  Option<Floor>,
    state:         ElevatorState,
    /// Direction of the last leg; kept while the doors are open so SCAN can
    /// continue the same way.  Cleared when the car parks.
    heading:       Option<Direction>,

    current_load: f64,
    max_load:     f64,

    /// Per-floor "a call at this floor was assigned to me".  Index 0 unused.
    pickup:  Vec<bool>,
    /// Per-floor "someone on board wants to get off here".  Index 0 unused.
    dropoff: Vec<bool>,
    /// Riders in boarding order.
    onboard: Vec<PassengerId>,

    last_state_change: Tick,
    projected_arrival: Tick,

    stats: ElevatorStats,
}

impl Elevator {
    /// A car at `start_floor` in `initial_state`, its clock starting at `now`.
    pub fn new(
        id:            ElevatorId,
        start_floor:   Floor,
        max_load:      f64,
        floors_count:  u32,
        initial_state: ElevatorState,
        now:           Tick,
    ) -> Self {
        let slots = floors_count as usize + 1;
        Self {
            id,
            current_floor: start_floor,
            target_floor: None,
            state: initial_state,
            heading: initial_state.direction(),
            current_load: 0.0,
            max_load,
            pickup: vec![false; slots],
            dropoff: vec![false; slots],
            onboard: Vec::new(),
            last_state_change: now,
            projected_arrival: now,
            stats: ElevatorStats::default(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline] pub fn id(&self) -> ElevatorId { self.id }
    #[inline] pub fn current_floor(&self) -> Floor { self.current_floor }
    #[inline] pub fn target_floor(&self) -> Option<Floor> { self.target_floor }
    #[inline] pub fn state(&self) -> ElevatorState { self.state }
    #[inline] pub fn heading(&self) -> Option<Direction> { self.heading }
    #[inline] pub fn current_load(&self) -> f64 { self.current_load }
    #[inline] pub fn max_load(&self) -> f64 { self.max_load }
    #[inline] pub fn last_state_change(&self) -> Tick { self.last_state_change }
    #[inline] pub fn projected_arrival(&self) -> Tick { self.projected_arrival }
    #[inline] pub fn stats(&self) -> &ElevatorStats { &self.stats }

    pub fn onboard(&self) -> &[PassengerId] {
        &self.onboard
    }

    pub fn floors_count(&self) -> u32 {
        (self.pickup.len() - 1) as u32
    }

    pub fn has_pickup(&self, floor: Floor) -> bool {
        self.pickup.get(floor.index()).copied().unwrap_or(false)
    }

    pub fn has_dropoff(&self, floor: Floor) -> bool {
        self.dropoff.get(floor.index()).copied().unwrap_or(false)
    }

    /// The union of both signals: the car's "pressed buttons".
    pub fn has_pending(&self, floor: Floor) -> bool {
        self.has_pickup(floor) || self.has_dropoff(floor)
    }

    /// Whether `weight` more would still fit.
    pub fn can_admit(&self, weight: f64) -> bool {
        self.current_load + weight <= self.max_load
    }

    /// `true` once a leg is in progress and its projected arrival has passed.
    pub fn is_arrival_due(&self, now: Tick) -> bool {
        self.target_floor.is_some() && now >= self.projected_arrival
    }

    // ── State machine ─────────────────────────────────────────────────────

    /// Transition to `next`, charging the ticks spent in the previous state
    /// to idle or moving time.
    pub fn set_state(&mut self, next: ElevatorState, now: Tick) {
        let elapsed = now.since(self.last_state_change);
        if self.state.is_idle() {
            self.stats.idle_ticks += elapsed;
        } else {
            self.stats.moving_ticks += elapsed;
        }
        self.last_state_change = now;
        self.state = next;
        if let Some(dir) = next.direction() {
            self.heading = Some(dir);
        }
    }

    // ── Motion model ──────────────────────────────────────────────────────

    /// Ticks per floor at the current load: `3 + floor(5 × load / max_load)`.
    pub fn ticks_per_floor(&self) -> u64 {
        let load_fraction = self.current_load / self.max_load;
        BASE_TICKS_PER_FLOOR + (LOAD_TICKS_PER_FLOOR * load_fraction).floor() as u64
    }

    /// Ticks to travel from the current floor to `target` at the current load.
    pub fn travel_ticks(&self, target: Floor) -> u64 {
        u64::from(self.current_floor.distance(target)) * self.ticks_per_floor()
    }

    /// Fraction of the current leg completed at `now`, in `[0.0, 1.0]`.
    ///
    /// A zero-length leg counts as complete.
    pub fn leg_progress(&self, now: Tick) -> f64 {
        let total = self.projected_arrival.since(self.last_state_change);
        if total == 0 {
            return 1.0;
        }
        let elapsed = now.since(self.last_state_change);
        (elapsed as f64 / total as f64).min(1.0)
    }

    /// Estimated floor at `now`:
    /// `current + round(progress × (target − current))`.
    ///
    /// Idle cars, and moving cars without a target, are at `current_floor`.
    pub fn approximate_floor(&self, now: Tick) -> Floor {
        let Some(target) = self.target_floor else {
            return self.current_floor;
        };
        if self.state.is_idle() {
            return self.current_floor;
        }
        let from = f64::from(self.current_floor.0);
        let span = f64::from(target.0) - from;
        Floor((from + (self.leg_progress(now) * span).round()) as u32)
    }

    /// Start a leg to `target`.
    ///
    /// The state becomes the moving state toward `target` (or stays along the
    /// current heading for a zero-length leg) and the arrival is projected
    /// from the current load.
    pub fn depart(&mut self, target: Floor, now: Tick) -> SimResult<()> {
        self.check_floor(target)?;
        let direction = if target > self.current_floor {
            Direction::Up
        } else if target < self.current_floor {
            Direction::Down
        } else {
            self.heading.unwrap_or(Direction::Up)
        };
        self.set_state(direction.moving_state(), now);
        self.target_floor = Some(target);
        self.projected_arrival = now + self.travel_ticks(target);
        Ok(())
    }

    /// Redirect a moving car to `new_target`.
    ///
    /// The car's position snaps to [`approximate_floor`](Self::approximate_floor),
    /// the floors crossed so far are added to `floors_passed`, and a new leg
    /// starts from the snapped floor.  An idle car simply departs.
    pub fn retarget(&mut self, new_target: Floor, now: Tick) -> SimResult<Floor> {
        self.check_floor(new_target)?;
        if self.state.is_moving() {
            let snapped = self.approximate_floor(now);
            self.stats.floors_passed += u64::from(self.current_floor.distance(snapped));
            self.current_floor = snapped;
        }
        self.depart(new_target, now)?;
        Ok(self.current_floor)
    }

    /// Arrive at (or service) `floor` and open the doors.
    ///
    /// Adds the distance travelled to `floors_passed`, ends the leg, and
    /// clears this car's pickup signal for `floor`.
    pub fn open_doors(&mut self, floor: Floor, now: Tick) -> SimResult<()> {
        self.check_floor(floor)?;
        self.stats.floors_passed += u64::from(self.current_floor.distance(floor));
        self.current_floor = floor;
        self.target_floor = None;
        self.set_state(ElevatorState::IdleOpen, now);
        self.pickup[floor.index()] = false;
        Ok(())
    }

    pub fn close_doors(&mut self, now: Tick) {
        self.set_state(ElevatorState::IdleClosed, now);
    }

    /// Stop with no target and forget the heading.
    pub fn park(&mut self, now: Tick) {
        self.target_floor = None;
        self.heading = None;
        self.set_state(ElevatorState::IdleClosed, now);
    }

    /// Settle timing statistics at the end of a run.
    pub fn finish(&mut self, now: Tick) {
        self.set_state(ElevatorState::IdleClosed, now);
    }

    // ── Requests ──────────────────────────────────────────────────────────

    /// Register an assigned floor call.
    pub fn request_pickup(&mut self, floor: Floor) -> SimResult<()> {
        self.check_floor(floor)?;
        self.pickup[floor.index()] = true;
        Ok(())
    }

    /// Whether the car will reach `floor` without being redirected: it lies
    /// at or beyond the current target in the direction of travel, so SCAN
    /// picks it up after the target.
    pub fn reaches_without_redirect(&self, floor: Floor) -> bool {
        match (self.state, self.target_floor) {
            (ElevatorState::MovingUp, Some(target))   => floor >= target,
            (ElevatorState::MovingDown, Some(target)) => floor <= target,
            _ => false,
        }
    }

    /// SCAN: nearest pending floor along the heading (up if none), else the
    /// nearest one the other way.  `None` when nothing is pending.
    pub fn next_scan_target(&self) -> Option<Floor> {
        let first = self.heading.unwrap_or(Direction::Up);
        self.nearest_pending(first)
            .or_else(|| self.nearest_pending(first.reverse()))
    }

    fn nearest_pending(&self, direction: Direction) -> Option<Floor> {
        let here = self.current_floor.0;
        match direction {
            Direction::Up => (here + 1..=self.floors_count())
                .map(Floor)
                .find(|&f| self.has_pending(f)),
            Direction::Down => (1..here)
                .rev()
                .map(Floor)
                .find(|&f| self.has_pending(f)),
        }
    }

    // ── Passengers ────────────────────────────────────────────────────────

    /// Try to admit waiting passenger `id` at tick `now`.
    ///
    /// Refused if the car would exceed `max_load`: the passenger is marked
    /// `overloaded_once` and `overload_count` grows.  Otherwise the passenger
    /// meets every current rider, boards, and presses its target floor.
    pub fn board(
        &mut self,
        id:         PassengerId,
        passengers: &mut PassengerTable,
        now:        Tick,
    ) -> SimResult<Admission> {
        let passenger = passengers.get_mut(id).ok_or(SimError::UnknownPassenger(id))?;
        let weight = passenger.weight();
        if !self.can_admit(weight) {
            passenger.mark_overloaded();
            self.stats.overload_count += 1;
            return Ok(Admission::Overloaded);
        }

        let target = passenger.target_floor();
        self.check_floor(target)?;
        passenger.record_boarding(now);

        for &rider in &self.onboard {
            passengers.record_meeting(id, rider);
        }
        self.onboard.push(id);
        self.dropoff[target.index()] = true;

        self.current_load += weight;
        self.stats.total_cargo += weight;
        self.stats.peak_load = self.stats.peak_load.max(self.current_load);
        Ok(Admission::Boarded)
    }

    /// Let off everyone whose target is the current floor.
    ///
    /// Returns the delivered passengers in boarding order.  The drop-off
    /// signal for this floor is re-derived from whoever is still aboard.
    pub fn alight(
        &mut self,
        passengers: &mut PassengerTable,
        now:        Tick,
    ) -> SimResult<Vec<PassengerId>> {
        let floor = self.current_floor;
        let mut delivered = Vec::new();
        for &id in &self.onboard {
            let passenger = passengers.get(id).ok_or(SimError::UnknownPassenger(id))?;
            if passenger.target_floor() == floor {
                delivered.push(id);
            }
        }
        if delivered.is_empty() {
            return Ok(delivered);
        }

        self.onboard.retain(|id| !delivered.contains(id));
        for &id in &delivered {
            if let Some(passenger) = passengers.get_mut(id) {
                passenger.record_deboarding(now);
            }
        }

        // Recomputed rather than decremented so the load is always exactly
        // the sum of the riders' weights.
        self.current_load = passengers.total_weight(&self.onboard);
        self.dropoff[floor.index()] = self
            .onboard
            .iter()
            .filter_map(|&id| passengers.get(id))
            .any(|p| p.target_floor() == floor);
        Ok(delivered)
    }

    fn check_floor(&self, floor: Floor) -> SimResult<()> {
        let floors_count = self.floors_count();
        if floor.is_within(floors_count) {
            Ok(())
        } else {
            Err(CoreError::floor_out_of_range(floor, floors_count).into())
        }
    }
}
