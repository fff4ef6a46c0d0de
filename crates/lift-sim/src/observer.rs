//! Simulation observer trait: the dispatcher's log sink.
//!
//! The dispatcher reports every decision it makes through these hooks and
//! never reads anything back, so an observer cannot influence a run.

use lift_core::{ElevatorId, ElevatorState, Floor, PassengerId, Tick};
use lift_schedule::Passenger;

use crate::RunSummary;

/// How a floor call was handed to the chosen elevator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchKind {
    /// The car was idle at the floor and serviced it on the spot.
    Immediate,
    /// The car was idle elsewhere and set off toward the floor.
    FromIdle,
    /// The car was already travelling toward (or past) the floor's side and
    /// will stop there in its normal SCAN order.
    EnRoute,
    /// The car was interrupted mid-leg.  `approx_floor` is the floor its
    /// position was snapped to.
    Redirected { approx_floor: Floor },
}

/// Callbacks invoked by [`ElevatorSystem`][crate::ElevatorSystem] as the run
/// unfolds.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: delivery counter
///
/// ```rust,ignore
/// struct Deliveries(usize);
///
/// impl SimObserver for Deliveries {
///     fn on_passenger_delivered(&mut self, _: Tick, _: PassengerId, _: ElevatorId, _: Floor) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// A passenger appeared in its boarding floor's queue.
    fn on_passenger_released(&mut self, _tick: Tick, _passenger: &Passenger) {}

    /// A floor call was assigned to `elevator`.
    fn on_call_dispatched(
        &mut self,
        _tick:     Tick,
        _floor:    Floor,
        _elevator: ElevatorId,
        _kind:     DispatchKind,
    ) {}

    /// No elevator was suitable for `floor`.  The call is retried every
    /// tick but reported only once until a car is assigned to it.
    fn on_call_deferred(&mut self, _tick: Tick, _floor: Floor) {}

    /// `elevator` opened its doors at `floor`.
    fn on_elevator_arrived(&mut self, _tick: Tick, _elevator: ElevatorId, _floor: Floor) {}

    fn on_passenger_boarded(
        &mut self,
        _tick:      Tick,
        _passenger: PassengerId,
        _elevator:  ElevatorId,
        _floor:     Floor,
    ) {}

    /// Boarding was refused for lack of capacity; the passenger keeps
    /// waiting.
    fn on_passenger_overloaded(
        &mut self,
        _tick:      Tick,
        _passenger: PassengerId,
        _elevator:  ElevatorId,
        _floor:     Floor,
    ) {}

    fn on_passenger_delivered(
        &mut self,
        _tick:      Tick,
        _passenger: PassengerId,
        _elevator:  ElevatorId,
        _floor:     Floor,
    ) {}

    /// `elevator` started a leg toward `target`, due at `arrival`.
    fn on_elevator_departed(
        &mut self,
        _tick:     Tick,
        _elevator: ElevatorId,
        _target:   Floor,
        _state:    ElevatorState,
        _arrival:  Tick,
    ) {}

    /// `elevator` has nothing pending and parked at `floor`.
    fn on_elevator_parked(&mut self, _tick: Tick, _elevator: ElevatorId, _floor: Floor) {}

    /// Called once after the last passenger is delivered.
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.  The default for tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
