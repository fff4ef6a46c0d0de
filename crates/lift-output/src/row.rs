//! Plain data row types written by report backends.

use lift_core::Tick;
use lift_schedule::Passenger;
use lift_sim::{Elevator, ElevatorSystem, RunSummary, SimObserver};

/// One passenger's trip, as reported at the end of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct PassengerReportRow {
    pub passenger_id:   u64,
    pub appear_tick:    Tick,
    pub origin_floor:   u32,
    pub target_floor:   u32,
    /// `None` if the passenger never boarded.
    pub boarding_tick:  Option<Tick>,
    /// Ticks between boarding and deboarding; `None` until delivered.
    pub travel_ticks:   Option<u64>,
    /// Ids of fellow riders, ascending.
    pub met_passengers: Vec<u64>,
    pub had_overload:   bool,
}

impl PassengerReportRow {
    pub fn from_passenger(p: &Passenger) -> Self {
        Self {
            passenger_id:   p.id().0,
            appear_tick:    p.appear_tick(),
            origin_floor:   p.boarding_floor().0,
            target_floor:   p.target_floor().0,
            boarding_tick:  p.boarding_tick(),
            travel_ticks:   p.travel_ticks(),
            met_passengers: p.met_passengers().iter().map(|id| id.0).collect(),
            had_overload:   p.overloaded_once(),
        }
    }
}

/// One elevator's lifetime statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevatorReportRow {
    pub elevator_id:    u32,
    pub idle_ticks:     u64,
    /// Total run time minus idle time.
    pub moving_ticks:   u64,
    pub floors_passed:  u64,
    pub total_cargo:    f64,
    pub peak_load:      f64,
    pub overload_count: u64,
}

impl ElevatorReportRow {
    /// `run_ticks` is the length of the whole run; whatever part of it the
    /// car did not spend idle is reported as moving.
    pub fn from_elevator(e: &Elevator, run_ticks: u64) -> Self {
        let stats = e.stats();
        Self {
            elevator_id:    e.id().0,
            idle_ticks:     stats.idle_ticks,
            moving_ticks:   run_ticks.saturating_sub(stats.idle_ticks),
            floors_passed:  stats.floors_passed,
            total_cargo:    stats.total_cargo,
            peak_load:      stats.peak_load,
            overload_count: stats.overload_count,
        }
    }
}

/// Passenger rows for a finished run, in ascending id order.
pub fn passenger_rows<O: SimObserver>(system: &ElevatorSystem<O>) -> Vec<PassengerReportRow> {
    system
        .passengers()
        .iter()
        .map(PassengerReportRow::from_passenger)
        .collect()
}

/// Elevator rows for a finished run, in ascending id order.
pub fn elevator_rows<O: SimObserver>(
    system:  &ElevatorSystem<O>,
    summary: &RunSummary,
) -> Vec<ElevatorReportRow> {
    system
        .elevators()
        .iter()
        .map(|e| ElevatorReportRow::from_elevator(e, summary.run_ticks))
        .collect()
}
