//! `SimObserver` that forwards every dispatcher event to `tracing`.

use lift_core::{ElevatorId, ElevatorState, Floor, PassengerId, Tick};
use lift_schedule::Passenger;
use lift_sim::{DispatchKind, RunSummary, SimObserver};
use tracing::{debug, info, trace};

/// Structured log sink for a run.
///
/// Every event carries the tick both as a raw counter and as `hh:mm`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SimObserver for TracingObserver {
    fn on_tick_start(&mut self, tick: Tick) {
        trace!(tick = tick.0, "tick");
    }

    fn on_passenger_released(&mut self, tick: Tick, p: &Passenger) {
        info!(
            tick = tick.0,
            time = %tick.clock(),
            passenger = p.id().0,
            from = p.boarding_floor().0,
            to = p.target_floor().0,
            weight = p.weight(),
            "passenger waiting"
        );
    }

    fn on_call_dispatched(&mut self, tick: Tick, floor: Floor, elevator: ElevatorId, kind: DispatchKind) {
        match kind {
            DispatchKind::Immediate => {
                info!(tick = tick.0, time = %tick.clock(), floor = floor.0, elevator = elevator.0,
                      "call served by idle elevator on the floor");
            }
            DispatchKind::FromIdle => {
                info!(tick = tick.0, time = %tick.clock(), floor = floor.0, elevator = elevator.0,
                      "call assigned to idle elevator");
            }
            DispatchKind::EnRoute => {
                info!(tick = tick.0, time = %tick.clock(), floor = floor.0, elevator = elevator.0,
                      "call added to moving elevator's route");
            }
            DispatchKind::Redirected { approx_floor } => {
                info!(tick = tick.0, time = %tick.clock(), floor = floor.0, elevator = elevator.0,
                      approx_floor = approx_floor.0, "moving elevator redirected");
            }
        }
    }

    fn on_call_deferred(&mut self, tick: Tick, floor: Floor) {
        debug!(tick = tick.0, floor = floor.0, "no suitable elevator, retrying next tick");
    }

    fn on_elevator_arrived(&mut self, tick: Tick, elevator: ElevatorId, floor: Floor) {
        info!(tick = tick.0, time = %tick.clock(), elevator = elevator.0, floor = floor.0, "doors open");
    }

    fn on_passenger_boarded(&mut self, tick: Tick, passenger: PassengerId, elevator: ElevatorId, floor: Floor) {
        info!(tick = tick.0, passenger = passenger.0, elevator = elevator.0, floor = floor.0, "boarded");
    }

    fn on_passenger_overloaded(&mut self, tick: Tick, passenger: PassengerId, elevator: ElevatorId, floor: Floor) {
        info!(tick = tick.0, passenger = passenger.0, elevator = elevator.0, floor = floor.0,
              "overload, passenger keeps waiting");
    }

    fn on_passenger_delivered(&mut self, tick: Tick, passenger: PassengerId, elevator: ElevatorId, floor: Floor) {
        info!(tick = tick.0, passenger = passenger.0, elevator = elevator.0, floor = floor.0, "delivered");
    }

    fn on_elevator_departed(
        &mut self,
        tick:     Tick,
        elevator: ElevatorId,
        target:   Floor,
        state:    ElevatorState,
        arrival:  Tick,
    ) {
        info!(
            tick = tick.0,
            elevator = elevator.0,
            target = target.0,
            state = %state,
            arrival = arrival.0,
            "new target"
        );
    }

    fn on_elevator_parked(&mut self, tick: Tick, elevator: ElevatorId, floor: Floor) {
        info!(tick = tick.0, elevator = elevator.0, floor = floor.0, "parked");
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        info!(
            final_tick = summary.final_tick.0,
            time = %summary.final_tick.clock(),
            run_ticks = summary.run_ticks,
            delivered = summary.delivered,
            overloads = summary.overload_events,
            "simulation finished"
        );
    }
}
