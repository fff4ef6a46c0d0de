//! The `ElevatorSystem` dispatcher and its tick loop.

use std::collections::{BTreeSet, VecDeque};

use lift_core::{CoreError, ElevatorState, Floor, PassengerId, SimClock, SimConfig, Tick};
use lift_schedule::{ArrivalIndex, PassengerTable};

use crate::elevator::{Admission, Elevator};
use crate::{DispatchKind, NoopObserver, SimObserver, SimResult};

/// What a finished run looked like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// The clock value after the last processed tick.
    pub final_tick:      Tick,
    /// Ticks from the configured start to `final_tick`.
    pub run_ticks:       u64,
    pub delivered:       usize,
    pub overload_events: u64,
}

// ── ElevatorSystem ────────────────────────────────────────────────────────────

/// The dispatcher: owns every elevator and passenger and drives the clock.
///
/// Each tick runs three phases in a fixed order:
///
/// 1. **Release**: passengers due this tick join their floor's queue.
/// 2. **Dispatch** (ascending floor): every floor with waiting passengers and
///    no call in flight gets the most suitable elevator, which either serves
///    it on the spot, sets off toward it, or is redirected mid-leg.
/// 3. **Arrivals** (ascending elevator): cars whose projected arrival has
///    passed open their doors, let riders off, take waiting passengers on,
///    and pick their next SCAN target.
///
/// The run ends once every passenger has been delivered.
///
/// Create via [`SystemBuilder`][crate::SystemBuilder].
pub struct ElevatorSystem<O: SimObserver = NoopObserver> {
    pub config: SimConfig,

    pub clock: SimClock,

    pub(crate) floors_count: u32,

    /// Cars in id order (`elevators[0]` is elevator 1).
    pub(crate) elevators: Vec<Elevator>,

    /// Owner of every passenger record.
    pub(crate) passengers: PassengerTable,

    pub(crate) arrivals: ArrivalIndex,

    /// FIFO of released, not yet boarded passengers per floor.  Index 0
    /// unused.
    pub(crate) waiting: Vec<VecDeque<PassengerId>>,

    /// Floors whose call has been assigned but not yet serviced.
    pub(crate) called_floors: BTreeSet<Floor>,

    /// Floors with waiting passengers that no car could take yet.
    pub(crate) deferred_floors: BTreeSet<Floor>,

    /// Passengers not yet delivered.
    pub(crate) remaining: usize,

    pub(crate) observer: O,
}

impl<O: SimObserver> ElevatorSystem<O> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every passenger is delivered, then park all cars so their
    /// timing statistics are final.
    pub fn run(&mut self) -> SimResult<RunSummary> {
        while !self.is_finished() {
            self.step()?;
        }
        Ok(self.finish())
    }

    /// Process exactly one tick and advance the clock.
    ///
    /// Useful for tests and incremental stepping; does not finalize
    /// statistics.
    pub fn step(&mut self) -> SimResult<()> {
        let now = self.clock.current_tick;
        self.observer.on_tick_start(now);
        self.arrive_passengers(now);
        self.dispatch_calls(now)?;
        self.process_arrivals(now)?;
        self.clock.advance();
        Ok(())
    }

    /// `true` once no passenger is waiting, riding, or yet to appear.
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    pub fn floors_count(&self) -> u32 {
        self.floors_count
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn passengers(&self) -> &PassengerTable {
        &self.passengers
    }

    /// Passengers waiting at `floor`, front of the queue first.
    pub fn waiting_at(&self, floor: Floor) -> impl Iterator<Item = PassengerId> + '_ {
        self.waiting
            .get(floor.index())
            .into_iter()
            .flat_map(|queue| queue.iter().copied())
    }

    pub fn called_floors(&self) -> &BTreeSet<Floor> {
        &self.called_floors
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    // ── Release ───────────────────────────────────────────────────────────

    /// Move every passenger due at or before `now` into its floor's queue.
    pub fn arrive_passengers(&mut self, now: Tick) {
        for id in self.arrivals.drain_through(now) {
            let Some(passenger) = self.passengers.get(id) else { continue };
            if let Some(queue) = self.waiting.get_mut(passenger.boarding_floor().index()) {
                queue.push_back(id);
                self.observer.on_passenger_released(now, passenger);
            }
        }
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    fn dispatch_calls(&mut self, now: Tick) -> SimResult<()> {
        for floor in Floor::all(self.floors_count) {
            if self.waiting[floor.index()].is_empty() || self.called_floors.contains(&floor) {
                continue;
            }
            match self.calculate_most_suitable_elevator(floor, now)? {
                Some(index) => {
                    self.called_floors.insert(floor);
                    self.deferred_floors.remove(&floor);
                    self.dispatch(index, floor, now)?;
                }
                None => {
                    if self.deferred_floors.insert(floor) {
                        self.observer.on_call_deferred(now, floor);
                    }
                }
            }
        }
        Ok(())
    }

    /// Pick the elevator that should answer a call at `floor`.
    ///
    /// A car is suitable when it is idle, or moving up from at or below
    /// `floor`, or moving down from at or above it (using its extrapolated
    /// position), and it has room for the lightest passenger waiting there.
    /// Idle cars beat moving ones; then the nearest wins; ties go to the
    /// lowest elevator id.
    pub fn calculate_most_suitable_elevator(
        &self,
        floor: Floor,
        now:   Tick,
    ) -> SimResult<Option<usize>> {
        if !floor.is_within(self.floors_count) {
            return Err(CoreError::floor_out_of_range(floor, self.floors_count).into());
        }
        let lightest = self.waiting[floor.index()]
            .iter()
            .filter_map(|&id| self.passengers.get(id))
            .map(|p| p.weight())
            .reduce(f64::min)
            .unwrap_or(0.0);

        let mut best: Option<(usize, bool, u32)> = None;
        for (index, elevator) in self.elevators.iter().enumerate() {
            let approx = elevator.approximate_floor(now);
            let suitable = match elevator.state() {
                ElevatorState::IdleClosed | ElevatorState::IdleOpen => true,
                ElevatorState::MovingUp   => approx <= floor,
                ElevatorState::MovingDown => approx >= floor,
            };
            if !suitable || !elevator.can_admit(lightest) {
                continue;
            }

            let idle = elevator.state().is_idle();
            let distance = approx.distance(floor);
            let better = match best {
                None => true,
                Some((_, best_idle, best_distance)) => {
                    (idle && !best_idle) || (idle == best_idle && distance < best_distance)
                }
            };
            if better {
                best = Some((index, idle, distance));
            }
        }
        Ok(best.map(|(index, _, _)| index))
    }

    /// Hand the call at `floor` to `elevators[index]`.
    fn dispatch(&mut self, index: usize, floor: Floor, now: Tick) -> SimResult<()> {
        let elevator = &mut self.elevators[index];
        let id = elevator.id();

        if elevator.state().is_idle() && elevator.current_floor() == floor {
            self.observer.on_call_dispatched(now, floor, id, DispatchKind::Immediate);
            return self.process_floor_arrival(floor, index, now);
        }

        elevator.request_pickup(floor)?;

        if elevator.state().is_idle() {
            self.observer.on_call_dispatched(now, floor, id, DispatchKind::FromIdle);
            return self.calculate_next_elevator_target(index, now);
        }

        if elevator.reaches_without_redirect(floor) {
            self.observer.on_call_dispatched(now, floor, id, DispatchKind::EnRoute);
            return Ok(());
        }

        let approx_floor = elevator.retarget(floor, now)?;
        let (state, arrival) = (elevator.state(), elevator.projected_arrival());
        self.observer.on_call_dispatched(now, floor, id, DispatchKind::Redirected { approx_floor });
        self.observer.on_elevator_departed(now, id, floor, state, arrival);
        Ok(())
    }

    // ── Arrivals ──────────────────────────────────────────────────────────

    fn process_arrivals(&mut self, now: Tick) -> SimResult<()> {
        for index in 0..self.elevators.len() {
            let elevator = &self.elevators[index];
            if !elevator.is_arrival_due(now) {
                continue;
            }
            if let Some(target) = elevator.target_floor() {
                self.process_floor_arrival(target, index, now)?;
            }
        }
        Ok(())
    }

    /// Service `floor` with `elevators[index]`: open the doors, let riders
    /// off, take waiting passengers on, close, and choose the next target.
    ///
    /// Deboarding always happens before boarding.
    pub(crate) fn process_floor_arrival(&mut self, floor: Floor, index: usize, now: Tick) -> SimResult<()> {
        let elevator = &mut self.elevators[index];
        let id = elevator.id();
        elevator.open_doors(floor, now)?;
        self.called_floors.remove(&floor);
        self.observer.on_elevator_arrived(now, id, floor);

        for passenger in elevator.alight(&mut self.passengers, now)? {
            self.remaining -= 1;
            self.observer.on_passenger_delivered(now, passenger, id, floor);
        }

        // FIFO scan; anyone who does not fit is skipped and keeps their place.
        let queue = &mut self.waiting[floor.index()];
        let mut still_waiting = VecDeque::with_capacity(queue.len());
        while let Some(passenger) = queue.pop_front() {
            match elevator.board(passenger, &mut self.passengers, now)? {
                Admission::Boarded => {
                    self.observer.on_passenger_boarded(now, passenger, id, floor);
                }
                Admission::Overloaded => {
                    self.observer.on_passenger_overloaded(now, passenger, id, floor);
                    still_waiting.push_back(passenger);
                }
            }
        }
        *queue = still_waiting;

        elevator.close_doors(now);
        self.calculate_next_elevator_target(index, now)
    }

    /// SCAN step for `elevators[index]`: depart toward the next pending
    /// floor, or park where it is.
    pub(crate) fn calculate_next_elevator_target(&mut self, index: usize, now: Tick) -> SimResult<()> {
        let elevator = &mut self.elevators[index];
        let id = elevator.id();
        match elevator.next_scan_target() {
            Some(target) => {
                elevator.depart(target, now)?;
                self.observer.on_elevator_departed(
                    now,
                    id,
                    target,
                    elevator.state(),
                    elevator.projected_arrival(),
                );
            }
            None => {
                elevator.park(now);
                self.observer.on_elevator_parked(now, id, elevator.current_floor());
            }
        }
        Ok(())
    }

    // ── Finish ────────────────────────────────────────────────────────────

    fn finish(&mut self) -> RunSummary {
        let final_tick = self.clock.current_tick;
        for elevator in &mut self.elevators {
            elevator.finish(final_tick);
        }
        let summary = RunSummary {
            final_tick,
            run_ticks:       final_tick.since(self.config.start_tick),
            delivered:       self.passengers.delivered_count(),
            overload_events: self.elevators.iter().map(|e| e.stats().overload_count).sum(),
        };
        self.observer.on_sim_end(&summary);
        summary
    }
}
