//! Fluent builder for constructing an [`ElevatorSystem`].

use std::collections::{BTreeSet, VecDeque};

use lift_core::{CoreError, ElevatorId, SimConfig};
use lift_schedule::{BuildingConfig, Schedule};

use crate::elevator::Elevator;
use crate::{ElevatorSystem, NoopObserver, SimError, SimObserver, SimResult};

/// Fluent builder for [`ElevatorSystem<O>`].
///
/// # Required inputs
///
/// - [`BuildingConfig`]: floor count and per-car capacity
/// - [`Schedule`]: the passenger table and its arrival index
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                  |
/// |-----------------|------------------------------------------|
/// | `.config(c)`    | `SimConfig::default()` (floor 1, idle)   |
/// | `.observer(o)`  | [`NoopObserver`]                         |
///
/// # Example
///
/// ```rust,ignore
/// let building = load_building_file(Path::new("elevators.txt"))?;
/// let schedule = load_schedule_file(Path::new("passengers.txt"), &building)?;
/// let mut system = SystemBuilder::new(building, schedule)
///     .observer(TracingObserver)
///     .build()?;
/// let summary = system.run()?;
/// ```
pub struct SystemBuilder<O: SimObserver = NoopObserver> {
    building: BuildingConfig,
    schedule: Schedule,
    config:   SimConfig,
    observer: O,
}

impl SystemBuilder<NoopObserver> {
    /// Create a builder with all required inputs.
    pub fn new(building: BuildingConfig, schedule: Schedule) -> Self {
        Self {
            building,
            schedule,
            config:   SimConfig::default(),
            observer: NoopObserver,
        }
    }
}

impl<O: SimObserver> SystemBuilder<O> {
    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Supply the log sink.  Replaces any previously set observer.
    pub fn observer<P: SimObserver>(self, observer: P) -> SystemBuilder<P> {
        SystemBuilder {
            building: self.building,
            schedule: self.schedule,
            config:   self.config,
            observer,
        }
    }

    /// Validate inputs, place the cars, and return a ready-to-run
    /// [`ElevatorSystem`].
    ///
    /// Rejects a start floor outside the building, a moving initial state
    /// (a car cannot start mid-leg with no target), and any passenger the
    /// run could never deliver (floor out of range, boarding floor equal to
    /// target, or heavier than every car).
    pub fn build(self) -> SimResult<ElevatorSystem<O>> {
        let floors_count = self.building.floors_count();

        // ── Validate ──────────────────────────────────────────────────────
        let start_floor = self.config.start_floor;
        if !start_floor.is_within(floors_count) {
            return Err(CoreError::floor_out_of_range(start_floor, floors_count).into());
        }
        if self.config.initial_state.is_moving() {
            return Err(SimError::Config(format!(
                "elevators must start idle, not {}",
                self.config.initial_state
            )));
        }

        let max_capacity = self.building.max_capacity();
        for p in self.schedule.passengers.iter() {
            for floor in [p.boarding_floor(), p.target_floor()] {
                if !floor.is_within(floors_count) {
                    return Err(CoreError::floor_out_of_range(floor, floors_count).into());
                }
            }
            if p.boarding_floor() == p.target_floor() {
                return Err(SimError::Config(format!(
                    "passenger {} boards and alights at floor {}",
                    p.id(),
                    p.target_floor()
                )));
            }
            if p.weight() > max_capacity {
                return Err(SimError::Config(format!(
                    "passenger {} weighs {} but the largest car carries {}",
                    p.id(),
                    p.weight(),
                    max_capacity
                )));
            }
        }

        // ── Place cars ────────────────────────────────────────────────────
        let start_tick = self.config.start_tick;
        let elevators = self
            .building
            .max_loads()
            .iter()
            .enumerate()
            .map(|(i, &max_load)| {
                Elevator::new(
                    ElevatorId::from_index(i),
                    start_floor,
                    max_load,
                    floors_count,
                    self.config.initial_state,
                    start_tick,
                )
            })
            .collect();

        let Schedule { passengers, arrivals, .. } = self.schedule;
        let remaining = passengers.len() - passengers.delivered_count();

        Ok(ElevatorSystem {
            clock: self.config.make_clock(),
            config: self.config,
            floors_count,
            elevators,
            passengers,
            arrivals,
            waiting: vec![VecDeque::new(); floors_count as usize + 1],
            called_floors: BTreeSet::new(),
            deferred_floors: BTreeSet::new(),
            remaining,
            observer: self.observer,
        })
    }
}
