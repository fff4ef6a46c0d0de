//! Integration tests for lift-sim.

use lift_core::{ElevatorId, ElevatorState, Floor, PassengerId, SimConfig, Tick};
use lift_schedule::{BuildingConfig, Passenger, PassengerTable, Schedule};

use crate::{
    Admission, DispatchKind, Elevator, ElevatorSystem, NoopObserver, RunSummary, SimError,
    SimObserver, SystemBuilder,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn building(floors_count: u32, max_loads: &[f64]) -> BuildingConfig {
    BuildingConfig::new(floors_count, max_loads.to_vec()).unwrap()
}

fn passenger(id: u64, tick: u64, from: u32, to: u32, weight: f64) -> Passenger {
    Passenger::new(PassengerId(id), Tick(tick), Floor(from), Floor(to), weight)
}

fn table(passengers: &[Passenger]) -> PassengerTable {
    let mut t = PassengerTable::new();
    for p in passengers {
        t.insert(p.clone());
    }
    t
}

fn system(
    floors_count: u32,
    max_loads:    &[f64],
    passengers:   Vec<Passenger>,
) -> ElevatorSystem<NoopObserver> {
    SystemBuilder::new(building(floors_count, max_loads), Schedule::from_passengers(passengers))
        .build()
        .unwrap()
}

/// Car 1 at `floor`, idle with closed doors, clock starting at tick 0.
fn car(floor: u32, max_load: f64, floors_count: u32) -> Elevator {
    Elevator::new(
        ElevatorId(1),
        Floor(floor),
        max_load,
        floors_count,
        ElevatorState::IdleClosed,
        Tick(0),
    )
}

/// One car on 10 floors.  A rides 1 → 10 from tick 0; B calls from floor 6
/// at tick 9, a third of the way into A's leg, and rides to 8.
fn redirect_scenario() -> Vec<Passenger> {
    vec![
        passenger(1, 0, 1, 10, 100.0),
        passenger(2, 9, 6, 8, 50.0),
    ]
}

// ── Elevator: admission ───────────────────────────────────────────────────────

#[cfg(test)]
mod admission {
    use super::*;

    #[test]
    fn boards_until_capacity_then_refuses() {
        let mut passengers = table(&[passenger(1, 0, 1, 3, 60.0), passenger(2, 0, 1, 4, 50.0)]);
        let mut e = car(1, 100.0, 5);

        assert_eq!(e.board(PassengerId(1), &mut passengers, Tick(0)).unwrap(), Admission::Boarded);
        assert_eq!(e.board(PassengerId(2), &mut passengers, Tick(0)).unwrap(), Admission::Overloaded);

        assert_eq!(e.current_load(), 60.0);
        assert_eq!(e.onboard(), &[PassengerId(1)]);
        assert_eq!(e.stats().overload_count, 1);
        assert!(passengers.get(PassengerId(2)).unwrap().overloaded_once());
        assert_eq!(passengers.get(PassengerId(2)).unwrap().boarding_tick(), None);
    }

    #[test]
    fn too_heavy_alone_is_refused_every_time() {
        let mut passengers = table(&[passenger(1, 0, 1, 3, 150.0)]);
        let mut e = car(1, 100.0, 5);
        for _ in 0..3 {
            assert_eq!(e.board(PassengerId(1), &mut passengers, Tick(0)).unwrap(), Admission::Overloaded);
        }
        assert_eq!(e.stats().overload_count, 3);
        assert_eq!(e.current_load(), 0.0);
        assert!(passengers.get(PassengerId(1)).unwrap().overloaded_once());
    }

    #[test]
    fn exact_fit_is_admitted() {
        let mut passengers = table(&[passenger(1, 0, 1, 3, 60.0), passenger(2, 0, 1, 3, 40.0)]);
        let mut e = car(1, 100.0, 5);
        e.board(PassengerId(1), &mut passengers, Tick(0)).unwrap();
        assert_eq!(e.board(PassengerId(2), &mut passengers, Tick(0)).unwrap(), Admission::Boarded);
        assert_eq!(e.stats().peak_load, 100.0);
    }

    #[test]
    fn boarding_records_meetings_both_ways() {
        let mut passengers = table(&[
            passenger(1, 0, 1, 3, 10.0),
            passenger(2, 0, 1, 4, 10.0),
            passenger(3, 0, 1, 5, 10.0),
        ]);
        let mut e = car(1, 1000.0, 5);
        for id in 1..=3 {
            e.board(PassengerId(id), &mut passengers, Tick(2)).unwrap();
        }
        let p1 = passengers.get(PassengerId(1)).unwrap();
        let p3 = passengers.get(PassengerId(3)).unwrap();
        assert!(p1.has_met(PassengerId(2)) && p1.has_met(PassengerId(3)));
        assert!(p3.has_met(PassengerId(1)) && p3.has_met(PassengerId(2)));
        assert!(!p1.has_met(PassengerId(1)));
        assert_eq!(p1.boarding_tick(), Some(Tick(2)));
    }

    #[test]
    fn unknown_passenger_is_an_error() {
        let mut passengers = PassengerTable::new();
        let mut e = car(1, 100.0, 5);
        let err = e.board(PassengerId(9), &mut passengers, Tick(0)).unwrap_err();
        assert!(matches!(err, SimError::UnknownPassenger(PassengerId(9))));
    }

    #[test]
    fn alight_rederives_dropoff_signal() {
        let mut passengers = table(&[
            passenger(1, 0, 1, 4, 70.0),
            passenger(2, 0, 1, 4, 80.0),
            passenger(3, 0, 1, 6, 90.0),
        ]);
        let mut e = car(1, 1000.0, 8);
        for id in 1..=3 {
            e.board(PassengerId(id), &mut passengers, Tick(0)).unwrap();
        }
        assert!(e.has_dropoff(Floor(4)) && e.has_dropoff(Floor(6)));

        e.open_doors(Floor(4), Tick(12)).unwrap();
        let delivered = e.alight(&mut passengers, Tick(12)).unwrap();

        assert_eq!(delivered, vec![PassengerId(1), PassengerId(2)]);
        assert!(!e.has_dropoff(Floor(4)));
        assert!(e.has_dropoff(Floor(6)));
        assert_eq!(e.current_load(), 90.0);
        assert_eq!(e.onboard(), &[PassengerId(3)]);
        assert_eq!(passengers.get(PassengerId(2)).unwrap().deboarding_tick(), Some(Tick(12)));
        assert_eq!(e.stats().total_cargo, 240.0);
    }

    #[test]
    fn alight_with_nobody_for_this_floor_is_a_noop() {
        let mut passengers = table(&[passenger(1, 0, 1, 4, 70.0)]);
        let mut e = car(1, 1000.0, 5);
        e.board(PassengerId(1), &mut passengers, Tick(0)).unwrap();
        assert!(e.alight(&mut passengers, Tick(1)).unwrap().is_empty());
        assert_eq!(e.current_load(), 70.0);
    }
}

// ── Elevator: motion ──────────────────────────────────────────────────────────

#[cfg(test)]
mod motion {
    use super::*;

    #[test]
    fn speed_depends_on_load() {
        let mut passengers = table(&[passenger(1, 0, 1, 4, 500.0)]);
        let mut e = car(1, 1000.0, 10);
        assert_eq!(e.ticks_per_floor(), 3);
        e.board(PassengerId(1), &mut passengers, Tick(0)).unwrap();
        // 3 + floor(5 × 0.5)
        assert_eq!(e.ticks_per_floor(), 5);
        assert_eq!(e.travel_ticks(Floor(4)), 15);
    }

    #[test]
    fn full_car_is_slowest() {
        let mut passengers = table(&[passenger(1, 0, 1, 4, 100.0)]);
        let mut e = car(1, 100.0, 10);
        e.board(PassengerId(1), &mut passengers, Tick(0)).unwrap();
        assert_eq!(e.ticks_per_floor(), 8);
    }

    #[test]
    fn depart_projects_arrival() {
        let mut e = car(2, 1000.0, 10);
        e.depart(Floor(6), Tick(4)).unwrap();
        assert_eq!(e.state(), ElevatorState::MovingUp);
        assert_eq!(e.target_floor(), Some(Floor(6)));
        assert_eq!(e.projected_arrival(), Tick(16));
        assert!(!e.is_arrival_due(Tick(15)));
        assert!(e.is_arrival_due(Tick(16)));
    }

    #[test]
    fn depart_out_of_range_is_a_contract_error() {
        let mut e = car(1, 1000.0, 5);
        assert!(matches!(e.depart(Floor(6), Tick(0)), Err(SimError::Contract(_))));
        assert!(matches!(e.request_pickup(Floor(0)), Err(SimError::Contract(_))));
    }

    #[test]
    fn position_is_extrapolated_along_the_leg() {
        let mut e = car(1, 1000.0, 10);
        e.depart(Floor(10), Tick(0)).unwrap(); // 27 ticks
        assert_eq!(e.approximate_floor(Tick(0)), Floor(1));
        assert_eq!(e.approximate_floor(Tick(9)), Floor(4));
        assert_eq!(e.approximate_floor(Tick(27)), Floor(10));
        assert_eq!(e.approximate_floor(Tick(40)), Floor(10));
    }

    #[test]
    fn moving_down_extrapolates_downward() {
        let mut e = car(9, 1000.0, 10);
        e.depart(Floor(3), Tick(0)).unwrap(); // 18 ticks
        assert_eq!(e.state(), ElevatorState::MovingDown);
        assert_eq!(e.approximate_floor(Tick(9)), Floor(6));
    }

    #[test]
    fn redirect_snaps_to_approximate_floor() {
        let mut e = car(1, 1000.0, 10);
        e.depart(Floor(10), Tick(0)).unwrap();

        let snapped = e.retarget(Floor(5), Tick(9)).unwrap();

        assert_eq!(snapped, Floor(4));
        assert_eq!(e.current_floor(), Floor(4));
        assert_eq!(e.stats().floors_passed, 3);
        assert_eq!(e.target_floor(), Some(Floor(5)));
        assert_eq!(e.last_state_change(), Tick(9));
        assert_eq!(e.projected_arrival(), Tick(12));
    }

    #[test]
    fn zero_length_leg_is_already_complete() {
        let mut e = car(3, 1000.0, 10);
        e.depart(Floor(3), Tick(5)).unwrap();
        assert_eq!(e.projected_arrival(), Tick(5));
        assert_eq!(e.leg_progress(Tick(5)), 1.0);
        assert_eq!(e.approximate_floor(Tick(5)), Floor(3));
        assert!(e.is_arrival_due(Tick(5)));
    }

    #[test]
    fn idle_car_is_at_its_floor() {
        let e = car(7, 1000.0, 10);
        assert_eq!(e.approximate_floor(Tick(100)), Floor(7));
    }
}

// ── Elevator: SCAN ────────────────────────────────────────────────────────────

#[cfg(test)]
mod scan {
    use super::*;

    fn moving_up_at(floor: u32) -> Elevator {
        Elevator::new(ElevatorId(1), Floor(floor), 1000.0, 10, ElevatorState::MovingUp, Tick(0))
    }

    #[test]
    fn keeps_heading_while_pending_ahead() {
        let mut e = moving_up_at(3);
        for f in [2, 5, 8] {
            e.request_pickup(Floor(f)).unwrap();
        }
        assert_eq!(e.next_scan_target(), Some(Floor(5)));
    }

    #[test]
    fn reverses_when_nothing_ahead() {
        let mut e = moving_up_at(6);
        e.request_pickup(Floor(2)).unwrap();
        e.request_pickup(Floor(4)).unwrap();
        assert_eq!(e.next_scan_target(), Some(Floor(4)));
    }

    #[test]
    fn parked_car_looks_up_first() {
        let mut e = car(5, 1000.0, 10);
        e.request_pickup(Floor(4)).unwrap();
        e.request_pickup(Floor(7)).unwrap();
        assert_eq!(e.next_scan_target(), Some(Floor(7)));
    }

    #[test]
    fn heading_survives_door_cycle() {
        let mut e = car(5, 1000.0, 10);
        e.depart(Floor(2), Tick(0)).unwrap();
        e.open_doors(Floor(2), Tick(9)).unwrap();
        e.close_doors(Tick(9));
        e.request_pickup(Floor(1)).unwrap();
        e.request_pickup(Floor(3)).unwrap();
        assert_eq!(e.next_scan_target(), Some(Floor(1)));

        e.park(Tick(9));
        assert_eq!(e.heading(), None);
    }

    #[test]
    fn dropoff_counts_as_pending() {
        let mut passengers = table(&[passenger(1, 0, 4, 9, 70.0)]);
        let mut e = car(4, 1000.0, 10);
        e.board(PassengerId(1), &mut passengers, Tick(0)).unwrap();
        assert!(e.has_pending(Floor(9)));
        assert!(!e.has_pickup(Floor(9)));
        assert_eq!(e.next_scan_target(), Some(Floor(9)));
    }

    #[test]
    fn nothing_pending_means_no_target() {
        assert_eq!(car(5, 1000.0, 10).next_scan_target(), None);
    }

    #[test]
    fn opening_clears_pickup_for_that_floor() {
        let mut e = car(1, 1000.0, 10);
        e.request_pickup(Floor(3)).unwrap();
        e.open_doors(Floor(3), Tick(6)).unwrap();
        assert!(!e.has_pickup(Floor(3)));
    }

    #[test]
    fn reaches_without_redirect_only_beyond_target() {
        let mut e = car(1, 1000.0, 10);
        e.depart(Floor(6), Tick(0)).unwrap();
        assert!(e.reaches_without_redirect(Floor(6)));
        assert!(e.reaches_without_redirect(Floor(9)));
        assert!(!e.reaches_without_redirect(Floor(4)));
    }
}

// ── Elevator: statistics ──────────────────────────────────────────────────────

#[cfg(test)]
mod stats {
    use super::*;

    #[test]
    fn state_changes_split_idle_and_moving_time() {
        let mut e = car(1, 1000.0, 10);
        e.depart(Floor(3), Tick(2)).unwrap();
        e.open_doors(Floor(3), Tick(8)).unwrap();
        e.close_doors(Tick(8));
        e.finish(Tick(10));

        assert_eq!(e.stats().idle_ticks, 4);
        assert_eq!(e.stats().moving_ticks, 6);
        assert_eq!(e.stats().floors_passed, 2);
        assert_eq!(e.state(), ElevatorState::IdleClosed);
    }

    #[test]
    fn floors_passed_sums_every_leg() {
        let mut e = car(1, 1000.0, 10);
        e.depart(Floor(5), Tick(0)).unwrap();
        e.open_doors(Floor(5), Tick(12)).unwrap();
        e.close_doors(Tick(12));
        e.depart(Floor(2), Tick(12)).unwrap();
        e.open_doors(Floor(2), Tick(21)).unwrap();
        assert_eq!(e.stats().floors_passed, 7);
    }
}

// ── Dispatcher: suitability ───────────────────────────────────────────────────

#[cfg(test)]
mod suitability {
    use super::*;

    #[test]
    fn ties_go_to_lowest_id() {
        let s = system(10, &[1000.0, 1000.0, 1000.0], vec![]);
        assert_eq!(s.calculate_most_suitable_elevator(Floor(5), Tick(0)).unwrap(), Some(0));
    }

    #[test]
    fn idle_beats_moving_at_equal_distance() {
        let mut s = system(10, &[1000.0, 1000.0], vec![]);
        s.elevators[0].depart(Floor(10), Tick(0)).unwrap();
        assert_eq!(s.calculate_most_suitable_elevator(Floor(5), Tick(0)).unwrap(), Some(1));
    }

    #[test]
    fn idle_beats_nearer_moving() {
        let mut s = system(10, &[1000.0, 1000.0], vec![]);
        s.elevators[0].depart(Floor(10), Tick(0)).unwrap();
        // Car 1 is around floor 4 by now; car 2 is still idle at floor 1.
        assert_eq!(s.calculate_most_suitable_elevator(Floor(5), Tick(9)).unwrap(), Some(1));
    }

    #[test]
    fn nearest_moving_car_when_none_idle() {
        let mut s = system(10, &[1000.0, 1000.0], vec![]);
        s.elevators[0].depart(Floor(10), Tick(0)).unwrap();
        s.elevators[1].depart(Floor(10), Tick(6)).unwrap();
        // Car 1 ≈ floor 4, car 2 ≈ floor 2.
        assert_eq!(s.calculate_most_suitable_elevator(Floor(6), Tick(9)).unwrap(), Some(0));
    }

    #[test]
    fn car_moving_away_is_unsuitable() {
        let mut s = system(10, &[1000.0], vec![]);
        s.elevators[0].depart(Floor(10), Tick(0)).unwrap();
        assert_eq!(s.calculate_most_suitable_elevator(Floor(2), Tick(9)).unwrap(), None);
        assert_eq!(s.calculate_most_suitable_elevator(Floor(7), Tick(9)).unwrap(), Some(0));
    }

    #[test]
    fn car_without_room_for_anyone_waiting_is_skipped() {
        let mut s = system(10, &[50.0, 200.0], vec![passenger(1, 0, 3, 5, 80.0)]);
        s.arrive_passengers(Tick(0));
        assert_eq!(s.waiting_at(Floor(3)).collect::<Vec<_>>(), vec![PassengerId(1)]);
        assert_eq!(s.calculate_most_suitable_elevator(Floor(3), Tick(0)).unwrap(), Some(1));
    }

    #[test]
    fn out_of_range_floor_is_rejected() {
        let s = system(5, &[1000.0], vec![]);
        assert!(matches!(
            s.calculate_most_suitable_elevator(Floor(6), Tick(0)),
            Err(SimError::Contract(_))
        ));
    }
}

// ── Dispatcher: runs ──────────────────────────────────────────────────────────

#[cfg(test)]
mod runs {
    use super::*;

    #[test]
    fn single_rider_travels_at_loaded_speed() {
        let mut s = system(5, &[1000.0], vec![passenger(1, 0, 1, 4, 70.0)]);
        let summary = s.run().unwrap();

        let p = s.passengers().get(PassengerId(1)).unwrap();
        assert_eq!(p.boarding_tick(), Some(Tick(0)));
        assert_eq!(p.deboarding_tick(), Some(Tick(9)));
        assert_eq!(p.travel_ticks(), Some(9));
        assert!(!p.overloaded_once());

        assert_eq!(summary, RunSummary {
            final_tick:      Tick(10),
            run_ticks:       10,
            delivered:       1,
            overload_events: 0,
        });

        let stats = s.elevators()[0].stats();
        assert_eq!(stats.moving_ticks, 9);
        assert_eq!(stats.idle_ticks, 1);
        assert_eq!(stats.floors_passed, 3);
        assert_eq!(stats.total_cargo, 70.0);
        assert_eq!(stats.peak_load, 70.0);
    }

    #[test]
    fn empty_schedule_finishes_immediately() {
        let mut s = system(5, &[1000.0], vec![]);
        let summary = s.run().unwrap();
        assert_eq!(summary.final_tick, Tick(0));
        assert_eq!(summary.run_ticks, 0);
    }

    #[test]
    fn call_between_position_and_target_redirects() {
        let mut s = system(10, &[1000.0], redirect_scenario());
        s.run().unwrap();

        let a = s.passengers().get(PassengerId(1)).unwrap();
        let b = s.passengers().get(PassengerId(2)).unwrap();
        assert_eq!(b.boarding_tick(), Some(Tick(15)));
        assert_eq!(b.deboarding_tick(), Some(Tick(21)));
        assert_eq!(a.deboarding_tick(), Some(Tick(27)));
        assert!(a.has_met(PassengerId(2)) && b.has_met(PassengerId(1)));
        assert_eq!(s.elevators()[0].stats().floors_passed, 9);
    }

    #[test]
    fn call_defers_until_a_car_has_room() {
        let mut s = system(5, &[100.0], vec![
            passenger(1, 0, 1, 5, 80.0),
            passenger(2, 0, 2, 4, 50.0),
        ]);
        let summary = s.run().unwrap();

        let b = s.passengers().get(PassengerId(2)).unwrap();
        assert_eq!(b.boarding_tick(), Some(Tick(38)));
        assert_eq!(b.deboarding_tick(), Some(Tick(48)));
        assert!(!b.overloaded_once());
        assert!(!b.has_met(PassengerId(1)));
        assert_eq!(summary.overload_events, 0);
    }

    #[test]
    fn overloaded_passenger_waits_for_next_visit() {
        let mut s = system(5, &[100.0], vec![
            passenger(1, 0, 1, 3, 60.0),
            passenger(2, 0, 1, 3, 60.0),
        ]);
        let summary = s.run().unwrap();

        let a = s.passengers().get(PassengerId(1)).unwrap();
        let b = s.passengers().get(PassengerId(2)).unwrap();
        assert!(!a.overloaded_once());
        assert!(b.overloaded_once());
        assert_eq!(a.deboarding_tick(), Some(Tick(12)));
        assert_eq!(b.boarding_tick(), Some(Tick(19)));
        assert_eq!(b.deboarding_tick(), Some(Tick(31)));
        assert_eq!(summary.overload_events, 1);
        assert_eq!(s.elevators()[0].stats().overload_count, 1);
    }

    #[test]
    fn passengers_due_before_start_are_released_at_start() {
        let config = SimConfig { start_tick: Tick(5), ..SimConfig::default() };
        let mut s = SystemBuilder::new(
                building(5, &[1000.0]),
                Schedule::from_passengers([passenger(1, 0, 1, 2, 70.0)]),
            )
            .config(config)
            .build()
            .unwrap();
        let summary = s.run().unwrap();

        let p = s.passengers().get(PassengerId(1)).unwrap();
        assert_eq!(p.boarding_tick(), Some(Tick(5)));
        assert_eq!(p.deboarding_tick(), Some(Tick(8)));
        assert_eq!(summary.run_ticks, 4);
    }

    #[test]
    fn starts_from_configured_floor_with_open_doors() {
        let config = SimConfig {
            start_floor:   Floor(3),
            initial_state: ElevatorState::IdleOpen,
            ..SimConfig::default()
        };
        let mut s = SystemBuilder::new(
                building(5, &[1000.0]),
                Schedule::from_passengers([passenger(1, 0, 1, 4, 70.0)]),
            )
            .config(config)
            .build()
            .unwrap();
        assert_eq!(s.elevators()[0].state(), ElevatorState::IdleOpen);
        let summary = s.run().unwrap();

        // Empty car 3 → 1 takes 6 ticks, loaded 1 → 4 takes 9.
        let p = s.passengers().get(PassengerId(1)).unwrap();
        assert_eq!(p.boarding_tick(), Some(Tick(6)));
        assert_eq!(p.deboarding_tick(), Some(Tick(15)));
        assert_eq!(summary.final_tick, Tick(16));

        let stats = s.elevators()[0].stats();
        assert_eq!(stats.floors_passed, 5);
        assert_eq!(stats.moving_ticks, 15);
        assert_eq!(stats.idle_ticks, 1);
    }

    #[test]
    fn load_matches_riders_after_every_tick() {
        let mut s = system(10, &[150.0, 200.0], vec![
            passenger(1, 0, 1, 10, 100.0),
            passenger(2, 2, 4, 1, 90.0),
            passenger(3, 3, 4, 8, 60.0),
            passenger(4, 9, 6, 8, 50.0),
            passenger(5, 9, 6, 2, 120.0),
        ]);
        while !s.is_finished() {
            s.step().unwrap();
            for e in s.elevators() {
                let riders = s.passengers().total_weight(e.onboard());
                assert_eq!(e.current_load(), riders, "{} at {}", e.id(), s.clock.current_tick);
                assert!(e.current_load() <= e.max_load());
            }
        }
    }

    #[test]
    fn every_passenger_is_somewhere_exactly_once() {
        let mut s = system(8, &[300.0, 300.0], vec![
            passenger(1, 0, 1, 8, 80.0),
            passenger(2, 1, 8, 1, 80.0),
            passenger(3, 4, 3, 5, 80.0),
            passenger(4, 4, 5, 3, 80.0),
            passenger(5, 12, 2, 7, 80.0),
        ]);
        let total = s.passengers().len();
        while !s.is_finished() {
            s.step().unwrap();
            let unreleased = s.arrivals.len();
            let waiting: usize = s.waiting.iter().map(|q| q.len()).sum();
            let riding: usize = s.elevators().iter().map(|e| e.onboard().len()).sum();
            let delivered = s.passengers().delivered_count();
            assert_eq!(unreleased + waiting + riding + delivered, total);
            assert_eq!(total - delivered, s.remaining());
        }
    }

    #[test]
    fn trip_times_are_ordered() {
        let mut s = system(10, &[1000.0, 400.0], vec![
            passenger(1, 0, 1, 10, 100.0),
            passenger(2, 3, 7, 2, 90.0),
            passenger(3, 5, 2, 9, 60.0),
            passenger(4, 9, 6, 8, 50.0),
        ]);
        s.run().unwrap();
        for p in s.passengers().iter() {
            let boarded = p.boarding_tick().unwrap();
            let left = p.deboarding_tick().unwrap();
            assert!(p.appear_tick() <= boarded, "{}", p.id());
            assert!(boarded <= left, "{}", p.id());
        }
    }

    #[test]
    fn identical_inputs_give_identical_runs() {
        let inputs = vec![
            passenger(1, 0, 1, 10, 100.0),
            passenger(2, 3, 7, 2, 90.0),
            passenger(3, 5, 2, 9, 160.0),
            passenger(4, 9, 6, 8, 50.0),
            passenger(5, 9, 6, 1, 75.0),
        ];
        let mut first = system(10, &[200.0, 400.0], inputs.clone());
        let mut second = system(10, &[200.0, 400.0], inputs);
        assert_eq!(first.run().unwrap(), second.run().unwrap());

        let trips = |s: &ElevatorSystem| {
            s.passengers()
                .iter()
                .map(|p| (p.boarding_tick(), p.deboarding_tick(), p.met_passengers().clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(trips(&first), trips(&second));
        for (a, b) in first.elevators().iter().zip(second.elevators()) {
            assert_eq!(a.stats(), b.stats());
        }
    }
}

// ── SystemBuilder ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn places_every_car_at_start_floor() {
        let config = SimConfig { start_floor: Floor(3), ..SimConfig::default() };
        let s = SystemBuilder::new(building(6, &[400.0, 800.0]), Schedule::new())
            .config(config)
            .build()
            .unwrap();
        assert_eq!(s.elevators().len(), 2);
        assert_eq!(s.elevators()[1].id(), ElevatorId(2));
        assert_eq!(s.elevators()[1].max_load(), 800.0);
        assert!(s.elevators().iter().all(|e| e.current_floor() == Floor(3)));
    }

    #[test]
    fn start_floor_outside_building_errors() {
        for floor in [0, 7] {
            let config = SimConfig { start_floor: Floor(floor), ..SimConfig::default() };
            let result = SystemBuilder::new(building(6, &[400.0]), Schedule::new())
                .config(config)
                .build();
            assert!(matches!(result, Err(SimError::Contract(_))), "floor {floor}");
        }
    }

    #[test]
    fn moving_initial_state_errors() {
        for initial_state in [ElevatorState::MovingUp, ElevatorState::MovingDown] {
            let config = SimConfig { start_floor: Floor(3), initial_state, ..SimConfig::default() };
            let result = SystemBuilder::new(
                    building(5, &[1000.0]),
                    Schedule::from_passengers([passenger(1, 0, 1, 4, 70.0)]),
                )
                .config(config)
                .build();
            assert!(matches!(result, Err(SimError::Config(_))), "{initial_state}");
        }
    }

    #[test]
    fn passenger_floor_outside_building_errors() {
        let result = SystemBuilder::new(
                building(6, &[400.0]),
                Schedule::from_passengers([passenger(1, 0, 2, 9, 70.0)]),
            )
            .build();
        assert!(matches!(result, Err(SimError::Contract(_))));
    }

    #[test]
    fn same_floor_trip_errors() {
        let result = SystemBuilder::new(
                building(6, &[400.0]),
                Schedule::from_passengers([passenger(1, 0, 2, 2, 70.0)]),
            )
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn passenger_heavier_than_every_car_errors() {
        let result = SystemBuilder::new(
                building(6, &[100.0, 150.0]),
                Schedule::from_passengers([passenger(1, 0, 2, 4, 151.0)]),
            )
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        ticks:      usize,
        released:   Vec<PassengerId>,
        dispatches: Vec<(Tick, Floor, ElevatorId, DispatchKind)>,
        deferred:   Vec<(Tick, Floor)>,
        delivered:  Vec<(Tick, PassengerId)>,
        parked:     usize,
        ends:       usize,
    }

    impl SimObserver for Recorder {
        fn on_tick_start(&mut self, _t: Tick) { self.ticks += 1; }
        fn on_passenger_released(&mut self, _t: Tick, p: &Passenger) { self.released.push(p.id()); }
        fn on_call_dispatched(&mut self, t: Tick, f: Floor, e: ElevatorId, k: DispatchKind) {
            self.dispatches.push((t, f, e, k));
        }
        fn on_call_deferred(&mut self, t: Tick, f: Floor) { self.deferred.push((t, f)); }
        fn on_passenger_delivered(&mut self, t: Tick, p: PassengerId, _e: ElevatorId, _f: Floor) {
            self.delivered.push((t, p));
        }
        fn on_elevator_parked(&mut self, _t: Tick, _e: ElevatorId, _f: Floor) { self.parked += 1; }
        fn on_sim_end(&mut self, _s: &RunSummary) { self.ends += 1; }
    }

    fn recorded_run() -> Recorder {
        let mut s = SystemBuilder::new(
                building(10, &[1000.0]),
                Schedule::from_passengers(redirect_scenario()),
            )
            .observer(Recorder::default())
            .build()
            .unwrap();
        s.run().unwrap();
        s.into_observer()
    }

    #[test]
    fn reports_dispatch_decisions() {
        let r = recorded_run();
        assert_eq!(r.dispatches, vec![
            (Tick(0), Floor(1), ElevatorId(1), DispatchKind::Immediate),
            (Tick(9), Floor(6), ElevatorId(1), DispatchKind::Redirected { approx_floor: Floor(4) }),
        ]);
    }

    #[test]
    fn reports_deliveries_in_order() {
        let r = recorded_run();
        assert_eq!(r.released, vec![PassengerId(1), PassengerId(2)]);
        assert_eq!(r.delivered, vec![(Tick(21), PassengerId(2)), (Tick(27), PassengerId(1))]);
        assert_eq!(r.parked, 1);
    }

    #[test]
    fn deferral_is_reported_once_until_assigned() {
        // The car is full with passenger 1 until tick 28; floor 2 waits.
        let mut s = SystemBuilder::new(
                building(5, &[100.0]),
                Schedule::from_passengers([
                    passenger(1, 0, 1, 5, 80.0),
                    passenger(2, 0, 2, 4, 50.0),
                ]),
            )
            .observer(Recorder::default())
            .build()
            .unwrap();
        s.run().unwrap();
        let r = s.into_observer();
        assert_eq!(r.deferred, vec![(Tick(0), Floor(2))]);
        assert_eq!(
            r.dispatches.last(),
            Some(&(Tick(29), Floor(2), ElevatorId(1), DispatchKind::FromIdle))
        );
    }

    #[test]
    fn one_tick_start_per_step_and_one_end() {
        let r = recorded_run();
        assert_eq!(r.ticks, 28);
        assert_eq!(r.ends, 1);
    }
}
