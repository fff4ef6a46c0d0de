//! A loaded passenger schedule: the passenger table plus its arrival index.

use lift_core::PassengerId;

use crate::{ArrivalIndex, Passenger, PassengerTable};

/// Everything the dispatcher needs to know about the population of a run.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    pub passengers:    PassengerTable,
    pub arrivals:      ArrivalIndex,
    /// Ids that appeared more than once; only the first record was kept.
    pub duplicate_ids: Vec<PassengerId>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schedule from records in file order.
    pub fn from_passengers(passengers: impl IntoIterator<Item = Passenger>) -> Self {
        let mut schedule = Self::new();
        for p in passengers {
            schedule.push(p);
        }
        schedule
    }

    /// Add one record.  Returns `false` if the id was already present, in
    /// which case the record is discarded and the id noted in
    /// `duplicate_ids`.
    pub fn push(&mut self, passenger: Passenger) -> bool {
        let id = passenger.id();
        let tick = passenger.appear_tick();
        if self.passengers.insert(passenger) {
            self.arrivals.push(tick, id);
            true
        } else {
            self.duplicate_ids.push(id);
            false
        }
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }
}
