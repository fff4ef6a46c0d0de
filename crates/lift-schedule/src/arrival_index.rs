//! `ArrivalIndex`: passengers keyed by the tick they appear on their floor.
//!
//! Built once at load time from each passenger's appearance tick.  Each tick
//! the dispatcher drains only the passengers due at that tick, so release
//! work is O(released) instead of O(population).  Entries are never
//! re-inserted once drained.
//!
//! Within one tick passengers keep their insertion (schedule file) order,
//! which becomes their order in the floor's waiting queue.

use std::collections::BTreeMap;

use lift_core::{PassengerId, Tick};

/// Multi-valued map from release tick → passengers released at that tick.
#[derive(Debug, Clone, Default)]
pub struct ArrivalIndex {
    inner: BTreeMap<Tick, Vec<PassengerId>>,
    /// Cached total passenger count for O(1) `len()`.
    total: usize,
}

impl ArrivalIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `passenger` to appear at `tick`.
    pub fn push(&mut self, tick: Tick, passenger: PassengerId) {
        self.inner.entry(tick).or_default().push(passenger);
        self.total += 1;
    }

    /// Remove and return all passengers released at exactly `tick`.
    ///
    /// Returns `None` if nobody appears at that tick (the common case).
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<PassengerId>> {
        let passengers = self.inner.remove(&tick)?;
        self.total -= passengers.len();
        Some(passengers)
    }

    /// Remove and return everyone due at or before `tick`, earliest first.
    ///
    /// Used when a run starts after some appearance ticks have already
    /// passed, so those passengers are released on the first tick instead of
    /// being stranded in the index.
    pub fn drain_through(&mut self, tick: Tick) -> Vec<PassengerId> {
        let later = self.inner.split_off(&tick.offset(1));
        let due = std::mem::replace(&mut self.inner, later);
        let released: Vec<PassengerId> = due.into_values().flatten().collect();
        self.total -= released.len();
        released
    }

    /// The earliest tick with at least one queued passenger, or `None`.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total number of passengers not yet released.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct future ticks with at least one release.
    pub fn tick_count(&self) -> usize {
        self.inner.len()
    }
}
