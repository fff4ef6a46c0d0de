//! Passenger records and the owning passenger table.
//!
//! A [`Passenger`] pairs an immutable trip request (who, when, from where,
//! to where, how heavy) with the trip progress the dispatcher records as the
//! run unfolds.  [`PassengerTable`] is the single owner of every record;
//! floor queues, elevator cars and the arrival index only ever hold
//! [`PassengerId`]s.

use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};

use lift_core::{Floor, PassengerId, Tick};

// ── Passenger ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    id:             PassengerId,
    appear_tick:    Tick,
    boarding_floor: Floor,
    target_floor:   Floor,
    weight:         f64,

    boarding_tick:   Option<Tick>,
    deboarding_tick: Option<Tick>,
    overloaded_once: bool,
    met:             BTreeSet<PassengerId>,
}

impl Passenger {
    pub fn new(
        id:             PassengerId,
        appear_tick:    Tick,
        boarding_floor: Floor,
        target_floor:   Floor,
        weight:         f64,
    ) -> Self {
        Self {
            id,
            appear_tick,
            boarding_floor,
            target_floor,
            weight,
            boarding_tick:   None,
            deboarding_tick: None,
            overloaded_once: false,
            met:             BTreeSet::new(),
        }
    }

    #[inline] pub fn id(&self) -> PassengerId { self.id }
    #[inline] pub fn appear_tick(&self) -> Tick { self.appear_tick }
    #[inline] pub fn boarding_floor(&self) -> Floor { self.boarding_floor }
    #[inline] pub fn target_floor(&self) -> Floor { self.target_floor }
    #[inline] pub fn weight(&self) -> f64 { self.weight }
    #[inline] pub fn boarding_tick(&self) -> Option<Tick> { self.boarding_tick }
    #[inline] pub fn deboarding_tick(&self) -> Option<Tick> { self.deboarding_tick }
    #[inline] pub fn overloaded_once(&self) -> bool { self.overloaded_once }

    /// Passengers this one shared a car with, in ascending id order.
    pub fn met_passengers(&self) -> &BTreeSet<PassengerId> {
        &self.met
    }

    pub fn has_met(&self, other: PassengerId) -> bool {
        self.met.contains(&other)
    }

    /// `true` once the passenger has left the car at its target floor.
    #[inline]
    pub fn is_delivered(&self) -> bool {
        self.deboarding_tick.is_some()
    }

    /// Ticks spent inside a car, or `None` until delivered.
    pub fn travel_ticks(&self) -> Option<u64> {
        Some(self.deboarding_tick?.since(self.boarding_tick?))
    }

    pub fn record_boarding(&mut self, tick: Tick) {
        self.boarding_tick = Some(tick);
    }

    pub fn record_deboarding(&mut self, tick: Tick) {
        self.deboarding_tick = Some(tick);
    }

    /// A car refused this passenger for lack of capacity.
    pub fn mark_overloaded(&mut self) {
        self.overloaded_once = true;
    }
}

// ── PassengerTable ────────────────────────────────────────────────────────────

/// Owner of every passenger in a run, keyed (and iterated) by id.
#[derive(Debug, Clone, Default)]
pub struct PassengerTable {
    inner: BTreeMap<PassengerId, Passenger>,
}

impl PassengerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `passenger` unless its id is already present.
    ///
    /// Returns `false` (and drops `passenger`) for a duplicate id; the first
    /// record wins.
    pub fn insert(&mut self, passenger: Passenger) -> bool {
        match self.inner.entry(passenger.id) {
            btree_map::Entry::Occupied(_) => false,
            btree_map::Entry::Vacant(slot) => {
                slot.insert(passenger);
                true
            }
        }
    }

    pub fn get(&self, id: PassengerId) -> Option<&Passenger> {
        self.inner.get(&id)
    }

    pub fn get_mut(&mut self, id: PassengerId) -> Option<&mut Passenger> {
        self.inner.get_mut(&id)
    }

    /// Record that `a` and `b` rode together.  Both sides learn of it.
    pub fn record_meeting(&mut self, a: PassengerId, b: PassengerId) {
        if a == b {
            return;
        }
        if let Some(p) = self.inner.get_mut(&a) {
            p.met.insert(b);
        }
        if let Some(p) = self.inner.get_mut(&b) {
            p.met.insert(a);
        }
    }

    /// Sum of weights of `ids`; unknown ids contribute nothing.
    pub fn total_weight<'a>(&self, ids: impl IntoIterator<Item = &'a PassengerId>) -> f64 {
        ids.into_iter()
            .filter_map(|id| self.inner.get(id))
            .map(Passenger::weight)
            .sum()
    }

    /// Iterate passengers in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Passenger> {
        self.inner.values()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn delivered_count(&self) -> usize {
        self.inner.values().filter(|p| p.is_delivered()).count()
    }
}
