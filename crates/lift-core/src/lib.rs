//! `lift-core`: foundational types for the `lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and only `thiserror` (plus optional `serde`) from
//! the outside.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PassengerId`, `ElevatorId`, `Floor`                  |
//! | [`time`]        | `Tick`, `ClockTime`, `SimClock`, `SimConfig`          |
//! | [`motion`]      | `ElevatorState`, `Direction`                          |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod motion;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{ElevatorId, Floor, PassengerId};
pub use motion::{Direction, ElevatorState};
pub use time::{ClockTime, SimClock, SimConfig, Tick};
