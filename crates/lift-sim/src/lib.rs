//! `lift-sim`: elevator state machine and dispatcher for the lift simulator.
//!
//! # Tick loop
//!
//! ```text
//! while passengers remain undelivered:
//!   ① Release  : passengers due this tick join their floor's FIFO queue.
//!   ② Dispatch : for each floor (ascending) with waiting passengers and no
//!                 call in flight: pick the most suitable car and
//!                   serve on the spot   (idle at that floor)
//!                   set off             (idle elsewhere)
//!                   keep going          (already heading past it)
//!                   redirect mid-leg    (floor lies before its target)
//!   ③ Arrivals : for each car (ascending) whose projected arrival passed:
//!                 open → alight → board (FIFO, skip overloads) → close →
//!                 next SCAN target or park.
//! then every car is forced to IdleClosed to settle its timing statistics.
//! ```
//!
//! Everything is single-threaded and processed in a fixed order, so the same
//! inputs always produce the same run.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_sim::SystemBuilder;
//!
//! let mut system = SystemBuilder::new(building, schedule).build()?;
//! let summary = system.run()?;
//! ```

pub mod builder;
pub mod elevator;
pub mod error;
pub mod observer;
pub mod system;

#[cfg(test)]
mod tests;

pub use builder::SystemBuilder;
pub use elevator::{Admission, Elevator, ElevatorStats};
pub use error::{SimError, SimResult};
pub use observer::{DispatchKind, NoopObserver, SimObserver};
pub use system::{ElevatorSystem, RunSummary};
