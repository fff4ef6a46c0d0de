//! `lift-schedule`: passengers, arrival index, and input loading.
//!
//! # Crate layout
//!
//! | Module            | Contents                                              |
//! |-------------------|-------------------------------------------------------|
//! | [`passenger`]     | `Passenger`, `PassengerTable`                         |
//! | [`arrival_index`] | `ArrivalIndex` (`BTreeMap<Tick, Vec<PassengerId>>`)   |
//! | [`schedule`]      | `Schedule` (table + index + duplicate ids)            |
//! | [`building`]      | `BuildingConfig`                                      |
//! | [`loader`]        | building and schedule text loaders                    |
//! | [`error`]         | `ConfigError`, `ScheduleError` and result aliases     |

pub mod arrival_index;
pub mod building;
pub mod error;
pub mod loader;
pub mod passenger;
pub mod schedule;


pub use arrival_index::ArrivalIndex;
pub use building::BuildingConfig;
pub use error::{ConfigError, ConfigResult, ScheduleError, ScheduleResult};
pub use loader::{load_building_file, load_building_reader, load_schedule_file, load_schedule_reader};
pub use passenger::{Passenger, PassengerTable};
pub use schedule::Schedule;
