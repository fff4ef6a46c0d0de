//! `lift-cli`: the `lift` binary's argument handling, run pipeline and
//! tracing log sink.
//!
//! ```text
//! lift <elevators-config> <passengers-schedule> <passengers-report> <elevators-report>
//! ```
//!
//! Set `RUST_LOG=debug` to also see calls that found no suitable elevator.

pub mod args;
pub mod log;
pub mod pipeline;


pub use args::{CliArgs, ReportFormat, USAGE};
pub use log::TracingObserver;
pub use pipeline::run;
