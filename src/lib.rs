//! Velocity, distance and fuel after a fixed interval of constant acceleration and burn.
//!
//! The physics lives in the member crates; this crate wires them together so the
//! CLI and the tests share one entry point.

pub mod step;

pub use flight_config as config;
pub use flight_core as primitives;
pub use flight_export as export;
pub use flight_fuel as fuel;
pub use flight_kinematics as kinematics;

pub use flight_core::ErrorKind;
pub use step::{StepError, StepOutcome, compute, compute_all};

