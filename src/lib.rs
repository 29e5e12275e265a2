#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod ackermann;
pub mod effort;
pub mod errors;
pub mod linkage;
pub mod presets;
pub mod report;

pub use ackermann::{ackermann_geometry, AckermannGeometry, AckermannInput};
pub use effort::{
    EffortBreakdown, JackingPairing, ResistingTorque, Scenario, SteeringEffortInput,
    SteeringParams, VehicleParams,
};
pub use errors::{AckermannError, EffortError, LinkageError};
pub use linkage::{LinkageForces, LinkageInput};

/// Standard gravitational acceleration in metres per second squared.
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Pascals per bar, for converting tire pressures to SI before use.
pub const PASCALS_PER_BAR: f64 = 100_000.0;
