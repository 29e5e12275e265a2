//! Error types produced by the steering calculators.

use thiserror::Error;

/// Error returned when the moment-based effort model cannot be evaluated.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum EffortError {
    /// Returned when the pinion radius is zero, leaving the steering ratio
    /// undefined.
    #[error("pinion radius must be nonzero to define a steering ratio")]
    ZeroPinionRadius,
    /// Returned when the stationary contact patch estimate would divide by a
    /// nonpositive tire pressure.
    #[error("tire pressure must be positive (received {0} bar)")]
    NonPositiveTirePressure(f64),
}

/// Error returned when the force-based linkage chain cannot be evaluated.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum LinkageError {
    /// Returned when the tie rod length is zero, leaving the tie rod force
    /// undefined.
    #[error("tie rod length must be nonzero to resolve the tie rod force")]
    ZeroTieRodLength,
    /// Returned when the steering wheel diameter is zero, leaving the rim
    /// force undefined.
    #[error("steering wheel diameter must be nonzero to resolve the rim force")]
    ZeroSteeringWheelDiameter,
}

/// Error returned when a requested turn has no defined wheel angles.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum AckermannError {
    /// Returned when the wheelbase is zero, which collapses both wheel
    /// angles to zero and leaves the percentage a zero over zero ratio.
    #[error("wheelbase must be nonzero to define the wheel angles")]
    ZeroWheelbase,
    /// Returned when the turn centre falls exactly on a front wheel track
    /// line, so one wheel would have to point straight at it.
    #[error("turn centre lies on a front wheel track line (turn radius {turn_radius} m, half track {half_track} m)")]
    DegenerateTurn {
        /// Requested turn radius in metres.
        turn_radius: f64,
        /// Half the front track width in metres.
        half_track: f64,
    },
}
