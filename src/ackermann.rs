//! Ackermann steering geometry checks.

use serde::{Deserialize, Serialize};

use crate::errors::AckermannError;

/// Geometry of a low-speed turn.
///
/// The defaults describe the reference car on its tightest rated turn.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AckermannInput {
    /// Wheelbase in metres.
    pub wheelbase: f64,
    /// Front track width in metres.
    pub track_width: f64,
    /// Turn radius measured to the vehicle centreline in metres.
    pub turn_radius: f64,
}

impl Default for AckermannInput {
    fn default() -> Self {
        Self {
            wheelbase: 1.525,
            track_width: 1.145,
            turn_radius: 2.8,
        }
    }
}

/// Ideal front wheel angles for a turn.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AckermannGeometry {
    /// Steer angle of the wheel on the inside of the turn in degrees.
    pub inner_angle_deg: f64,
    /// Steer angle of the wheel on the outside of the turn in degrees.
    pub outer_angle_deg: f64,
    /// Outer over inner angle as a percentage. 100 % is perfect Ackermann.
    pub ackermann_percentage: f64,
}

impl AckermannInput {
    /// Compute the ideal inner and outer wheel angles for this turn.
    ///
    /// # Errors
    ///
    /// Returns [`AckermannError::ZeroWheelbase`] when the wheelbase is
    /// exactly zero, which collapses both wheel angles to zero and leaves
    /// the percentage a zero over zero ratio.
    ///
    /// Returns [`AckermannError::DegenerateTurn`] when the turn radius is
    /// exactly plus or minus half the track width, which places the turn
    /// centre on a front wheel track line and leaves that wheel's angle
    /// undefined. Both are exact tests, not tolerances; nearby radii
    /// produce the steep angles the geometry calls for.
    pub fn evaluate(&self) -> Result<AckermannGeometry, AckermannError> {
        if self.wheelbase == 0.0 {
            return Err(AckermannError::ZeroWheelbase);
        }

        let half_track = self.track_width / 2.0;
        if self.turn_radius == half_track || self.turn_radius == -half_track {
            return Err(AckermannError::DegenerateTurn {
                turn_radius: self.turn_radius,
                half_track,
            });
        }

        let inner_angle_deg = (self.wheelbase / (self.turn_radius - half_track))
            .atan()
            .to_degrees();
        let outer_angle_deg = (self.wheelbase / (self.turn_radius + half_track))
            .atan()
            .to_degrees();
        let ackermann_percentage = outer_angle_deg / inner_angle_deg * 100.0;

        Ok(AckermannGeometry {
            inner_angle_deg,
            outer_angle_deg,
            ackermann_percentage,
        })
    }
}

/// Convenience helper evaluating the geometry for explicit dimensions.
///
/// # Examples
///
/// ```
/// use steerx::ackermann_geometry;
///
/// let geometry = ackermann_geometry(1.525, 1.145, 2.8).expect("regular turn");
/// assert!(geometry.inner_angle_deg > geometry.outer_angle_deg);
/// ```
///
/// # Errors
///
/// Returns the same errors as [`AckermannInput::evaluate`].
pub fn ackermann_geometry(
    wheelbase: f64,
    track_width: f64,
    turn_radius: f64,
) -> Result<AckermannGeometry, AckermannError> {
    AckermannInput {
        wheelbase,
        track_width,
        turn_radius,
    }
    .evaluate()
}
