//! Force-based steering effort model.
//!
//! A simplified alternative to [`crate::effort`]: a single contact patch
//! friction force is propagated link by link through the mechanism, and the
//! answer is the force at the steering wheel rim in newtons rather than a
//! torque in newton metres.

use serde::{Deserialize, Serialize};

use crate::errors::LinkageError;
use crate::STANDARD_GRAVITY;

/// Input record for the force-based model.
///
/// The defaults describe the rolling scenario on the reference car.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkageInput {
    /// Friction coefficient between tire and ground.
    pub friction_coefficient: f64,
    /// Mass carried by one front tire in kilograms.
    pub corner_mass: f64,
    /// Scrub radius in metres.
    pub scrub_radius: f64,
    /// Tie rod length in metres.
    pub tie_rod_length: f64,
    /// Pinion pitch radius in metres.
    pub pinion_radius: f64,
    /// Steering wheel diameter in metres.
    pub steering_wheel_diameter: f64,
}

impl Default for LinkageInput {
    fn default() -> Self {
        Self {
            friction_coefficient: 0.8,
            corner_mass: 93.1,
            scrub_radius: 0.010,
            tie_rod_length: 0.170,
            pinion_radius: 0.025,
            steering_wheel_diameter: 0.250,
        }
    }
}

/// Forces and torques along the linkage, one field per link.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkageForces {
    /// Friction force at the contact patch in newtons.
    pub friction_force: f64,
    /// Torque about the kingpin produced by the friction force in newton
    /// metres.
    pub kingpin_torque: f64,
    /// Force in one tie rod in newtons.
    pub tie_rod_force: f64,
    /// Total force on the rack, both wheels acting together, in newtons.
    pub rack_force: f64,
    /// Torque on the pinion in newton metres.
    pub pinion_torque: f64,
    /// Force the driver applies at the steering wheel rim in newtons.
    pub rim_force: f64,
}

impl LinkageInput {
    /// Propagate the contact patch friction force through the linkage.
    ///
    /// Each value is an exact algebraic function of the previous one, so the
    /// whole chain is reported rather than just the final rim force.
    ///
    /// # Examples
    ///
    /// ```
    /// use steerx::LinkageInput;
    ///
    /// let forces = LinkageInput::default()
    ///     .evaluate()
    ///     .expect("default parameters are valid");
    /// assert_eq!(forces.rack_force, 2.0 * forces.tie_rod_force);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`LinkageError::ZeroTieRodLength`] or
    /// [`LinkageError::ZeroSteeringWheelDiameter`] when the respective lever
    /// arm is exactly zero and its division is undefined.
    pub fn evaluate(&self) -> Result<LinkageForces, LinkageError> {
        let friction_force = self.friction_coefficient * STANDARD_GRAVITY * self.corner_mass;
        let kingpin_torque = self.scrub_radius * friction_force;

        if self.tie_rod_length == 0.0 {
            return Err(LinkageError::ZeroTieRodLength);
        }
        let tie_rod_force = kingpin_torque / self.tie_rod_length;

        // The rack reacts both tie rods at once.
        let rack_force = 2.0 * tie_rod_force;
        let pinion_torque = self.pinion_radius * rack_force;

        if self.steering_wheel_diameter == 0.0 {
            return Err(LinkageError::ZeroSteeringWheelDiameter);
        }
        let rim_force = pinion_torque / (self.steering_wheel_diameter / 2.0);

        Ok(LinkageForces {
            friction_force,
            kingpin_torque,
            tie_rod_force,
            rack_force,
            pinion_torque,
            rim_force,
        })
    }
}
