//! Moment-based steering effort model.

use serde::{Deserialize, Serialize};

use crate::errors::EffortError;
use crate::{PASCALS_PER_BAR, STANDARD_GRAVITY};

/// Mass, suspension and tire parameters of the vehicle under analysis.
///
/// The defaults describe the second prototype revision, the heavier car with
/// the wide scrub radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleParams {
    /// Total vehicle mass including the driver in kilograms.
    pub total_mass: f64,
    /// Fraction of the total mass carried by the front axle.
    pub front_weight_fraction: f64,
    /// Caster angle in degrees.
    pub caster_angle_deg: f64,
    /// Kingpin inclination angle in degrees.
    pub kingpin_inclination_deg: f64,
    /// Dynamic rolling radius of the front wheels in metres.
    pub dynamic_wheel_radius: f64,
    /// Scrub radius in metres.
    pub scrub_radius: f64,
    /// Front tire pressure in bar.
    pub tire_pressure_bar: f64,
    /// Pneumatic trail of the front tires in metres.
    pub pneumatic_trail: f64,
    /// Static friction coefficient between tire and ground. Supplied, not
    /// derived; pick the value for the surface being analysed.
    pub static_friction_coefficient: f64,
}

impl Default for VehicleParams {
    fn default() -> Self {
        Self {
            total_mass: 376.0,
            front_weight_fraction: 0.5,
            caster_angle_deg: 4.0,
            kingpin_inclination_deg: 10.0,
            dynamic_wheel_radius: 0.23,
            scrub_radius: 0.035,
            tire_pressure_bar: 0.83,
            pneumatic_trail: 0.025,
            static_friction_coefficient: 1.4,
        }
    }
}

/// Rack and pinion hardware parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringParams {
    /// Pinion pitch radius in metres.
    pub pinion_radius: f64,
    /// Steering arm length in metres.
    pub steering_arm_length: f64,
    /// Pinion mass in kilograms. Informational; the pinion inertia below
    /// comes from CAD and already accounts for the mass distribution.
    pub pinion_mass: f64,
    /// Pinion moment of inertia about its rotation axis in kg·m².
    pub pinion_moment_of_inertia: f64,
    /// Rack mass in kilograms, treated as concentrated at the pitch radius.
    pub rack_mass: f64,
    /// Internal mechanical friction of the steering system in newton metres.
    pub internal_friction: f64,
}

impl Default for SteeringParams {
    fn default() -> Self {
        Self {
            pinion_radius: 0.04,
            steering_arm_length: 0.170,
            pinion_mass: 0.851,
            pinion_moment_of_inertia: 0.000_629,
            rack_mass: 0.587,
            internal_friction: 4.0,
        }
    }
}

/// The maneuver the effort is evaluated for.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Lateral acceleration in metres per second squared. Exactly zero
    /// analyses the stationary car; any other value, however small and of
    /// either sign, analyses the moving car.
    pub lateral_acceleration: f64,
    /// Average steer angle of the front wheels in degrees.
    pub steer_angle_deg: f64,
    /// Pairing of the steering-axis tangents with the ground offsets in the
    /// jacking term.
    pub jacking_pairing: JackingPairing,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            lateral_acceleration: 0.0,
            steer_angle_deg: 38.77,
            jacking_pairing: JackingPairing::default(),
        }
    }
}

/// Pairing of the steering-axis tangents with the ground-plane offsets in
/// the jacking moment lever arm.
///
/// Hand derivations of the jacking moment for this suspension disagree on
/// which offset each tangent multiplies, and some even swap the pairing
/// between the stationary and moving cases. Both forms are kept selectable
/// until a vehicle-dynamics review settles the question.
/// [`JackingPairing::KingpinOnScrub`] is the default because it follows the
/// axis geometry: kingpin inclination tilts the steering axis across the car,
/// over the lateral scrub offset, while caster tilts it fore-aft, over the
/// longitudinal trail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JackingPairing {
    /// `scrub_radius · tan(KPI) + mechanical_trail · tan(caster)`.
    #[default]
    KingpinOnScrub,
    /// `scrub_radius · tan(caster) + mechanical_trail · tan(KPI)`.
    CasterOnScrub,
}

/// Complete input record for the moment-based model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringEffortInput {
    /// Vehicle and suspension parameters.
    pub vehicle: VehicleParams,
    /// Steering hardware parameters.
    pub steering: SteeringParams,
    /// Maneuver under analysis.
    pub scenario: Scenario,
}

/// The torque resisting rotation about the kingpin axis, specific to the
/// analysed branch.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ResistingTorque {
    /// Contact patch scrub while the car is stationary.
    Scrub {
        /// Estimated contact patch radius in metres.
        contact_patch_radius: f64,
        /// Scrub torque per wheel in newton metres.
        torque: f64,
    },
    /// Tire self-aligning moment while the car is moving.
    SelfAligning {
        /// Lateral force per front wheel in newtons.
        lateral_force_per_wheel: f64,
        /// Mechanical plus pneumatic trail in metres.
        total_ground_trail: f64,
        /// Self-aligning torque per wheel in newton metres.
        torque: f64,
    },
}

impl ResistingTorque {
    /// Torque magnitude in newton metres, whichever branch produced it.
    #[must_use]
    pub fn torque(&self) -> f64 {
        match *self {
            ResistingTorque::Scrub { torque, .. }
            | ResistingTorque::SelfAligning { torque, .. } => torque,
        }
    }
}

/// Every quantity reported by the moment-based model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffortBreakdown {
    /// Effective rotational inertia of the rack and pinion in kg·m².
    /// Reported for reference; nothing downstream consumes it.
    pub effective_inertia: f64,
    /// Vertical load per front wheel in newtons.
    pub vertical_load_per_wheel: f64,
    /// Mechanical trail in metres.
    pub mechanical_trail: f64,
    /// Overall steering ratio, arm length over pinion radius.
    pub steering_ratio: f64,
    /// Branch-specific torque resisting rotation, per wheel.
    pub resisting_torque: ResistingTorque,
    /// Jacking moment per wheel in newton metres.
    pub jacking_moment: f64,
    /// Total moment per wheel about the kingpin axis in newton metres.
    pub kingpin_moment: f64,
    /// Steering wheel torque before internal friction in newton metres.
    pub effort_without_friction: f64,
    /// Steering wheel torque including internal friction in newton metres.
    pub total_effort: f64,
    /// Steer angle the effort was evaluated at, in degrees.
    pub steer_angle_deg: f64,
}

impl SteeringEffortInput {
    /// Evaluate the steering wheel effort for this input.
    ///
    /// # Examples
    ///
    /// ```
    /// use steerx::SteeringEffortInput;
    ///
    /// let breakdown = SteeringEffortInput::default()
    ///     .evaluate()
    ///     .expect("default parameters are valid");
    /// assert!(breakdown.total_effort > breakdown.effort_without_friction);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`EffortError::ZeroPinionRadius`] when the pinion radius is
    /// exactly zero, and [`EffortError::NonPositiveTirePressure`] when the
    /// stationary contact patch estimate would divide by a nonpositive
    /// pressure. The moving branch never consults the tire pressure, so a
    /// bad pressure only fails stationary evaluations.
    pub fn evaluate(&self) -> Result<EffortBreakdown, EffortError> {
        let vehicle = &self.vehicle;
        let steering = &self.steering;
        let scenario = &self.scenario;

        let effective_inertia = steering.rack_mass * steering.pinion_radius.powi(2)
            + steering.pinion_moment_of_inertia;

        let front_axle_mass = vehicle.total_mass * vehicle.front_weight_fraction;
        let vertical_load_per_wheel = front_axle_mass * STANDARD_GRAVITY / 2.0;

        // Degrees to radians exactly once, before any trigonometry.
        let caster = vehicle.caster_angle_deg.to_radians();
        let kpi = vehicle.kingpin_inclination_deg.to_radians();
        let steer = scenario.steer_angle_deg.to_radians();

        let mechanical_trail = vehicle.dynamic_wheel_radius * caster.tan();

        if steering.pinion_radius == 0.0 {
            return Err(EffortError::ZeroPinionRadius);
        }
        let steering_ratio = steering.steering_arm_length / steering.pinion_radius;

        // Exact comparison: zero means the parked car, any other value means
        // the tires are generating lateral force.
        let resisting_torque = if scenario.lateral_acceleration == 0.0 {
            if vehicle.tire_pressure_bar <= 0.0 {
                return Err(EffortError::NonPositiveTirePressure(
                    vehicle.tire_pressure_bar,
                ));
            }
            let contact_patch_area =
                vertical_load_per_wheel / (vehicle.tire_pressure_bar * PASCALS_PER_BAR);
            let contact_patch_radius = (contact_patch_area / std::f64::consts::PI).sqrt();
            let torque = (2.0 / 3.0)
                * vehicle.static_friction_coefficient
                * vertical_load_per_wheel
                * contact_patch_radius;
            ResistingTorque::Scrub {
                contact_patch_radius,
                torque,
            }
        } else {
            let lateral_force_per_wheel = front_axle_mass * scenario.lateral_acceleration / 2.0;
            let total_ground_trail = mechanical_trail + vehicle.pneumatic_trail;
            let torque = lateral_force_per_wheel * total_ground_trail;
            ResistingTorque::SelfAligning {
                lateral_force_per_wheel,
                total_ground_trail,
                torque,
            }
        };

        let jacking_lever = match scenario.jacking_pairing {
            JackingPairing::KingpinOnScrub => {
                vehicle.scrub_radius * kpi.tan() + mechanical_trail * caster.tan()
            }
            JackingPairing::CasterOnScrub => {
                vehicle.scrub_radius * caster.tan() + mechanical_trail * kpi.tan()
            }
        };
        let jacking_moment = vertical_load_per_wheel * jacking_lever * steer.sin();

        // Both front wheels load the rack; the ratio scales the sum down to
        // the steering wheel.
        let kingpin_moment = resisting_torque.torque() + jacking_moment;
        let effort_without_friction = kingpin_moment * 2.0 / steering_ratio;
        let total_effort = effort_without_friction + steering.internal_friction;

        Ok(EffortBreakdown {
            effective_inertia,
            vertical_load_per_wheel,
            mechanical_trail,
            steering_ratio,
            resisting_torque,
            jacking_moment,
            kingpin_moment,
            effort_without_friction,
            total_effort,
            steer_angle_deg: scenario.steer_angle_deg,
        })
    }
}
