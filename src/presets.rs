//! Named parameter sets for the vehicles this crate was written around.
//!
//! Each function returns a complete input record, so call sites can start
//! from a preset and override individual fields with struct update syntax.

use crate::ackermann::AckermannInput;
use crate::effort::{Scenario, SteeringEffortInput, SteeringParams, VehicleParams};
use crate::linkage::LinkageInput;

/// Second prototype revision: 376 kg, wide 35 mm scrub radius, quick
/// 4.25:1 steering. Identical to the `Default` impls.
#[must_use]
pub fn prototype_mk2() -> SteeringEffortInput {
    SteeringEffortInput::default()
}

/// First prototype revision: lighter car, 10 mm scrub radius, slower 8:1
/// steering from a smaller pinion and longer arm.
#[must_use]
pub fn prototype_mk1() -> SteeringEffortInput {
    SteeringEffortInput {
        vehicle: VehicleParams {
            total_mass: 330.0,
            scrub_radius: 0.01,
            tire_pressure_bar: 1.0,
            static_friction_coefficient: 1.2,
            ..VehicleParams::default()
        },
        steering: SteeringParams {
            pinion_radius: 0.025,
            steering_arm_length: 0.200,
            pinion_mass: 0.300,
            rack_mass: 0.600,
            ..SteeringParams::default()
        },
        scenario: Scenario {
            steer_angle_deg: 34.0,
            ..Scenario::default()
        },
    }
}

/// Rolling scenario for the force-based model. Identical to the `Default`
/// impl.
#[must_use]
pub fn linkage_rolling() -> LinkageInput {
    LinkageInput::default()
}

/// Parked scenario for the force-based model: static friction, the wide
/// scrub radius and the faster pinion.
#[must_use]
pub fn linkage_parked() -> LinkageInput {
    LinkageInput {
        friction_coefficient: 1.2,
        corner_mass: 94.0,
        scrub_radius: 0.035,
        pinion_radius: 0.04,
        ..LinkageInput::default()
    }
}

/// Reference turn geometry used for Ackermann checks. Identical to the
/// `Default` impl.
#[must_use]
pub fn ackermann_reference() -> AckermannInput {
    AckermannInput::default()
}
