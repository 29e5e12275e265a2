//! Human-readable reports for the calculator outputs.

use std::fmt::Write;

use crate::ackermann::AckermannGeometry;
use crate::effort::{EffortBreakdown, ResistingTorque};
use crate::linkage::LinkageForces;

/// Render the moment-based effort breakdown the way it is checked by hand:
/// header, analysed angle, per-wheel moment decomposition, then the steering
/// wheel efforts with and without internal friction.
#[must_use]
pub fn render_effort(breakdown: &EffortBreakdown) -> String {
    let mut output = String::new();
    let rule = "-".repeat(70);

    // The scenario label comes from the branch that actually ran, not from
    // whatever the input claimed.
    let scenario = match breakdown.resisting_torque {
        ResistingTorque::Scrub { .. } => "Stationary Car",
        ResistingTorque::SelfAligning { .. } => "Moving Car",
    };

    writeln!(
        &mut output,
        "--- STEERING EFFORT ANALYSIS (Scenario: {scenario}) ---"
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Analyzed Steer Angle: {:.1}°",
        breakdown.steer_angle_deg
    )
    .expect("writing to string cannot fail");
    writeln!(&mut output, "{rule}").expect("writing to string cannot fail");

    writeln!(&mut output, "Decomposition of Moments (per wheel):")
        .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "  - Moment of Inertia (Resistive): {:.4} kg x m²",
        breakdown.effective_inertia
    )
    .expect("writing to string cannot fail");
    match breakdown.resisting_torque {
        ResistingTorque::Scrub { torque, .. } => {
            writeln!(&mut output, "  - Scrub Torque (Resistive): {torque:.2} Nm")
                .expect("writing to string cannot fail");
        }
        ResistingTorque::SelfAligning { torque, .. } => {
            writeln!(
                &mut output,
                "  - Self-Aligning Torque (Restoring): {torque:.2} Nm"
            )
            .expect("writing to string cannot fail");
        }
    }
    writeln!(
        &mut output,
        "  - Jacking Moment (Restoring): {:.2} Nm",
        breakdown.jacking_moment
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "  - RESULTANT MOMENT to be overcome at the kingpin: {:.2} Nm",
        breakdown.kingpin_moment
    )
    .expect("writing to string cannot fail");
    writeln!(&mut output, "{rule}").expect("writing to string cannot fail");

    writeln!(&mut output, "Final Result ({scenario}):").expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "  - Steering Wheel Effort (without internal friction): {:.2} Nm",
        breakdown.effort_without_friction
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "  - Total Steering Wheel Effort (with internal friction): {:.2} Nm",
        breakdown.total_effort
    )
    .expect("writing to string cannot fail");
    writeln!(&mut output, "{rule}").expect("writing to string cannot fail");

    output
}

/// Render the force-based linkage chain line by line, contact patch first.
#[must_use]
pub fn render_linkage(forces: &LinkageForces) -> String {
    let mut output = String::new();

    writeln!(&mut output, "--- Steering Linkage Forces ---")
        .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Friction force (FF): {:.2} N",
        forces.friction_force
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Kingpin torque (TFF): {:.2} Nm",
        forces.kingpin_torque
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Force in one tie rod: {:.2} N",
        forces.tie_rod_force
    )
    .expect("writing to string cannot fail");
    writeln!(&mut output, "Total rack force: {:.2} N", forces.rack_force)
        .expect("writing to string cannot fail");
    writeln!(&mut output, "Pinion torque: {:.2} Nm", forces.pinion_torque)
        .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Force to be applied at the steering wheel: {:.2} N",
        forces.rim_force
    )
    .expect("writing to string cannot fail");

    output
}

/// Render the Ackermann geometry check.
#[must_use]
pub fn render_ackermann(geometry: &AckermannGeometry) -> String {
    let mut output = String::new();

    writeln!(&mut output, "--- Ackermann Geometry ---").expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Inner wheel steer angle (δ_in): {:.3}°",
        geometry.inner_angle_deg
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Outer wheel steer angle (δ_out): {:.3}°",
        geometry.outer_angle_deg
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Ackermann percentage: {:.2}%",
        geometry.ackermann_percentage
    )
    .expect("writing to string cannot fail");

    output
}
