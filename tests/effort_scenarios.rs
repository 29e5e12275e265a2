#![warn(clippy::pedantic)]

use approx::assert_relative_eq;
use steerx::{presets, JackingPairing, ResistingTorque, SteeringEffortInput};

#[test]
fn stationary_mk2_matches_hand_calculation() {
    let breakdown = presets::prototype_mk2()
        .evaluate()
        .expect("mk2 parameters are valid");

    // 188 kg on the front axle puts 922.14 N on each wheel; at 0.83 bar that
    // load flattens a patch of roughly 59 mm radius.
    assert_relative_eq!(breakdown.vertical_load_per_wheel, 922.14, max_relative = 1.0e-12);
    assert_relative_eq!(
        breakdown.mechanical_trail,
        0.016083166747,
        max_relative = 1.0e-9
    );
    assert_relative_eq!(breakdown.steering_ratio, 4.25, max_relative = 1.0e-12);
    assert_relative_eq!(breakdown.effective_inertia, 0.0015682, max_relative = 1.0e-9);

    match breakdown.resisting_torque {
        ResistingTorque::Scrub {
            contact_patch_radius,
            torque,
        } => {
            assert_relative_eq!(contact_patch_radius, 0.0594681527045, max_relative = 1.0e-9);
            assert_relative_eq!(torque, 51.1820981793, max_relative = 1.0e-9);
        }
        ResistingTorque::SelfAligning { .. } => panic!("stationary analysis expected"),
    }

    assert_relative_eq!(breakdown.jacking_moment, 4.21305409032, max_relative = 1.0e-9);
    assert_relative_eq!(breakdown.kingpin_moment, 55.3951522696, max_relative = 1.0e-9);
    assert_relative_eq!(
        breakdown.effort_without_friction,
        26.0683069504,
        max_relative = 1.0e-9
    );
    assert_relative_eq!(breakdown.total_effort, 30.0683069504, max_relative = 1.0e-9);
    assert_relative_eq!(breakdown.steer_angle_deg, 38.77, max_relative = 1.0e-12);
}

#[test]
fn stationary_mk2_with_the_swapped_pairing() {
    let mut input = presets::prototype_mk2();
    input.scenario.jacking_pairing = JackingPairing::CasterOnScrub;
    let breakdown = input.evaluate().expect("mk2 parameters are valid");

    assert_relative_eq!(breakdown.jacking_moment, 3.05080913374, max_relative = 1.0e-9);
    assert_relative_eq!(breakdown.total_effort, 29.5213681473, max_relative = 1.0e-9);
}

#[test]
fn moving_mk2_matches_hand_calculation() {
    let mut input = presets::prototype_mk2();
    input.scenario.lateral_acceleration = 8.829;
    let breakdown = input.evaluate().expect("mk2 parameters are valid");

    match breakdown.resisting_torque {
        ResistingTorque::SelfAligning {
            lateral_force_per_wheel,
            total_ground_trail,
            torque,
        } => {
            assert_relative_eq!(lateral_force_per_wheel, 829.926, max_relative = 1.0e-12);
            assert_relative_eq!(total_ground_trail, 0.041083166747, max_relative = 1.0e-9);
            assert_relative_eq!(torque, 34.0959882457, max_relative = 1.0e-9);
        }
        ResistingTorque::Scrub { .. } => panic!("moving analysis expected"),
    }

    // The jacking moment still uses the static wheel load.
    assert_relative_eq!(breakdown.jacking_moment, 4.21305409032, max_relative = 1.0e-9);
    assert_relative_eq!(
        breakdown.effort_without_friction,
        18.0277846287,
        max_relative = 1.0e-9
    );
    assert_relative_eq!(breakdown.total_effort, 22.0277846287, max_relative = 1.0e-9);
}

#[test]
fn stationary_mk1_with_caster_on_scrub_pairing() {
    let mut input = presets::prototype_mk1();
    input.scenario.jacking_pairing = JackingPairing::CasterOnScrub;
    let breakdown = input.evaluate().expect("mk1 parameters are valid");

    assert_relative_eq!(breakdown.vertical_load_per_wheel, 809.325, max_relative = 1.0e-12);
    assert_relative_eq!(breakdown.steering_ratio, 8.0, max_relative = 1.0e-12);
    assert_relative_eq!(
        breakdown.resisting_torque.torque(),
        32.8624156617,
        max_relative = 1.0e-9
    );
    assert_relative_eq!(breakdown.jacking_moment, 1.59990507665, max_relative = 1.0e-9);
    assert_relative_eq!(
        breakdown.effort_without_friction,
        8.61558018458,
        max_relative = 1.0e-9
    );
    assert_relative_eq!(breakdown.total_effort, 12.6155801846, max_relative = 1.0e-9);
}

#[test]
fn effort_follows_the_kingpin_moment_balance() {
    let mut input = presets::prototype_mk2();
    input.vehicle.total_mass = 400.0;
    input.scenario.steer_angle_deg = 20.0;
    let breakdown = input.evaluate().expect("valid input");

    // Recompute the stationary balance from the raw parameters.
    let load = 400.0 * 0.5 * 9.81 / 2.0;
    let caster = 4.0_f64.to_radians();
    let kpi = 10.0_f64.to_radians();
    let trail = 0.23 * caster.tan();
    let patch = (load / (0.83 * 100_000.0 * std::f64::consts::PI)).sqrt();
    let scrub_torque = 2.0 / 3.0 * 1.4 * load * patch;
    let jacking =
        load * (0.035 * kpi.tan() + trail * caster.tan()) * 20.0_f64.to_radians().sin();
    let expected = (scrub_torque + jacking) * 2.0 / 4.25 + 4.0;

    assert_relative_eq!(breakdown.total_effort, expected, max_relative = 1.0e-12);
}

#[test]
fn moving_branch_ignores_contact_patch_inputs() {
    let mut input = presets::prototype_mk2();
    input.scenario.lateral_acceleration = 8.829;
    let reference = input.evaluate().expect("valid input");

    input.vehicle.tire_pressure_bar = 2.5;
    input.vehicle.static_friction_coefficient = 0.1;
    let altered = input.evaluate().expect("valid input");

    assert_eq!(reference, altered);
}

#[test]
fn breakdown_serializes_with_the_branch_tag() {
    let breakdown = presets::prototype_mk2()
        .evaluate()
        .expect("valid input");
    let json = serde_json::to_string(&breakdown).expect("breakdown serializes");
    assert!(json.contains("\"Scrub\""));
    assert!(json.contains("\"contact_patch_radius\""));
}

#[test]
fn partial_toml_keeps_unspecified_defaults() {
    let input: SteeringEffortInput = toml::from_str(
        r#"
        [vehicle]
        total_mass = 400.0

        [scenario]
        lateral_acceleration = 8.829
        "#,
    )
    .expect("partial parameter file deserializes");

    assert_eq!(input.vehicle.total_mass, 400.0);
    assert_eq!(input.scenario.lateral_acceleration, 8.829);
    // Everything the file omits stays at the documented defaults.
    assert_eq!(input.vehicle.scrub_radius, 0.035);
    assert_eq!(input.steering.pinion_radius, 0.04);
    assert_eq!(input.scenario.steer_angle_deg, 38.77);
    assert_eq!(input.scenario.jacking_pairing, JackingPairing::KingpinOnScrub);
}
