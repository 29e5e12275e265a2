use steerx::report::render_effort;
use steerx::{presets, JackingPairing};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parked car on dry asphalt, second prototype geometry
    let mut input = presets::prototype_mk2();

    let breakdown = input.evaluate()?;
    print!("{}", render_effort(&breakdown));

    // The same car analysed with the alternative jacking pairing
    input.scenario.jacking_pairing = JackingPairing::CasterOnScrub;
    let swapped = input.evaluate()?;
    println!(
        "Total effort with the swapped jacking pairing: {:.2} Nm",
        swapped.total_effort
    );

    Ok(())
}
