use steerx::ackermann_geometry;
use steerx::report::render_ackermann;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Tightest rated turn for the reference car
    let geometry = ackermann_geometry(1.525, 1.145, 2.8)?;
    print!("{}", render_ackermann(&geometry));

    // How the angle split relaxes on a wider turn
    let wide = ackermann_geometry(1.525, 1.145, 8.0)?;
    println!(
        "At an 8.0 m radius the split narrows to {:.3}° / {:.3}°.",
        wide.inner_angle_deg, wide.outer_angle_deg
    );

    Ok(())
}
