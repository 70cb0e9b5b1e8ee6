//! Chainable 2D Vector Examples
//!
//! This example demonstrates the everyday vector workflows:
//! - Chained in-place transforms (normalize, scale, translate)
//! - Headings, rotation, and magnitude control
//! - Reflection and projection for simple collision response
//! - Aggregate folds over slices, including empty-input handling
//! - Random unit vectors for spawning and scattering
//!
//! Each deterministic scenario includes the expected output as comments.

use vector2d::prelude::*;

fn main() -> Result<(), VectorError> {
    println!("{}", "=".repeat(80));
    println!("Chainable 2D Vectors - Examples");
    println!("{}", "=".repeat(80));
    println!();

    // Run all example scenarios
    example_1_chained_transforms();
    example_2_heading_and_rotation();
    example_3_reflection_and_projection();
    example_4_aggregate_folds()?;
    example_5_random_headings();

    Ok(())
}

/// Example 1: Chained Transforms
/// Demonstrates the fluent mutator pipeline on a single position
fn example_1_chained_transforms() {
    println!("Example 1: Chained Transforms");
    println!("{}", "-".repeat(80));

    let mut position = Vector::new(3.0, 4.0);
    println!("Start:              {}", position);

    // Normalize, push out to radius 10, then nudge right and down.
    position.norm();
    println!("After norm:         {}", position);

    position.mult(10.0);
    println!("After mult(10):     {}", position);

    position.right(2.0).down(2.0);
    println!("After right + down: {}", position);

    /* Expected Output:
    Start:              (3, 4)
    After norm:         (0.6, 0.8)
    After mult(10):     (6, 8)
    After right + down: (8, 10)
    */

    println!();
}

/// Example 2: Heading and Rotation
/// Shows heading readout, an about-face turn, and magnitude control
fn example_2_heading_and_rotation() {
    println!("Example 2: Heading and Rotation");
    println!("{}", "-".repeat(80));

    let mut velocity: Vector = Vector::new(10.0, 0.0);
    println!(
        "Cruising at ({:.1}, {:.1}), heading {:.0} deg, speed {:.1}",
        velocity.x,
        velocity.y,
        velocity.heading().to_degrees(),
        velocity.magnitude()
    );

    // Turn around: same speed, opposite heading.
    velocity.rotate(core::f64::consts::PI);
    println!(
        "After rotate(pi):  ({:.1}, {:.1}), heading {:.0} deg, speed {:.1}",
        velocity.x,
        velocity.y,
        velocity.heading().to_degrees(),
        velocity.magnitude()
    );

    // Brake to half speed without changing direction.
    velocity.set_magnitude(5.0);
    println!(
        "After braking:     ({:.1}, {:.1}), speed {:.1}",
        velocity.x,
        velocity.y,
        velocity.magnitude()
    );

    /* Expected Output:
    Cruising at (10.0, 0.0), heading 0 deg, speed 10.0
    After rotate(pi):  (-10.0, 0.0), heading 180 deg, speed 10.0
    After braking:     (-5.0, 0.0), speed 5.0
    */

    println!();
}

/// Example 3: Reflection and Projection
/// Simple collision response: bounce a velocity and slide along a wall
fn example_3_reflection_and_projection() {
    println!("Example 3: Reflection and Projection");
    println!("{}", "-".repeat(80));

    // Head-on bounce: flip the velocity through the origin.
    let mut incoming = Vector::new(2.5, -1.5);
    println!("Incoming velocity: {}", incoming);

    incoming.reflect();
    println!("After bounce:      {}", incoming);

    // Wall slide: keep only the motion along the wall's axis.
    let motion = Vector::new(3.0, 4.0);
    let wall = Vector::new(10.0, 0.0);
    println!("Slide along wall:  {}", motion.project(&wall));

    let pole = Vector::new(0.0, 2.0);
    println!("Slide along pole:  {}", motion.project(&pole));

    /* Expected Output:
    Incoming velocity: (2.5, -1.5)
    After bounce:      (-2.5, 1.5)
    Slide along wall:  (3, 0)
    Slide along pole:  (0, 4)
    */

    println!();
}

/// Example 4: Aggregate Folds
/// Folds a force list to a net force, then demonstrates the empty-input error
fn example_4_aggregate_folds() -> Result<(), VectorError> {
    println!("Example 4: Aggregate Folds");
    println!("{}", "-".repeat(80));

    let forces = [
        Vector::new(1.0, 2.0),
        Vector::new(3.0, 4.0),
        Vector::new(2.0, 6.0),
    ];

    let mut net = Vector::sum(&forces)?;
    println!("Net force:     {}", net);
    println!("Mean force:    {}", Vector::average(&forces)?);

    // Cap the net force before applying it.
    net.limit(5.0);
    println!("Capped at 5:   magnitude {:.1}", net.magnitude());

    // An empty slice has nothing to fold; the error is typed, not a panic.
    let no_forces: [Vector; 0] = [];
    match Vector::sum(&no_forces) {
        Ok(total) => println!("Unexpected total: {}", total),
        Err(e) => println!("Empty input:   {}", e),
    }

    /* Expected Output:
    Net force:     (6, 12)
    Mean force:    (2, 4)
    Capped at 5:   magnitude 5.0
    Empty input:   Input slice is empty (at least one vector is required)
    */

    println!();
    Ok(())
}

/// Example 5: Random Headings
/// Spawns scatter directions; headings vary per run, magnitudes do not
fn example_5_random_headings() {
    println!("Example 5: Random Headings");
    println!("{}", "-".repeat(80));

    for i in 0..3 {
        let direction: Vector = Vector::random();
        println!(
            "Spawn {}: heading {:>4.0} deg, magnitude {:.1}",
            i,
            direction.heading().to_degrees(),
            direction.magnitude()
        );
    }

    println!();
}
