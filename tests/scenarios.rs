use clashsim::core::{run, Particle};
use clashsim::error::Result;

/// Worked example: a disc of mass 0.5 drives into a resting disc of mass
/// 0.8; they touch at t = 0.47 and exchange momentum along the x-axis.
#[test]
fn worked_example_pair_collision() -> Result<()> {
    let mut particles = vec![
        Particle::new([0.25, 0.25], [0.50, 0.0], 0.5, 0.01)?,
        Particle::new([0.50, 0.25], [0.00, 0.0], 0.8, 0.005)?,
    ];
    run(&mut particles, 1.0, |_| {}, 0.0);

    assert_eq!(particles[0].collisions, 1);
    assert_eq!(particles[1].collisions, 1);
    assert!((particles[0].velocity[0] - (-0.115385)).abs() < 1e-6);
    assert!(particles[0].velocity[1].abs() < 1e-6);
    assert!((particles[1].velocity[0] - 0.384615).abs() < 1e-6);
    assert!(particles[1].velocity[1].abs() < 1e-6);
    Ok(())
}

/// Worked example: a lone disc moving right at 0.5 reaches the x = 1 wall
/// at t = 1.48 (radius 0.01) and leaves with its x-velocity reversed.
#[test]
fn worked_example_wall_bounce() -> Result<()> {
    let mut particles = vec![Particle::new([0.25, 0.25], [0.5, 0.0], 0.5, 0.01)?];
    run(&mut particles, 1.5, |_| {}, 0.0);

    let p = &particles[0];
    assert_eq!(p.collisions, 1);
    assert!((p.velocity[0] + 0.5).abs() < 1e-9);
    assert!(p.velocity[1].abs() < 1e-9);
    // 0.02 time units of travel back from the contact at x = 0.99.
    assert!((p.position[0] - 0.98).abs() < 1e-9);
    assert!((p.position[1] - 0.25).abs() < 1e-9);
    Ok(())
}

/// Reference no-collision pair: parallel, non-intersecting trajectories
/// never produce a contact event.
#[test]
fn reference_pair_never_meets() -> Result<()> {
    let p7 = Particle::new([0.75, 0.25], [-0.25, 0.0], 0.5, 0.01)?;
    let p8 = Particle::new([0.60, 0.80], [0.25, -0.40], 0.8, 0.005)?;
    assert!(p7.time_to_contact(&p8, 1.0).is_nan());

    // Through the loop: both just fly until they hit walls.
    let mut particles = vec![p7, p8];
    run(&mut particles, 1.0, |_| {}, 0.0);
    assert!(particles.iter().all(|p| p.collisions <= 1));
    Ok(())
}

/// The per-tick callback sees strictly advancing times at the requested
/// cadence, bounded by the duration.
#[test]
fn callback_cadence_and_bounds() -> Result<()> {
    let mut particles = vec![
        Particle::new([0.25, 0.25], [0.50, 0.0], 0.5, 0.01)?,
        Particle::new([0.50, 0.25], [0.00, 0.0], 0.8, 0.005)?,
    ];
    let mut ticks = Vec::new();
    run(&mut particles, 1.0, |t| ticks.push(t), 0.1);

    assert_eq!(ticks.len(), 11);
    for (k, t) in ticks.iter().enumerate() {
        assert!((t - 0.1 * k as f64).abs() < 1e-9, "tick {k} at {t}");
    }
    // The collision still happened while ticks were interleaved.
    assert_eq!(particles[0].collisions, 1);
    Ok(())
}
