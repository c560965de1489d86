use clashsim::core::{run, Particle};
use clashsim::error::Result;
use clashsim::generate::generate_particles;

/// Elastic dynamics is time-symmetric: simulate forward, rebase the
/// timestamps, run the same span backward, and every particle returns to
/// where it started with its original velocity.
#[test]
fn forward_then_backward_restores_the_system() -> Result<()> {
    let mut particles = generate_particles(12, Some(6502))?;
    let initial: Vec<Particle> = particles.clone();

    let span = 10_000.0;
    run(&mut particles, span, |_| {}, 0.0);

    let forward_hits: u64 = particles.iter().map(|p| p.collisions).sum();
    assert!(forward_hits > 0, "expected some collisions going forward");

    // Rebase to a fresh run starting at time 0, as an independent caller
    // handing the final snapshot back in would.
    for p in &mut particles {
        p.timestamp = 0.0;
    }
    run(&mut particles, -span, |_| {}, 0.0);

    for (i, (now, then)) in particles.iter().zip(&initial).enumerate() {
        for k in 0..2 {
            assert!(
                (now.position[k] - then.position[k]).abs() < 1e-6,
                "particle {i} position[{k}]: {} vs {}",
                now.position[k],
                then.position[k]
            );
            assert!(
                (now.velocity[k] - then.velocity[k]).abs() < 1e-6,
                "particle {i} velocity[{k}]: {} vs {}",
                now.velocity[k],
                then.velocity[k]
            );
        }
    }
    Ok(())
}

/// A backward run is driven by the same event machinery, not by bare
/// extrapolation: collisions are processed at negative times.
#[test]
fn backward_run_processes_events() -> Result<()> {
    // This state is the t = 2.0 outcome of a wall bounce at t = 1.48
    // (see the wall worked example), rebased to time 0.
    let mut particles = vec![Particle::new([0.73, 0.25], [-0.5, 0.0], 0.5, 0.01)?];
    run(&mut particles, -2.0, |_| {}, 0.0);

    let p = &particles[0];
    assert_eq!(p.collisions, 1, "the un-bounce must be processed as an event");
    assert!((p.position[0] - 0.25).abs() < 1e-9);
    assert!((p.velocity[0] - 0.5).abs() < 1e-9);
    Ok(())
}

/// Ticks run backward too, stepping by the interval in the direction of
/// travel.
#[test]
fn backward_ticks_step_backward() -> Result<()> {
    let mut particles = vec![Particle::new([0.5, 0.5], [0.01, 0.0], 1.0, 0.01)?];
    let mut ticks = Vec::new();
    run(&mut particles, -1.0, |t| ticks.push(t), 0.25);

    assert_eq!(ticks.len(), 5);
    for (k, t) in ticks.iter().enumerate() {
        assert!((t + 0.25 * k as f64).abs() < 1e-12, "tick {k} at {t}");
    }
    Ok(())
}
