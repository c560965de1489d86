//! Random generation of non-overlapping particle systems.

use crate::core::particle::Particle;
use crate::core::physics::{distance, dot, DIM};
use crate::error::{Error, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};

const MAX_RADIUS: f64 = 0.010;
const MIN_REL_RADIUS: f64 = 0.4; // relative to max radius
const MAX_SPEED: f64 = 0.0005;
const MAX_MASS: f64 = 0.8;
const MIN_REL_MASS: f64 = 0.5; // relative to max mass

const MAX_ATTEMPTS: usize = 1_000_000;

/// Fill a list with `count` random particles inside the unit box.
///
/// Positions are rejection-sampled so no two discs overlap and every disc
/// lies fully inside the box. Velocities are uniform over a disc of radius
/// `MAX_SPEED`; radii and masses are uniform in `[0.4, 1.0] * MAX_RADIUS`
/// and `[0.5, 1.0] * MAX_MASS`. Pass a seed for reproducible systems.
///
/// Errors with `Error::InvalidParam` when a non-overlapping placement
/// cannot be found within a bounded number of attempts (box too crowded).
pub fn generate_particles(count: usize, seed: Option<u64>) -> Result<Vec<Particle>> {
    let mut rng: StdRng = match seed {
        Some(s) => SeedableRng::seed_from_u64(s),
        None => SeedableRng::seed_from_u64(rand::rng().random()),
    };

    let mut particles: Vec<Particle> = Vec::with_capacity(count);
    let mut attempts = 0usize;
    while particles.len() < count {
        if attempts >= MAX_ATTEMPTS {
            return Err(Error::InvalidParam(format!(
                "failed to place particle {} without overlap; try fewer particles",
                particles.len()
            )));
        }
        attempts += 1;

        let radius = (MIN_REL_RADIUS + rng.random::<f64>() * (1.0 - MIN_REL_RADIUS)) * MAX_RADIUS;
        let mut position = [0.0; DIM];
        for x in &mut position {
            *x = rng.random_range(radius..=(1.0 - radius));
        }
        if particles
            .iter()
            .any(|q| distance(&position, &q.position) < radius + q.radius)
        {
            continue;
        }

        // Uniform over a disc, not a square: resample the corners away.
        let velocity = loop {
            let mut v = [0.0; DIM];
            for x in &mut v {
                *x = rng.random_range(-MAX_SPEED..=MAX_SPEED);
            }
            if dot(&v, &v) <= MAX_SPEED * MAX_SPEED {
                break v;
            }
        };

        let mass = (MIN_REL_MASS + rng.random::<f64>() * (1.0 - MIN_REL_MASS)) * MAX_MASS;
        particles.push(Particle::new(position, velocity, mass, radius)?);
    }
    Ok(particles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_the_requested_count() -> Result<()> {
        let particles = generate_particles(64, Some(6502))?;
        assert_eq!(particles.len(), 64);
        Ok(())
    }

    #[test]
    fn particles_fit_in_the_box_without_overlap() -> Result<()> {
        let particles = generate_particles(128, Some(1234))?;
        for (i, p) in particles.iter().enumerate() {
            for x in &p.position {
                assert!(*x >= p.radius && *x <= 1.0 - p.radius);
            }
            assert!(dot(&p.velocity, &p.velocity) <= MAX_SPEED * MAX_SPEED + 1e-18);
            assert!(p.mass >= MIN_REL_MASS * MAX_MASS && p.mass <= MAX_MASS);
            for q in &particles[i + 1..] {
                assert!(
                    distance(&p.position, &q.position) >= p.radius + q.radius,
                    "particles overlap"
                );
            }
        }
        Ok(())
    }

    #[test]
    fn same_seed_reproduces_the_system() -> Result<()> {
        let a = generate_particles(16, Some(99))?;
        let b = generate_particles(16, Some(99))?;
        for (pa, pb) in a.iter().zip(&b) {
            assert_eq!(pa.position, pb.position);
            assert_eq!(pa.velocity, pb.velocity);
            assert_eq!(pa.mass, pb.mass);
            assert_eq!(pa.radius, pb.radius);
        }
        Ok(())
    }
}
