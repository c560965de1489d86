use crate::core::physics::{append_scaled, delta, dot, path_time, DIM, NEVER};
use crate::error::{Error, Result};

/// A rigid circular particle described at a snapshot instant.
///
/// Fields:
/// - `timestamp`: absolute time of the last exact state
/// - `position`, `velocity`: state vectors, valid as of `timestamp`
/// - `mass`: particle mass (> 0), constant over the particle's lifetime
/// - `radius`: disc radius (>= 0), constant over the particle's lifetime
/// - `collisions`: incremented once per realized collision (wall or pair);
///   the staleness key for queued events
///
/// Between collisions the particle moves in a straight line, so its state
/// at any other time is recoverable by [`Particle::advance`] as long as no
/// unprocessed collision lies in between.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Absolute time at which `position`/`velocity` are exact.
    pub timestamp: f64,
    /// Position at `timestamp`.
    pub position: [f64; DIM],
    /// Velocity at `timestamp`.
    pub velocity: [f64; DIM],
    /// Mass (> 0).
    pub mass: f64,
    /// Disc radius (>= 0).
    pub radius: f64,
    /// Collision participation counter (for event invalidation).
    pub collisions: u64,
}

impl Particle {
    /// Create a new particle at time 0 after validating invariants.
    ///
    /// Errors with `Error::InvalidParam` if `mass` is non-positive,
    /// `radius` is negative, or any component is NaN/inf.
    pub fn new(position: [f64; DIM], velocity: [f64; DIM], mass: f64, radius: f64) -> Result<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(Error::InvalidParam("mass must be finite and > 0".into()));
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(Error::InvalidParam("radius must be finite and >= 0".into()));
        }
        if !position.iter().all(|x| x.is_finite()) {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        if !velocity.iter().all(|x| x.is_finite()) {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        Ok(Self {
            timestamp: 0.0,
            position,
            velocity,
            mass,
            radius,
            collisions: 0,
        })
    }

    /// Move the particle to absolute time `t` by uniform linear motion.
    ///
    /// Valid forward or backward, provided no unprocessed collision lies
    /// between `self.timestamp` and `t`; the scheduler guarantees this by
    /// always advancing to exactly the next event time.
    pub fn advance(&mut self, t: f64) {
        let dt = t - self.timestamp;
        append_scaled(&mut self.position, &self.velocity, dt);
        self.timestamp = t;
    }

    /// Signed relative time until the disc surface reaches the hyperplane
    /// at `wall_pos` along axis `dim`.
    ///
    /// The travel distance is shrunk by the radius on the approach side.
    /// A wall the particle moves away from yields a negative time (it was
    /// reached in the past); zero velocity yields ±∞. Neither is
    /// future-valid for a forward run, so no special casing is needed.
    pub fn time_to_wall(&self, dim: usize, wall_pos: f64) -> f64 {
        let mut dist = wall_pos - self.position[dim];
        dist += self.radius * if dist > 0.0 { -1.0 } else { 1.0 };
        path_time(dist, self.velocity[dim])
    }

    /// Reflect the velocity off the hyperplane orthogonal to `dim`.
    ///
    /// Assumes `self.timestamp` already equals the collision instant.
    pub fn bounce_wall(&mut self, dim: usize) {
        self.velocity[dim] = -self.velocity[dim];
        self.bump_collisions();
    }

    /// Relative time (w.r.t. `self.timestamp`) at which the two disc
    /// surfaces meet, solving `|Δp + t·Δv|² = (r1 + r2)²` in relative
    /// coordinates after viewing `other` at `self.timestamp`.
    ///
    /// `dir` selects which quadratic root is the contact in the direction
    /// of travel: `+1.0` takes the earlier root (surfaces first meet going
    /// forward), `-1.0` the later one (surfaces first meet going
    /// backward). Returns [`NEVER`] when the discriminant is negative; a
    /// return value whose sign opposes `dir` means the contact already
    /// passed, and callers must treat it as invalid for scheduling.
    pub fn time_to_contact(&self, other: &Particle, dir: f64) -> f64 {
        let mut other = other.clone();
        other.advance(self.timestamp);

        let dpos = delta(&other.position, &self.position);
        let dvel = delta(&other.velocity, &self.velocity);
        let dist_min = self.radius + other.radius;

        let prod_pv = dot(&dpos, &dvel);
        let prod_vv = dot(&dvel, &dvel);
        let prod_pp = dot(&dpos, &dpos);
        let discriminant = prod_pv * prod_pv - prod_vv * (prod_pp - dist_min * dist_min);
        if discriminant < 0.0 {
            return NEVER;
        }
        // prod_vv == 0 falls through to ±∞ or NaN, neither future-valid.
        -(prod_pv + dir * discriminant.sqrt()) / prod_vv
    }

    /// Kinetic energy `1/2 m |v|²` (diagnostic).
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * dot(&self.velocity, &self.velocity)
    }

    #[inline]
    fn bump_collisions(&mut self) {
        self.collisions = self.collisions.saturating_add(1);
    }
}

/// Apply a perfectly elastic impulse between two particles in contact.
///
/// Both particles must already be advanced to the same collision instant.
/// Only the velocity component along the line of centers changes,
/// proportionally to the masses, which conserves total momentum and
/// kinetic energy. The operator is its own inverse, so it also undoes a
/// collision when the engine runs backward. Increments both collision
/// counters.
pub fn collide(p1: &mut Particle, p2: &mut Particle) {
    let dpos = delta(&p2.position, &p1.position);
    let dvel = delta(&p2.velocity, &p1.velocity);

    // dp·dp should equal (r1+r2)^2 at contact; using the measured value
    // keeps the update stable when the contact is slightly off.
    let coeff = 2.0 * dot(&dpos, &dvel) / (p1.mass + p2.mass) / dot(&dpos, &dpos);

    append_scaled(&mut p1.velocity, &dpos, p2.mass * coeff);
    append_scaled(&mut p2.velocity, &dpos, -p1.mass * coeff);
    p1.bump_collisions();
    p2.bump_collisions();
}
