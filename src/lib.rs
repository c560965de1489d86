//! Event-driven simulation of rigid circular particles in a unit box.
//!
//! Instead of stepping time on a fixed grid, the engine computes the exact
//! instant of every upcoming collision (particle-particle and
//! particle-wall), keeps the candidates in a binary min-heap, and jumps
//! straight from one physical event to the next. Events invalidated by an
//! earlier collision are not removed from the queue; each particle carries
//! a collision counter, events snapshot it at creation, and stale entries
//! are discarded lazily when extracted.
//!
//! The entry point is [`core::sim::run`]:
//!
//! ```
//! use clashsim::core::{run, Particle};
//!
//! let mut particles = vec![
//!     Particle::new([0.25, 0.25], [0.5, 0.0], 0.5, 0.01).unwrap(),
//!     Particle::new([0.50, 0.25], [0.0, 0.0], 0.8, 0.005).unwrap(),
//! ];
//! run(&mut particles, 1.0, |_t| {}, 0.0);
//! assert_eq!(particles[0].collisions, 1);
//! ```
//!
//! Durations may be negative: elastic collisions are time-symmetric, and
//! the engine replays them in reverse. Snapshot loading/exporting lives in
//! [`io`], random system generation in [`generate`]; rendering and command
//! line front ends are left to callers of the per-tick callback.

pub mod core;
pub mod error;
pub mod generate;
pub mod io;

pub use crate::core::{run, Particle};
pub use crate::error::{Error, Result};
