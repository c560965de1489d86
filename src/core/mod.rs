//! Core of the event-driven collision engine.
//!
//! Leaf-first: `physics` (vector/time kernel), `particle` (kinematics and
//! collision responses), `event` (scheduled occurrences with staleness
//! detection), `heap` (comparator-driven priority queue), `sim` (the
//! discrete-event loop tying them together).

pub mod event;
pub mod heap;
pub mod particle;
pub mod physics;
pub mod sim;

pub use event::{Event, EventKind};
pub use heap::Heap;
pub use particle::{collide, Particle};
pub use sim::run;
