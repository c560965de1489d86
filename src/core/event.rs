use crate::core::particle::Particle;
use crate::core::physics::before;
use ordered_float::NotNan;
use std::cmp::Ordering;

/// The three kinds of occurrence the engine schedules.
///
/// `a` and `b` are indexes into the caller's particle slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Collision between particles `a` and `b`.
    Contact { a: usize, b: usize },
    /// Collision of particle `a` with the wall orthogonal to axis `dim`.
    Wall { a: usize, dim: usize },
    /// Periodic callback tick, not a physical event.
    Refresh,
}

/// A scheduled future occurrence, immutable once created.
///
/// For each referenced particle the event records the collision counter
/// observed at creation time. The event stays valid only while those
/// counters are unchanged; a collision involving either particle makes it
/// stale, and the scheduler discards it lazily on extraction instead of
/// searching the queue (see [`Event::is_valid`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    time: NotNan<f64>,
    /// Event kind and participants.
    pub kind: EventKind,
    a_col: u64,
    b_col: u64,
}

impl Event {
    /// Pair-collision event at absolute time `time`, snapshotting both
    /// particles' collision counters.
    ///
    /// Returns `None` for a NaN time; callers filter candidates with
    /// `is_future` first, so a well-behaved scheduler never sees that.
    pub fn contact(time: f64, a: usize, b: usize, pa: &Particle, pb: &Particle) -> Option<Self> {
        Some(Self {
            time: NotNan::new(time).ok()?,
            kind: EventKind::Contact { a, b },
            a_col: pa.collisions,
            b_col: pb.collisions,
        })
    }

    /// Wall-collision event for particle `a` against the wall orthogonal
    /// to `dim`, at absolute time `time`.
    pub fn wall(time: f64, a: usize, dim: usize, pa: &Particle) -> Option<Self> {
        Some(Self {
            time: NotNan::new(time).ok()?,
            kind: EventKind::Wall { a, dim },
            a_col: pa.collisions,
            b_col: 0,
        })
    }

    /// Periodic refresh event at absolute time `time`.
    pub fn refresh(time: f64) -> Option<Self> {
        Some(Self {
            time: NotNan::new(time).ok()?,
            kind: EventKind::Refresh,
            a_col: 0,
            b_col: 0,
        })
    }

    /// Absolute event time.
    #[inline]
    pub fn time(&self) -> f64 {
        self.time.into_inner()
    }

    /// Is the event still current?
    ///
    /// True iff every referenced particle's collision counter equals the
    /// value snapshotted at creation. Refresh events reference no
    /// particles and are always valid.
    pub fn is_valid(&self, particles: &[Particle]) -> bool {
        match self.kind {
            EventKind::Contact { a, b } => {
                particles[a].collisions == self.a_col && particles[b].collisions == self.b_col
            }
            EventKind::Wall { a, .. } => particles[a].collisions == self.a_col,
            EventKind::Refresh => true,
        }
    }

    /// Total order by timestamp via the NEVER-aware `before` predicate;
    /// ties compare equal.
    pub fn compare(e1: &Event, e2: &Event) -> Ordering {
        let (t1, t2) = (e1.time(), e2.time());
        if before(t1, t2) {
            Ordering::Less
        } else if before(t2, t1) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}
