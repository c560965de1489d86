use crate::core::event::{Event, EventKind};
use crate::core::heap::Heap;
use crate::core::particle::{collide, Particle};
use crate::core::physics::{before, is_future, BOX_MAX, BOX_MIN, DIM, NEVER};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Run the event loop over `particles` until the next event would fall
/// beyond `duration`, or the queue runs dry.
///
/// Seeds the queue with every pairwise contact and each particle's nearest
/// wall hit, then repeatedly extracts the earliest event, drops it if a
/// later collision made it stale, and otherwise applies the collision and
/// schedules fresh candidates for the particles involved. Particles are
/// advanced lazily: only the ones an event touches move to the event time,
/// and everything is brought to exactly `duration` at the end (or left at
/// its last event time when `duration` is not finite).
///
/// `on_tick` is invoked with the absolute simulation time every
/// `tick_interval` time units (starting at 0) when the interval is
/// strictly positive; it must not mutate particle state. The callback runs
/// synchronously inside the loop.
///
/// A negative `duration` runs the system backward in time; collision
/// physics is elastic and therefore retraces itself exactly up to
/// floating-point error.
pub fn run<F: FnMut(f64)>(
    particles: &mut [Particle],
    duration: f64,
    on_tick: F,
    tick_interval: f64,
) {
    let dir = if duration < 0.0 { -1.0 } else { 1.0 };
    let n = particles.len();
    let queue = Heap::with_capacity(
        Box::new(move |e1: &Event, e2: &Event| {
            // Order by time along the direction of travel.
            let (t1, t2) = (dir * e1.time(), dir * e2.time());
            if before(t1, t2) {
                Ordering::Less
            } else if before(t2, t1) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }),
        n * (n + 1) / 2 + 1,
    );

    let mut scheduler = Scheduler {
        particles,
        queue,
        dir,
        duration,
        on_tick,
        tick_interval,
    };
    debug!(particles = n, duration, tick_interval, "starting event loop");
    scheduler.seed();
    scheduler.run_loop();
    scheduler.finalize();
}

/// Owns the event queue and drives the particle list for one `run` call.
struct Scheduler<'a, F: FnMut(f64)> {
    particles: &'a mut [Particle],
    queue: Heap<Event>,
    dir: f64,
    duration: f64,
    on_tick: F,
    tick_interval: f64,
}

impl<F: FnMut(f64)> Scheduler<'_, F> {
    /// Queue the initial events: one refresh tick (when enabled), each
    /// particle's nearest wall hit, and every pairwise contact.
    fn seed(&mut self) {
        if self.tick_interval > 0.0 {
            if let Some(ev) = Event::refresh(0.0) {
                self.queue.insert(ev);
            }
        }
        for i in 0..self.particles.len() {
            self.schedule_wall(i);
            for j in (i + 1)..self.particles.len() {
                self.schedule_pair(i, j);
            }
        }
    }

    /// Queue particle `i`'s earliest reachable wall collision, if any.
    ///
    /// Only the nearest wall matters: hitting it invalidates everything
    /// else queued for the particle anyway. Ties go to the first axis
    /// found.
    fn schedule_wall(&mut self, i: usize) {
        let p = &self.particles[i];
        let mut t_min = NEVER;
        let mut dim_min = 0;
        for dim in 0..DIM {
            let wall = if p.velocity[dim] * self.dir < 0.0 {
                BOX_MIN
            } else {
                BOX_MAX
            };
            let t = p.time_to_wall(dim, wall);
            if is_future(t, self.dir) && before(self.dir * t, self.dir * t_min) {
                t_min = t;
                dim_min = dim;
            }
        }
        if is_future(t_min, self.dir) {
            if let Some(ev) = Event::wall(p.timestamp + t_min, i, dim_min, p) {
                self.queue.insert(ev);
            }
        }
    }

    /// Queue the contact event between particles `i` and `j`, if their
    /// paths meet in the direction of travel.
    fn schedule_pair(&mut self, i: usize, j: usize) {
        let (pi, pj) = (&self.particles[i], &self.particles[j]);
        let t = pi.time_to_contact(pj, self.dir);
        if is_future(t, self.dir) {
            if let Some(ev) = Event::contact(pi.timestamp + t, i, j, pi, pj) {
                self.queue.insert(ev);
            }
        }
    }

    /// Extract-validate-dispatch until the queue empties or the next
    /// event falls beyond the requested duration.
    fn run_loop(&mut self) {
        while let Some(ev) = self.queue.extract_min() {
            let t = ev.time();
            if before(self.dir * self.duration, self.dir * t) {
                trace!(time = t, "next event beyond duration, stopping");
                break;
            }
            if !ev.is_valid(self.particles) {
                trace!(time = t, "discarding stale event");
                continue;
            }
            match ev.kind {
                EventKind::Contact { a, b } => {
                    self.particles[a].advance(t);
                    self.particles[b].advance(t);
                    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
                    let (head, tail) = self.particles.split_at_mut(hi);
                    collide(&mut head[lo], &mut tail[0]);

                    self.schedule_wall(a);
                    self.schedule_wall(b);
                    // The pair just collided, so everything against each
                    // of them is rescheduled except against each other.
                    for j in 0..self.particles.len() {
                        if j == a || j == b {
                            continue;
                        }
                        self.schedule_pair(a, j);
                        self.schedule_pair(b, j);
                    }
                }
                EventKind::Wall { a, dim } => {
                    self.particles[a].advance(t);
                    self.particles[a].bounce_wall(dim);

                    self.schedule_wall(a);
                    for j in 0..self.particles.len() {
                        if j == a {
                            continue;
                        }
                        self.schedule_pair(a, j);
                    }
                }
                EventKind::Refresh => {
                    (self.on_tick)(t);
                    if let Some(next) = Event::refresh(t + self.dir * self.tick_interval) {
                        self.queue.insert(next);
                    }
                }
            }
        }
    }

    /// Bring every particle to exactly the requested duration.
    ///
    /// Skipped for a non-finite duration: the run can only have ended by
    /// queue exhaustion (a quiescent system), and particles stay at their
    /// last event time.
    fn finalize(&mut self) {
        if self.duration.is_finite() {
            for p in self.particles.iter_mut() {
                p.advance(self.duration);
            }
        }
    }
}
