//! Vector arithmetic and time predicates for the event engine.
//!
//! Vectors are fixed-size `[f64; DIM]` arrays. Times are plain `f64`
//! seconds with one reserved sentinel, [`NEVER`], meaning "this candidate
//! event will not occur". `NEVER` is NaN under the hood, so every predicate
//! that may see it must go through [`before`] / [`is_future`] rather than
//! native float comparison.

/// Fixed spatial dimension (2D).
pub const DIM: usize = 2;

/// Low edge of the unit simulation box on every axis.
pub const BOX_MIN: f64 = 0.0;

/// High edge of the unit simulation box on every axis.
pub const BOX_MAX: f64 = 1.0;

/// Small numeric tolerance for time checks at an exact-zero boundary.
pub const EPS_TIME: f64 = 1e-12;

/// Sentinel time for a collision that will never happen.
pub const NEVER: f64 = f64::NAN;

/// Time to travel `dist` at `speed`.
///
/// Signed; yields ±∞ when `speed == 0` and the distance is nonzero, which
/// is never future-valid.
#[inline]
pub fn path_time(dist: f64, speed: f64) -> f64 {
    dist / speed
}

/// Does `t1` come strictly before `t2`?
///
/// Total ordering predicate that treats [`NEVER`] as after every other
/// time. Native float comparison would make every comparison against the
/// sentinel false, so the NaN cases are handled explicitly.
#[inline]
pub fn before(t1: f64, t2: f64) -> bool {
    if t2.is_nan() {
        !t1.is_nan()
    } else {
        t1 < t2
    }
}

/// Is `t` a reachable relative event time, given the time-flow direction?
///
/// `dir` is `+1.0` when simulating forward and `-1.0` when simulating
/// backward; a candidate lies in the travel direction when `t * dir` is
/// positive. A small negative epsilon is tolerated so that an event at an
/// exact-zero boundary rounding slightly into the past is not lost.
#[inline]
pub fn is_future(t: f64, dir: f64) -> bool {
    t.is_finite() && t * dir > -EPS_TIME
}

/// Component-wise difference `v1 - v2`.
#[inline]
pub fn delta(v1: &[f64; DIM], v2: &[f64; DIM]) -> [f64; DIM] {
    let mut out = [0.0; DIM];
    for (o, (a, b)) in out.iter_mut().zip(v1.iter().zip(v2.iter())) {
        *o = a - b;
    }
    out
}

/// Scalar product `v1 · v2`.
#[inline]
pub fn dot(v1: &[f64; DIM], v2: &[f64; DIM]) -> f64 {
    v1.iter().zip(v2.iter()).map(|(a, b)| a * b).sum()
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(v1: &[f64; DIM], v2: &[f64; DIM]) -> f64 {
    let d = delta(v1, v2);
    dot(&d, &d).sqrt()
}

/// In-place `v += k * v2`.
#[inline]
pub fn append_scaled(v: &mut [f64; DIM], v2: &[f64; DIM], k: f64) {
    for (a, b) in v.iter_mut().zip(v2.iter()) {
        *a += b * k;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_time_signed() {
        assert!((path_time(2.0, 4.0) - 0.5).abs() < 1e-15);
        assert!((path_time(-2.0, 4.0) + 0.5).abs() < 1e-15);
        assert_eq!(path_time(1.0, 0.0), f64::INFINITY);
        assert_eq!(path_time(-1.0, 0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn before_orders_finite_times() {
        assert!(before(1.0, 2.0));
        assert!(!before(2.0, 1.0));
        assert!(!before(1.0, 1.0));
        assert!(before(f64::NEG_INFINITY, 0.0));
        assert!(before(0.0, f64::INFINITY));
    }

    #[test]
    fn before_puts_never_last() {
        assert!(before(1e300, NEVER));
        assert!(before(f64::INFINITY, NEVER));
        assert!(!before(NEVER, 1.0));
        assert!(!before(NEVER, NEVER));
    }

    #[test]
    fn is_future_respects_direction() {
        assert!(is_future(0.5, 1.0));
        assert!(!is_future(-0.5, 1.0));
        assert!(is_future(-0.5, -1.0));
        assert!(!is_future(0.5, -1.0));
        // Exact-zero boundary tolerated in both directions.
        assert!(is_future(0.0, 1.0));
        assert!(is_future(0.0, -1.0));
        // Non-finite candidates are never reachable.
        assert!(!is_future(f64::INFINITY, 1.0));
        assert!(!is_future(NEVER, 1.0));
        assert!(!is_future(NEVER, -1.0));
    }

    #[test]
    fn vector_ops() {
        let a = [3.0, 4.0];
        let b = [1.0, 1.0];
        assert_eq!(delta(&a, &b), [2.0, 3.0]);
        assert!((dot(&a, &b) - 7.0).abs() < 1e-15);
        assert!((distance(&[0.0, 0.0], &a) - 5.0).abs() < 1e-15);

        let mut v = [1.0, 2.0];
        append_scaled(&mut v, &[2.0, -1.0], 0.5);
        assert_eq!(v, [2.0, 1.5]);
    }
}
