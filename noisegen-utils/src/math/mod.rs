//! Interpolation and rounding helpers used by the noise functions.

/// Floor of `value` as a lattice coordinate.
#[inline]
#[must_use]
pub fn floor(value: f64) -> i64 {
    value.floor() as i64
}

/// Linear interpolation between `a` and `b` by `t`.
#[inline]
#[must_use]
pub fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Cubic ease curve `3t^2 - 2t^3`.
#[inline]
#[must_use]
pub fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Quintic ease curve `6t^5 - 15t^4 + 10t^3`.
///
/// First and second derivatives vanish at both ends, so adjacent lattice cells
/// join without visible creases even after several octaves are summed.
#[inline]
#[must_use]
pub fn smootherstep(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}
