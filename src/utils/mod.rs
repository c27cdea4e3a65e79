//! Small shaping and interpolation helpers shared by the oscillators.

pub mod parameter_interpolator;
pub mod random;

#[allow(unused_imports)]
use num_traits::float::Float;

/// Linear interpolation from `a` to `b` by `t`.
#[inline]
pub fn lerp(t: f32, a: f32, b: f32) -> f32 {
    a + t * (b - a)
}

/// Clamps `x` to `[-1.0, 1.0]`.
#[inline]
pub fn clip_1m1(x: f32) -> f32 {
    x.clamp(-1.0, 1.0)
}

/// Cubic soft clipper.
///
/// The input is clipped to `[-1.0, 1.0]` first, then bent by `x - c * x^3`.
/// For `0 < c <= 1/3` the curve is monotonic and peaks at `1 - c`; above that
/// it peaks at `x = sqrt(1 / (3c))`.
#[inline]
pub fn soft_clip_cubic(c: f32, x: f32) -> f32 {
    let x = clip_1m1(x);
    x - c * (x * x * x)
}

/// Fractional part of `x`, always in `[0.0, 1.0)` for finite input.
#[inline]
pub fn wrap(x: f32) -> f32 {
    let w = x - x.floor();
    // Tiny negative inputs round up to exactly 1.0.
    if w >= 1.0 {
        0.0
    } else {
        w
    }
}

/// Folds a warped phase back into range.
///
/// Non-positive values are reflected to `1 - p`, anything else keeps its
/// fractional part. Reflected values are not wrapped again.
#[inline]
pub fn fold_phase(p: f32) -> f32 {
    if p <= 0.0 {
        1.0 - p
    } else {
        p - p.floor()
    }
}
