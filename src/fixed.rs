//! Fixed-point conversions at the host boundary.
//!
//! Audio leaves the oscillator as Q31: a signed 32-bit word where `i32::MIN`
//! is -1.0 and `i32::MAX` is just below 1.0. Parameter values arrive as
//! 10-bit unsigned integers.

/// Scale of a Q31 word.
const Q31_SCALE: f32 = 2147483648.0;

/// Largest raw value of a 10-bit parameter.
pub const PARAM_MAX: u16 = 1023;

/// Converts a Q31 word to a float in `[-1.0, 1.0)`.
#[inline]
pub fn q31_to_f32(x: i32) -> f32 {
    x as f32 / Q31_SCALE
}

/// Converts a float to Q31.
///
/// The input is clamped to `[-1.0, 1.0]` and scaled by `i32::MAX`; the
/// fractional part is truncated toward zero. Out-of-range and infinite inputs
/// saturate, NaN maps to 0.
#[inline]
pub fn f32_to_q31(x: f32) -> i32 {
    (x.clamp(-1.0, 1.0) * i32::MAX as f32) as i32
}

/// Converts a 10-bit parameter value to a float, `0..=1023` giving `0.0..=1.0`.
///
/// Values above [`PARAM_MAX`] are not clamped.
#[inline]
pub fn param_val_to_f32(x: u16) -> f32 {
    x as f32 * (1.0 / PARAM_MAX as f32)
}
