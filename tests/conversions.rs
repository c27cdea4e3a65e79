//! Tests for the host boundary conversions and shaping helpers.

use logue_osc::fixed::{f32_to_q31, param_val_to_f32, q31_to_f32, PARAM_MAX};
use logue_osc::params::{ParamIndex, UserOscParams};
use logue_osc::units::{
    note_hz, note_to_hz, note_to_increment, pitch_to_increment, MAX_NOTE, MAX_NOTE_HZ,
};
use logue_osc::utils::parameter_interpolator::ParameterInterpolator;
use logue_osc::utils::random::Random;
use logue_osc::utils::{fold_phase, lerp, soft_clip_cubic, wrap};
use logue_osc::SAMPLE_RATE;

#[test]
fn q31_conversion() {
    assert_eq!(f32_to_q31(0.0), 0);
    assert_eq!(f32_to_q31(0.5), 1 << 30);
    assert_eq!(f32_to_q31(-0.5), -(1 << 30));
    assert_eq!(f32_to_q31(1.0), i32::MAX);
    assert_eq!(f32_to_q31(-1.0), i32::MIN);

    // Saturates instead of wrapping.
    assert_eq!(f32_to_q31(3.0), i32::MAX);
    assert_eq!(f32_to_q31(-7.5), i32::MIN);
    assert_eq!(f32_to_q31(f32::INFINITY), i32::MAX);
    assert_eq!(f32_to_q31(f32::NAN), 0);

    assert_eq!(q31_to_f32(0), 0.0);
    assert_eq!(q31_to_f32(1 << 30), 0.5);
    assert_eq!(q31_to_f32(i32::MIN), -1.0);
    assert!(q31_to_f32(i32::MAX) <= 1.0);

    for n in -100..=100 {
        let x = n as f32 / 100.0;
        assert!((q31_to_f32(f32_to_q31(x)) - x).abs() < 1e-6);
    }
}

#[test]
fn q31_truncates_toward_zero() {
    let step = 1.0 / i32::MAX as f64;
    let x = (2.7 * step) as f32;
    assert!(f32_to_q31(x) <= 3);
    assert!(f32_to_q31(-x) >= -3);
    assert_eq!(f32_to_q31(1e-12), 0);
    assert_eq!(f32_to_q31(-1e-12), 0);
}

#[test]
fn parameter_values() {
    assert_eq!(param_val_to_f32(0), 0.0);
    assert!((param_val_to_f32(PARAM_MAX) - 1.0).abs() < 1e-6);
    assert!((param_val_to_f32(512) - 0.5).abs() < 1e-3);

    // Not clamped.
    assert!(param_val_to_f32(2046) > 1.99);
}

#[test]
fn pitch_lookup() {
    assert_eq!(note_to_hz(69.0), 440.0);
    assert!((note_to_hz(81.0) - 880.0).abs() < 1e-3);

    assert!((note_hz(69, 0) - 440.0).abs() < 1e-3);
    assert!((note_hz(57, 0) - 220.0).abs() < 1e-3);
    assert!((note_hz(69, 255) - note_to_hz(70.0)).abs() < 1e-2);

    let halfway = note_hz(69, 128);
    assert!(halfway > note_hz(69, 0) && halfway < note_hz(70, 0));

    assert!((note_to_increment(69, 0) - 440.0 / SAMPLE_RATE).abs() < 1e-7);
    assert_eq!(pitch_to_increment(69 << 8), note_to_increment(69, 0));
    assert_eq!(pitch_to_increment((60 << 8) | 37), note_to_increment(60, 37));

    // The top of the table is clamped to the frequency limit.
    assert_eq!(note_hz(MAX_NOTE, 0), MAX_NOTE_HZ);
    assert_eq!(note_hz(255, 255), MAX_NOTE_HZ);
    assert!(note_to_increment(255, 0) < 0.5);

    for note in 1..=127 {
        assert!(note_hz(note, 0) > note_hz(note - 1, 0));
    }
}

#[test]
fn packed_pitch() {
    let params = UserOscParams::with_note(62, 200);
    assert_eq!(params.pitch, 0x3EC8);
    assert_eq!(params.note(), 62);
    assert_eq!(params.fine(), 200);
}

#[test]
fn param_index_decoding() {
    assert_eq!(ParamIndex::try_from(0u16), Ok(ParamIndex::Id1));
    assert_eq!(ParamIndex::try_from(5u16), Ok(ParamIndex::Id6));
    assert_eq!(ParamIndex::try_from(6u16), Ok(ParamIndex::Shape));
    assert_eq!(ParamIndex::try_from(7u16), Ok(ParamIndex::ShiftShape));
    assert_eq!(ParamIndex::try_from(8u16), Err(8));
    assert_eq!(ParamIndex::try_from(1000u16), Err(1000));
}

#[test]
fn soft_clip_stays_bounded() {
    let bound = (2.0_f32 / 3.0).sqrt() * (2.0 / 3.0);

    assert_eq!(soft_clip_cubic(0.5, 0.0), 0.0);
    assert_eq!(soft_clip_cubic(0.5, 1.0), 0.5);
    assert_eq!(soft_clip_cubic(0.5, 1e9), 0.5);
    assert_eq!(soft_clip_cubic(0.5, -1e9), -0.5);

    for n in -10_000..=10_000 {
        let x = n as f32 * 0.01;
        let y = soft_clip_cubic(0.5, x);
        assert!(y.abs() <= bound + 1e-6, "soft_clip({x}) = {y}");
        assert_eq!(soft_clip_cubic(0.5, -x), -y);
    }
}

#[test]
fn phase_folding() {
    assert_eq!(fold_phase(0.25), 0.25);
    assert_eq!(fold_phase(2.75), 0.75);
    assert_eq!(fold_phase(1.0), 0.0);

    // Non-positive values reflect and are left above one.
    assert_eq!(fold_phase(0.0), 1.0);
    assert_eq!(fold_phase(-0.25), 1.25);

    assert_eq!(wrap(-0.25), 0.75);
    assert_eq!(wrap(3.5), 0.5);
    assert_eq!(wrap(-1e-9), 0.0);
}

#[test]
fn interpolation() {
    assert_eq!(lerp(0.0, 1.0, 3.0), 1.0);
    assert_eq!(lerp(0.5, 1.0, 3.0), 2.0);
    assert_eq!(lerp(1.0, 1.0, 3.0), 3.0);

    let mut value = 0.0;
    let ramp = ParameterInterpolator::new(value, 1.0, 8);
    assert_eq!(ramp.increment(), 0.125);
    for _ in 0..8 {
        ramp.update(&mut value);
    }
    assert_eq!(value, 1.0);

    let flat = ParameterInterpolator::new(0.3, 0.9, 0);
    assert_eq!(flat.increment(), 0.0);
}

#[test]
fn white_noise() {
    let mut random = Random::new();
    let mut sum = 0.0;
    let count = 100_000;

    for _ in 0..count {
        let x = random.white();
        assert!((-1.0..1.0).contains(&x));
        sum += x as f64;
    }
    assert!((sum / count as f64).abs() < 0.02);

    let mut a = Random::new();
    let mut b = Random::new();
    a.seed(99);
    b.seed(99);
    for _ in 0..100 {
        assert_eq!(a.get_word(), b.get_word());
    }
}
