//! Saw voice with feedback phase warping, noise and a cubic soft clipper.
//!
//! Parameters:
//! - *Id1:* air, white noise added before the clipper (0 - 1).
//! - *Id2:* para amount (0 - 2), stored for the host but not rendered.
//! - *Id3 - Id6, Shape:* distortion, depth of the phase feedback (0 - 0.2).
//! - *ShiftShape:* drive into the clipper (1 - 2).
//!
//! The shape LFO scales the distortion depth by `1 + lfo` and is ramped
//! linearly across each block.

use log::{debug, trace};

use crate::fixed::{f32_to_q31, param_val_to_f32, q31_to_f32};
use crate::oscillator::{advance_phase, saw, UserOscillator};
use crate::params::{ParamIndex, UserOscParams};
use crate::units::pitch_to_increment;
use crate::utils::parameter_interpolator::ParameterInterpolator;
use crate::utils::random::Random;
use crate::utils::{fold_phase, lerp, soft_clip_cubic};

/// Cubic coefficient of the output clipper.
pub const SOFT_CLIP_AMOUNT: f32 = 0.5;

/// Scale from a normalized parameter to the distortion depth.
pub const DISTORTION_SCALE: f32 = 0.2;

/// Scale from a normalized parameter to the para amount.
pub const PARA_SCALE: f32 = 2.0;

/// Phase offset of the feedback saw.
const WARP_OFFSET: f32 = 0.1;

const FLAG_RESET: u8 = 1 << 0;

/// Shaping coefficients set through `set_param`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shaping {
    /// Gain into the soft clipper.
    pub drive: f32,

    /// Depth of the phase feedback.
    pub distortion: f32,

    /// Amount of white noise mixed in before clipping.
    pub air: f32,

    pub para: f32,
}

impl Shaping {
    pub const fn new() -> Self {
        Self {
            drive: 1.0,
            distortion: 0.0,
            air: 0.0,
            para: 0.0,
        }
    }
}

impl Default for Shaping {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct WarpedSaw {
    fundamental_increment: f32,
    phase: f32,
    shaping: Shaping,

    // Shape LFO at the end of the last block, and the smoothed value the
    // next block ramps from.
    lfo: f32,
    lfo_prev: f32,

    flags: u8,
    rng: Random,
}

impl Default for WarpedSaw {
    fn default() -> Self {
        Self::new()
    }
}

impl WarpedSaw {
    pub const fn new() -> Self {
        Self {
            fundamental_increment: 0.0,
            phase: 0.0,
            shaping: Shaping::new(),
            lfo: 0.0,
            lfo_prev: 0.0,
            flags: 0,
            rng: Random::new(),
        }
    }

    /// Reseeds the noise generator. `init` restores the default seed.
    pub fn seed(&mut self, seed: u32) {
        self.rng.seed(seed);
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn fundamental_increment(&self) -> f32 {
        self.fundamental_increment
    }

    pub fn shaping(&self) -> &Shaping {
        &self.shaping
    }

    pub fn lfo(&self) -> f32 {
        self.lfo
    }

    pub fn lfo_prev(&self) -> f32 {
        self.lfo_prev
    }

    /// Returns `true` if a note-on is waiting for the next cycle.
    pub fn reset_pending(&self) -> bool {
        self.flags & FLAG_RESET != 0
    }
}

impl UserOscillator for WarpedSaw {
    fn init(&mut self, platform: u32, api: u32) {
        debug!("Init warped saw, platform {platform:#x}, api {api:#x}");
        *self = Self::new();
    }

    fn process(&mut self, params: &UserOscParams, out: &mut [i32]) {
        let flags = self.flags;
        self.flags = 0;

        let w0 = pitch_to_increment(params.pitch);
        self.fundamental_increment = w0;
        let lfo = q31_to_f32(params.shape_lfo);
        self.lfo = lfo;

        let reset = flags & FLAG_RESET != 0;
        let mut phase = if reset { 0.0 } else { self.phase };
        let mut lfo_interp = if reset { lfo } else { self.lfo_prev };
        let lfo_ramp = ParameterInterpolator::new(lfo_interp, lfo, out.len());

        let Shaping {
            drive,
            distortion,
            air,
            ..
        } = self.shaping;

        for out_sample in out.iter_mut() {
            let dist_mod = distortion * (1.0 + lfo_interp);
            let warped = phase + lerp(dist_mod, 1.0, dist_mod * saw(WARP_OFFSET - phase));

            let mut sig = saw(fold_phase(warped));
            sig += air * self.rng.white();
            sig = soft_clip_cubic(SOFT_CLIP_AMOUNT, drive * sig);
            *out_sample = f32_to_q31(sig);

            phase = advance_phase(phase, w0);
            lfo_ramp.update(&mut lfo_interp);
        }

        self.phase = phase;
        self.lfo_prev = lfo_interp;
    }

    fn note_on(&mut self, _params: &UserOscParams) {
        self.flags |= FLAG_RESET;
    }

    fn note_off(&mut self, _params: &UserOscParams) {}

    fn set_param(&mut self, index: u16, value: u16) {
        let value = param_val_to_f32(value);

        match ParamIndex::try_from(index) {
            Ok(ParamIndex::Id1) => self.shaping.air = value,
            Ok(ParamIndex::Id2) => self.shaping.para = PARA_SCALE * value,
            Ok(
                ParamIndex::Id3
                | ParamIndex::Id4
                | ParamIndex::Id5
                | ParamIndex::Id6
                | ParamIndex::Shape,
            ) => self.shaping.distortion = DISTORTION_SCALE * value,
            Ok(ParamIndex::ShiftShape) => self.shaping.drive = 1.0 + value,
            Err(index) => trace!("Ignoring unknown parameter {index}"),
        }
    }
}
