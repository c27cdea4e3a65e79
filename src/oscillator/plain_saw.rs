//! Bare phase accumulator driving a naive saw.
//!
//! Takes no parameters. Useful as a reference when checking a host's pitch
//! handling and block cadence.

use crate::fixed::f32_to_q31;
use crate::oscillator::{advance_phase, saw, UserOscillator};
use crate::params::UserOscParams;
use crate::units::pitch_to_increment;

const FLAG_RESET: u8 = 1 << 0;

#[derive(Debug, Default, Clone)]
pub struct PlainSaw {
    increment: f32,
    phase: f32,
    flags: u8,
}

impl PlainSaw {
    pub const fn new() -> Self {
        Self {
            increment: 0.0,
            phase: 0.0,
            flags: 0,
        }
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn increment(&self) -> f32 {
        self.increment
    }
}

impl UserOscillator for PlainSaw {
    fn init(&mut self, _platform: u32, _api: u32) {
        *self = Self::new();
    }

    fn process(&mut self, params: &UserOscParams, out: &mut [i32]) {
        let flags = self.flags;
        self.flags = 0;

        self.increment = pitch_to_increment(params.pitch);
        let mut phase = if flags & FLAG_RESET != 0 {
            0.0
        } else {
            self.phase
        };

        for out_sample in out.iter_mut() {
            *out_sample = f32_to_q31(saw(phase));
            phase = advance_phase(phase, self.increment);
        }

        self.phase = phase;
    }

    fn note_on(&mut self, _params: &UserOscParams) {
        self.flags |= FLAG_RESET;
    }

    fn note_off(&mut self, _params: &UserOscParams) {}

    fn set_param(&mut self, _index: u16, _value: u16) {}
}
