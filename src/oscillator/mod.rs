//! Waveforms and the callback interface shared by all user oscillators.

pub mod plain_saw;

pub use plain_saw::PlainSaw;

use dyn_clone::DynClone;

use crate::params::UserOscParams;
use crate::utils::wrap;

/// Callback set the host drives an oscillator through.
///
/// Only [`process`](UserOscillator::process) runs on the audio thread. The
/// other callbacks may arrive from a control context between cycles, never
/// concurrently with a cycle.
pub trait UserOscillator: DynClone + Send {
    /// Resets the voice to its load-time state.
    fn init(&mut self, platform: u32, api: u32);

    /// Renders one block of Q31 samples, overwriting all of `out`.
    fn process(&mut self, params: &UserOscParams, out: &mut [i32]);

    fn note_on(&mut self, params: &UserOscParams);

    fn note_off(&mut self, params: &UserOscParams);

    /// Applies a raw 10-bit parameter value. Unknown indices are ignored.
    fn set_param(&mut self, index: u16, value: u16);
}

dyn_clone::clone_trait_object!(UserOscillator);

/// Naive sawtooth rising from -1.0 to just below 1.0 over one cycle.
///
/// Any phase is accepted and wrapped into `[0.0, 1.0)` first.
#[inline]
pub fn saw(phase: f32) -> f32 {
    2.0 * wrap(phase) - 1.0
}

/// Advances a phase by `increment` and wraps it into `[0.0, 1.0)`.
#[inline]
pub fn advance_phase(phase: f32, increment: f32) -> f32 {
    wrap(phase + increment)
}
