//! C callbacks exposing one process-wide [`WarpedSaw`] to the host.
//!
//! The host never calls into the oscillator from two contexts at once, so the
//! lock is never contended; it only makes the shared voice sound to Rust.

#![allow(non_snake_case)]

use spin::Mutex;

use crate::oscillator::UserOscillator;
use crate::params::UserOscParams;
use crate::voice::WarpedSaw;

static VOICE: Mutex<WarpedSaw> = Mutex::new(WarpedSaw::new());

/// Runs `f` with exclusive access to the voice behind the callbacks.
pub fn with_voice<R>(f: impl FnOnce(&mut WarpedSaw) -> R) -> R {
    f(&mut VOICE.lock())
}

#[no_mangle]
pub extern "C" fn OSC_INIT(platform: u32, api: u32) {
    VOICE.lock().init(platform, api);
}

/// Renders `frames` Q31 samples into `yn`.
///
/// # Safety
///
/// `params` must be null or point to a valid parameter record. `yn` must be
/// null or point to at least `frames` writable words not aliased elsewhere.
/// Null pointers make the call a no-op.
#[no_mangle]
pub unsafe extern "C" fn OSC_CYCLE(params: *const UserOscParams, yn: *mut i32, frames: u32) {
    let Some(params) = (unsafe { params.as_ref() }) else {
        return;
    };
    if yn.is_null() {
        return;
    }
    let out = unsafe { core::slice::from_raw_parts_mut(yn, frames as usize) };

    VOICE.lock().process(params, out);
}

/// # Safety
///
/// `params` must be null or point to a valid parameter record.
#[no_mangle]
pub unsafe extern "C" fn OSC_NOTEON(params: *const UserOscParams) {
    if let Some(params) = unsafe { params.as_ref() } {
        VOICE.lock().note_on(params);
    }
}

/// # Safety
///
/// `params` must be null or point to a valid parameter record.
#[no_mangle]
pub unsafe extern "C" fn OSC_NOTEOFF(params: *const UserOscParams) {
    if let Some(params) = unsafe { params.as_ref() } {
        VOICE.lock().note_off(params);
    }
}

#[no_mangle]
pub extern "C" fn OSC_PARAM(index: u16, value: u16) {
    VOICE.lock().set_param(index, value);
}
