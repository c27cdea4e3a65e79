#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

pub mod abi;
pub mod fixed;
pub mod oscillator;
pub mod params;
pub mod units;
pub mod utils;
pub mod voice;

/// Audio sample rate of the host in Hz.
pub const SAMPLE_RATE: f32 = 48000.0;

/// Largest block the host requests in a single cycle.
pub const MAX_FRAMES: usize = 64;
