//! Pitch to phase increment conversion.

#[allow(unused_imports)]
use num_traits::float::Float;

use spin::Once;

use crate::SAMPLE_RATE;

/// Number of entries in the note frequency table.
pub const NOTE_TABLE_SIZE: usize = 152;

/// Highest note index with its own table entry.
pub const MAX_NOTE: u8 = (NOTE_TABLE_SIZE - 1) as u8;

/// Upper frequency limit in Hz.
pub const MAX_NOTE_HZ: f32 = 23679.9709;

const FINE_SCALE: f32 = 1.0 / 255.0;

static NOTE_HZ: Once<[f32; NOTE_TABLE_SIZE]> = Once::new();

fn note_table() -> &'static [f32; NOTE_TABLE_SIZE] {
    NOTE_HZ.call_once(|| core::array::from_fn(|note| note_to_hz(note as f32)))
}

/// Equal tempered frequency of a note, with note 69 at 440 Hz.
#[inline]
pub fn note_to_hz(note: f32) -> f32 {
    440.0 * 2.0_f32.powf((note - 69.0) / 12.0)
}

/// Frequency in Hz of `note` bent toward the next note by `fine / 255`.
///
/// Notes above [`MAX_NOTE`] are clamped.
pub fn note_hz(note: u8, fine: u8) -> f32 {
    let table = note_table();
    let note = note.min(MAX_NOTE) as usize;
    let f0 = table[note];
    let f1 = table[(note + 1).min(NOTE_TABLE_SIZE - 1)];
    let f = f0 + (f1 - f0) * (fine as f32 * FINE_SCALE);

    f.min(MAX_NOTE_HZ)
}

/// Normalized per-sample phase increment for `note` and `fine`.
#[inline]
pub fn note_to_increment(note: u8, fine: u8) -> f32 {
    note_hz(note, fine) / SAMPLE_RATE
}

/// Phase increment for a packed pitch word: note in the high byte, fine in
/// the low byte.
#[inline]
pub fn pitch_to_increment(pitch: u16) -> f32 {
    note_to_increment((pitch >> 8) as u8, (pitch & 0xFF) as u8)
}
