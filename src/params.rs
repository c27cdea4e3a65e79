//! Parameters passed in by the host.

/// Per-cycle parameter record, laid out as the host passes it.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UserOscParams {
    /// Shape LFO value in Q31.
    pub shape_lfo: i32,

    /// Note in the high byte, fine tuning toward the next note in the low byte.
    pub pitch: u16,

    /// Filter cutoff as seen by the host, unused by the oscillators.
    pub cutoff: u16,

    /// Filter resonance as seen by the host, unused by the oscillators.
    pub resonance: u16,

    pub reserved0: [u16; 3],
}

impl UserOscParams {
    pub const fn with_pitch(pitch: u16) -> Self {
        Self {
            shape_lfo: 0,
            pitch,
            cutoff: 0,
            resonance: 0,
            reserved0: [0; 3],
        }
    }

    pub const fn with_note(note: u8, fine: u8) -> Self {
        Self::with_pitch(((note as u16) << 8) | fine as u16)
    }

    #[inline]
    pub fn note(&self) -> u8 {
        (self.pitch >> 8) as u8
    }

    #[inline]
    pub fn fine(&self) -> u8 {
        (self.pitch & 0xFF) as u8
    }
}

/// Parameter slots addressed by `set_param`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ParamIndex {
    Id1 = 0,
    Id2 = 1,
    Id3 = 2,
    Id4 = 3,
    Id5 = 4,
    Id6 = 5,
    Shape = 6,
    ShiftShape = 7,
}

impl TryFrom<u16> for ParamIndex {
    /// The unknown index.
    type Error = u16;

    fn try_from(index: u16) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Id1),
            1 => Ok(Self::Id2),
            2 => Ok(Self::Id3),
            3 => Ok(Self::Id4),
            4 => Ok(Self::Id5),
            5 => Ok(Self::Id6),
            6 => Ok(Self::Shape),
            7 => Ok(Self::ShiftShape),
            _ => Err(index),
        }
    }
}
