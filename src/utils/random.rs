//! Fast 32-bit pseudo random number generator.
//!
//! Each voice owns its generator so renders are reproducible from a seed.

/// Seed used after [`Random::new`].
pub const DEFAULT_SEED: u32 = 0x21;

#[derive(Debug, Clone)]
pub struct Random {
    state: u32,
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

impl Random {
    pub const fn new() -> Self {
        Self {
            state: DEFAULT_SEED,
        }
    }

    #[inline]
    pub fn seed(&mut self, seed: u32) {
        self.state = seed;
    }

    #[inline]
    pub fn get_word(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// White noise sample, uniform in `[-1.0, 1.0)`.
    #[inline]
    pub fn white(&mut self) -> f32 {
        ((self.get_word() as i32) >> 8) as f32 / 8388608.0
    }
}
