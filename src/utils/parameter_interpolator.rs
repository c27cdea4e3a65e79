//! Linear interpolation of control values across a render block.

/// Ramps a value from its previous block value to a new target in equal steps.
///
/// Keeps no reference to the ramped value so the owner can hold it in a local
/// while the voice state stays borrowed elsewhere.
#[derive(Debug, Default, Copy, Clone)]
pub struct ParameterInterpolator {
    increment: f32,
}

impl ParameterInterpolator {
    /// Sets up a ramp reaching `new_value` from `value` after `size` steps.
    ///
    /// A zero `size` gives a flat ramp.
    pub fn new(value: f32, new_value: f32, size: usize) -> Self {
        let mut interpolator = Self::default();
        interpolator.init(value, new_value, size);
        interpolator
    }

    pub fn init(&mut self, value: f32, new_value: f32, size: usize) {
        self.increment = if size == 0 {
            0.0
        } else {
            (new_value - value) / (size as f32)
        };
    }

    #[inline]
    pub fn increment(&self) -> f32 {
        self.increment
    }

    /// Advances `value` by one step and returns it.
    #[inline]
    pub fn update(&self, value: &mut f32) -> f32 {
        *value += self.increment;
        *value
    }
}
