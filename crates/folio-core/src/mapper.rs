use crate::signal::Signal;

/// Affine remap from an input domain onto an output range.
///
/// Values outside the domain extrapolate instead of clamping; smoothed pointer
/// offsets routinely overshoot their nominal range during fast motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMap {
    input: [f32; 2],
    output: [f32; 2],
}

impl LinearMap {
    pub const fn new(input: [f32; 2], output: [f32; 2]) -> Self {
        Self { input, output }
    }

    /// `v ↦ v * factor`, used for parallax layers.
    pub const fn scale(factor: f32) -> Self {
        Self::new([0.0, 1.0], [0.0, factor])
    }

    #[inline]
    pub fn apply(&self, value: f32) -> f32 {
        map_range(value, self.input, self.output)
    }

    /// Current value of `source` pushed through the map.
    #[inline]
    pub fn derive<S: Signal>(&self, source: &S) -> f32 {
        self.apply(source.value())
    }

    /// Map that first applies `self` and then `next`.
    pub fn then(&self, next: &LinearMap) -> LinearMap {
        LinearMap::new(self.input, [next.apply(self.output[0]), next.apply(self.output[1])])
    }
}

/// Linear interpolation of `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// A zero-width domain maps everything to `out_min`.
#[inline]
pub fn map_range(value: f32, input: [f32; 2], output: [f32; 2]) -> f32 {
    let span = input[1] - input[0];
    if span == 0.0 || !span.is_finite() {
        return output[0];
    }
    let t = (value - input[0]) / span;
    output[0] + t * (output[1] - output[0])
}
