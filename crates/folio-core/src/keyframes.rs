use crate::easing::Easing;
use smallvec::SmallVec;

/// Evenly spaced keyframe values, eased per segment.
///
/// A track with values `[a, b, c]` reaches `a` at progress 0, `b` at 0.5 and
/// `c` at 1. A single value is a constant track.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframes {
    values: SmallVec<[f32; 5]>,
}

impl Keyframes {
    pub fn new(values: &[f32]) -> Self {
        let mut values: SmallVec<[f32; 5]> = values.iter().copied().collect();
        if values.is_empty() {
            values.push(0.0);
        }
        Self { values }
    }

    /// Two-point track from `from` to `to`.
    pub fn tween(from: f32, to: f32) -> Self {
        Self::new(&[from, to])
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn first(&self) -> f32 {
        self.values[0]
    }

    pub fn last(&self) -> f32 {
        self.values[self.values.len() - 1]
    }

    /// Value at `progress` in `[0, 1]`; out-of-range progress holds the end values.
    pub fn sample(&self, progress: f32, easing: Easing) -> f32 {
        let segments = self.values.len() - 1;
        if segments == 0 {
            return self.values[0];
        }
        let p = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let scaled = p * segments as f32;
        let index = (scaled.floor() as usize).min(segments - 1);
        let local = easing.apply(scaled - index as f32);
        let a = self.values[index];
        let b = self.values[index + 1];
        a + (b - a) * local
    }
}
