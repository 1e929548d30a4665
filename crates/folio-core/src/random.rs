//! Bounded random scalars used to seed per-element animation parameters.

use rand::prelude::*;

/// Source of the per-instance randomness behind floating elements.
///
/// Each parameter of an element is drawn exactly once, when its
/// [`AnimationSeed`](crate::AnimationSeed) is built, so re-rendering never
/// changes an element's timing.
pub struct ParamGen {
    rng: StdRng,
}

impl ParamGen {
    /// Generator seeded from the platform entropy source (`crypto.getRandomValues` on the web).
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator, mainly for tests and reproducible layouts.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform value in `[min, max)`.
    ///
    /// Reversed bounds sweep the same interval from the other end and return a
    /// value in `(max, min]`. Equal or non-finite bounds return `min`.
    pub fn random(&mut self, min: f32, max: f32) -> f32 {
        if !min.is_finite() || !max.is_finite() || min == max {
            return min;
        }
        if min < max {
            self.rng.gen_range(min..max)
        } else {
            min - self.rng.gen_range(0.0..(min - max))
        }
    }

    /// Draw from a `[min, max]` pair as written in the profile tables.
    #[inline]
    pub fn in_range(&mut self, range: [f32; 2]) -> f32 {
        self.random(range[0], range[1])
    }
}

impl Default for ParamGen {
    fn default() -> Self {
        Self::from_entropy()
    }
}
