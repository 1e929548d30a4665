//! Easing curves applied to keyframe segments.

/// Timing curve for a tween, CSS semantics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    CircIn,
    CircOut,
    /// `cubic-bezier(x1, y1, x2, y2)`; x control points are clamped to `[0, 1]`.
    CubicBezier(f32, f32, f32, f32),
}

impl Default for Easing {
    fn default() -> Self {
        Easing::EaseInOut
    }
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        match self {
            Easing::Linear => t,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::CircIn => 1.0 - (1.0 - t * t).max(0.0).sqrt(),
            Easing::CircOut => (1.0 - (1.0 - t) * (1.0 - t)).max(0.0).sqrt(),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

const NEWTON_ITERATIONS: usize = 8;
const SUBDIVISION_ITERATIONS: usize = 24;
const SOLVE_EPSILON: f32 = 1e-6;

#[inline]
fn bezier_axis(a1: f32, a2: f32, s: f32) -> f32 {
    // B(s) with endpoints fixed at 0 and 1
    let inv = 1.0 - s;
    3.0 * inv * inv * s * a1 + 3.0 * inv * s * s * a2 + s * s * s
}

#[inline]
fn bezier_slope(a1: f32, a2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * a1 + 6.0 * inv * s * (a2 - a1) + 3.0 * s * s * (1.0 - a2)
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    let x1 = x1.clamp(0.0, 1.0);
    let x2 = x2.clamp(0.0, 1.0);
    if x1 == y1 && x2 == y2 {
        return t;
    }
    if t <= 0.0 || t >= 1.0 {
        return t;
    }

    // Solve x(s) = t for the curve parameter s, Newton first then bisection
    let mut s = t;
    let mut solved = false;
    for _ in 0..NEWTON_ITERATIONS {
        let err = bezier_axis(x1, x2, s) - t;
        if err.abs() < SOLVE_EPSILON {
            solved = true;
            break;
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < SOLVE_EPSILON {
            break;
        }
        s = (s - err / slope).clamp(0.0, 1.0);
    }
    if !solved {
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        s = t;
        for _ in 0..SUBDIVISION_ITERATIONS {
            let x = bezier_axis(x1, x2, s);
            if (x - t).abs() < SOLVE_EPSILON {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
            s = 0.5 * (lo + hi);
        }
    }
    bezier_axis(y1, y2, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::CircIn,
        Easing::CircOut,
        Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
    ];

    #[test]
    fn endpoints_are_fixed() {
        for e in ALL {
            assert!(e.apply(0.0).abs() < 1e-4, "{e:?} at 0");
            assert!((e.apply(1.0) - 1.0).abs() < 1e-4, "{e:?} at 1");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for e in ALL {
            let mut prev = e.apply(0.0);
            for i in 1..=100 {
                let v = e.apply(i as f32 / 100.0);
                assert!(v + 1e-4 >= prev, "{e:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            let a = Easing::EaseInOut.apply(t);
            let b = 1.0 - Easing::EaseInOut.apply(1.0 - t);
            assert!((a - b).abs() < 1e-3, "asymmetric at {t}: {a} vs {b}");
        }
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(Easing::Linear.apply(-2.0), 0.0);
        assert_eq!(Easing::Linear.apply(3.0), 1.0);
        assert_eq!(Easing::EaseOut.apply(f32::NAN), 0.0);
    }
}
