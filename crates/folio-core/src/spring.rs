//! Damped-spring smoothing for pointer-driven values.
//!
//! The spring is advanced with the closed-form solution of
//!
//! ```text
//! m·x'' + c·x' + k·x = 0        (x = position - target)
//! ```
//!
//! for whichever regime the damping ratio `ζ = c / (2·√(k·m))` puts it in.
//! Because each step is exact for a held target, the output stays continuous
//! and stable no matter how long a frame took.

use crate::constants::{REST_DELTA, REST_SPEED};
use crate::signal::{usable_dt, Signal, TimeDriver};

const MIN_PARAM: f32 = 1e-3;
// Ratios this close to 1 use the critically damped form
const CRITICAL_BAND: f32 = 1e-4;

/// Physical parameters of a spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Heavy preset for structural card tilt.
    pub const TILT: SpringConfig = SpringConfig {
        stiffness: 120.0,
        damping: 15.0,
        mass: 0.1,
    };

    /// Light, fast preset for the glare highlight.
    pub const GLARE: SpringConfig = SpringConfig {
        stiffness: 300.0,
        damping: 30.0,
        mass: 1.0,
    };

    /// Preset for the whole-card hover scale.
    pub const HOVER: SpringConfig = SpringConfig {
        stiffness: 200.0,
        damping: 15.0,
        mass: 1.0,
    };

    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
        .sanitized()
    }

    /// Replace non-finite or non-positive parameters with small positive ones.
    /// Damping may be zero.
    pub fn sanitized(self) -> Self {
        let positive = |v: f32| if v.is_finite() && v > MIN_PARAM { v } else { MIN_PARAM };
        Self {
            stiffness: positive(self.stiffness),
            damping: if self.damping.is_finite() && self.damping > 0.0 {
                self.damping
            } else {
                0.0
            },
            mass: positive(self.mass),
        }
    }

    /// Undamped angular frequency `ω₀ = √(k/m)`.
    #[inline]
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    /// `ζ = c / (2·√(k·m))`.
    #[inline]
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Largest fractional overshoot of a step response from rest.
    pub fn max_overshoot(&self) -> f32 {
        let zeta = self.damping_ratio();
        if zeta >= 1.0 {
            0.0
        } else {
            (-zeta * std::f32::consts::PI / (1.0 - zeta * zeta).sqrt()).exp()
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::TILT
    }
}

/// One smoothed axis following a raw target.
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    position: f32,
    velocity: f32,
    target: f32,
    rest_delta: f32,
    rest_speed: f32,
}

impl Spring {
    /// Spring at rest on `initial`.
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        let initial = if initial.is_finite() { initial } else { 0.0 };
        Self {
            config: config.sanitized(),
            position: initial,
            velocity: 0.0,
            target: initial,
            rest_delta: REST_DELTA,
            rest_speed: REST_SPEED,
        }
    }

    /// Override the settle thresholds, for values on a small scale (e.g. a 1.0..1.03 zoom).
    pub fn with_rest(mut self, delta: f32, speed: f32) -> Self {
        self.rest_delta = delta.abs();
        self.rest_speed = speed.abs();
        self
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Retarget the spring. Position and velocity carry over, so an abrupt
    /// target change never makes the output jump. Non-finite targets are ignored.
    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Follow the current value of another signal.
    pub fn follow<S: Signal>(&mut self, source: &S) {
        self.set_target(source.value());
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity == 0.0 && self.position == self.target
    }

    /// Place the spring on `value` at rest, skipping the animation.
    pub fn jump(&mut self, value: f32) {
        if value.is_finite() {
            self.position = value;
            self.target = value;
            self.velocity = 0.0;
        }
    }

    fn step(&mut self, t: f32) {
        let x0 = self.position - self.target;
        let v0 = self.velocity;
        if x0 == 0.0 && v0 == 0.0 {
            return;
        }
        let omega = self.config.natural_frequency();
        let zeta = self.config.damping_ratio();

        let (x, v) = if (zeta - 1.0).abs() < CRITICAL_BAND {
            let c = v0 + omega * x0;
            let decay = (-omega * t).exp();
            let x = (x0 + c * t) * decay;
            (x, c * decay - omega * x)
        } else if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let a = zeta * omega;
            let b = (v0 + a * x0) / omega_d;
            let decay = (-a * t).exp();
            let (sin, cos) = (omega_d * t).sin_cos();
            let x = decay * (x0 * cos + b * sin);
            let v = -a * x + decay * omega_d * (b * cos - x0 * sin);
            (x, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let e1 = (r1 * t).exp();
            let e2 = (r2 * t).exp();
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        };

        if !x.is_finite() || !v.is_finite() {
            // Degenerate parameters; settle rather than propagate NaN
            self.position = self.target;
            self.velocity = 0.0;
            return;
        }
        if x.abs() < self.rest_delta && v.abs() < self.rest_speed {
            self.position = self.target;
            self.velocity = 0.0;
        } else {
            self.position = self.target + x;
            self.velocity = v;
        }
    }
}

impl Signal for Spring {
    #[inline]
    fn value(&self) -> f32 {
        self.position
    }
}

impl TimeDriver for Spring {
    fn advance(&mut self, dt_sec: f32) {
        if let Some(dt) = usable_dt(dt_sec) {
            self.step(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, seconds: f32, dt: f32) -> (f32, f32) {
        let steps = (seconds / dt).round() as usize;
        let (mut lo, mut hi) = (spring.value(), spring.value());
        for _ in 0..steps {
            spring.advance(dt);
            lo = lo.min(spring.value());
            hi = hi.max(spring.value());
        }
        (lo, hi)
    }

    #[test]
    fn presets_land_in_expected_regimes() {
        assert!(SpringConfig::TILT.damping_ratio() > 1.0);
        assert!(SpringConfig::GLARE.damping_ratio() < 1.0);
        assert!(SpringConfig::TILT.natural_frequency() > SpringConfig::GLARE.natural_frequency());
    }

    #[test]
    fn converges_to_held_target() {
        for cfg in [
            SpringConfig::TILT,
            SpringConfig::GLARE,
            SpringConfig::HOVER,
            SpringConfig::new(100.0, 20.0, 1.0),
        ] {
            let mut s = Spring::new(cfg, 0.0);
            s.set_target(150.0);
            run(&mut s, 5.0, 1.0 / 60.0);
            assert!((s.value() - 150.0).abs() < 1e-2, "{cfg:?} ended at {}", s.value());
        }
    }

    #[test]
    fn step_overshoot_respects_damping_ratio() {
        for cfg in [SpringConfig::TILT, SpringConfig::GLARE, SpringConfig::HOVER] {
            let mut s = Spring::new(cfg, 0.0);
            s.set_target(100.0);
            let (lo, hi) = run(&mut s, 3.0, 1.0 / 120.0);
            let bound = 100.0 * (1.0 + cfg.max_overshoot()) + 1e-3;
            assert!(hi <= bound, "{cfg:?} peaked at {hi}, bound {bound}");
            assert!(lo >= -1e-3, "{cfg:?} undershot start: {lo}");
        }
    }

    #[test]
    fn abrupt_retarget_does_not_jump() {
        let mut s = Spring::new(SpringConfig::GLARE, 0.0);
        s.set_target(120.0);
        run(&mut s, 0.1, 1.0 / 60.0);
        let before = s.value();
        s.set_target(-200.0);
        assert_eq!(s.value(), before);
        s.advance(1.0 / 60.0);
        assert!((s.value() - before).abs() < 40.0);
    }

    #[test]
    fn long_frames_stay_stable() {
        let mut s = Spring::new(SpringConfig::TILT, 0.0);
        s.set_target(80.0);
        s.advance(10.0);
        assert!((s.value() - 80.0).abs() < 1e-2);
        assert!(s.is_at_rest());
    }

    #[test]
    fn invalid_input_is_ignored() {
        let mut s = Spring::new(SpringConfig::new(f32::NAN, -3.0, 0.0), 5.0);
        s.set_target(f32::INFINITY);
        assert_eq!(s.target(), 5.0);
        s.advance(-1.0);
        s.advance(f32::NAN);
        assert_eq!(s.value(), 5.0);
    }
}
