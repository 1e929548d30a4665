//! Ambient drift for floating background elements.
//!
//! Every element owns an [`AnimationSeed`] drawn once from a [`DriftProfile`]
//! and plays it forever: opacity fades in and out, the element wanders inside
//! a bounded virtual viewport and sweeps through a rotation arc. Elements keep
//! their own clocks, so no two of them move in step.

use crate::easing::Easing;
use crate::keyframes::Keyframes;
use crate::mapper::map_range;
use crate::random::ParamGen;
use crate::signal::{usable_dt, TimeDriver};

/// How a finished cycle continues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepeatMode {
    /// Restart from the beginning.
    Loop,
    /// Play the next cycle backwards.
    Mirror,
}

/// Bounded parameter ranges and keyframe tracks for one family of floating elements.
///
/// Ranges are `[min, max]` pairs fed to [`ParamGen::in_range`].
#[derive(Clone, Debug)]
pub struct DriftProfile {
    pub duration_secs: [f32; 2],
    pub delay_secs: [f32; 2],
    pub start_x_vw: [f32; 2],
    pub start_y_vh: [f32; 2],
    pub start_scale: [f32; 2],
    pub start_rotation_deg: [f32; 2],
    pub drift_x_vw: [f32; 2],
    pub drift_x_px: [f32; 2],
    /// `None` keeps the element on its start row.
    pub drift_y: Option<([f32; 2], [f32; 2])>,
    pub rotation_deg: [f32; 2],
    pub opacity: Keyframes,
    /// Scale keyframes; `None` holds the seeded start scale.
    pub scale: Option<Keyframes>,
    /// Scroll bias end points, each drawn from its own range.
    pub scroll_bias_px: Option<([f32; 2], [f32; 2])>,
    pub easing: Easing,
    pub repeat: RepeatMode,
}

impl DriftProfile {
    /// Tech glyphs behind the hero banner.
    pub fn hero() -> Self {
        Self {
            duration_secs: [20.0, 40.0],
            delay_secs: [0.0, 10.0],
            start_x_vw: [-100.0, 100.0],
            start_y_vh: [-100.0, 100.0],
            start_scale: [0.5, 1.2],
            start_rotation_deg: [0.0, 0.0],
            drift_x_vw: [-20.0, 20.0],
            drift_x_px: [-100.0, 100.0],
            drift_y: Some(([-20.0, 20.0], [-100.0, 100.0])),
            rotation_deg: [-360.0, 360.0],
            opacity: Keyframes::new(&[0.0, 0.3, 0.5, 0.3, 0.0]),
            scale: None,
            scroll_bias_px: None,
            easing: Easing::EaseInOut,
            repeat: RepeatMode::Mirror,
        }
    }

    /// Faint icons in the about section, nudged by scroll position.
    pub fn about() -> Self {
        Self {
            duration_secs: [30.0, 50.0],
            delay_secs: [0.0, 15.0],
            start_x_vw: [-60.0, 60.0],
            start_y_vh: [-60.0, 60.0],
            start_scale: [0.3, 0.9],
            start_rotation_deg: [0.0, 0.0],
            drift_x_vw: [-10.0, 10.0],
            drift_x_px: [-70.0, 70.0],
            drift_y: None,
            rotation_deg: [-120.0, 120.0],
            opacity: Keyframes::new(&[0.0, 0.05, 0.1, 0.05, 0.0]),
            scale: None,
            scroll_bias_px: Some(([-30.0, 30.0], [30.0, -30.0])),
            easing: Easing::Linear,
            repeat: RepeatMode::Mirror,
        }
    }

    /// Large outline shapes behind the technology list.
    pub fn technologies() -> Self {
        Self {
            duration_secs: [25.0, 45.0],
            delay_secs: [0.0, 10.0],
            start_x_vw: [-10.0, 10.0],
            start_y_vh: [-10.0, 10.0],
            start_scale: [0.3, 0.3],
            start_rotation_deg: [-100.0, 100.0],
            drift_x_vw: [-15.0, 15.0],
            drift_x_px: [-50.0, 50.0],
            drift_y: Some(([-15.0, 15.0], [-50.0, 50.0])),
            rotation_deg: [-360.0, 360.0],
            opacity: Keyframes::new(&[0.0, 0.3, 0.1, 0.3, 0.0]),
            scale: Some(Keyframes::new(&[0.3, 1.0, 0.6, 1.0, 0.3])),
            scroll_bias_px: None,
            easing: Easing::EaseInOut,
            repeat: RepeatMode::Loop,
        }
    }

    /// Corner shapes around the project gallery.
    pub fn projects() -> Self {
        Self {
            duration_secs: [20.0, 35.0],
            delay_secs: [0.0, 5.0],
            start_x_vw: [0.0, 0.0],
            start_y_vh: [0.0, 0.0],
            start_scale: [0.5, 0.5],
            start_rotation_deg: [-90.0, 90.0],
            drift_x_vw: [0.0, 0.0],
            drift_x_px: [0.0, 0.0],
            drift_y: None,
            rotation_deg: [360.0, 720.0],
            opacity: Keyframes::new(&[0.0, 0.5, 0.2, 0.0]),
            scale: Some(Keyframes::new(&[0.5, 1.2, 0.8, 0.5])),
            scroll_bias_px: None,
            easing: Easing::Linear,
            repeat: RepeatMode::Loop,
        }
    }

    /// Look up a preset by the name used in markup (`data-drift="hero"`).
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "hero" => Some(Self::hero()),
            "about" => Some(Self::about()),
            "technologies" | "tech" => Some(Self::technologies()),
            "projects" => Some(Self::projects()),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StartOffset {
    pub x_vw: f32,
    pub y_vh: f32,
    pub scale: f32,
    pub rotation_deg: f32,
}

/// Where the element heads during one cycle, as viewport units plus pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DriftTarget {
    pub x_vw: f32,
    pub x_px: f32,
    pub y_vh: f32,
    pub y_px: f32,
    pub rotation_deg: f32,
}

/// Per-element animation parameters, drawn once at mount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSeed {
    pub duration_secs: f32,
    pub delay_secs: f32,
    pub start: StartOffset,
    pub target: DriftTarget,
    pub scroll_bias_px: Option<[f32; 2]>,
}

impl AnimationSeed {
    pub fn generate(profile: &DriftProfile, gen: &mut ParamGen) -> Self {
        let duration_secs = gen.in_range(profile.duration_secs);
        let delay_secs = gen.in_range(profile.delay_secs);
        let start = StartOffset {
            x_vw: gen.in_range(profile.start_x_vw),
            y_vh: gen.in_range(profile.start_y_vh),
            scale: gen.in_range(profile.start_scale),
            rotation_deg: gen.in_range(profile.start_rotation_deg),
        };
        let x_vw = gen.in_range(profile.drift_x_vw);
        let x_px = gen.in_range(profile.drift_x_px);
        let (y_vh, y_px) = match profile.drift_y {
            Some((vh, px)) => (gen.in_range(vh), gen.in_range(px)),
            None => (start.y_vh, 0.0),
        };
        let target = DriftTarget {
            x_vw,
            x_px,
            y_vh,
            y_px,
            rotation_deg: gen.in_range(profile.rotation_deg),
        };
        let scroll_bias_px = profile
            .scroll_bias_px
            .map(|(from, to)| [gen.in_range(from), gen.in_range(to)]);
        Self {
            duration_secs,
            delay_secs,
            start,
            target,
            scroll_bias_px,
        }
    }
}

/// Sampled state of a floating element, ready for a CSS transform.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DriftFrame {
    pub opacity: f32,
    pub x_vw: f32,
    pub x_px: f32,
    pub y_vh: f32,
    pub y_px: f32,
    pub scale: f32,
    pub rotation_deg: f32,
}

/// Plays one element's seed on its own clock.
#[derive(Clone, Debug)]
pub struct DriftAnimator {
    seed: AnimationSeed,
    opacity: Keyframes,
    scale: Keyframes,
    x_vw: Keyframes,
    x_px: Keyframes,
    y_vh: Keyframes,
    y_px: Keyframes,
    rotation: Keyframes,
    easing: Easing,
    repeat: RepeatMode,
    elapsed: f32,
}

impl DriftAnimator {
    pub fn new(seed: AnimationSeed, profile: &DriftProfile) -> Self {
        let s = seed.start;
        let t = seed.target;
        Self {
            seed,
            opacity: profile.opacity.clone(),
            scale: profile
                .scale
                .clone()
                .unwrap_or_else(|| Keyframes::new(&[s.scale])),
            x_vw: Keyframes::tween(s.x_vw, t.x_vw),
            x_px: Keyframes::tween(0.0, t.x_px),
            y_vh: Keyframes::tween(s.y_vh, t.y_vh),
            y_px: Keyframes::tween(0.0, t.y_px),
            rotation: Keyframes::tween(s.rotation_deg, t.rotation_deg),
            easing: profile.easing,
            repeat: profile.repeat,
            elapsed: 0.0,
        }
    }

    /// Draw a fresh seed from `profile` and build its animator.
    pub fn spawn(profile: &DriftProfile, gen: &mut ParamGen) -> Self {
        Self::new(AnimationSeed::generate(profile, gen), profile)
    }

    pub fn seed(&self) -> &AnimationSeed {
        &self.seed
    }

    /// Seconds on this element's clock, delay included. Whole mirror pairs
    /// are folded away once the delay has passed, so the value stays below
    /// `delay + 2 * duration`.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Progress through the current cycle in `[0, 1]`, after mirroring.
    /// `None` while the start delay is still running.
    pub fn phase(&self) -> Option<f32> {
        let active = self.elapsed - self.seed.delay_secs;
        if active < 0.0 {
            return None;
        }
        let duration = self.seed.duration_secs.max(f32::EPSILON);
        let cycles = active / duration;
        let cycle = cycles.floor();
        let local = cycles - cycle;
        let backwards = self.repeat == RepeatMode::Mirror && (cycle as u64) % 2 == 1;
        Some(if backwards { 1.0 - local } else { local })
    }

    /// Sample the element. `scroll_progress` in `[0, 1]` adds the seeded
    /// vertical bias when the profile uses one.
    pub fn frame(&self, scroll_progress: Option<f32>) -> DriftFrame {
        let mut frame = match self.phase() {
            None => DriftFrame {
                opacity: 0.0,
                x_vw: self.seed.start.x_vw,
                x_px: 0.0,
                y_vh: self.seed.start.y_vh,
                y_px: 0.0,
                scale: self.seed.start.scale,
                rotation_deg: self.seed.start.rotation_deg,
            },
            Some(p) => {
                let e = self.easing;
                DriftFrame {
                    opacity: self.opacity.sample(p, e),
                    x_vw: self.x_vw.sample(p, e),
                    x_px: self.x_px.sample(p, e),
                    y_vh: self.y_vh.sample(p, e),
                    y_px: self.y_px.sample(p, e),
                    scale: self.scale.sample(p, e),
                    rotation_deg: self.rotation.sample(p, e),
                }
            }
        };
        if let (Some(bias), Some(progress)) = (self.seed.scroll_bias_px, scroll_progress) {
            let progress = if progress.is_finite() {
                progress.clamp(0.0, 1.0)
            } else {
                0.0
            };
            frame.y_px += map_range(progress, [0.0, 1.0], bias);
        }
        frame
    }
}

impl TimeDriver for DriftAnimator {
    fn advance(&mut self, dt_sec: f32) {
        if let Some(dt) = usable_dt(dt_sec) {
            self.elapsed += dt;
            self.fold_clock();
        }
    }
}

impl DriftAnimator {
    /// Drop whole forward+backward pairs from the clock. The sampled phase is
    /// unchanged for both repeat modes, and `f32` keeps frame resolution.
    fn fold_clock(&mut self) {
        let period = 2.0 * self.seed.duration_secs.max(f32::EPSILON);
        let active = self.elapsed - self.seed.delay_secs;
        if active >= period {
            self.elapsed = self.seed.delay_secs + active.rem_euclid(period);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(profile: &DriftProfile, seed: u64) -> DriftAnimator {
        DriftAnimator::spawn(profile, &mut ParamGen::seeded(seed))
    }

    #[test]
    fn seeds_respect_profile_ranges() {
        let profile = DriftProfile::hero();
        let mut gen = ParamGen::seeded(3);
        for _ in 0..500 {
            let s = AnimationSeed::generate(&profile, &mut gen);
            assert!((20.0..40.0).contains(&s.duration_secs));
            assert!((0.0..10.0).contains(&s.delay_secs));
            assert!((-100.0..100.0).contains(&s.start.x_vw));
            assert!((0.5..1.2).contains(&s.start.scale));
            assert!((-360.0..360.0).contains(&s.target.rotation_deg));
            assert!(s.scroll_bias_px.is_none());
        }
    }

    #[test]
    fn separate_elements_get_separate_seeds() {
        let profile = DriftProfile::hero();
        let mut gen = ParamGen::seeded(9);
        let a = AnimationSeed::generate(&profile, &mut gen);
        let b = AnimationSeed::generate(&profile, &mut gen);
        assert_ne!(a, b);
    }

    #[test]
    fn rests_invisible_during_delay() {
        let mut a = animator(&DriftProfile::hero(), 5);
        let delay = a.seed().delay_secs;
        a.advance(delay * 0.5);
        let f = a.frame(None);
        assert_eq!(f.opacity, 0.0);
        assert_eq!(f.x_vw, a.seed().start.x_vw);
        assert!(a.phase().is_none());
    }

    #[test]
    fn mirror_playback_reverses_on_odd_cycles() {
        let mut a = animator(&DriftProfile::hero(), 8);
        let (delay, duration) = (a.seed().delay_secs, a.seed().duration_secs);
        a.advance(delay + duration * 0.25);
        let forward = a.phase().unwrap();
        a.advance(duration);
        let backward = a.phase().unwrap();
        assert!((forward - 0.25).abs() < 1e-3);
        assert!((backward - 0.75).abs() < 1e-3);
    }

    #[test]
    fn loop_playback_restarts() {
        let mut a = animator(&DriftProfile::technologies(), 8);
        let (delay, duration) = (a.seed().delay_secs, a.seed().duration_secs);
        a.advance(delay + duration * 1.25);
        assert!((a.phase().unwrap() - 0.25).abs() < 1e-3);
    }

    #[test]
    fn clock_keeps_running_after_days_of_uptime() {
        let mut a = animator(&DriftProfile::hero(), 8);
        let (delay, duration) = (a.seed().delay_secs, a.seed().duration_secs);
        // ~1 week of whole mirror pairs, then a quarter cycle
        a.advance(delay + 20_000.0 * duration + 0.25 * duration);
        assert!(a.elapsed() < delay + 2.0 * duration);
        let before = a.phase().unwrap();
        assert!((before - 0.25).abs() < 5e-3);

        for _ in 0..600 {
            a.advance(1.0 / 60.0);
        }
        let after = a.phase().unwrap();
        assert!(((after - before) - 10.0 / duration).abs() < 1e-3);
    }

    #[test]
    fn folding_preserves_phase_for_both_repeat_modes() {
        for profile in [DriftProfile::hero(), DriftProfile::technologies()] {
            let mut stepped = animator(&profile, 4);
            let mut direct = animator(&profile, 4);
            let (delay, duration) = (stepped.seed().delay_secs, stepped.seed().duration_secs);
            for _ in 0..7 {
                stepped.advance(duration * 0.5);
            }
            stepped.advance(delay);
            direct.advance(delay + duration * 3.5);
            assert!((stepped.phase().unwrap() - direct.phase().unwrap()).abs() < 1e-3);
        }
    }

    #[test]
    fn scroll_bias_shifts_only_vertical_pixels() {
        let mut a = animator(&DriftProfile::about(), 2);
        a.advance(a.seed().delay_secs + 1.0);
        let bias = a.seed().scroll_bias_px.unwrap();
        let top = a.frame(Some(0.0));
        let bottom = a.frame(Some(1.0));
        let none = a.frame(None);
        assert!((top.y_px - none.y_px - bias[0]).abs() < 1e-4);
        assert!((bottom.y_px - none.y_px - bias[1]).abs() < 1e-4);
        assert_eq!(top.opacity, bottom.opacity);
        assert_eq!(top.x_vw, bottom.x_vw);
    }

    #[test]
    fn named_profiles_resolve() {
        assert!(DriftProfile::named("hero").is_some());
        assert!(DriftProfile::named("tech").is_some());
        assert!(DriftProfile::named("footer").is_none());
    }
}
