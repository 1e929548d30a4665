// Host-side integration tests for the motion model: seeds, drift loops,
// pointer tracking and the card pipeline end to end.

use folio_core::*;
use glam::Vec2;

const FRAME: f32 = 1.0 / 60.0;

fn run<D: TimeDriver>(driver: &mut D, seconds: f32) {
    let steps = (seconds / FRAME).round() as usize;
    for _ in 0..steps {
        driver.advance(FRAME);
    }
}

#[test]
fn every_profile_seeds_inside_its_ranges() {
    let profiles = [
        DriftProfile::hero(),
        DriftProfile::about(),
        DriftProfile::technologies(),
        DriftProfile::projects(),
    ];
    let within = |v: f32, r: [f32; 2]| {
        if r[0] < r[1] {
            v >= r[0] && v < r[1]
        } else {
            v == r[0]
        }
    };
    let mut gen = ParamGen::seeded(2024);
    for profile in &profiles {
        for _ in 0..200 {
            let s = AnimationSeed::generate(profile, &mut gen);
            assert!(within(s.duration_secs, profile.duration_secs));
            assert!(within(s.delay_secs, profile.delay_secs));
            assert!(within(s.start.x_vw, profile.start_x_vw));
            assert!(within(s.start.y_vh, profile.start_y_vh));
            assert!(within(s.start.scale, profile.start_scale));
            assert!(within(s.start.rotation_deg, profile.start_rotation_deg));
            assert!(within(s.target.x_vw, profile.drift_x_vw));
            assert!(within(s.target.x_px, profile.drift_x_px));
            assert!(within(s.target.rotation_deg, profile.rotation_deg));
        }
    }
}

#[test]
fn opacity_is_zero_at_cycle_edges_and_peaks_mid_cycle() {
    for profile in [
        DriftProfile::hero(),
        DriftProfile::about(),
        DriftProfile::technologies(),
        DriftProfile::projects(),
    ] {
        let seed = AnimationSeed {
            duration_secs: 20.0,
            delay_secs: 0.0,
            ..AnimationSeed::generate(&profile, &mut ParamGen::seeded(1))
        };
        let mut drift = DriftAnimator::new(seed, &profile);
        for cycle in 0..4 {
            let base = cycle as f32 * 20.0;
            drift.advance((base - drift.elapsed()).max(0.0) + 1e-4);
            assert!(drift.frame(None).opacity < 1e-3, "cycle {cycle} start");
            drift.advance(10.0);
            assert!(drift.frame(None).opacity > 0.0, "cycle {cycle} middle");
            drift.advance(10.0 - 2e-4);
            assert!(drift.frame(None).opacity < 1e-3, "cycle {cycle} end");
        }
    }
}

#[test]
fn mirrored_drift_is_continuous_across_cycle_boundary() {
    let profile = DriftProfile::hero();
    let mut drift = DriftAnimator::spawn(&profile, &mut ParamGen::seeded(77));
    let s = *drift.seed();
    drift.advance(s.delay_secs + s.duration_secs - 0.01);
    let before = drift.frame(None);
    drift.advance(0.02);
    let after = drift.frame(None);
    assert!((before.x_vw - after.x_vw).abs() < 0.05);
    assert!((before.rotation_deg - after.rotation_deg).abs() < 0.5);
}

#[test]
fn identical_profiles_do_not_move_in_lockstep() {
    let profile = DriftProfile::hero();
    let mut gen = ParamGen::seeded(5);
    let mut a = DriftAnimator::spawn(&profile, &mut gen);
    let mut b = DriftAnimator::spawn(&profile, &mut gen);
    run(&mut a, 30.0);
    run(&mut b, 30.0);
    assert_ne!(a.frame(None), b.frame(None));
}

#[test]
fn pointer_leave_resets_raw_signals() {
    let bounds = Bounds::new(40.0, 80.0, 320.0, 240.0);
    let mut card = TiltCard::new();
    for i in 0..25 {
        card.pointer_move(Vec2::new(40.0 + i as f32 * 12.0, 80.0 + i as f32 * 9.0), &bounds);
    }
    card.pointer_leave();
    let (tilt, glare) = card.raw();
    assert_eq!(tilt, PointerSample::new(0.0, 0.0));
    assert_eq!(glare, PointerSample::new(-200.0, -200.0));
}

#[test]
fn card_returns_flat_after_hover_and_leave() {
    let bounds = Bounds::new(0.0, 0.0, 300.0, 200.0);
    let mut card = TiltCard::new();

    // Enter from the left edge, sweep across, exit
    let outside = Vec2::new(-50.0, 100.0);
    assert!(!bounds.contains(outside));
    for i in 0..30 {
        card.pointer_move(Vec2::new(10.0 * i as f32, 100.0 + i as f32), &bounds);
        card.advance(FRAME);
    }
    assert!(card.frame().translate.length() > 0.1);
    card.pointer_leave();
    run(&mut card, 3.0);

    let f = card.frame();
    assert!(f.translate.length() < 1e-3, "translate {:?}", f.translate);
    assert!(f.image_offset.length() < 1e-3);
    assert!((f.glare - Vec2::new(-200.0, -200.0)).length() < 1e-2, "glare {:?}", f.glare);
    assert!((f.scale - 1.0).abs() < 1e-3);
    assert!(!f.hovered);
}

#[test]
fn glare_moves_smoothly_when_pointer_jumps() {
    let bounds = Bounds::new(0.0, 0.0, 300.0, 200.0);
    let mut card = TiltCard::new();
    card.pointer_move(Vec2::new(150.0, 100.0), &bounds);
    run(&mut card, 1.0);
    card.pointer_leave();
    let mut prev = card.frame().glare;
    for _ in 0..120 {
        card.advance(FRAME);
        let g = card.frame().glare;
        assert!((g - prev).length() < 80.0, "glare jumped from {prev:?} to {g:?}");
        prev = g;
    }
}

#[test]
fn spring_and_map_compose_with_any_signal() {
    let mut raw = MotionValue::new(0.0);
    let mut spring = Spring::new(SpringConfig::TILT, 0.0);
    let map = LinearMap::new(TILT_INPUT_X, TILT_OUTPUT_X);
    raw.set(-150.0);
    spring.follow(&raw);
    run(&mut spring, 2.0);
    assert!((map.derive(&spring) + 8.0).abs() < 1e-3);

    let mut drift = DriftAnimator::spawn(&DriftProfile::about(), &mut ParamGen::seeded(4));
    run(&mut drift, 40.0);
    let opacity = drift.frame(None).opacity;
    spring.set_target(opacity);
    run(&mut spring, 2.0);
    assert!((spring.value() - opacity).abs() < 1e-2);
}
