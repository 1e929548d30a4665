//! CSS text for sampled frames. Pure string formatting, no DOM access.

use crate::constants::{GLARE_COLOR, GLARE_FADE_PCT};
use folio_core::{CardFrame, DriftFrame, GLARE_RADIUS_PX};
use glam::Vec2;

/// Transform for a floating icon. Viewport and pixel offsets are combined
/// with `calc` so the drift scales with the window.
pub fn drift_transform(f: &DriftFrame) -> String {
    format!(
        "translate(calc({:.3}vw + {:.2}px), calc({:.3}vh + {:.2}px)) scale({:.4}) rotate({:.2}deg)",
        f.x_vw, f.x_px, f.y_vh, f.y_px, f.scale, f.rotation_deg
    )
}

pub fn opacity(value: f32) -> String {
    format!("{:.4}", value.clamp(0.0, 1.0))
}

/// Whole-card transform: spring-driven translation plus hover scale.
pub fn card_transform(f: &CardFrame) -> String {
    format!(
        "translate({:.3}px, {:.3}px) scale({:.4})",
        f.translate.x, f.translate.y, f.scale
    )
}

pub fn layer_transform(offset: Vec2) -> String {
    format!("translate({:.3}px, {:.3}px)", offset.x, offset.y)
}

pub fn glare_background(glare: Vec2) -> String {
    format!(
        "radial-gradient({}px circle at {:.2}px {:.2}px, {}, transparent {}%)",
        GLARE_RADIUS_PX, glare.x, glare.y, GLARE_COLOR, GLARE_FADE_PCT
    )
}

pub fn seconds(value: f64) -> String {
    format!("{:.2}s", value)
}
