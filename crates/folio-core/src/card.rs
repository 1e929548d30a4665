use crate::constants::*;
use crate::mapper::LinearMap;
use crate::pointer::{Bounds, PointerSample, PointerTracker};
use crate::signal::{PointerDriver, Signal, TimeDriver};
use crate::spring::{Spring, SpringConfig};
use glam::Vec2;

/// Everything the renderer needs for one card on one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardFrame {
    /// Whole-card translation in px.
    pub translate: Vec2,
    /// Image layer offset in px, against the card.
    pub image_offset: Vec2,
    /// Title layer offset in px, against the card.
    pub title_offset: Vec2,
    /// Glare gradient centre, card-relative px.
    pub glare: Vec2,
    pub scale: f32,
    pub hovered: bool,
}

/// Pointer-reactive project card: tilt, glare and layered parallax.
///
/// Tilt follows centred pointer offsets through the heavy spring; the glare
/// follows corner offsets through the light one and parks off-card on leave.
#[derive(Clone, Debug)]
pub struct TiltCard {
    tilt: PointerTracker,
    glare: PointerTracker,
    tilt_x: Spring,
    tilt_y: Spring,
    glare_x: Spring,
    glare_y: Spring,
    scale: Spring,
    map_x: LinearMap,
    map_y: LinearMap,
    image: LinearMap,
    title: LinearMap,
    hovered: bool,
}

impl TiltCard {
    pub fn new() -> Self {
        Self::with_springs(SpringConfig::TILT, SpringConfig::GLARE)
    }

    pub fn with_springs(tilt: SpringConfig, glare: SpringConfig) -> Self {
        let rest = PointerSample::new(GLARE_SENTINEL[0], GLARE_SENTINEL[1]);
        Self {
            tilt: PointerTracker::centered(),
            glare: PointerTracker::with_sentinel(rest),
            tilt_x: Spring::new(tilt, 0.0),
            tilt_y: Spring::new(tilt, 0.0),
            glare_x: Spring::new(glare, rest.x),
            glare_y: Spring::new(glare, rest.y),
            scale: Spring::new(SpringConfig::HOVER, 1.0).with_rest(1e-4, 1e-4),
            map_x: LinearMap::new(TILT_INPUT_X, TILT_OUTPUT_X),
            map_y: LinearMap::new(TILT_INPUT_Y, TILT_OUTPUT_Y),
            image: LinearMap::scale(IMAGE_PARALLAX),
            title: LinearMap::scale(TITLE_PARALLAX),
            hovered: false,
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Raw (unsmoothed) tilt and glare samples.
    pub fn raw(&self) -> (PointerSample, PointerSample) {
        (self.tilt.sample(), self.glare.sample())
    }

    /// True once every spring has settled.
    pub fn is_settled(&self) -> bool {
        [
            &self.tilt_x,
            &self.tilt_y,
            &self.glare_x,
            &self.glare_y,
            &self.scale,
        ]
        .iter()
        .all(|s| s.is_at_rest())
    }

    pub fn frame(&self) -> CardFrame {
        let translate = Vec2::new(self.map_x.derive(&self.tilt_x), self.map_y.derive(&self.tilt_y));
        CardFrame {
            translate,
            image_offset: Vec2::new(self.image.apply(translate.x), self.image.apply(translate.y)),
            title_offset: Vec2::new(self.title.apply(translate.x), self.title.apply(translate.y)),
            glare: Vec2::new(self.glare_x.value(), self.glare_y.value()),
            scale: self.scale.value(),
            hovered: self.hovered,
        }
    }

    fn retarget(&mut self) {
        self.tilt_x.follow(self.tilt.x());
        self.tilt_y.follow(self.tilt.y());
        self.glare_x.follow(self.glare.x());
        self.glare_y.follow(self.glare.y());
        self.scale
            .set_target(if self.hovered { HOVER_SCALE } else { 1.0 });
    }
}

impl Default for TiltCard {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerDriver for TiltCard {
    fn pointer_move(&mut self, client: Vec2, bounds: &Bounds) {
        self.tilt.on_pointer_move(client, bounds);
        self.glare.on_pointer_move(client, bounds);
        self.hovered = true;
        self.retarget();
    }

    fn pointer_leave(&mut self) {
        self.tilt.on_pointer_leave();
        self.glare.on_pointer_leave();
        self.hovered = false;
        self.retarget();
    }
}

impl TimeDriver for TiltCard {
    fn advance(&mut self, dt_sec: f32) {
        self.tilt_x.advance(dt_sec);
        self.tilt_y.advance(dt_sec);
        self.glare_x.advance(dt_sec);
        self.glare_y.advance(dt_sec);
        self.scale.advance(dt_sec);
    }
}
