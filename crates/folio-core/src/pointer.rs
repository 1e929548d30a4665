use crate::signal::{MotionValue, PointerDriver, Signal};
use glam::Vec2;

/// Client-space rectangle of a tracked element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * 0.5
    }

    pub fn contains(&self, client: Vec2) -> bool {
        client.x >= self.left
            && client.x <= self.left + self.width
            && client.y >= self.top
            && client.y <= self.top + self.height
    }
}

/// Pointer position relative to a tracked element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for PointerSample {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<PointerSample> for Vec2 {
    fn from(s: PointerSample) -> Self {
        Vec2::new(s.x, s.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Anchor {
    /// Offsets from the element centre; leaving returns to (0, 0).
    Centered,
    /// Offsets from the top-left corner; leaving parks at the sentinel.
    Corner { rest: PointerSample },
}

/// Converts pointer events over one element into element-relative samples.
///
/// Samples are applied in arrival order and the latest always wins.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    anchor: Anchor,
    x: MotionValue,
    y: MotionValue,
}

impl PointerTracker {
    /// Tracker reporting offsets from the element centre (card tilt).
    pub fn centered() -> Self {
        Self {
            anchor: Anchor::Centered,
            x: MotionValue::default(),
            y: MotionValue::default(),
        }
    }

    /// Tracker reporting corner-relative offsets that parks at `rest` on leave (glare).
    pub fn with_sentinel(rest: PointerSample) -> Self {
        Self {
            anchor: Anchor::Corner { rest },
            x: MotionValue::new(rest.x),
            y: MotionValue::new(rest.y),
        }
    }

    pub fn on_pointer_move(&mut self, client: Vec2, bounds: &Bounds) -> PointerSample {
        let mut local = client - bounds.origin();
        if self.anchor == Anchor::Centered {
            local -= bounds.half_size();
        }
        self.x.set(local.x);
        self.y.set(local.y);
        self.sample()
    }

    pub fn on_pointer_leave(&mut self) -> PointerSample {
        let rest = self.rest();
        self.x.set(rest.x);
        self.y.set(rest.y);
        rest
    }

    /// Value the tracker returns to when the pointer leaves.
    pub fn rest(&self) -> PointerSample {
        match self.anchor {
            Anchor::Centered => PointerSample::default(),
            Anchor::Corner { rest } => rest,
        }
    }

    #[inline]
    pub fn sample(&self) -> PointerSample {
        PointerSample::new(self.x.value(), self.y.value())
    }

    pub fn x(&self) -> &MotionValue {
        &self.x
    }

    pub fn y(&self) -> &MotionValue {
        &self.y
    }
}

impl PointerDriver for PointerTracker {
    fn pointer_move(&mut self, client: Vec2, bounds: &Bounds) {
        self.on_pointer_move(client, bounds);
    }

    fn pointer_leave(&mut self) {
        self.on_pointer_leave();
    }
}
