//! Continuously-updating numeric signals and the two drivers that feed them.
//!
//! Pointer input and the frame clock are modelled as separate producers so
//! the same downstream pieces ([`Spring`](crate::Spring),
//! [`LinearMap`](crate::LinearMap)) work against either.

use crate::pointer::Bounds;
use glam::Vec2;

/// Anything that exposes a current scalar value.
pub trait Signal {
    fn value(&self) -> f32;
}

/// Producer advanced by the frame clock.
pub trait TimeDriver {
    /// Move the producer forward by `dt_sec` seconds. Non-finite or negative
    /// steps are ignored.
    fn advance(&mut self, dt_sec: f32);
}

/// Producer fed by pointer events over a bounded element.
pub trait PointerDriver {
    /// `client` is the pointer position in viewport coordinates.
    fn pointer_move(&mut self, client: Vec2, bounds: &Bounds);
    fn pointer_leave(&mut self);
}

/// Raw settable signal, the value a driver writes and a spring follows.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionValue {
    value: f32,
}

impl MotionValue {
    pub fn new(value: f32) -> Self {
        Self { value }
    }

    /// Store `value`; non-finite input keeps the previous value.
    #[inline]
    pub fn set(&mut self, value: f32) {
        if value.is_finite() {
            self.value = value;
        }
    }
}

impl Signal for MotionValue {
    #[inline]
    fn value(&self) -> f32 {
        self.value
    }
}

impl Signal for f32 {
    #[inline]
    fn value(&self) -> f32 {
        *self
    }
}

/// Clamp a raw frame interval into something the drivers accept.
#[inline]
pub(crate) fn usable_dt(dt_sec: f32) -> Option<f32> {
    (dt_sec.is_finite() && dt_sec > 0.0).then_some(dt_sec)
}
