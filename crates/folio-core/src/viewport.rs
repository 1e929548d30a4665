use crate::constants::{DESKTOP_ICON_COUNT, MOBILE_ICON_COUNT, MOBILE_MAX_WIDTH};

/// Layout class of the current viewport.
///
/// Re-evaluated on every resize so background density follows the window
/// instead of freezing at first paint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Desktop,
}

impl Breakpoint {
    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_MAX_WIDTH {
            Breakpoint::Mobile
        } else {
            Breakpoint::Desktop
        }
    }

    /// How many of `total` floating icons should be visible.
    pub fn visible_icon_count(self, total: usize) -> usize {
        match self {
            Breakpoint::Mobile => total.min(MOBILE_ICON_COUNT),
            Breakpoint::Desktop => total.min(DESKTOP_ICON_COUNT),
        }
    }
}
