use crate::constants::*;

/// Progress of a section through the viewport, in `[0, 1]`.
///
/// 0 when the section's top edge touches the bottom of the viewport, 1 when
/// its bottom edge leaves through the top. `top` is the section's client-space
/// top (as from `getBoundingClientRect`).
pub fn section_progress(top: f64, height: f64, viewport_height: f64) -> f32 {
    let travel = viewport_height + height.max(0.0);
    if travel <= 0.0 || !travel.is_finite() || !top.is_finite() {
        return 0.0;
    }
    ((viewport_height - top) / travel).clamp(0.0, 1.0) as f32
}

/// Page-level scroll flags derived from the vertical offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub navbar_scrolled: bool,
    pub back_to_top_visible: bool,
}

impl ScrollState {
    pub fn from_offset(scroll_y: f64) -> Self {
        Self {
            navbar_scrolled: scroll_y > NAVBAR_SCROLLED_AFTER,
            back_to_top_visible: scroll_y > BACK_TO_TOP_AFTER,
        }
    }
}

/// Vertical line drawn down the experience timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelinePath {
    pub height: f64,
}

impl TimelinePath {
    pub fn new(height: f64) -> Self {
        Self { height }
    }

    /// SVG path data, or `None` before the container has been laid out.
    pub fn path_data(&self) -> Option<String> {
        if !(self.height > 0.0) {
            return None;
        }
        let end = (self.height - TIMELINE_TAIL_PX).max(0.0);
        Some(format!("M 1 0 V {end}"))
    }

    /// Seconds the line takes to draw for `entries` timeline items.
    pub fn draw_duration(entries: usize) -> f64 {
        (entries as f64 * TIMELINE_SECS_PER_ENTRY).max(TIMELINE_MIN_DRAW_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_spans_entry_to_exit() {
        // 800px viewport, 1200px section
        assert_eq!(section_progress(800.0, 1200.0, 800.0), 0.0);
        assert_eq!(section_progress(-1200.0, 1200.0, 800.0), 1.0);
        assert!((section_progress(-200.0, 1200.0, 800.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn progress_clamps_outside_viewport() {
        assert_eq!(section_progress(5000.0, 100.0, 800.0), 0.0);
        assert_eq!(section_progress(-5000.0, 100.0, 800.0), 1.0);
        assert_eq!(section_progress(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn scroll_thresholds_are_exclusive() {
        assert_eq!(ScrollState::from_offset(20.0), ScrollState::default());
        let s = ScrollState::from_offset(21.0);
        assert!(s.navbar_scrolled && !s.back_to_top_visible);
        let s = ScrollState::from_offset(301.0);
        assert!(s.navbar_scrolled && s.back_to_top_visible);
    }

    #[test]
    fn timeline_path_waits_for_layout() {
        assert_eq!(TimelinePath::new(0.0).path_data(), None);
        assert_eq!(TimelinePath::new(520.0).path_data().as_deref(), Some("M 1 0 V 500"));
    }

    #[test]
    fn draw_duration_has_a_floor() {
        assert_eq!(TimelinePath::draw_duration(2), 2.0);
        assert!((TimelinePath::draw_duration(10) - 3.0).abs() < 1e-9);
    }
}
