//! Mobile navigation overlay.

/// Inline `overflow` put on `<body>` while the overlay is open.
pub const BODY_LOCK_OVERFLOW: &str = "hidden";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip open/closed. Returns the new open flag.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close after a link is followed. Returns true when the state changed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Body `overflow` to apply, or `None` to clear the inline value.
    pub fn body_overflow(self) -> Option<&'static str> {
        self.open.then_some(BODY_LOCK_OVERFLOW)
    }

    /// Value for the toggle button's `aria-expanded`.
    pub fn aria_expanded(self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_with_body_scrollable() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.body_overflow(), None);
        assert_eq!(menu.aria_expanded(), "false");
    }

    #[test]
    fn toggle_locks_and_unlocks_body() {
        let mut menu = MenuState::default();
        assert!(menu.toggle());
        assert_eq!(menu.body_overflow(), Some("hidden"));
        assert_eq!(menu.aria_expanded(), "true");
        assert!(!menu.toggle());
        assert_eq!(menu.body_overflow(), None);
    }

    #[test]
    fn link_click_closes_only_an_open_menu() {
        let mut menu = MenuState::default();
        assert!(!menu.close());
        menu.toggle();
        assert!(menu.close());
        assert!(!menu.is_open());
        assert!(!menu.close());
    }
}
