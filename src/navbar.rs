//! Navbar Visibility
//!
//! Sticky navbar hides while scrolling down past the threshold.

/// Scroll offset below which the navbar always stays visible
pub const HIDE_AFTER_PX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarState {
    pub visible: bool,
    pub last_scroll_y: f64,
}

impl Default for NavbarState {
    fn default() -> Self {
        Self { visible: true, last_scroll_y: 0.0 }
    }
}

impl NavbarState {
    pub fn on_scroll(self, scroll_y: f64) -> Self {
        Self {
            visible: !(scroll_y > self.last_scroll_y && scroll_y > HIDE_AFTER_PX),
            last_scroll_y: scroll_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_down_past_threshold_hides() {
        let nav = NavbarState::default().on_scroll(80.0);
        assert!(nav.visible);
        let nav = nav.on_scroll(150.0);
        assert!(!nav.visible);
        assert_eq!(nav.last_scroll_y, 150.0);
    }

    #[test]
    fn test_scroll_up_shows() {
        let nav = NavbarState::default().on_scroll(600.0);
        assert!(!nav.visible);
        let nav = nav.on_scroll(590.0);
        assert!(nav.visible);
    }

    #[test]
    fn test_same_offset_shows() {
        let nav = NavbarState::default().on_scroll(400.0).on_scroll(400.0);
        assert!(nav.visible);
    }
}
