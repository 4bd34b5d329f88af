//! Scroll-aware navbar
//!
//! Hides while scrolling down past a threshold, reappears on any upward
//! scroll, and switches from transparent to solid once off the top.

use serde::{Deserialize, Serialize};

pub const CLASS_HIDDEN: &str = "nav-hidden";
pub const CLASS_SOLID: &str = "nav-solid";
pub const CLASS_TRANSPARENT: &str = "nav-transparent";

/// Scroll offsets (pixels) at which the navbar changes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavbarThresholds {
    /// Scrolling down only hides the bar below this offset
    pub hide_after: f64,
    /// Background turns solid below this offset
    pub solid_after: f64,
}

impl Default for NavbarThresholds {
    fn default() -> Self {
        Self {
            hide_after: 100.0,
            solid_after: 50.0,
        }
    }
}

/// Navbar state driven by scroll events
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavbarState {
    pub last_scroll_y: f64,
    pub hidden: bool,
    pub solid: bool,
    #[serde(skip)]
    thresholds: NavbarThresholds,
}

impl Default for NavbarState {
    fn default() -> Self {
        Self::new(NavbarThresholds::default())
    }
}

impl NavbarState {
    /// Visible and transparent at the top of the page
    pub fn new(thresholds: NavbarThresholds) -> Self {
        Self {
            last_scroll_y: 0.0,
            hidden: false,
            solid: false,
            thresholds,
        }
    }

    /// Start from the page's current scroll offset
    pub fn at(mut self, scroll_y: f64) -> Self {
        self.last_scroll_y = scroll_y;
        self
    }

    /// React to a scroll event
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.hidden = scroll_y > self.last_scroll_y && scroll_y > self.thresholds.hide_after;
        self.solid = scroll_y > self.thresholds.solid_after;
        self.last_scroll_y = scroll_y;
    }

    /// Classes the navbar element should carry
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::with_capacity(2);
        if self.hidden {
            classes.push(CLASS_HIDDEN);
        }
        classes.push(if self.solid {
            CLASS_SOLID
        } else {
            CLASS_TRANSPARENT
        });
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_transparent() {
        let nav = NavbarState::default();
        assert_eq!(nav.classes(), vec![CLASS_TRANSPARENT]);
    }

    #[test]
    fn test_scroll_down_hides_past_threshold() {
        let mut nav = NavbarState::default();
        nav.on_scroll(80.0);
        // Solid but still visible: not past hide threshold yet
        assert!(!nav.hidden);
        assert!(nav.solid);

        nav.on_scroll(150.0);
        assert!(nav.hidden);
        assert_eq!(nav.classes(), vec![CLASS_HIDDEN, CLASS_SOLID]);
    }

    #[test]
    fn test_scroll_up_shows() {
        let mut nav = NavbarState::default();
        nav.on_scroll(300.0);
        assert!(nav.hidden);
        nav.on_scroll(290.0);
        assert!(!nav.hidden);
        assert!(nav.solid);
    }

    #[test]
    fn test_back_to_top_is_transparent() {
        let mut nav = NavbarState::default().at(200.0);
        nav.on_scroll(10.0);
        assert_eq!(nav.classes(), vec![CLASS_TRANSPARENT]);
    }

    #[test]
    fn test_same_offset_does_not_hide() {
        let mut nav = NavbarState::default().at(500.0);
        nav.on_scroll(500.0);
        assert!(!nav.hidden);
    }
}
