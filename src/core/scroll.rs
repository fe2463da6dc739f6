use super::constants::{NAV_SCROLL_THRESHOLD_PX, REVEAL_VISIBLE_RATIO};

/// Thresholds for the scroll-driven UI.
#[derive(Clone, Copy, Debug)]
pub struct UiParams {
    pub nav_threshold_px: f64,
    pub reveal_ratio: f64,
}

impl Default for UiParams {
    fn default() -> Self {
        Self {
            nav_threshold_px: NAV_SCROLL_THRESHOLD_PX,
            reveal_ratio: REVEAL_VISIBLE_RATIO,
        }
    }
}

/// Whether the navbar should carry the `scrolled` class at `scroll_y`.
#[inline]
pub fn navbar_scrolled(scroll_y: f64, params: &UiParams) -> bool {
    scroll_y > params.nav_threshold_px
}

/// One-way latch for a reveal-tagged element.
#[derive(Clone, Copy, Debug, Default)]
pub struct RevealLatch {
    active: bool,
}

impl RevealLatch {
    /// Latch seeded with the element's current state.
    #[inline]
    pub fn new(active: bool) -> Self {
        Self { active }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed one intersection report. Returns true only on the report that
    /// activates the element; later reports never deactivate it.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.active || !intersecting {
            return false;
        }
        self.active = true;
        true
    }
}
