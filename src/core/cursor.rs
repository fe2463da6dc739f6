use super::constants::{OUTLINE_HOVER_SIZE_PX, OUTLINE_IDLE_SIZE_PX, OUTLINE_SMOOTHING};
use glam::Vec2;

/// Tuning for the outline ring.
#[derive(Clone, Copy, Debug)]
pub struct CursorParams {
    /// Gain of the first-order tracking filter, in (0, 1].
    pub smoothing: f32,
}

impl Default for CursorParams {
    fn default() -> Self {
        Self {
            smoothing: OUTLINE_SMOOTHING,
        }
    }
}

/// Lagging outline position that chases the pointer.
///
/// Each `step` closes a fixed fraction of the remaining gap, so for a
/// stationary target the distance shrinks by `1 - smoothing` per frame and
/// the outline never passes the target.
#[derive(Clone, Debug)]
pub struct CursorFollower {
    pub outline: Vec2,
    params: CursorParams,
}

impl CursorFollower {
    pub fn new(params: CursorParams) -> Self {
        Self {
            outline: Vec2::ZERO,
            params,
        }
    }

    /// Advance one frame toward `target` and return the new outline position.
    #[inline]
    pub fn step(&mut self, target: Vec2) -> Vec2 {
        self.outline += (target - self.outline) * self.params.smoothing;
        self.outline
    }
}

/// Inline style applied to the outline ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlineStyle {
    pub size_px: f32,
    pub border_color: &'static str,
    pub background_color: &'static str,
}

pub const OUTLINE_IDLE: OutlineStyle = OutlineStyle {
    size_px: OUTLINE_IDLE_SIZE_PX,
    border_color: "rgba(255, 255, 255, 0.4)",
    background_color: "transparent",
};

pub const OUTLINE_HOVER: OutlineStyle = OutlineStyle {
    size_px: OUTLINE_HOVER_SIZE_PX,
    border_color: "var(--cyan)",
    background_color: "rgba(255, 255, 255, 0.03)",
};

#[inline]
pub fn outline_style(hovered: bool) -> OutlineStyle {
    if hovered {
        OUTLINE_HOVER
    } else {
        OUTLINE_IDLE
    }
}

impl OutlineStyle {
    /// `(property, value)` pairs in the order they are written to the element.
    pub fn declarations(&self) -> [(&'static str, String); 4] {
        let size = format!("{}px", self.size_px);
        [
            ("width", size.clone()),
            ("height", size),
            ("border-color", self.border_color.to_string()),
            ("background-color", self.background_color.to_string()),
        ]
    }
}
