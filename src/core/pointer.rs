use glam::Vec2;

/// Latest pointer coordinate in viewport pixels.
///
/// Written by the pointer-move listener and read by the cursor follower and
/// the particle field. `known` stays false until the first move arrives, so
/// the field can ignore the pointer before the user has touched the page
/// while the cursor still starts tracking from the origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub position: Vec2,
    pub known: bool,
}

impl PointerState {
    #[inline]
    pub fn update(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
        self.known = true;
    }

    /// Pointer position, or `None` if no move has been seen yet.
    #[inline]
    pub fn target(&self) -> Option<Vec2> {
        self.known.then_some(self.position)
    }
}

/// Format a coordinate as a CSS pixel length.
#[inline]
pub fn css_px(v: f32) -> String {
    format!("{}px", v)
}
