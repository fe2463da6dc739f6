/// DOM hooks and CSS values the page markup and stylesheet agree on.
///
/// Selectors and class names live here so the wiring code never embeds
/// markup assumptions inline.
// Cursor elements
pub const CURSOR_DOT_SELECTOR: &str = ".cursor-dot";
pub const CURSOR_OUTLINE_SELECTOR: &str = ".cursor-outline";
pub const FINE_POINTER_QUERY: &str = "(pointer: fine)";

// Elements that enlarge the outline while hovered
pub const INTERACTIVE_SELECTORS: &str =
    "a, button, .btn-glow, .art-item, .project-card-3d, .edu-card, .grid-item";

// Background canvas
pub const BG_CANVAS_ID: &str = "bg-canvas";
pub const LINK_RGB: (u8, u8, u8) = (100, 116, 139); // slate

// Scroll UI
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const NAVBAR_SCROLLED_CLASS: &str = "scrolled";
pub const REVEAL_SELECTOR: &str = ".content-reveal";
pub const REVEAL_ACTIVE_CLASS: &str = "active";
