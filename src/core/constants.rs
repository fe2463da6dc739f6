// Numeric tuning shared by the cursor, particle field and scroll UI.

// Cursor
pub const OUTLINE_SMOOTHING: f32 = 0.15; // fraction of the remaining gap closed per frame
pub const OUTLINE_IDLE_SIZE_PX: f32 = 28.0;
pub const OUTLINE_HOVER_SIZE_PX: f32 = 45.0;

// Particle field population
pub const PARTICLE_COUNT: usize = 80;
pub const NODE_SPEED_SPAN: f32 = 0.3; // initial velocity components in [-span/2, span/2)
pub const NODE_SMALL_RADIUS: f32 = 1.5;
pub const NODE_LARGE_RADIUS: f32 = 3.0;
pub const NODE_LARGE_PROBABILITY: f64 = 0.2;
pub const NODE_CYAN_PROBABILITY: f64 = 0.5;

// Pointer repulsion
pub const REPEL_RADIUS: f32 = 150.0;
pub const REPEL_STRENGTH: f32 = 0.02;

// Links between neighbours
pub const LINK_DISTANCE: f32 = 140.0;
pub const LINK_ALPHA_MAX: f32 = 0.2;
pub const LINK_LINE_WIDTH: f64 = 0.5;

// Node drawing
pub const NODE_ALPHA: f64 = 0.8;

// Scroll UI
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 50.0; // strict: scrolled only when offset > threshold
pub const REVEAL_VISIBLE_RATIO: f64 = 0.15;
