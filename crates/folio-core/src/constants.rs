// Shared motion tuning constants used by the web frontend and the core model.

// Card tilt: centred pointer offsets map onto a small card translation
pub const TILT_INPUT_X: [f32; 2] = [-150.0, 150.0]; // px from card centre
pub const TILT_INPUT_Y: [f32; 2] = [-100.0, 100.0];
pub const TILT_OUTPUT_X: [f32; 2] = [-8.0, 8.0]; // px of card translation
pub const TILT_OUTPUT_Y: [f32; 2] = [-6.0, 6.0];

// Nested layers move against the card to fake depth
pub const IMAGE_PARALLAX: f32 = -0.3;
pub const TITLE_PARALLAX: f32 = -0.2;

// Glare parks here while the pointer is outside the card
pub const GLARE_SENTINEL: [f32; 2] = [-200.0, -200.0];
pub const GLARE_RADIUS_PX: f32 = 200.0;

// Whole-card scale while hovered
pub const HOVER_SCALE: f32 = 1.03;

// Spring rest detection
pub const REST_DELTA: f32 = 0.01; // |position - target| below which the spring may settle
pub const REST_SPEED: f32 = 0.01; // |velocity| below which the spring may settle

// Scroll thresholds (px of page offset)
pub const NAVBAR_SCROLLED_AFTER: f64 = 20.0;
pub const BACK_TO_TOP_AFTER: f64 = 300.0;

// Timeline line drawing
pub const TIMELINE_TAIL_PX: f64 = 20.0; // line stops short of the container bottom
pub const TIMELINE_SECS_PER_ENTRY: f64 = 0.3;
pub const TIMELINE_MIN_DRAW_SECS: f64 = 2.0;

// Viewport breakpoints
pub const MOBILE_MAX_WIDTH: f64 = 768.0; // widths below this use the mobile layout
pub const MOBILE_ICON_COUNT: usize = 5;
pub const DESKTOP_ICON_COUNT: usize = 9;

// Contact form notices stay visible this long (seconds)
pub const NOTICE_SECS: f64 = 5.0;
