// Shared wheel/starfield tuning constants used by the core and the web frontend.

// Wheel layout
pub const ITEM_HEIGHT_PX: f64 = 32.0; // height of one row on the cylinder face
pub const VISIBLE_COUNT: usize = 9; // rows the container is sized for
pub const EDGE_PADDING_ITEMS: usize = 4; // empty slots kept on the cylinder past the last item
pub const CONTAINER_SLACK_FACTOR: f64 = 0.25; // extra height over the diameter, in rows

// Render pass
pub const OPACITY_FALLOFF_PER_ITEM: f64 = 0.15;
pub const ACTIVE_DISTANCE: f64 = 0.5;

// Drag handling
pub const FRAME_MS: f64 = 16.0; // velocities are expressed per 16ms frame
pub const VELOCITY_BLEND_ALPHA: f64 = 0.6; // new = (1-α)*old + α*sample
pub const VELOCITY_THRESHOLD: f64 = 0.05; // items/frame below which release does not fling
pub const RUBBER_BAND_LIMIT: f64 = 0.5; // max overshoot past either end, in items

// Momentum projection: a 0.95 per-frame friction travels v / (1 - 0.95) = 20v
pub const FRICTION_PER_FRAME: f64 = 0.95;
pub const PROJECTION_FRAMES: f64 = 1.0 / (1.0 - FRICTION_PER_FRAME);

// Settle spring (unit mass)
pub const SPRING_STIFFNESS: f64 = 170.0;
pub const SPRING_DAMPING: f64 = 26.0;
pub const SETTLE_EPSILON: f64 = 1e-3;
pub const SETTLE_MAX_MS: f64 = 2000.0;

// Idle follow tween
pub const TWEEN_DURATION_MS: f64 = 300.0;
pub const SNAP_EPSILON: f64 = 0.01;

// Frame stepping
pub const MAX_FRAME_DT_MS: f64 = 64.0; // clamp after a hidden tab or a long stall
pub const MAX_SUBSTEP_SEC: f64 = 1.0 / 120.0;

// Page scroll-to-anchor animation
pub const PAGE_SCROLL_DURATION_MS: f64 = 450.0;

// Active heading detection: fraction of viewport height used as the activation line
pub const ACTIVATION_LINE_FRACTION: f64 = 0.3;

// Heading indent by depth
pub const INDENT_SHALLOW_PX: f64 = 12.0;
pub const INDENT_MEDIUM_PX: f64 = 24.0;
pub const INDENT_DEEP_PX: f64 = 36.0;
