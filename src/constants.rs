// DOM hooks and interaction tuning for the web frontend.
// Wheel physics constants live in `wheel_core::constants`.

// Where the widget mounts and where headings come from
pub const WHEEL_SELECTOR: &str = "[data-toc-wheel]";
pub const HEADING_SELECTOR: &str =
    "article h1[id], article h2[id], article h3[id], article h4[id], article h5[id], article h6[id]";
pub const WHEEL_CONFIG_ATTRS: [&str; 3] = ["data-item-height", "data-visible-count", "data-tween-ms"];

// Starfield canvas, skipped when absent
pub const STAR_CANVAS_ID: &str = "star-canvas";
pub const DARK_THEME_CLASS: &str = "dark";

// Pointer travel (px) under which a press-release counts as a click
pub const CLICK_SLOP_PX: f64 = 4.0;

// Wheel 3D presentation
pub const PERSPECTIVE_PX: f64 = 1000.0;

// Row styling
pub const ACTIVE_ROW_CLASSES: [&str; 2] = ["text-fd-primary", "font-medium"];
pub const IDLE_ROW_CLASS: &str = "text-fd-muted-foreground";
pub const EMPTY_PLACEHOLDER: &str = "No headings found";

// Shooting star trail
pub const TRAIL_WIDTH_PX: f64 = 1.5;
pub const HEAD_RADIUS_PX: f64 = 1.5;
