// Front-end constants: element ids, attribute names and overlay timing.

// Elements
pub const CANVAS_ID: &str = "glow-canvas";
pub const QUOTE_ID: &str = "quote-text";

// Optional overrides read from the canvas element
pub const ATTR_INTERVAL_MS: &str = "data-interval-ms";
pub const ATTR_SHAPE_COUNT: &str = "data-shape-count";
pub const ATTR_SEED: &str = "data-seed";

// Quote overlay zoom on change
pub const QUOTE_ZOOM_SCALE: f64 = 1.1;
pub const QUOTE_ZOOM_MS: i32 = 300; // time before settling back to scale(1)

// Upper bound accepted for data-shape-count
pub const MAX_SHAPE_COUNT: usize = 256;
