// Shared tuning constants for the shape model and frame driver.
// Times are in milliseconds (the unit of requestAnimationFrame timestamps).

// Trigger and pool
pub const ANIMATION_INTERVAL_MS: f64 = 15_000.0; // time between animation-change triggers
pub const DEFAULT_SHAPE_COUNT: usize = 10;
pub const FADE_ALPHA: f64 = 0.1; // opacity of the black trail fill each frame

// Shape placement and size
pub const BASE_EXTENT_MIN: f64 = 200.0;
pub const BASE_EXTENT_SPAN: f64 = 300.0;

// Pulsation oscillator
pub const PULSE_SPEED_MIN: f64 = 0.001;
pub const PULSE_SPEED_SPAN: f64 = 0.002;
pub const PULSE_MID: f64 = 0.8;
pub const PULSE_AMPLITUDE: f64 = 0.2;

// Breathing oscillators
pub const WIDTH_FREQ_MIN: f64 = 0.0005;
pub const HEIGHT_FREQ_MIN: f64 = 0.0007;
pub const BREATH_FREQ_SPAN: f64 = 0.001;
pub const BREATH_MID: f64 = 0.6;
pub const BREATH_AMPLITUDE: f64 = 0.4;

// Combined extent scale is clamped into this range
pub const MIN_EXTENT_SCALE: f64 = 0.2;
pub const MAX_EXTENT_SCALE: f64 = 1.0;

// Color
pub const HUE_RATE: f64 = 0.05; // degrees per ms
pub const SATURATION_MIN: f64 = 80.0;
pub const SATURATION_SPAN: f64 = 20.0;
pub const BRIGHTNESS_MIN: f64 = 50.0;
pub const BRIGHTNESS_SPAN: f64 = 30.0;

// Drift field
pub const DRIFT_RETARGET_MS: f64 = 1_000.0;
pub const DRIFT_RANGE: f64 = 150.0; // full width, so targets lie in ±75
pub const DRIFT_SMOOTHING: f64 = 0.02; // applied once per update call

// Rotation rates
pub const GLOW_ROTATION_RATE: f64 = 0.0002; // radians per ms
pub const STREAK_ROCK_RATE: f64 = 0.001;
pub const STREAK_ROCK_ANGLE: f64 = std::f64::consts::PI / 3.0;

// Streak appearance
pub const STREAK_SATURATION: f64 = 100.0;
pub const STREAK_LIGHTNESS: f64 = 80.0;
pub const STREAK_PEAK_ALPHA: f64 = 0.4;
