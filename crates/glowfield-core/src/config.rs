use crate::constants::{ANIMATION_INTERVAL_MS, DEFAULT_SHAPE_COUNT, FADE_ALPHA};

/// Driver settings. Front-ends start from `Default` and override fields.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub shape_count: usize,
    /// Minimum frame time between two animation-change triggers (ms).
    pub animation_interval_ms: f64,
    pub fade_alpha: f64,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            shape_count: DEFAULT_SHAPE_COUNT,
            animation_interval_ms: ANIMATION_INTERVAL_MS,
            fade_alpha: FADE_ALPHA,
            seed: None,
        }
    }
}
