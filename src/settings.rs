//! Engine configuration overrides taken from canvas `data-*` attributes.
//! Kept free of web-sys so it can be exercised on the host.

use crate::constants::{ATTR_INTERVAL_MS, ATTR_SEED, ATTR_SHAPE_COUNT, MAX_SHAPE_COUNT};
use glowfield_core::EngineConfig;

/// Apply any recognised attribute on top of `base`. Unparseable or
/// out-of-range values are logged and ignored.
pub fn with_overrides(
    mut base: EngineConfig,
    attr: impl Fn(&str) -> Option<String>,
) -> EngineConfig {
    if let Some(raw) = attr(ATTR_INTERVAL_MS) {
        match raw.trim().parse::<f64>() {
            Ok(ms) if ms.is_finite() && ms > 0.0 => base.animation_interval_ms = ms,
            _ => log::warn!("ignoring {}={:?}", ATTR_INTERVAL_MS, raw),
        }
    }
    if let Some(raw) = attr(ATTR_SHAPE_COUNT) {
        match raw.trim().parse::<usize>() {
            Ok(n) if n <= MAX_SHAPE_COUNT => base.shape_count = n,
            _ => log::warn!("ignoring {}={:?}", ATTR_SHAPE_COUNT, raw),
        }
    }
    if let Some(raw) = attr(ATTR_SEED) {
        match raw.trim().parse::<u64>() {
            Ok(seed) => base.seed = Some(seed),
            Err(_) => log::warn!("ignoring {}={:?}", ATTR_SEED, raw),
        }
    }
    base
}
