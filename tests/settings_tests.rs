// Host-side tests for canvas attribute overrides.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
#[path = "../src/settings.rs"]
mod settings;

use glowfield_core::EngineConfig;
use std::collections::HashMap;

fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn no_attributes_keeps_defaults() {
    let cfg = settings::with_overrides(EngineConfig::default(), attrs(&[]));
    assert_eq!(cfg, EngineConfig::default());
}

#[test]
fn valid_attributes_override() {
    let cfg = settings::with_overrides(
        EngineConfig::default(),
        attrs(&[
            ("data-interval-ms", "8000"),
            ("data-shape-count", " 24 "),
            ("data-seed", "42"),
        ]),
    );
    assert_eq!(cfg.animation_interval_ms, 8000.0);
    assert_eq!(cfg.shape_count, 24);
    assert_eq!(cfg.seed, Some(42));
}

#[test]
fn invalid_attributes_are_ignored() {
    let cfg = settings::with_overrides(
        EngineConfig::default(),
        attrs(&[
            ("data-interval-ms", "-5"),
            ("data-shape-count", "100000"),
            ("data-seed", "abc"),
        ]),
    );
    assert_eq!(cfg, EngineConfig::default());
}
