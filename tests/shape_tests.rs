// Host-side tests for the shape model.

use glam::DVec2;
use glowfield_core::constants::*;
use glowfield_core::{BlendMode, DrawCommand, RecordingSurface, Shape, Surface};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::FRAC_PI_2;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn construction_samples_documented_ranges() {
    let mut r = rng(1);
    for _ in 0..200 {
        let s = Shape::new(&mut r, 1920.0, 1080.0);
        assert!((0.0..=1920.0).contains(&s.position.x));
        assert!((0.0..=1080.0).contains(&s.position.y));
        assert!((200.0..=500.0).contains(&s.base_width));
        assert!((200.0..=500.0).contains(&s.base_height));
        assert!((0.001..=0.003).contains(&s.speed));
        assert!((0.0..360.0).contains(&s.hue_offset));
        assert!((80.0..=100.0).contains(&s.saturation));
        assert!((50.0..=80.0).contains(&s.brightness));
        assert_eq!(s.drift, DVec2::ZERO);
        assert_eq!(s.drift_target, DVec2::ZERO);
        assert_eq!(s.last_drift_update, 0.0);
    }
}

#[test]
fn rendered_extents_stay_within_bounds() {
    let mut r = rng(2);
    for _ in 0..20 {
        let s = Shape::new(&mut r, 800.0, 600.0);
        let mut t = 0.0;
        while t < 200_000.0 {
            let f = s.frame_at(t);
            assert!(f.width >= s.base_width * 0.2 - 1e-9, "width collapsed at t={t}");
            assert!(f.width <= s.base_width * 1.0 + 1e-9);
            assert!(f.height >= s.base_height * 0.2 - 1e-9, "height collapsed at t={t}");
            assert!(f.height <= s.base_height * 1.0 + 1e-9);
            assert!((0.0..360.0).contains(&f.hue));
            t += 137.0;
        }
    }
}

#[test]
fn reset_refreshes_placement_but_keeps_identity() {
    let mut r = rng(3);
    let mut s = Shape::new(&mut r, 1920.0, 1080.0);
    s.update_drift(&mut r, 2_000.0);
    let before = s.clone();
    s.reset(&mut r, 1920.0, 1080.0);

    assert_ne!(s.position, before.position);
    assert_ne!(s.base_width.to_bits(), before.base_width.to_bits());
    assert_ne!(s.base_height.to_bits(), before.base_height.to_bits());
    assert_ne!(s.phase.to_bits(), before.phase.to_bits());

    let kept = |x: &Shape| {
        [
            x.hue_offset,
            x.saturation,
            x.brightness,
            x.width_freq,
            x.height_freq,
            x.width_phase,
            x.height_phase,
            x.speed,
        ]
        .map(f64::to_bits)
    };
    assert_eq!(kept(&s), kept(&before));
    assert_eq!(s.drift, before.drift);
    assert_eq!(s.drift_target, before.drift_target);
    assert_eq!(s.last_drift_update, before.last_drift_update);
}

#[test]
fn degenerate_surface_clusters_at_origin() {
    let mut r = rng(4);
    for (w, h) in [(0.0, 0.0), (-100.0, 50.0), (0.0, -1.0)] {
        let mut s = Shape::new(&mut r, w, h);
        assert_eq!(s.position.x, 0.0);
        assert!(s.position.y >= 0.0);
        s.reset(&mut r, w, h);
        assert_eq!(s.position.x, 0.0);
    }
}

#[test]
fn drift_target_holds_between_retargets() {
    let mut r = rng(5);
    let mut s = Shape::new(&mut r, 100.0, 100.0);

    // Not yet a full second since the initial timestamp of 0.
    s.update_drift(&mut r, 900.0);
    assert_eq!(s.drift_target, DVec2::ZERO);

    s.update_drift(&mut r, 1_500.0);
    let target = s.drift_target;
    assert_ne!(target, DVec2::ZERO);
    assert_eq!(s.last_drift_update, 1_500.0);

    let mut t = 1_600.0;
    while t <= 2_500.0 {
        s.update_drift(&mut r, t);
        assert_eq!(s.drift_target, target);
        t += 100.0;
    }
}

#[test]
fn drift_retargets_on_every_widely_spaced_call() {
    let mut r = rng(6);
    let mut s = Shape::new(&mut r, 100.0, 100.0);
    let mut prev = s.drift_target;
    for i in 1..=10 {
        let t = i as f64 * 1_100.0;
        s.update_drift(&mut r, t);
        assert_ne!(s.drift_target, prev);
        assert!(s.drift_target.x.abs() <= DRIFT_RANGE / 2.0);
        assert!(s.drift_target.y.abs() <= DRIFT_RANGE / 2.0);
        assert_eq!(s.last_drift_update, t);
        prev = s.drift_target;
    }
}

#[test]
fn drift_converges_without_overshoot() {
    let mut r = rng(7);
    let mut s = Shape::new(&mut r, 100.0, 100.0);
    s.update_drift(&mut r, 1_001.0);
    let target = s.drift_target;
    let mut dist = (target - s.drift).length();
    for _ in 0..1_000 {
        // Same timestamp: smoothing only, no new target.
        s.update_drift(&mut r, 1_001.0);
        let d = (target - s.drift).length();
        assert!(d <= dist);
        assert!(s.drift.x.abs() <= target.x.abs() + 1e-9);
        assert!(s.drift.y.abs() <= target.y.abs() + 1e-9);
        dist = d;
    }
    assert!(dist < 1e-3);
}

#[test]
fn draw_paints_glow_and_streak_cross_under_screen_blend() {
    let mut r = rng(8);
    let mut s = Shape::new(&mut r, 1000.0, 800.0);
    let mut surface = RecordingSurface::new(1000.0, 800.0);
    let t = 4_321.0;
    s.draw(&mut surface, &mut r, t);

    assert_eq!(surface.save_depth(), 0);
    assert_eq!(surface.blend_mode(), BlendMode::SourceOver);
    assert_eq!(surface.commands.len(), 3);

    let f = s.frame_at(t);
    match &surface.commands[0] {
        DrawCommand::Ellipse {
            center,
            radii,
            rotation,
            blend,
            ..
        } => {
            assert_eq!(*center, s.position + s.drift);
            assert_eq!(*radii, DVec2::new(f.width / 2.0, f.height / 2.0));
            assert_eq!(*rotation, f.glow_rotation);
            assert_eq!(*blend, BlendMode::Screen);
        }
        other => panic!("expected ellipse, got {other:?}"),
    }
    let rotations: Vec<f64> = surface.commands[1..]
        .iter()
        .map(|c| match c {
            DrawCommand::Rect {
                rotation,
                blend,
                center,
                ..
            } => {
                assert_eq!(*blend, BlendMode::Screen);
                // Both streak bands cross at the drifted glow center.
                assert!((*center - (s.position + s.drift)).length() < 1e-9);
                *rotation
            }
            other => panic!("expected streak rect, got {other:?}"),
        })
        .collect();
    assert!((rotations[0] - f.streak_rotation).abs() < 1e-12);
    assert!((rotations[1] - rotations[0] - FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn draw_restores_a_non_default_blend_mode() {
    let mut r = rng(9);
    let mut s = Shape::new(&mut r, 300.0, 300.0);
    let mut surface = RecordingSurface::new(300.0, 300.0);
    surface.set_blend_mode(BlendMode::Screen);
    surface.save();
    surface.set_blend_mode(BlendMode::SourceOver);
    s.draw(&mut surface, &mut r, 10.0);
    assert_eq!(surface.blend_mode(), BlendMode::SourceOver);
    assert_eq!(surface.save_depth(), 1);
}

#[test]
fn streak_cross_moves_with_the_shape() {
    let mut r = rng(10);
    let base = Shape::new(&mut r, 1200.0, 900.0);
    let t = 2_500.0;

    let centers = |shape: &Shape| {
        let mut shape = shape.clone();
        let mut surface = RecordingSurface::new(1200.0, 900.0);
        shape.draw(&mut surface, &mut rng(11), t);
        let expected = shape.position + shape.drift;
        let found: Vec<DVec2> = surface
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { center, .. } => Some(*center),
                _ => None,
            })
            .collect();
        (expected, found)
    };

    let (expected_a, found_a) = centers(&base);
    let mut moved = base.clone();
    moved.position = DVec2::ZERO;
    let (expected_b, found_b) = centers(&moved);

    assert_eq!(found_a.len(), 2);
    for c in &found_a {
        assert!((*c - expected_a).length() < 1e-9);
    }
    for c in &found_b {
        assert!((*c - expected_b).length() < 1e-9);
    }
    assert!((found_a[0] - found_b[0]).length() > 1.0);
}
