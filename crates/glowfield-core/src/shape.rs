//! One glowing, drifting shape.
//!
//! A shape is a plain record of random draws. Placement, extents and pulse
//! phase are refreshed by [`Shape::reset`]; everything else (breathing rates,
//! color, drift) is its identity and only changes when the shape is rebuilt.

use crate::constants::*;
use crate::paint::{BlendMode, Color, ColorStop, Paint, Surface};
use glam::DVec2;
use rand::Rng;
use std::f64::consts::{FRAC_PI_2, TAU};

#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub position: DVec2,
    pub base_width: f64,
    pub base_height: f64,

    pub phase: f64,
    pub speed: f64,
    pub width_phase: f64,
    pub width_freq: f64,
    pub height_phase: f64,
    pub height_freq: f64,

    pub hue_offset: f64,
    pub saturation: f64,
    pub brightness: f64,

    pub drift: DVec2,
    pub drift_target: DVec2,
    pub last_drift_update: f64,
}

/// Geometry and color of a shape at one instant, before painting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeFrame {
    pub center: DVec2,
    pub width: f64,
    pub height: f64,
    pub hue: f64,
    pub glow_rotation: f64,
    pub streak_rotation: f64,
}

impl Shape {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        let mut shape = Self {
            position: DVec2::ZERO,
            base_width: 0.0,
            base_height: 0.0,
            phase: 0.0,
            speed: PULSE_SPEED_MIN + rng.gen::<f64>() * PULSE_SPEED_SPAN,
            width_phase: rng.gen::<f64>() * TAU,
            width_freq: WIDTH_FREQ_MIN + rng.gen::<f64>() * BREATH_FREQ_SPAN,
            height_phase: rng.gen::<f64>() * TAU,
            height_freq: HEIGHT_FREQ_MIN + rng.gen::<f64>() * BREATH_FREQ_SPAN,
            hue_offset: rng.gen::<f64>() * 360.0,
            saturation: SATURATION_MIN + rng.gen::<f64>() * SATURATION_SPAN,
            brightness: BRIGHTNESS_MIN + rng.gen::<f64>() * BRIGHTNESS_SPAN,
            drift: DVec2::ZERO,
            drift_target: DVec2::ZERO,
            last_drift_update: 0.0,
        };
        shape.reset(rng, width, height);
        shape
    }

    /// Soft reset: new placement, extents and pulse phase.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f64, height: f64) {
        // Degenerate surfaces collapse the placement range to the origin.
        self.position = DVec2::new(
            rng.gen::<f64>() * width.max(0.0),
            rng.gen::<f64>() * height.max(0.0),
        );
        self.base_width = BASE_EXTENT_MIN + rng.gen::<f64>() * BASE_EXTENT_SPAN;
        self.base_height = BASE_EXTENT_MIN + rng.gen::<f64>() * BASE_EXTENT_SPAN;
        self.phase = rng.gen::<f64>() * TAU;
    }

    /// Advance the drift field. The target is redrawn at most once per
    /// `DRIFT_RETARGET_MS`; smoothing toward it happens on every call.
    pub fn update_drift<R: Rng + ?Sized>(&mut self, rng: &mut R, time: f64) {
        if time - self.last_drift_update > DRIFT_RETARGET_MS {
            self.drift_target = DVec2::new(
                (rng.gen::<f64>() - 0.5) * DRIFT_RANGE,
                (rng.gen::<f64>() - 0.5) * DRIFT_RANGE,
            );
            self.last_drift_update = time;
        }
        self.drift += (self.drift_target - self.drift) * DRIFT_SMOOTHING;
    }

    /// Pure per-instant geometry; does not touch drift state.
    pub fn frame_at(&self, time: f64) -> ShapeFrame {
        let width_scale = (time * self.width_freq + self.width_phase).sin() * BREATH_AMPLITUDE
            + BREATH_MID;
        let height_scale = (time * self.height_freq + self.height_phase).sin()
            * BREATH_AMPLITUDE
            + BREATH_MID;
        let pulse = (time * self.speed + self.phase).sin() * PULSE_AMPLITUDE + PULSE_MID;

        ShapeFrame {
            center: self.position + self.drift,
            width: self.base_width * extent_scale(width_scale * pulse),
            height: self.base_height * extent_scale(height_scale * pulse),
            hue: wrap_hue(time * HUE_RATE + self.hue_offset),
            glow_rotation: time * GLOW_ROTATION_RATE,
            streak_rotation: (time * STREAK_ROCK_RATE).sin() * STREAK_ROCK_ANGLE,
        }
    }

    pub fn draw<S, R>(&mut self, surface: &mut S, rng: &mut R, time: f64)
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        self.update_drift(rng, time);
        let f = self.frame_at(time);

        surface.save();
        surface.set_blend_mode(BlendMode::Screen);

        surface.set_fill(&self.glow_paint(&f));
        surface.fill_ellipse(
            f.center,
            DVec2::new(f.width / 2.0, f.height / 2.0),
            f.glow_rotation,
        );

        // Cross of light streaks, rocking around the glow center.
        surface.translate(f.center);
        surface.rotate(f.streak_rotation);
        surface.set_fill(&streak_paint(&f));
        surface.fill_rect(
            DVec2::new(-f.width * 1.5, -f.height / 6.0),
            DVec2::new(f.width * 3.0, f.height / 3.0),
        );
        surface.rotate(FRAC_PI_2);
        surface.fill_rect(
            DVec2::new(-f.width * 1.5, -f.height / 8.0),
            DVec2::new(f.width * 3.0, f.height / 4.0),
        );

        surface.restore();
    }

    fn glow_paint(&self, f: &ShapeFrame) -> Paint {
        let (s, b) = (self.saturation, self.brightness);
        Paint::Radial {
            center: f.center,
            inner_radius: 0.0,
            outer_radius: f.width,
            stops: vec![
                ColorStop::new(0.0, Color::hsla(f.hue, s, b + 30.0, 0.7)),
                ColorStop::new(0.5, Color::hsla(wrap_hue(f.hue + 30.0), s, b + 20.0, 0.5)),
                ColorStop::new(1.0, Color::hsla(wrap_hue(f.hue + 60.0), s, b, 0.2)),
            ],
        }
    }
}

fn streak_paint(f: &ShapeFrame) -> Paint {
    let tint = |a| Color::hsla(f.hue, STREAK_SATURATION, STREAK_LIGHTNESS, a);
    Paint::Linear {
        from: DVec2::new(-f.width, -f.height),
        to: DVec2::new(f.width, f.height),
        stops: vec![
            ColorStop::new(0.0, tint(0.0)),
            ColorStop::new(0.5, tint(STREAK_PEAK_ALPHA)),
            ColorStop::new(1.0, tint(0.0)),
        ],
    }
}

#[inline]
fn extent_scale(raw: f64) -> f64 {
    raw.clamp(MIN_EXTENT_SCALE, MAX_EXTENT_SCALE)
}

#[inline]
pub fn wrap_hue(hue: f64) -> f64 {
    hue.rem_euclid(360.0)
}
