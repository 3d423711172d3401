use glam::DVec2;
use glowfield_core::{BlendMode, ColorStop, Paint, Surface};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// [`Surface`] over a `<canvas>` 2D context. Individual call failures are
/// dropped; the worst case is a missing shape for one frame.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` when the canvas cannot hand out a 2D context.
    pub fn from_canvas(canvas: web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    fn add_stops(gradient: &web::CanvasGradient, stops: &[ColorStop]) {
        for stop in stops {
            _ = gradient.add_color_stop(stop.offset as f32, &stop.color.to_css());
        }
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn blend_mode(&self) -> BlendMode {
        match self.ctx.global_composite_operation().as_deref() {
            Ok("screen") => BlendMode::Screen,
            _ => BlendMode::SourceOver,
        }
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        _ = self.ctx.set_global_composite_operation(mode.as_str());
    }

    fn translate(&mut self, offset: DVec2) {
        _ = self.ctx.translate(offset.x, offset.y);
    }

    fn rotate(&mut self, radians: f64) {
        _ = self.ctx.rotate(radians);
    }

    #[allow(deprecated)]
    fn set_fill(&mut self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => {
                self.ctx.set_fill_style(&JsValue::from_str(&color.to_css()));
            }
            Paint::Radial {
                center,
                inner_radius,
                outer_radius,
                stops,
            } => {
                let gradient = match self.ctx.create_radial_gradient(
                    center.x,
                    center.y,
                    *inner_radius,
                    center.x,
                    center.y,
                    *outer_radius,
                ) {
                    Ok(g) => g,
                    Err(e) => {
                        log::debug!("radial gradient rejected: {:?}", e);
                        return;
                    }
                };
                Self::add_stops(&gradient, stops);
                self.ctx.set_fill_style(&gradient);
            }
            Paint::Linear { from, to, stops } => {
                let gradient = self.ctx.create_linear_gradient(from.x, from.y, to.x, to.y);
                Self::add_stops(&gradient, stops);
                self.ctx.set_fill_style(&gradient);
            }
        }
    }

    fn fill_rect(&mut self, origin: DVec2, size: DVec2) {
        self.ctx.fill_rect(origin.x, origin.y, size.x, size.y);
    }

    fn fill_ellipse(&mut self, center: DVec2, radii: DVec2, rotation: f64) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .ellipse(center.x, center.y, radii.x, radii.y, rotation, 0.0, TAU);
        self.ctx.fill();
    }
}
