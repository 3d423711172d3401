//! Drawing-surface abstraction used by the shapes and the driver.
//!
//! The engine never talks to a concrete canvas. It paints through [`Surface`],
//! which mirrors the subset of a 2D canvas context it needs: paint-state
//! save/restore, blend mode, translate/rotate, gradient fills, rectangles and
//! ellipses. The web front-end implements it over `CanvasRenderingContext2d`;
//! tests use [`RecordingSurface`].

use glam::DVec2;

/// Global compositing mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BlendMode {
    #[default]
    SourceOver,
    Screen,
}

impl BlendMode {
    /// Canvas `globalCompositeOperation` name.
    pub fn as_str(self) -> &'static str {
        match self {
            BlendMode::SourceOver => "source-over",
            BlendMode::Screen => "screen",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// Hue in degrees, saturation and lightness in percent, alpha in [0, 1].
    Hsla { h: f64, s: f64, l: f64, a: f64 },
    Rgba { r: u8, g: u8, b: u8, a: f64 },
}

impl Color {
    pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        Color::Hsla { h, s, l, a }
    }

    pub fn alpha(&self) -> f64 {
        match *self {
            Color::Hsla { a, .. } | Color::Rgba { a, .. } => a,
        }
    }

    /// CSS color string accepted by canvas fill styles and gradient stops.
    pub fn to_css(&self) -> String {
        match *self {
            Color::Hsla { h, s, l, a } => format!("hsla({h}, {s}%, {l}%, {a})"),
            Color::Rgba { r, g, b, a } => format!("rgba({r}, {g}, {b}, {a})"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

impl ColorStop {
    pub fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Fill style for subsequent `fill_rect`/`fill_ellipse` calls.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    Radial {
        center: DVec2,
        inner_radius: f64,
        outer_radius: f64,
        stops: Vec<ColorStop>,
    },
    Linear {
        from: DVec2,
        to: DVec2,
        stops: Vec<ColorStop>,
    },
}

/// 2D raster target. Operations are infallible from the engine's point of
/// view; backends drop failures of individual calls.
pub trait Surface {
    fn size(&self) -> (f64, f64);
    fn set_size(&mut self, width: f64, height: f64);

    /// Push paint state (blend mode, transform, fill style).
    fn save(&mut self);
    /// Pop the state pushed by the matching `save`.
    fn restore(&mut self);

    fn blend_mode(&self) -> BlendMode;
    fn set_blend_mode(&mut self, mode: BlendMode);

    fn translate(&mut self, offset: DVec2);
    fn rotate(&mut self, radians: f64);

    fn set_fill(&mut self, paint: &Paint);
    fn fill_rect(&mut self, origin: DVec2, size: DVec2);
    fn fill_ellipse(&mut self, center: DVec2, radii: DVec2, rotation: f64);
}

/// One recorded draw call with the state it was issued under.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect {
        /// Local coordinates as passed to `fill_rect`.
        origin: DVec2,
        size: DVec2,
        /// Rect center in surface coordinates.
        center: DVec2,
        paint: Paint,
        blend: BlendMode,
        rotation: f64,
    },
    Ellipse {
        center: DVec2,
        radii: DVec2,
        rotation: f64,
        paint: Paint,
        blend: BlendMode,
    },
}

#[derive(Clone, Debug)]
struct RecordedState {
    blend: BlendMode,
    translation: DVec2,
    rotation: f64,
    paint: Paint,
}

impl Default for RecordedState {
    fn default() -> Self {
        Self {
            blend: BlendMode::SourceOver,
            translation: DVec2::ZERO,
            rotation: 0.0,
            paint: Paint::Solid(Color::Rgba {
                r: 0,
                g: 0,
                b: 0,
                a: 1.0,
            }),
        }
    }
}

/// In-memory surface that records every fill along with the active blend
/// mode. Used to assert frame composition without a browser.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    state: RecordedState,
    stack: Vec<RecordedState>,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Number of `save` calls not yet matched by `restore`.
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn translation(&self) -> DVec2 {
        self.state.translation
    }

    pub fn rotation(&self) -> f64 {
        self.state.rotation
    }

    /// Map a local point through the current translation and rotation.
    fn to_surface(&self, local: DVec2) -> DVec2 {
        self.state.translation + DVec2::from_angle(self.state.rotation).rotate(local)
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn set_size(&mut self, width: f64, height: f64) {
        // Resizing a canvas resets its context state.
        self.width = width;
        self.height = height;
        self.state = RecordedState::default();
        self.stack.clear();
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(prev) = self.stack.pop() {
            self.state = prev;
        }
    }

    fn blend_mode(&self) -> BlendMode {
        self.state.blend
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.state.blend = mode;
    }

    fn translate(&mut self, offset: DVec2) {
        self.state.translation = self.to_surface(offset);
    }

    fn rotate(&mut self, radians: f64) {
        self.state.rotation += radians;
    }

    fn set_fill(&mut self, paint: &Paint) {
        self.state.paint = paint.clone();
    }

    fn fill_rect(&mut self, origin: DVec2, size: DVec2) {
        self.commands.push(DrawCommand::Rect {
            origin,
            size,
            center: self.to_surface(origin + size / 2.0),
            paint: self.state.paint.clone(),
            blend: self.state.blend,
            rotation: self.state.rotation,
        });
    }

    fn fill_ellipse(&mut self, center: DVec2, radii: DVec2, rotation: f64) {
        self.commands.push(DrawCommand::Ellipse {
            center: self.to_surface(center),
            radii,
            rotation,
            paint: self.state.paint.clone(),
            blend: self.state.blend,
        });
    }
}
