//! Frame driver: owns the pool and the surface, runs the per-frame
//! composition and fires the animation-change trigger.
//!
//! The driver never schedules anything itself. A [`FrameHost`] hands out
//! frame handles and resize-listener tokens; the host calls [`Driver::frame`]
//! with the frame timestamp and [`Driver::handle_resize`] on resize events.

use crate::config::EngineConfig;
use crate::paint::{Color, Paint, Surface};
use crate::pool::ShapePool;
use glam::DVec2;
use thiserror::Error;

/// Pending frame request, as returned by the host scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// Registration of the surface-size-change listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerToken(pub u32);

/// Environment services the driver depends on.
pub trait FrameHost {
    /// Size the surface should take (e.g. the window's inner size).
    fn viewport_size(&self) -> (f64, f64);
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
    fn listen_resize(&mut self) -> Option<ListenerToken>;
    fn unlisten_resize(&mut self, token: ListenerToken);
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DriverError {
    #[error("drawing surface unavailable")]
    SurfaceUnavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Uninitialized,
    Running,
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The driver was not running; nothing was drawn.
    Skipped,
    Drawn { triggered: bool },
}

impl FrameOutcome {
    pub fn triggered(self) -> bool {
        matches!(self, FrameOutcome::Drawn { triggered: true })
    }
}

pub struct Driver<S: Surface, H: FrameHost> {
    config: EngineConfig,
    state: DriverState,
    host: H,
    surface: Option<S>,
    pool: ShapePool,
    on_change: Box<dyn FnMut()>,
    /// Timestamp the interval is measured from; taken from the first frame
    /// after activation.
    last_trigger: Option<f64>,
    pending_frame: Option<FrameHandle>,
    resize_listener: Option<ListenerToken>,
}

impl<S: Surface, H: FrameHost> Driver<S, H> {
    pub fn new(config: EngineConfig, host: H, on_change: impl FnMut() + 'static) -> Self {
        let pool = ShapePool::new(config.seed);
        Self {
            config,
            state: DriverState::Uninitialized,
            host,
            surface: None,
            pool,
            on_change: Box::new(on_change),
            last_trigger: None,
            pending_frame: None,
            resize_listener: None,
        }
    }

    /// Enter Running: size the surface, build the pool, register for resizes
    /// and request the first frame. Activating a stopped driver starts over
    /// from scratch; activating a running one does nothing.
    pub fn activate(&mut self, surface: Option<S>) -> Result<(), DriverError> {
        if self.state == DriverState::Running {
            log::debug!("[driver] already running");
            return Ok(());
        }
        let Some(mut surface) = surface else {
            log::warn!("[driver] no drawing surface; staying idle");
            return Err(DriverError::SurfaceUnavailable);
        };

        let (w, h) = self.host.viewport_size();
        surface.set_size(w, h);
        let mut pool = ShapePool::new(self.config.seed);
        pool.initialize(w, h, self.config.shape_count);

        self.surface = Some(surface);
        self.pool = pool;
        self.last_trigger = None;
        self.resize_listener = self.host.listen_resize();
        self.pending_frame = self.host.request_frame();
        self.state = DriverState::Running;
        log::info!(
            "[driver] running: {} shapes on {:.0}x{:.0}",
            self.config.shape_count,
            w,
            h
        );
        Ok(())
    }

    /// Cancel the pending frame and drop the resize listener. Frames that
    /// still arrive afterwards are ignored.
    pub fn deactivate(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.host.cancel_frame(handle);
        }
        if let Some(token) = self.resize_listener.take() {
            self.host.unlisten_resize(token);
        }
        if self.state == DriverState::Running {
            self.state = DriverState::Stopped;
            self.surface = None;
            log::info!("[driver] stopped");
        }
    }

    /// Process one frame at `time` (ms, monotonically increasing).
    pub fn frame(&mut self, time: f64) -> FrameOutcome {
        self.pending_frame = None;
        if self.state != DriverState::Running {
            return FrameOutcome::Skipped;
        }

        let triggered = self.poll_trigger(time);

        let Some(surface) = self.surface.as_mut() else {
            return FrameOutcome::Skipped;
        };
        let (w, h) = surface.size();
        surface.set_fill(&Paint::Solid(Color::Rgba {
            r: 0,
            g: 0,
            b: 0,
            a: self.config.fade_alpha,
        }));
        surface.fill_rect(DVec2::ZERO, DVec2::new(w, h));
        self.pool.draw_all(surface, time);

        self.pending_frame = self.host.request_frame();
        FrameOutcome::Drawn { triggered }
    }

    /// Trigger step of the frame procedure: when a full interval has elapsed
    /// since the last trigger, record `time`, run the callback and soft-reset
    /// every shape. The first call after activation only records the base
    /// timestamp. Returns whether it fired.
    pub fn poll_trigger(&mut self, time: f64) -> bool {
        if self.state != DriverState::Running {
            return false;
        }
        // Frame clocks count from page load, not from activation.
        let Some(base) = self.last_trigger else {
            self.last_trigger = Some(time);
            return false;
        };
        if time - base < self.config.animation_interval_ms {
            return false;
        }
        self.last_trigger = Some(time);
        (self.on_change)();
        let (w, h) = self.surface_size();
        self.pool.reset_all(w, h);
        log::debug!("[driver] animation change at t={:.0}", time);
        true
    }

    /// Rebuild the pool at the new viewport size. Shape identity is lost.
    pub fn handle_resize(&mut self) {
        if self.state != DriverState::Running {
            return;
        }
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let (w, h) = self.host.viewport_size();
        surface.set_size(w, h);
        self.pool.initialize(w, h, self.config.shape_count);
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn pool(&self) -> &ShapePool {
        &self.pool
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn last_trigger(&self) -> Option<f64> {
        self.last_trigger
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    fn surface_size(&self) -> (f64, f64) {
        self.surface.as_ref().map_or((0.0, 0.0), |s| s.size())
    }
}

impl<S: Surface, H: FrameHost> Drop for Driver<S, H> {
    fn drop(&mut self) {
        self.deactivate();
    }
}
