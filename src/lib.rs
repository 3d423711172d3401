#![cfg(target_arch = "wasm32")]
use glowfield_core::{Driver, DriverState, EngineConfig, QuoteRotator};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod frame;
mod overlay;
mod settings;

use canvas::CanvasSurface;
use frame::{WebDriver, WebHost};

thread_local! {
    // One background per canvas id, including the one mounted by `start`.
    static MOUNTED: RefCell<HashMap<String, Background>> = RefCell::new(HashMap::new());
}

/// Handle to a mounted background. Handles for the same canvas share one
/// driver; `unmount` cancels the frame loop and the resize listener.
#[wasm_bindgen]
#[derive(Clone)]
pub struct Background {
    driver: Rc<RefCell<WebDriver>>,
    canvas: Option<web::HtmlCanvasElement>,
}

#[wasm_bindgen]
impl Background {
    /// Mount onto the canvas with id `canvas_id`. `on_change`, if given, is
    /// called (with no arguments) on every animation change after the quote
    /// overlay has been updated.
    /// Mounting a canvas that already has a background returns a handle to
    /// the existing one; `on_change` is then ignored.
    pub fn mount(canvas_id: &str, on_change: Option<js_sys::Function>) -> Result<Background, JsValue> {
        mount_once(canvas_id, on_change).map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    /// Handle to the background already mounted on `canvas_id`, such as the
    /// one `start` mounts on the default canvas.
    pub fn mounted(canvas_id: &str) -> Option<Background> {
        MOUNTED.with(|m| m.borrow().get(canvas_id).cloned())
    }

    /// Stop drawing. A later `activate` starts over with fresh shapes.
    pub fn unmount(&self) {
        self.driver.borrow_mut().deactivate();
    }

    pub fn activate(&self) {
        let surface = self.canvas.clone().and_then(CanvasSurface::from_canvas);
        if let Err(e) = self.driver.borrow_mut().activate(surface) {
            log::warn!("background not activated: {}", e);
        }
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.driver.borrow().state() == DriverState::Running
    }
}

fn mount_once(canvas_id: &str, on_change: Option<js_sys::Function>) -> anyhow::Result<Background> {
    if let Some(existing) = Background::mounted(canvas_id) {
        if on_change.is_some() {
            log::warn!("#{} already mounted; on_change ignored", canvas_id);
        }
        return Ok(existing);
    }
    let background = init(canvas_id, on_change)?;
    if background.canvas.is_some() {
        MOUNTED.with(|m| {
            m.borrow_mut()
                .insert(canvas_id.to_string(), background.clone())
        });
    }
    Ok(background)
}

fn init(canvas_id: &str, on_change: Option<js_sys::Function>) -> anyhow::Result<Background> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // A missing canvas is not fatal: the driver simply stays idle.
    let canvas = dom::canvas_by_id(&document, canvas_id);
    if canvas.is_none() {
        log::warn!("missing #{}", canvas_id);
    }
    let config = settings::with_overrides(EngineConfig::default(), |name| {
        canvas.as_ref().and_then(|c| c.get_attribute(name))
    });

    let rotator = Rc::new(RefCell::new(QuoteRotator::with_defaults(config.seed)));
    overlay::show_quote(&document, rotator.borrow().current());

    let on_animation_change = {
        let rotator = rotator.clone();
        let document = document.clone();
        move || {
            let quote = rotator.borrow_mut().advance().to_string();
            overlay::show_quote(&document, &quote);
            // Runs outside the frame so the page may unmount from inside it.
            if let Some(f) = on_change.clone() {
                dom::defer(move || {
                    if let Err(e) = f.call0(&JsValue::NULL) {
                        log::error!("on_change callback failed: {:?}", e);
                    }
                });
            }
        }
    };

    let driver = Rc::new(RefCell::new(Driver::new(
        config,
        WebHost::new(window),
        on_animation_change,
    )));
    frame::wire_callbacks(&driver);

    let background = Background { driver, canvas };
    background.activate();
    Ok(background)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("glowfield starting");

    let has_default_canvas = dom::window_document()
        .and_then(|d| dom::canvas_by_id(&d, constants::CANVAS_ID))
        .is_some();
    if !has_default_canvas {
        return Ok(());
    }
    if let Err(e) = mount_once(constants::CANVAS_ID, None) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}
