use crate::canvas::CanvasSurface;
use crate::dom;
use glowfield_core::{Driver, FrameHandle, FrameHost, ListenerToken};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebDriver = Driver<CanvasSurface, WebHost>;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type ResizeSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Browser-backed [`FrameHost`]: requestAnimationFrame for frames and a
/// window `resize` listener. The closures are installed by [`wire_callbacks`]
/// once the driver is shared.
pub struct WebHost {
    window: web::Window,
    frame_cb: FrameSlot,
    resize_cb: ResizeSlot,
    next_token: u32,
}

impl WebHost {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            frame_cb: Rc::new(RefCell::new(None)),
            resize_cb: Rc::new(RefCell::new(None)),
            next_token: 0,
        }
    }
}

impl FrameHost for WebHost {
    fn viewport_size(&self) -> (f64, f64) {
        dom::viewport_size(&self.window)
    }

    fn request_frame(&mut self) -> Option<FrameHandle> {
        let slot = self.frame_cb.borrow();
        let cb = slot.as_ref()?;
        match self
            .window
            .request_animation_frame(cb.as_ref().unchecked_ref())
        {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0);
    }

    fn listen_resize(&mut self) -> Option<ListenerToken> {
        let slot = self.resize_cb.borrow();
        let cb = slot.as_ref()?;
        self.window
            .add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
            .ok()?;
        self.next_token += 1;
        Some(ListenerToken(self.next_token))
    }

    fn unlisten_resize(&mut self, _token: ListenerToken) {
        if let Some(cb) = self.resize_cb.borrow().as_ref() {
            _ = self
                .window
                .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
        }
    }
}

/// Install the frame and resize closures into the driver's host. Closures
/// hold a weak reference so dropping the driver tears everything down.
pub fn wire_callbacks(driver: &Rc<RefCell<WebDriver>>) {
    let (frame_slot, resize_slot) = {
        let d = driver.borrow();
        (d.host().frame_cb.clone(), d.host().resize_cb.clone())
    };

    let weak: Weak<RefCell<WebDriver>> = Rc::downgrade(driver);
    *frame_slot.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if let Some(d) = weak.upgrade() {
            d.borrow_mut().frame(timestamp);
        }
    }) as Box<dyn FnMut(f64)>));

    let weak = Rc::downgrade(driver);
    *resize_slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(d) = weak.upgrade() {
            d.borrow_mut().handle_resize();
        }
    }) as Box<dyn FnMut()>));
}
