use crate::constants::{QUOTE_ID, QUOTE_ZOOM_MS, QUOTE_ZOOM_SCALE};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Show `text` in the quote overlay with a short zoom-in that settles back.
pub fn show_quote(document: &web::Document, text: &str) {
    let Some(el) = document
        .get_element_by_id(QUOTE_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    el.set_text_content(Some(text));
    set_scale(&el, QUOTE_ZOOM_SCALE);

    let settle = Closure::once_into_js(move || set_scale(&el, 1.0));
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            settle.unchecked_ref(),
            QUOTE_ZOOM_MS,
        );
    }
}

#[inline]
fn set_scale(el: &web::HtmlElement, scale: f64) {
    _ = el
        .style()
        .set_property("transform", &format!("scale({scale})"));
}
