use folio_core::{SceneError, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hover-less devices (phones, tablets) get tilt parallax and no cursor.
pub fn is_touch_device(window: &web::Window) -> bool {
    window
        .match_media(crate::constants::TOUCH_MEDIA_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Current window size in CSS pixels.
pub fn window_viewport(window: &web::Window) -> Result<Viewport, SceneError> {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(w as u32, h as u32, window.device_pixel_ratio())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w_px, h_px) = viewport.surface_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
}

#[inline]
pub fn add_listener<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Register a passive listener (scroll, touch, orientation).
#[inline]
pub fn add_passive_listener<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

/// Inline `style` of an element, if it is an `HtmlElement`.
#[inline]
pub fn style_of(el: &web::Element) -> Option<web::CssStyleDeclaration> {
    el.dyn_ref::<web::HtmlElement>().map(|h| h.style())
}

/// `data-*` attribute by its attribute name (e.g. `"data-type"`).
#[inline]
pub fn data_attr(el: &web::Element, name: &str) -> Option<String> {
    el.get_attribute(name)
}
