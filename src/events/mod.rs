mod keyboard;
mod pointer;
mod scroll;

pub use keyboard::wire_lightbox_keys;
pub use pointer::{wire_mouse_parallax, wire_tilt_parallax};
pub use scroll::wire_scroll;

use crate::dom;
use folio_core::SceneAnimator;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keep the canvas backing store and the camera aspect in step with the window.
///
/// A zero-sized window (minimized, detached) is ignored and the previous
/// viewport stays in effect.
pub fn wire_resize(canvas: web::HtmlCanvasElement, animator: Rc<RefCell<SceneAnimator>>) {
    let Some(window) = web::window() else {
        return;
    };
    let win = window.clone();
    dom::add_listener::<web::Event>(&window, "resize", move |_| {
        match dom::window_viewport(&win) {
            Ok(viewport) => {
                dom::sync_canvas_backing_size(&canvas, &viewport);
                animator.borrow_mut().resize(viewport);
            }
            Err(e) => log::warn!("[resize] keeping previous viewport: {e}"),
        }
    });
}
