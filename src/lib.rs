#![cfg(target_arch = "wasm32")]
use folio_core::cursor::CursorFollower;
use folio_core::{PointerInput, SceneAnimator};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod cursor;
mod dom;
mod events;
mod frame;
mod gallery;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let touch = dom::is_touch_device(&window);

    // Page chrome works without the backdrop.
    let follower = (!touch).then(|| Rc::new(RefCell::new(CursorFollower::default())));
    let cursor_view = follower
        .clone()
        .and_then(|f| cursor::CursorView::new(&document, f))
        .map(Rc::new);
    if let Some(view) = &cursor_view {
        cursor::wire_hover_targets(&document, view.clone());
    }
    gallery::wire_filter_tabs(&document);
    if let Some(view) = gallery::GalleryView::new(&document) {
        let view = Rc::new(RefCell::new(view));
        gallery::wire_lightbox(&document, view.clone());
        events::wire_lightbox_keys(&document, view);
    }

    let pointer = Rc::new(RefCell::new(PointerInput::default()));
    if touch {
        events::wire_tilt_parallax(pointer.clone());
    } else {
        events::wire_mouse_parallax(&document, pointer.clone(), follower);
    }

    let backdrop = match init_backdrop(&window, &document, pointer).await {
        Ok(b) => b,
        Err(e) => {
            log::error!("backdrop init error: {:?}", e);
            None
        }
    };
    let frame_ctx = frame::FrameContext {
        backdrop,
        cursor: cursor_view,
    };
    if !frame_ctx.is_idle() {
        frame::start_loop(Rc::new(RefCell::new(frame_ctx)));
    }
    Ok(())
}

/// Canvas, GPU and scene. `Ok(None)` when there is nothing to draw on.
async fn init_backdrop(
    window: &web::Window,
    document: &web::Document,
    pointer: Rc<RefCell<PointerInput>>,
) -> anyhow::Result<Option<frame::Backdrop<'static>>> {
    let Some(canvas_el) = document.get_element_by_id(constants::CANVAS_ID) else {
        log::info!("no #{} canvas, backdrop disabled", constants::CANVAS_ID);
        return Ok(None);
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let viewport = dom::window_viewport(window)?;
    dom::sync_canvas_backing_size(&canvas, &viewport);

    let Some(gpu) = frame::init_gpu(&canvas).await else {
        return Ok(None);
    };

    let animator = Rc::new(RefCell::new(SceneAnimator::new(viewport, rand::random())));
    events::wire_resize(canvas.clone(), animator.clone());
    events::wire_scroll(pointer.clone(), animator.clone());

    Ok(Some(frame::Backdrop {
        animator,
        pointer,
        canvas,
        gpu,
        started: Instant::now(),
    }))
}
