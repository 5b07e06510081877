use crate::cursor::CursorView;
use crate::render;
use folio_core::{PointerInput, SceneAnimator};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The animated 3D scene and the surface it draws to.
pub struct Backdrop<'a> {
    pub animator: Rc<RefCell<SceneAnimator>>,
    pub pointer: Rc<RefCell<PointerInput>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState<'a>,
    pub started: Instant,
}

impl<'a> Backdrop<'a> {
    fn frame(&mut self) {
        let t = self.started.elapsed().as_secs_f32();
        let input = *self.pointer.borrow();

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = self.animator.borrow_mut().frame(t, &input, &mut self.gpu) {
            log::error!("render error: {:?}", e);
        }
    }
}

/// Everything advanced once per animation frame. Either part may be absent.
pub struct FrameContext<'a> {
    pub backdrop: Option<Backdrop<'a>>,
    pub cursor: Option<Rc<CursorView>>,
}

impl<'a> FrameContext<'a> {
    pub fn is_idle(&self) -> bool {
        self.backdrop.is_none() && self.cursor.is_none()
    }

    pub fn frame(&mut self) {
        if let Some(b) = &mut self.backdrop {
            b.frame();
        }
        if let Some(c) = &self.cursor {
            c.frame();
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::info!("WebGPU unavailable, backdrop disabled: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
