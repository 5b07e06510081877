use folio_core::input::{pointer_from_client, pointer_from_tilt, SectionRect};
use web_sys as web;

// ---------------- Event readers ----------------
#[inline]
pub fn pointer_from_mouse(ev: &web::MouseEvent, window: &web::Window) -> [f32; 2] {
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
    pointer_from_client(ev.client_x() as f64, ev.client_y() as f64, w, h)
}

#[inline]
pub fn pointer_from_orientation(ev: &web::DeviceOrientationEvent) -> [f32; 2] {
    pointer_from_tilt(ev.gamma(), ev.beta())
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Current viewport-relative extents of `sections`, in the given order.
pub fn section_rects(sections: &[web::Element]) -> Vec<SectionRect> {
    sections
        .iter()
        .map(|s| {
            let r = s.get_bounding_client_rect();
            SectionRect {
                top: r.top(),
                bottom: r.bottom(),
            }
        })
        .collect()
}

/// Client x of the first touch point in `list`, if any.
#[inline]
pub fn first_touch_x(list: &web::TouchList) -> Option<f64> {
    list.get(0).map(|t| t.client_x() as f64)
}
