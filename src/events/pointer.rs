use crate::dom;
use crate::input;
use folio_core::cursor::CursorFollower;
use folio_core::PointerInput;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Desktop: cursor position drives the parallax and the cursor follower.
pub fn wire_mouse_parallax(
    document: &web::Document,
    pointer: Rc<RefCell<PointerInput>>,
    cursor: Option<Rc<RefCell<CursorFollower>>>,
) {
    let Some(window) = web::window() else {
        return;
    };
    dom::add_listener::<web::MouseEvent>(document, "mousemove", move |ev| {
        pointer
            .borrow_mut()
            .set_pointer(input::pointer_from_mouse(&ev, &window));
        if let Some(c) = &cursor {
            c.borrow_mut()
                .pointer_moved(ev.client_x() as f32, ev.client_y() as f32);
        }
    });
}

/// Touch devices: device tilt stands in for the pointer.
pub fn wire_tilt_parallax(pointer: Rc<RefCell<PointerInput>>) {
    let Some(window) = web::window() else {
        return;
    };
    dom::add_passive_listener::<web::DeviceOrientationEvent>(
        &window,
        "deviceorientation",
        move |ev| {
            pointer
                .borrow_mut()
                .set_pointer(input::pointer_from_orientation(&ev));
        },
    );
}
