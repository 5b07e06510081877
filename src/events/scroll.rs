use crate::constants::SECTION_SELECTOR;
use crate::dom;
use crate::input;
use folio_core::groups::BurstEmitter;
use folio_core::input::SectionBand;
use folio_core::{PointerInput, SceneAnimator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Track `scrollY` for the camera and fire a burst each time a new
/// section reaches the band line.
pub fn wire_scroll(pointer: Rc<RefCell<PointerInput>>, animator: Rc<RefCell<SceneAnimator>>) {
    let Some(window) = web::window() else {
        return;
    };
    let mut band = SectionBand::default();
    let mut rng = StdRng::from_entropy();
    let win = window.clone();
    dom::add_passive_listener::<web::Event>(&window, "scroll", move |_| {
        pointer.borrow_mut().scroll_y = input::scroll_y(&win);
        let Some(document) = win.document() else {
            return;
        };
        // Sections are re-queried so late-inserted markup is picked up.
        let sections = dom::query_all(&document, SECTION_SELECTOR);
        for idx in band.crossings(input::section_rects(&sections)) {
            log::debug!("[scroll] section {idx} crossed the band");
            animator
                .borrow_mut()
                .trigger_burst(BurstEmitter::random_origin(&mut rng));
        }
    });
}
