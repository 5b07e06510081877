//! DOM side of the custom cursor: positions the dot and ring elements.

use crate::constants::{CURSOR_DOT_ID, CURSOR_RING_ID, HOVER_TARGETS};
use crate::dom;
use folio_core::cursor::CursorFollower;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct CursorView {
    dot: web::CssStyleDeclaration,
    ring: web::CssStyleDeclaration,
    follower: Rc<RefCell<CursorFollower>>,
}

impl CursorView {
    /// `None` when the page has no cursor elements.
    pub fn new(document: &web::Document, follower: Rc<RefCell<CursorFollower>>) -> Option<Self> {
        let dot = document
            .get_element_by_id(CURSOR_DOT_ID)
            .and_then(|e| dom::style_of(&e))?;
        let ring = document
            .get_element_by_id(CURSOR_RING_ID)
            .and_then(|e| dom::style_of(&e))?;
        Some(Self {
            dot,
            ring,
            follower,
        })
    }

    /// Ease the ring one step and write both elements' styles.
    pub fn frame(&self) {
        let mut f = self.follower.borrow_mut();
        f.step();
        let (dot, ring) = (f.dot(), f.ring());
        _ = self.dot.set_property("left", &format!("{}px", dot.x));
        _ = self.dot.set_property("top", &format!("{}px", dot.y));
        _ = self.ring.set_property("left", &format!("{}px", ring.x));
        _ = self.ring.set_property("top", &format!("{}px", ring.y));
    }

    fn apply_hover(&self) {
        let f = self.follower.borrow();
        let dot = format!("{}px", f.dot_size());
        let ring = format!("{}px", f.ring_size());
        _ = self.dot.set_property("width", &dot);
        _ = self.dot.set_property("height", &dot);
        _ = self.ring.set_property("width", &ring);
        _ = self.ring.set_property("height", &ring);
        _ = self.ring.set_property("border-color", f.ring_border());
    }
}

/// Grow the cursor while over links, buttons and cards.
pub fn wire_hover_targets(document: &web::Document, view: Rc<CursorView>) {
    for el in dom::query_all(document, HOVER_TARGETS) {
        for (event, hovering) in [("mouseenter", true), ("mouseleave", false)] {
            let view = view.clone();
            dom::add_listener::<web::Event>(&el, event, move |_| {
                view.follower.borrow_mut().set_hovering(hovering);
                view.apply_hover();
            });
        }
    }
}
