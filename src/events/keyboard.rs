use crate::dom;
use crate::gallery::GalleryView;
use folio_core::gallery::LightboxKey;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_lightbox_keys(document: &web::Document, gallery: Rc<RefCell<GalleryView>>) {
    dom::add_listener::<web::KeyboardEvent>(document, "keydown", move |ev| {
        if let Some(key) = LightboxKey::from_key(&ev.key()) {
            gallery.borrow_mut().key(key);
        }
    });
}
