//! Work gallery DOM: filter tabs, card clicks and the lightbox viewer.
//!
//! Navigation state lives in [`folio_core::gallery::Lightbox`]; this module
//! only reads card attributes and rewrites the lightbox markup.

use crate::constants::*;
use crate::dom;
use crate::input;
use folio_core::gallery::{
    build_slides, card_visible, CardMedia, Lightbox, LightboxAction, LightboxKey, SlideKind, Step,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

// ---------------- Filter tabs ----------------
pub fn wire_filter_tabs(document: &web::Document) {
    let tabs = Rc::new(dom::query_all(document, FILTER_TAB_SELECTOR));
    let cards = Rc::new(dom::query_all(document, CARD_SELECTOR));
    for tab in tabs.iter() {
        let (tabs, cards, this) = (tabs.clone(), cards.clone(), tab.clone());
        dom::add_listener::<web::Event>(tab, "click", move |_| {
            for t in tabs.iter() {
                _ = t.class_list().remove_1(ACTIVE_CLASS);
            }
            _ = this.class_list().add_1(ACTIVE_CLASS);
            let filter = dom::data_attr(&this, "data-filter").unwrap_or_default();
            for card in cards.iter() {
                let ty = dom::data_attr(card, "data-type");
                let display = if card_visible(&filter, ty.as_deref()) {
                    ""
                } else {
                    "none"
                };
                if let Some(style) = dom::style_of(card) {
                    _ = style.set_property("display", display);
                }
            }
        });
    }
}

fn is_displayed(el: &web::Element) -> bool {
    dom::style_of(el)
        .and_then(|s| s.get_property_value("display").ok())
        .map_or(true, |d| d != "none")
}

fn card_slides(card: &web::Element) -> Vec<folio_core::gallery::Slide> {
    let videos = dom::data_attr(card, "data-videos");
    let video = dom::data_attr(card, "data-video");
    let gallery = dom::data_attr(card, "data-gallery");
    let cover = card
        .query_selector(CARD_COVER_SELECTOR)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<web::HtmlImageElement>().ok())
        .map(|img| img.src());
    build_slides(&CardMedia {
        videos: videos.as_deref(),
        video: video.as_deref(),
        gallery: gallery.as_deref(),
        cover: cover.as_deref(),
    })
}

// ---------------- Lightbox ----------------
pub struct GalleryView {
    document: web::Document,
    root: web::Element,
    media: Option<web::Element>,
    dots: Option<web::Element>,
    lightbox: Lightbox,
    items: Vec<web::Element>,
}

impl GalleryView {
    /// `None` when the page has no lightbox.
    pub fn new(document: &web::Document) -> Option<Self> {
        let root = document.get_element_by_id(LIGHTBOX_ID)?;
        Some(Self {
            document: document.clone(),
            media: document.get_element_by_id(LIGHTBOX_MEDIA_ID),
            dots: document.get_element_by_id(LIGHTBOX_DOTS_ID),
            root,
            lightbox: Lightbox::default(),
            items: Vec::new(),
        })
    }

    pub fn open_card(&mut self, card: &web::Element) {
        self.items = dom::query_all(&self.document, CARD_SELECTOR)
            .into_iter()
            .filter(is_displayed)
            .collect();
        let idx = self.items.iter().position(|c| c == card).unwrap_or(0);
        self.lightbox.open(self.items.len(), idx, card_slides(card));
        self.render_project(card);
        _ = self.root.class_list().add_1(OPEN_CLASS);
        self.set_body_overflow("hidden");
    }

    pub fn step(&mut self, step: Step) {
        let action = self.lightbox.step(step);
        self.apply(action);
    }

    pub fn key(&mut self, key: LightboxKey) {
        let action = self.lightbox.key(key);
        self.apply(action);
    }

    pub fn go(&mut self, i: usize) {
        let action = self.lightbox.go(i);
        self.apply(action);
    }

    pub fn close(&mut self) {
        self.lightbox.close();
        self.apply(LightboxAction::Close);
    }

    fn apply(&mut self, action: LightboxAction) {
        match action {
            LightboxAction::None => {}
            LightboxAction::Slide(_) => self.render_slide(),
            LightboxAction::Project(i) => {
                if let Some(card) = self.items.get(i).cloned() {
                    self.lightbox.load(card_slides(&card));
                    self.render_project(&card);
                }
            }
            LightboxAction::Close => {
                self.stop_video();
                _ = self.root.class_list().remove_1(OPEN_CLASS);
                self.set_body_overflow("");
            }
        }
    }

    fn render_project(&self, card: &web::Element) {
        let title = dom::data_attr(card, "data-title").unwrap_or_default();
        let desc = dom::data_attr(card, "data-desc").unwrap_or_default();
        self.set_text(LIGHTBOX_TITLE_ID, &title);
        self.set_text(LIGHTBOX_DESC_ID, &desc);
        self.render_slide();
        self.render_dots();
    }

    fn render_slide(&self) {
        let Some(media) = &self.media else {
            return;
        };
        self.stop_video();
        media.set_inner_html("");
        if let Some(slide) = self.lightbox.current() {
            let el = match slide.kind {
                SlideKind::Video => self.video_element(&slide.src),
                SlideKind::Image => self.image_element(&slide.src),
            };
            if let Some(el) = el {
                _ = media.append_child(&el);
            }
        }
        self.update_dots();
    }

    fn video_element(&self, src: &str) -> Option<web::Element> {
        let el = self.document.create_element("video").ok()?;
        let video = el.dyn_ref::<web::HtmlVideoElement>()?;
        video.set_src(src);
        video.set_controls(true);
        video.set_autoplay(true);
        video.set_muted(true);
        _ = el.set_attribute("playsinline", "");
        _ = el.set_attribute("class", "lb-video");
        _ = el.set_attribute("style", LIGHTBOX_VIDEO_STYLE);
        Some(el)
    }

    fn image_element(&self, src: &str) -> Option<web::Element> {
        let el = self.document.create_element("img").ok()?;
        let img = el.dyn_ref::<web::HtmlImageElement>()?;
        img.set_src(src);
        img.set_alt("");
        _ = el.set_attribute("class", "lb-img");
        let hidden = el.clone();
        dom::add_listener::<web::Event>(&el, "error", move |_| {
            if let Some(style) = dom::style_of(&hidden) {
                _ = style.set_property("display", "none");
            }
        });
        Some(el)
    }

    fn render_dots(&self) {
        let Some(dots) = &self.dots else {
            return;
        };
        dots.set_inner_html("");
        if !self.lightbox.show_dots() {
            return;
        }
        for (i, slide) in self.lightbox.slides().iter().enumerate() {
            let Ok(button) = self.document.create_element("button") else {
                continue;
            };
            _ = button.class_list().add_1(LIGHTBOX_DOT_CLASS);
            _ = button.set_attribute("data-index", &i.to_string());
            _ = button.set_attribute("aria-label", &format!("Slide {}", i + 1));
            if slide.kind == SlideKind::Video {
                button.set_text_content(Some(VIDEO_GLYPH));
            }
            _ = dots.append_child(&button);
        }
        self.update_dots();
    }

    fn update_dots(&self) {
        let current = self.lightbox.slide_index();
        let selector = format!(".{LIGHTBOX_DOT_CLASS}");
        for (i, dot) in dom::query_all(&self.document, &selector).iter().enumerate() {
            _ = dot
                .class_list()
                .toggle_with_force(ACTIVE_CLASS, i == current);
        }
        self.set_text(LIGHTBOX_COUNTER_ID, &self.lightbox.counter_text());
    }

    fn stop_video(&self) {
        let Some(media) = &self.media else {
            return;
        };
        if let Some(video) = media
            .query_selector("video")
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<web::HtmlVideoElement>().ok())
        {
            _ = video.pause();
            video.set_src("");
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_body_overflow(&self, value: &str) {
        if let Some(body) = self.document.body() {
            _ = body.style().set_property("overflow", value);
        }
    }
}

/// Card clicks, lightbox controls (delegated on the lightbox root) and swipe.
pub fn wire_lightbox(document: &web::Document, gallery: Rc<RefCell<GalleryView>>) {
    for card in dom::query_all(document, CARD_SELECTOR) {
        let (gallery, this) = (gallery.clone(), card.clone());
        dom::add_listener::<web::Event>(&card, "click", move |_| {
            gallery.borrow_mut().open_card(&this);
        });
    }

    let root = gallery.borrow().root.clone();
    {
        let gallery = gallery.clone();
        dom::add_listener::<web::MouseEvent>(&root, "click", move |ev| {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
                return;
            };
            let within = |sel: &str| target.closest(sel).ok().flatten().is_some();
            let mut g = gallery.borrow_mut();
            if target.id() == LIGHTBOX_ID {
                g.close();
            } else if within(LIGHTBOX_PREV_SELECTOR) {
                ev.stop_propagation();
                g.step(Step::Back);
            } else if within(LIGHTBOX_NEXT_SELECTOR) {
                ev.stop_propagation();
                g.step(Step::Forward);
            } else if within(LIGHTBOX_CLOSE_SELECTOR) {
                g.close();
            } else if let Some(i) = target
                .closest(&format!(".{LIGHTBOX_DOT_CLASS}"))
                .ok()
                .flatten()
                .and_then(|d| dom::data_attr(&d, "data-index"))
                .and_then(|s| s.parse::<usize>().ok())
            {
                g.go(i);
            }
        });
    }

    let start_x = Rc::new(RefCell::new(0.0_f64));
    {
        let start_x = start_x.clone();
        dom::add_passive_listener::<web::TouchEvent>(&root, "touchstart", move |ev| {
            if let Some(x) = input::first_touch_x(&ev.touches()) {
                *start_x.borrow_mut() = x;
            }
        });
    }
    dom::add_passive_listener::<web::TouchEvent>(&root, "touchend", move |ev| {
        let Some(x) = input::first_touch_x(&ev.changed_touches()) else {
            return;
        };
        if let Some(step) = Step::from_swipe(x - *start_x.borrow()) {
            gallery.borrow_mut().step(step);
        }
    });
}
