// DOM hooks: element ids and selectors the page markup is expected to provide.

// Backdrop
pub const CANVAS_ID: &str = "three-canvas";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const TOUCH_MEDIA_QUERY: &str = "(hover: none)";

// Cursor
pub const CURSOR_DOT_ID: &str = "cursor-dot";
pub const CURSOR_RING_ID: &str = "cursor-ring";
pub const HOVER_TARGETS: &str = "a, button, .exp-card, .skill-card, .wcard, .ftab, .upload-btn";

// Gallery
pub const FILTER_TAB_SELECTOR: &str = ".ftab";
pub const CARD_SELECTOR: &str = ".wcard";
pub const CARD_COVER_SELECTOR: &str = ".wcard-img";
pub const ACTIVE_CLASS: &str = "active";

// Lightbox
pub const LIGHTBOX_ID: &str = "lightbox";
pub const LIGHTBOX_TITLE_ID: &str = "lbTitle";
pub const LIGHTBOX_DESC_ID: &str = "lbDesc";
pub const LIGHTBOX_MEDIA_ID: &str = "lbMedia";
pub const LIGHTBOX_DOTS_ID: &str = "lbDots";
pub const LIGHTBOX_COUNTER_ID: &str = "lbCounter";
pub const LIGHTBOX_PREV_SELECTOR: &str = ".lb-prev";
pub const LIGHTBOX_NEXT_SELECTOR: &str = ".lb-next";
pub const LIGHTBOX_CLOSE_SELECTOR: &str = ".lb-close";
pub const LIGHTBOX_DOT_CLASS: &str = "lb-dot";
pub const OPEN_CLASS: &str = "open";
pub const VIDEO_GLYPH: &str = "\u{25B6}";

// Inline style for lightbox videos
pub const LIGHTBOX_VIDEO_STYLE: &str =
    "width:100%;border-radius:14px;max-height:70vh;background:#000;display:block";
