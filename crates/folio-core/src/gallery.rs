//! Project gallery: filter tabs and the lightbox slide/project navigator.
//!
//! Pure state only. The web layer reads card attributes, feeds them in here
//! and renders whatever the navigator says is current.

/// Filter value meaning "show every card".
pub const FILTER_ALL: &str = "all";
/// Minimum horizontal travel for a touch gesture to count as a swipe.
pub const SWIPE_MIN_PX: f64 = 50.0;

/// Whether a card of `card_type` is shown under `filter`.
pub fn card_visible(filter: &str, card_type: Option<&str>) -> bool {
    filter == FILTER_ALL || card_type == Some(filter)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideKind {
    Video,
    Image,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide {
    pub kind: SlideKind,
    pub src: String,
}

/// Media attributes read off a gallery card.
#[derive(Clone, Copy, Debug, Default)]
pub struct CardMedia<'a> {
    pub videos: Option<&'a str>,
    pub video: Option<&'a str>,
    pub gallery: Option<&'a str>,
    pub cover: Option<&'a str>,
}

fn split_sources(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Videos first, then gallery images; the cover image when both are empty.
pub fn build_slides(media: &CardMedia<'_>) -> Vec<Slide> {
    let mut slides = Vec::new();
    let videos = media
        .videos
        .filter(|s| !s.is_empty())
        .or(media.video)
        .unwrap_or("");
    slides.extend(split_sources(videos).map(|src| Slide {
        kind: SlideKind::Video,
        src: src.to_string(),
    }));
    slides.extend(split_sources(media.gallery.unwrap_or("")).map(|src| Slide {
        kind: SlideKind::Image,
        src: src.to_string(),
    }));
    if slides.is_empty() {
        if let Some(cover) = media.cover.filter(|s| !s.is_empty()) {
            slides.push(Slide {
                kind: SlideKind::Image,
                src: cover.to_string(),
            });
        }
    }
    slides
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Back,
    Forward,
}

impl Step {
    /// Swipe direction for a horizontal travel of `dx` pixels.
    pub fn from_swipe(dx: f64) -> Option<Self> {
        if dx.abs() <= SWIPE_MIN_PX {
            None
        } else if dx < 0.0 {
            Some(Step::Forward)
        } else {
            Some(Step::Back)
        }
    }
}

/// What the view must do after a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxAction {
    /// Nothing changed.
    None,
    /// Show slide `n` of the current project.
    Slide(usize),
    /// Load project `n` of the visible list (then call [`Lightbox::load`]).
    Project(usize),
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    Close,
    Next,
    Prev,
}

impl LightboxKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(LightboxKey::Close),
            "ArrowRight" => Some(LightboxKey::Next),
            "ArrowLeft" => Some(LightboxKey::Prev),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Lightbox {
    open: bool,
    projects: usize,
    project: usize,
    slides: Vec<Slide>,
    slide: usize,
}

impl Lightbox {
    /// Open on `project` out of `projects` visible cards.
    pub fn open(&mut self, projects: usize, project: usize, slides: Vec<Slide>) {
        self.open = true;
        self.projects = projects;
        self.project = if project < projects { project } else { 0 };
        self.load(slides);
    }

    /// Replace the slide list for the current project and rewind.
    pub fn load(&mut self, slides: Vec<Slide>) {
        self.slides = slides;
        self.slide = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn project(&self) -> usize {
        self.project
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_index(&self) -> usize {
        self.slide
    }

    pub fn current(&self) -> Option<&Slide> {
        self.slides.get(self.slide)
    }

    pub fn go(&mut self, i: usize) -> LightboxAction {
        if i < self.slides.len() {
            self.slide = i;
            LightboxAction::Slide(i)
        } else {
            LightboxAction::None
        }
    }

    /// Move within the slides, or to the neighbouring project when the
    /// current one has at most a single slide. Both directions wrap.
    pub fn step(&mut self, step: Step) -> LightboxAction {
        let len = self.slides.len();
        if len <= 1 {
            if self.projects == 0 {
                return LightboxAction::None;
            }
            self.project = wrap(self.project, step, self.projects);
            return LightboxAction::Project(self.project);
        }
        self.slide = wrap(self.slide, step, len);
        LightboxAction::Slide(self.slide)
    }

    pub fn key(&mut self, key: LightboxKey) -> LightboxAction {
        if !self.open {
            return LightboxAction::None;
        }
        match key {
            LightboxKey::Close => {
                self.close();
                LightboxAction::Close
            }
            LightboxKey::Next => self.step(Step::Forward),
            LightboxKey::Prev => self.step(Step::Back),
        }
    }

    /// Whether slide dots are shown at all.
    pub fn show_dots(&self) -> bool {
        self.slides.len() > 1
    }

    /// "3 / 7" style counter; empty for single-slide projects.
    pub fn counter_text(&self) -> String {
        if self.slides.len() > 1 {
            format!("{} / {}", self.slide + 1, self.slides.len())
        } else {
            String::new()
        }
    }
}

fn wrap(i: usize, step: Step, len: usize) -> usize {
    match step {
        Step::Forward => (i + 1) % len,
        Step::Back => (i + len - 1) % len,
    }
}
