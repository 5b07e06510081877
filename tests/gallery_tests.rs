// Host-side tests for the gallery navigator and the cursor follower.

use folio_core::cursor::*;
use folio_core::gallery::*;

fn image(src: &str) -> Slide {
    Slide {
        kind: SlideKind::Image,
        src: src.to_string(),
    }
}

fn video(src: &str) -> Slide {
    Slide {
        kind: SlideKind::Video,
        src: src.to_string(),
    }
}

#[test]
fn filter_visibility() {
    assert!(card_visible("all", None));
    assert!(card_visible("all", Some("video")));
    assert!(card_visible("video", Some("video")));
    assert!(!card_visible("video", Some("photo")));
    assert!(!card_visible("video", None));
}

#[test]
fn slides_put_videos_before_gallery_images() {
    let slides = build_slides(&CardMedia {
        videos: Some("a.mp4, b.mp4,"),
        video: Some("ignored.mp4"),
        gallery: Some(" one.jpg ,, two.jpg"),
        cover: Some("cover.jpg"),
    });
    assert_eq!(
        slides,
        vec![video("a.mp4"), video("b.mp4"), image("one.jpg"), image("two.jpg")]
    );
}

#[test]
fn single_video_attribute_is_used_when_list_missing() {
    let slides = build_slides(&CardMedia {
        video: Some("clip.mp4"),
        ..Default::default()
    });
    assert_eq!(slides, vec![video("clip.mp4")]);
}

#[test]
fn cover_is_the_fallback_slide() {
    let slides = build_slides(&CardMedia {
        gallery: Some(" , "),
        cover: Some("cover.jpg"),
        ..Default::default()
    });
    assert_eq!(slides, vec![image("cover.jpg")]);
    assert!(build_slides(&CardMedia::default()).is_empty());
}

#[test]
fn swipe_needs_more_than_threshold() {
    assert_eq!(Step::from_swipe(-50.0), None);
    assert_eq!(Step::from_swipe(50.0), None);
    assert_eq!(Step::from_swipe(-51.0), Some(Step::Forward));
    assert_eq!(Step::from_swipe(80.0), Some(Step::Back));
}

#[test]
fn slides_wrap_both_ways() {
    let mut lb = Lightbox::default();
    lb.open(3, 1, vec![image("a"), image("b"), image("c")]);
    assert_eq!(lb.slide_index(), 0);
    assert_eq!(lb.counter_text(), "1 / 3");
    assert!(lb.show_dots());

    assert_eq!(lb.step(Step::Back), LightboxAction::Slide(2));
    assert_eq!(lb.counter_text(), "3 / 3");
    assert_eq!(lb.step(Step::Forward), LightboxAction::Slide(0));
    assert_eq!(lb.step(Step::Forward), LightboxAction::Slide(1));
    assert_eq!(lb.current(), Some(&image("b")));
    assert_eq!(lb.project(), 1);
}

#[test]
fn single_slide_projects_navigate_between_projects() {
    let mut lb = Lightbox::default();
    lb.open(3, 1, vec![image("only")]);
    assert!(!lb.show_dots());
    assert_eq!(lb.counter_text(), "");

    assert_eq!(lb.step(Step::Forward), LightboxAction::Project(2));
    lb.load(vec![image("x")]);
    assert_eq!(lb.step(Step::Forward), LightboxAction::Project(0));
    lb.load(Vec::new());
    assert_eq!(lb.step(Step::Back), LightboxAction::Project(2));
}

#[test]
fn load_rewinds_to_first_slide() {
    let mut lb = Lightbox::default();
    lb.open(2, 0, vec![image("a"), image("b")]);
    lb.go(1);
    lb.load(vec![video("v"), image("c")]);
    assert_eq!(lb.slide_index(), 0);
    assert_eq!(lb.current(), Some(&video("v")));
}

#[test]
fn go_ignores_out_of_range() {
    let mut lb = Lightbox::default();
    lb.open(1, 0, vec![image("a"), image("b")]);
    assert_eq!(lb.go(5), LightboxAction::None);
    assert_eq!(lb.go(1), LightboxAction::Slide(1));
}

#[test]
fn keys_only_act_while_open() {
    let mut lb = Lightbox::default();
    assert_eq!(lb.key(LightboxKey::Next), LightboxAction::None);

    lb.open(2, 0, vec![image("a"), image("b")]);
    assert_eq!(LightboxKey::from_key("ArrowRight"), Some(LightboxKey::Next));
    assert_eq!(LightboxKey::from_key("ArrowLeft"), Some(LightboxKey::Prev));
    assert_eq!(LightboxKey::from_key("Enter"), None);
    assert_eq!(lb.key(LightboxKey::Next), LightboxAction::Slide(1));
    assert_eq!(lb.key(LightboxKey::Prev), LightboxAction::Slide(0));

    let esc = LightboxKey::from_key("Escape").unwrap();
    assert_eq!(lb.key(esc), LightboxAction::Close);
    assert!(!lb.is_open());
    assert_eq!(lb.key(LightboxKey::Prev), LightboxAction::None);
}

#[test]
fn empty_project_list_does_not_navigate() {
    let mut lb = Lightbox::default();
    lb.open(0, 0, Vec::new());
    assert_eq!(lb.step(Step::Forward), LightboxAction::None);
}

#[test]
fn cursor_ring_eases_toward_pointer() {
    let mut c = CursorFollower::default();
    c.pointer_moved(100.0, 50.0);
    assert_eq!(c.dot().x, 100.0);
    c.step();
    assert!((c.ring().x - 12.0).abs() < 1e-4);
    assert!((c.ring().y - 6.0).abs() < 1e-4);
    for _ in 0..200 {
        c.step();
    }
    assert!((c.ring().x - 100.0).abs() < 1e-2);
}

#[test]
fn cursor_hover_sizes() {
    let mut c = CursorFollower::default();
    assert_eq!((c.dot_size(), c.ring_size()), (6.0, 32.0));
    assert_eq!(c.ring_border(), RING_BORDER);
    c.set_hovering(true);
    assert!(c.hovering());
    assert_eq!((c.dot_size(), c.ring_size()), (16.0, 54.0));
    assert_eq!(c.ring_border(), "var(--acc2)");
}
