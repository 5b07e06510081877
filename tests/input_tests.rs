// Host-side tests for pointer normalization, the section band and the camera.

use folio_core::*;

const EPS: f32 = 1e-5;

#[test]
fn pointer_from_client_maps_corners() {
    assert_eq!(pointer_from_client(0.0, 0.0, 800.0, 600.0), [-1.0, -1.0]);
    assert_eq!(pointer_from_client(400.0, 300.0, 800.0, 600.0), [0.0, 0.0]);
    assert_eq!(pointer_from_client(800.0, 600.0, 800.0, 600.0), [1.0, 1.0]);
}

#[test]
fn pointer_from_client_ignores_empty_window() {
    assert_eq!(pointer_from_client(10.0, 10.0, 0.0, 600.0), [0.0, 0.0]);
}

#[test]
fn tilt_maps_degrees_and_defaults_missing_axes() {
    let [x, y] = pointer_from_tilt(Some(45.0), Some(-45.0));
    assert!((x - 1.0).abs() < EPS);
    assert!((y + 0.5).abs() < EPS);
    assert_eq!(pointer_from_tilt(None, None), [0.0, 0.0]);
    assert_eq!(pointer_from_tilt(None, Some(90.0)), [0.0, 1.0]);
}

#[test]
fn set_pointer_keeps_scroll() {
    let mut p = PointerInput {
        scroll_y: 250.0,
        ..Default::default()
    };
    p.set_pointer([0.5, -0.25]);
    assert_eq!(
        p,
        PointerInput {
            x: 0.5,
            y: -0.25,
            scroll_y: 250.0
        }
    );
}

fn rects(spans: &[(f64, f64)]) -> Vec<SectionRect> {
    spans
        .iter()
        .map(|&(top, bottom)| SectionRect { top, bottom })
        .collect()
}

#[test]
fn section_band_fires_once_per_new_section() {
    let mut band = SectionBand::default();
    let first = rects(&[(-500.0, -100.0), (-100.0, 400.0), (400.0, 900.0)]);
    assert_eq!(band.crossings(first.clone()).as_slice(), &[1]);
    assert_eq!(band.last(), Some(1));
    // same section still under the line
    assert!(band.crossings(first).is_empty());

    let scrolled = rects(&[(-900.0, -500.0), (-500.0, 0.0), (0.0, 500.0)]);
    assert_eq!(band.crossings(scrolled).as_slice(), &[2]);

    let back = rects(&[(-500.0, -100.0), (-100.0, 400.0), (400.0, 900.0)]);
    assert_eq!(band.crossings(back).as_slice(), &[1]);
}

#[test]
fn section_band_line_is_inclusive() {
    let mut band = SectionBand::new(120.0);
    assert_eq!(band.crossings(rects(&[(120.0, 300.0)])).as_slice(), &[0]);
    let mut band = SectionBand::new(120.0);
    assert_eq!(band.crossings(rects(&[(-50.0, 120.0)])).as_slice(), &[0]);
    let mut band = SectionBand::new(120.0);
    assert!(band.crossings(rects(&[(121.0, 300.0)])).is_empty());
}

#[test]
fn viewport_rejects_empty_sizes() {
    assert_eq!(
        Viewport::new(0, 10, 1.0),
        Err(SceneError::EmptyViewport {
            width: 0,
            height: 10
        })
    );
    assert!(Viewport::new(10, 10, 0.0).is_err());
}

#[test]
fn viewport_caps_pixel_ratio() {
    let v = Viewport::new(100, 50, 3.0).unwrap();
    assert_eq!(v.pixel_ratio(), 2.0);
    assert_eq!(v.surface_size(), (200, 100));
    assert!((v.aspect() - 2.0).abs() < EPS);
}

#[test]
fn mobile_threshold_is_exclusive() {
    assert!(SceneConfig::for_width(767).mobile);
    assert!(!SceneConfig::for_width(768).mobile);
    assert!(Viewport::new(767, 1000, 1.0).unwrap().is_mobile());
}

#[test]
fn camera_first_follow_step() {
    let mut cam = Camera::new(1.0);
    let input = PointerInput {
        x: 1.0,
        y: 0.0,
        scroll_y: 0.0,
    };
    cam.follow(&input);
    assert!((cam.position.x - 0.112).abs() < EPS);
    assert!(cam.position.y.abs() < EPS);
    assert!((cam.position.z - 30.0).abs() < EPS);
}

#[test]
fn camera_converges_on_pointer_and_scroll_target() {
    let mut cam = Camera::new(1.5);
    let input = PointerInput {
        x: 1.0,
        y: 1.0,
        scroll_y: 1000.0,
    };
    for _ in 0..1000 {
        cam.follow(&input);
    }
    assert!((cam.position.x - 4.0).abs() < 1e-3);
    assert!((cam.position.y + 2.5).abs() < 1e-3);
    assert!((cam.position.z - 25.0).abs() < 1e-3);
}

#[test]
fn camera_roll_is_tiny() {
    let mut cam = Camera::new(1.0);
    for i in 0..200 {
        cam.sway(i as f32 * 0.5);
        assert!(cam.roll.abs() <= CAMERA_ROLL_AMP + EPS);
    }
    let r = cam.right();
    let u = cam.up();
    assert!(r.dot(u).abs() < EPS);
}
