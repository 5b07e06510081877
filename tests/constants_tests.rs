// Host-side checks on tuning constants and DOM hooks.
// The web crate is wasm-only, so its constants module is included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use folio_core::constants::*;

#[test]
fn accent_table_matches_hex_palette() {
    for (i, rgb) in ACCENT_RGB.iter().enumerate() {
        let hex = accent(i);
        for c in 0..3 {
            assert!((rgb[c] - hex[c]).abs() < 0.01, "accent {i} channel {c}");
        }
    }
    assert_eq!(accent(ACCENT_HEX.len()), accent(0));
}

#[test]
fn hex_rgb_unpacks_channels() {
    assert_eq!(hex_rgb(0xFF0000), [1.0, 0.0, 0.0]);
    assert_eq!(hex_rgb(0x0000FF), [0.0, 0.0, 1.0]);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mobile_density_is_lower() {
    assert!(GALAXY_COUNT_MOBILE < GALAXY_COUNT_DESKTOP);
    assert!(HELIX_LEVELS_MOBILE < HELIX_LEVELS_DESKTOP);
    assert!(RINGS_MOBILE < RINGS_DESKTOP);
    assert!(NODES_MOBILE < NODES_DESKTOP);
    assert!(GRID_OPACITY_MOBILE < GRID_OPACITY_DESKTOP);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn burst_fades_out_before_it_expires() {
    assert!(BURST_START_OPACITY / BURST_FADE_PER_SEC < BURST_LIFETIME_SECS);
    assert!(BURST_TICK_SECS > 0.0 && BURST_GRAVITY > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_fractions() {
    assert!(CAMERA_SMOOTHING > 0.0 && CAMERA_SMOOTHING < 1.0);
    assert!(CURSOR_RING_SMOOTHING > 0.0 && CURSOR_RING_SMOOTHING < 1.0);
}

#[test]
fn hover_targets_cover_gallery_controls() {
    assert!(HOVER_TARGETS.contains(CARD_SELECTOR));
    assert!(HOVER_TARGETS.contains(FILTER_TAB_SELECTOR));
    assert!(!CANVAS_ID.starts_with('#'));
    assert!(!LIGHTBOX_ID.starts_with('#'));
}
