mod common;

use ndarray::Array2;

use common::uniform_color;
use peaking_core::error::PeakingError;
use peaking_core::overlay::composite;
use peaking_core::params::EdgeColor;
use peaking_core::pipeline::OverlayMode;

fn single_pixel_mask(h: usize, w: usize, row: usize, col: usize) -> Array2<bool> {
    let mut mask = Array2::from_elem((h, w), false);
    mask[[row, col]] = true;
    mask
}

// ---------------------------------------------------------------------------
// color lookup
// ---------------------------------------------------------------------------

#[test]
fn test_edge_color_rgb_values() {
    assert_eq!(EdgeColor::Red.rgb(), [255, 0, 0]);
    assert_eq!(EdgeColor::Green.rgb(), [0, 255, 0]);
    assert_eq!(EdgeColor::Blue.rgb(), [0, 0, 255]);
    assert_eq!(EdgeColor::Yellow.rgb(), [255, 255, 0]);
}

#[test]
fn test_edge_color_parse_is_case_insensitive() {
    assert_eq!(EdgeColor::parse("YELLOW"), EdgeColor::Yellow);
    assert_eq!(EdgeColor::parse("Green"), EdgeColor::Green);
    assert_eq!(EdgeColor::parse(" blue "), EdgeColor::Blue);
}

#[test]
fn test_unknown_color_falls_back_to_red() {
    assert_eq!(EdgeColor::parse("magenta"), EdgeColor::Red);
    assert_eq!(EdgeColor::parse(""), EdgeColor::Red);
    assert_eq!(EdgeColor::parse("magenta").rgb(), [255, 0, 0]);
}

// ---------------------------------------------------------------------------
// replace mode
// ---------------------------------------------------------------------------

#[test]
fn test_replace_sets_exact_color() {
    let frame = uniform_color(4, 4, [10, 20, 30]);
    let mask = single_pixel_mask(4, 4, 1, 2);
    let out = composite(&frame, &mask, EdgeColor::Yellow, OverlayMode::Replace, 0.4).unwrap();
    assert_eq!(out.pixel(1, 2), [255, 255, 0]);
    assert_eq!(out.pixel(0, 0), [10, 20, 30]);
    assert_eq!(out.pixel(3, 3), [10, 20, 30]);
}

// ---------------------------------------------------------------------------
// alpha blend mode
// ---------------------------------------------------------------------------

#[test]
fn test_alpha_blend_adds_weighted_color() {
    let frame = uniform_color(4, 4, [10, 20, 30]);
    let mask = single_pixel_mask(4, 4, 2, 2);
    let out = composite(&frame, &mask, EdgeColor::Yellow, OverlayMode::AlphaBlend, 0.4).unwrap();
    // 255 * 0.4 = 102
    assert_eq!(out.pixel(2, 2), [112, 122, 30]);
    assert_eq!(out.pixel(0, 1), [10, 20, 30]);
}

#[test]
fn test_alpha_blend_clips_at_white() {
    let frame = uniform_color(2, 2, [200, 200, 200]);
    let mask = Array2::from_elem((2, 2), true);
    let out = composite(&frame, &mask, EdgeColor::Red, OverlayMode::AlphaBlend, 0.4).unwrap();
    assert_eq!(out.pixel(0, 0), [255, 200, 200]);
}

#[test]
fn test_empty_mask_leaves_frame_untouched() {
    let frame = common::checkerboard_color(40, 40);
    let mask = Array2::from_elem((40, 40), false);
    for mode in [OverlayMode::AlphaBlend, OverlayMode::Replace] {
        let out = composite(&frame, &mask, EdgeColor::Blue, mode, 0.4).unwrap();
        assert_eq!(out.data, frame.data);
    }
}

#[test]
fn test_composite_rejects_mismatched_mask() {
    let frame = uniform_color(4, 4, [0, 0, 0]);
    let mask = Array2::from_elem((4, 5), true);
    let err = composite(&frame, &mask, EdgeColor::Red, OverlayMode::Replace, 0.4).unwrap_err();
    assert!(matches!(err, PeakingError::ShapeMismatch { .. }));
}
