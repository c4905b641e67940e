mod common;

use common::{checkerboard_color, uniform_color};
use peaking_core::params::{RequestParameters, Sensitivity, SourceKind, EdgeColor};
use peaking_core::pipeline::policy::target_max_dimension;
use peaking_core::pipeline::{PeakingConfig, SourcePolicy};
use peaking_core::prepare::{luminance, prepare_frame, resize_area, resize_to_max_dimension};

#[test]
fn test_target_dimension_grows_with_sensitivity() {
    let mut previous = 0;
    for s in 1..=100 {
        let dim = target_max_dimension(Sensitivity::new(s));
        assert!(dim >= previous);
        previous = dim;
    }
    assert_eq!(target_max_dimension(Sensitivity::new(50)), 576);
}

#[test]
fn test_resize_preserves_aspect_on_larger_side() {
    let frame = uniform_color(480, 640, [1, 2, 3]);
    let resized = resize_to_max_dimension(&frame, 512);
    assert_eq!(resized.dim(), (384, 512));

    let portrait = uniform_color(1000, 500, [1, 2, 3]);
    let resized = resize_to_max_dimension(&portrait, 720);
    assert_eq!(resized.dim(), (720, 360));
}

#[test]
fn test_resize_is_noop_when_small_enough() {
    let frame = checkerboard_color(300, 400);
    let resized = resize_to_max_dimension(&frame, 512);
    assert_eq!(resized.data, frame.data);
}

#[test]
fn test_area_resize_averages_blocks() {
    // 2x2 blocks of 0 and 200 alternating along columns; halving averages each pair.
    let frame = peaking_core::frame::ColorFrame::new(ndarray::Array3::from_shape_fn(
        (4, 4, 3),
        |(_, c, _)| if c % 2 == 0 { 0 } else { 200 },
    ));
    let resized = resize_area(&frame, 2, 2);
    assert_eq!(resized.dim(), (2, 2));
    assert!(resized.data.iter().all(|&v| v == 100));
}

#[test]
fn test_area_resize_keeps_uniform_color() {
    let frame = uniform_color(100, 90, [12, 34, 56]);
    let resized = resize_area(&frame, 37, 41);
    assert!(resized
        .data
        .indexed_iter()
        .all(|((_, _, ch), &v)| v == [12, 34, 56][ch]));
}

#[test]
fn test_luminance_weights() {
    let white = luminance(&uniform_color(2, 2, [255, 255, 255]));
    assert!(white.data.iter().all(|&v| v == 255));

    let red = luminance(&uniform_color(2, 2, [255, 0, 0]));
    // 0.299 * 255 = 76.2
    assert!(red.data.iter().all(|&v| v == 76));

    let green = luminance(&uniform_color(2, 2, [0, 255, 0]));
    // 0.587 * 255 = 149.7
    assert!(green.data.iter().all(|&v| v == 150));
}

#[test]
fn test_webcam_frames_are_not_downscaled() {
    let config = PeakingConfig::default();
    let params = RequestParameters::new(10, EdgeColor::Red, SourceKind::Webcam);
    let policy = SourcePolicy::resolve(&config, &params);
    assert_eq!(policy.max_dimension, None);

    let frame = uniform_color(1080, 1920, [5, 5, 5]);
    let (color, gray) = prepare_frame(&frame, policy.max_dimension);
    assert_eq!(color.dim(), (1080, 1920));
    assert_eq!(gray.dim(), (1080, 1920));
}

#[test]
fn test_file_frames_are_downscaled() {
    let config = PeakingConfig::default();
    let params = RequestParameters::new(90, EdgeColor::Red, SourceKind::File);
    let policy = SourcePolicy::resolve(&config, &params);
    assert_eq!(policy.max_dimension, Some(720));

    let frame = uniform_color(1080, 1920, [5, 5, 5]);
    let (color, gray) = prepare_frame(&frame, policy.max_dimension);
    assert_eq!(color.dim(), (405, 720));
    assert_eq!(gray.dim(), color.dim());
}
