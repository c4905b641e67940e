mod common;

use approx::assert_relative_eq;
use ndarray::Array2;

use common::{checkerboard_gray, uniform_gray};
use peaking_core::filters::sharpen::sharpen;
use peaking_core::focus::threshold::compute_mean_stddev;
use peaking_core::focus::{adaptive_threshold, focus_map, focus_mask, laplacian_magnitude};
use peaking_core::params::Sensitivity;

// ---------------------------------------------------------------------------
// sharpen
// ---------------------------------------------------------------------------

#[test]
fn test_sharpen_leaves_flat_frame_unchanged() {
    let frame = uniform_gray(12, 12, 77);
    let sharpened = sharpen(&frame);
    assert!(sharpened.data.iter().all(|&v| v == 77));
}

#[test]
fn test_sharpen_saturates_step() {
    let frame = common::vertical_step(6, 8, 100, 200);
    let sharpened = sharpen(&frame);
    // 9*100 - (3*200 + 5*100) = -200 -> 0; 9*200 - (3*100 + 5*200) = 500 -> 255
    assert_eq!(sharpened.data[[3, 3]], 0);
    assert_eq!(sharpened.data[[3, 4]], 255);
    assert_eq!(sharpened.data[[3, 0]], 100);
    assert_eq!(sharpened.data[[3, 7]], 200);
    assert_eq!(sharpened.dim(), frame.dim());
}

// ---------------------------------------------------------------------------
// focus map
// ---------------------------------------------------------------------------

#[test]
fn test_flat_frame_has_zero_focus_map() {
    let frame = uniform_gray(32, 32, 128);
    assert!(laplacian_magnitude(&frame).iter().all(|&v| v == 0));
    assert!(focus_map(&frame, Some(17)).iter().all(|&v| v == 0));
}

#[test]
fn test_focus_map_normalized_to_full_range() {
    let sharpened = sharpen(&checkerboard_gray(80, 80));
    let map = laplacian_magnitude(&sharpened);
    assert_eq!(map.iter().copied().max(), Some(255));
    assert_eq!(map.dim(), (80, 80));
}

#[test]
fn test_focus_map_peaks_at_block_boundaries() {
    let sharpened = sharpen(&checkerboard_gray(80, 80));
    let map = laplacian_magnitude(&sharpened);
    // Interior of a block is flat.
    assert_eq!(map[[10, 10]], 0);
    assert!(map[[10, 19]] > 0 || map[[10, 20]] > 0);
}

#[test]
fn test_smoothing_spreads_response() {
    let sharpened = sharpen(&checkerboard_gray(80, 80));
    let raw = focus_map(&sharpened, None);
    let smooth = focus_map(&sharpened, Some(17));
    assert_eq!(raw[[10, 14]], 0);
    assert!(smooth[[10, 14]] > 0, "blurred map should reach into the block");
    let raw_max = raw.iter().copied().max().unwrap();
    let smooth_max = smooth.iter().copied().max().unwrap();
    assert!(smooth_max <= raw_max);
}

// ---------------------------------------------------------------------------
// adaptive threshold
// ---------------------------------------------------------------------------

#[test]
fn test_mean_stddev() {
    let data = Array2::from_shape_vec((1, 4), vec![0u8, 0, 10, 10]).unwrap();
    let (mean, std) = compute_mean_stddev(&data);
    assert_relative_eq!(mean, 5.0);
    assert_relative_eq!(std, 5.0);
}

#[test]
fn test_threshold_clamped_into_mean_band() {
    // Huge std: raw threshold above 3*mean.
    assert_relative_eq!(adaptive_threshold(10.0, 100.0, Sensitivity::new(50)), 30.0);
    // Zero std: raw threshold below 1.2*mean.
    assert_relative_eq!(adaptive_threshold(10.0, 0.0, Sensitivity::new(50)), 12.0);
    // In between.
    assert_relative_eq!(adaptive_threshold(10.0, 10.0, Sensitivity::new(50)), 20.0);
}

#[test]
fn test_threshold_bounds_and_monotonic_over_sensitivity() {
    for source_smoothing in [None, Some(17)] {
        let sharpened = sharpen(&checkerboard_gray(120, 160));
        let map = focus_map(&sharpened, source_smoothing);
        let (mean, _) = compute_mean_stddev(&map);

        let mut previous = f64::INFINITY;
        for s in 1..=100 {
            let (_, stats) = focus_mask(&map, Sensitivity::new(s));
            assert!(stats.threshold >= 1.2 * mean - 1e-9, "s={s}");
            assert!(stats.threshold <= 3.0 * mean + 1e-9, "s={s}");
            assert!(
                stats.threshold <= previous + 1e-12,
                "threshold rose from {previous} to {} at s={s}",
                stats.threshold
            );
            previous = stats.threshold;
        }
    }
}

#[test]
fn test_higher_sensitivity_marks_at_least_as_much() {
    let sharpened = sharpen(&checkerboard_gray(120, 160));
    let map = focus_map(&sharpened, Some(17));
    let count = |s| {
        focus_mask(&map, Sensitivity::new(s))
            .0
            .iter()
            .filter(|&&v| v)
            .count()
    };
    assert!(count(90) >= count(10));
}

#[test]
fn test_mask_is_strictly_greater() {
    // A flat map sits below its own threshold: mean = 10, std = 0 -> threshold = 12.
    let map = Array2::from_elem((2, 2), 10u8);
    let (mask, stats) = focus_mask(&map, Sensitivity::new(50));
    assert_relative_eq!(stats.threshold, 12.0);
    assert!(mask.iter().all(|&v| !v));

    let mut map = Array2::from_elem((4, 4), 0u8);
    map[[0, 0]] = 255;
    let (mask, stats) = focus_mask(&map, Sensitivity::new(100));
    assert!(stats.threshold < 255.0);
    assert!(mask[[0, 0]]);
    assert!(!mask[[1, 1]]);
}

#[test]
fn test_zero_map_yields_empty_mask() {
    let map = Array2::<u8>::zeros((10, 10));
    for s in [1, 50, 100] {
        let (mask, stats) = focus_mask(&map, Sensitivity::new(s));
        assert_relative_eq!(stats.threshold, 0.0);
        assert!(mask.iter().all(|&v| !v));
    }
}
