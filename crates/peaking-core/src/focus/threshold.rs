use ndarray::Array2;

use crate::consts::{SELECTIVITY_BASE, THRESHOLD_MAX_MEAN_FACTOR, THRESHOLD_MIN_MEAN_FACTOR};
use crate::frame::{FocusMap, Mask};
use crate::params::Sensitivity;

/// Statistics behind one adaptive threshold decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdStats {
    pub mean: f64,
    pub std_dev: f64,
    pub threshold: f64,
}

/// Compute mean and standard deviation of pixel values.
pub fn compute_mean_stddev(data: &Array2<u8>) -> (f64, f64) {
    let n = data.len() as f64;
    if n == 0.0 {
        return (0.0, 0.0);
    }
    let sum: f64 = data.iter().map(|&v| v as f64).sum();
    let mean = sum / n;
    let var: f64 = data.iter().map(|&v| (v as f64 - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

/// Threshold = `mean + (1.5 - sensitivity/100) * std_dev`, kept within
/// `[1.2 * mean, 3.0 * mean]`.
///
/// Non-increasing in sensitivity for a fixed map.
pub fn adaptive_threshold(mean: f64, std_dev: f64, sensitivity: Sensitivity) -> f64 {
    let selectivity = SELECTIVITY_BASE - sensitivity.fraction();
    let raw = mean + selectivity * std_dev;
    (mean * THRESHOLD_MIN_MEAN_FACTOR).max(raw.min(mean * THRESHOLD_MAX_MEAN_FACTOR))
}

/// Binary in-focus mask: a pixel is set iff its focus value strictly
/// exceeds the adaptive threshold.
pub fn focus_mask(map: &FocusMap, sensitivity: Sensitivity) -> (Mask, ThresholdStats) {
    let (mean, std_dev) = compute_mean_stddev(map);
    let threshold = adaptive_threshold(mean, std_dev, sensitivity);
    let mask = map.mapv(|v| v as f64 > threshold);
    (
        mask,
        ThresholdStats {
            mean,
            std_dev,
            threshold,
        },
    )
}
