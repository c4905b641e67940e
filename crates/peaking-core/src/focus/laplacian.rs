use ndarray::Array2;

use crate::consts::LAPLACIAN_KERNEL;
use crate::filters::convolve3x3;
use crate::filters::gaussian_blur::gaussian_blur_u8;
use crate::frame::{FocusMap, Frame};

/// Absolute Laplacian response of a frame, linearly normalized to [0, 255].
///
/// Convolves with the 3x3 Laplacian kernel:
///   0  1  0
///   1 -4  1
///   0  1  0
/// with replicated borders. Values are scaled by `255 / max` and truncated.
/// A response that is zero everywhere yields an all-zero map.
pub fn laplacian_magnitude(frame: &Frame) -> FocusMap {
    let response = convolve3x3(&frame.data, &LAPLACIAN_KERNEL).mapv(f32::abs);
    normalize_to_u8(&response)
}

/// Per-pixel focus estimate of a sharpened frame.
///
/// With `smoothing = Some(k)` the normalized Laplacian is blurred with a
/// `k`-wide Gaussian, turning it into a locally averaged block-level
/// estimate. With `None` the raw magnitude is returned.
pub fn focus_map(sharpened: &Frame, smoothing: Option<usize>) -> FocusMap {
    let magnitude = laplacian_magnitude(sharpened);
    match smoothing {
        Some(ksize) => gaussian_blur_u8(&magnitude, ksize),
        None => magnitude,
    }
}

fn normalize_to_u8(data: &Array2<f32>) -> Array2<u8> {
    let max = data.iter().cloned().fold(0.0f32, f32::max);
    if max <= 0.0 {
        return Array2::zeros(data.dim());
    }
    let scale = 255.0 / max;
    data.mapv(|v| (v * scale).clamp(0.0, 255.0) as u8)
}
