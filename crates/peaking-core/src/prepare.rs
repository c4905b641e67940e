use ndarray::{Array2, Array3};

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};
use crate::filters::{map_pixels, saturate_u8};
use crate::frame::{ColorFrame, Frame};

/// Downscale `color` so that its larger side is at most `max_dimension`,
/// preserving aspect ratio. Frames already within bounds are returned as is.
pub fn resize_to_max_dimension(color: &ColorFrame, max_dimension: usize) -> ColorFrame {
    let (h, w) = color.dim();
    if max_dimension == 0 || (h <= max_dimension && w <= max_dimension) {
        return color.clone();
    }

    // Anchor on the larger side; the other side scales by the same ratio, floored.
    let larger = h.max(w);
    let new_h = (h * max_dimension / larger).max(1);
    let new_w = (w * max_dimension / larger).max(1);

    tracing::debug!(from = ?(w, h), to = ?(new_w, new_h), "downscaling frame");
    resize_area(color, new_h, new_w)
}

/// Area-averaging resize for downscaling. Each destination pixel is the
/// coverage-weighted mean of the source pixels under its footprint.
pub fn resize_area(color: &ColorFrame, new_h: usize, new_w: usize) -> ColorFrame {
    let (h, w) = color.dim();
    if (h, w) == (new_h, new_w) {
        return color.clone();
    }

    let col_weights = area_weights(w, new_w);
    let row_weights = area_weights(h, new_h);

    // Horizontal pass: (h, new_w, 3) in f32.
    let mut horizontal = Array3::<f32>::zeros((h, new_w, 3));
    for row in 0..h {
        for (dst_col, taps) in col_weights.iter().enumerate() {
            for ch in 0..3 {
                horizontal[[row, dst_col, ch]] = taps
                    .iter()
                    .map(|&(src, wt)| color.data[[row, src, ch]] as f32 * wt)
                    .sum();
            }
        }
    }

    // Vertical pass.
    let mut out = Array3::<u8>::zeros((new_h, new_w, 3));
    for (dst_row, taps) in row_weights.iter().enumerate() {
        for col in 0..new_w {
            for ch in 0..3 {
                let v: f32 = taps
                    .iter()
                    .map(|&(src, wt)| horizontal[[src, col, ch]] * wt)
                    .sum();
                out[[dst_row, col, ch]] = saturate_u8(v);
            }
        }
    }

    ColorFrame::new(out)
}

/// For each destination index, the source indices it covers and their
/// normalized coverage weights.
fn area_weights(src_len: usize, dst_len: usize) -> Vec<Vec<(usize, f32)>> {
    let scale = src_len as f64 / dst_len as f64;
    (0..dst_len)
        .map(|d| {
            let start = d as f64 * scale;
            let end = ((d + 1) as f64 * scale).min(src_len as f64);
            let first = start.floor() as usize;
            let last = (end.ceil() as usize).min(src_len);

            let mut taps = Vec::with_capacity(last - first);
            for s in first..last {
                let lo = start.max(s as f64);
                let hi = end.min((s + 1) as f64);
                if hi > lo {
                    taps.push((s, (hi - lo) as f32));
                }
            }
            let total: f32 = taps.iter().map(|&(_, wt)| wt).sum();
            if total > 0.0 {
                for tap in &mut taps {
                    tap.1 /= total;
                }
            }
            taps
        })
        .collect()
}

/// Luminance-weighted grayscale conversion using ITU-R BT.601 weights.
pub fn luminance(color: &ColorFrame) -> Frame {
    let (h, w) = color.dim();
    let data: Array2<u8> = map_pixels(h, w, |row, col| {
        let [r, g, b] = color.pixel(row, col);
        saturate_u8(LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32)
    });
    Frame::new(data)
}

/// Optional downscale followed by grayscale conversion.
///
/// Returns the (possibly resized) color frame, which the overlay paints on,
/// together with its grayscale version.
pub fn prepare_frame(color: &ColorFrame, max_dimension: Option<usize>) -> (ColorFrame, Frame) {
    let resized = match max_dimension {
        Some(max) => resize_to_max_dimension(color, max),
        None => color.clone(),
    };
    let gray = luminance(&resized);
    (resized, gray)
}
