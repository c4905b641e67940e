use ndarray::Array2;

use crate::consts::{EDGE_HIGH_LOW_RATIO, EDGE_SENSITIVITY_DIVISOR, MAX_SENSITIVITY};
use crate::frame::{Frame, Mask};
use crate::params::Sensitivity;

use super::sobel::{sobel_gradients, Gradient};

/// tan(22.5 deg), boundary between horizontal and diagonal directions.
const TAN_22_5: f64 = 0.414_213_562_373_095;
/// tan(67.5 deg), boundary between diagonal and vertical directions.
const TAN_67_5: f64 = 2.414_213_562_373_095;

/// Hysteresis thresholds on the L1 gradient magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeThresholds {
    pub low: i32,
    pub high: i32,
}

/// `low = base + (100 - sensitivity) / 1.5`, `high = 3 * low`, both truncated.
pub fn edge_thresholds(base: f64, sensitivity: Sensitivity) -> EdgeThresholds {
    let slack = (MAX_SENSITIVITY - sensitivity.get()) as f64 / EDGE_SENSITIVITY_DIVISOR;
    let low = (base + slack) as i32;
    EdgeThresholds {
        low,
        high: low * EDGE_HIGH_LOW_RATIO as i32,
    }
}

/// Edge map of a sharpened frame with sensitivity-scaled thresholds.
pub fn detect_edges(
    sharpened: &Frame,
    base: f64,
    sensitivity: Sensitivity,
) -> (Mask, EdgeThresholds) {
    let thresholds = edge_thresholds(base, sensitivity);
    (hysteresis_edges(&sharpened.data, thresholds), thresholds)
}

/// Gradient edge detector: Sobel gradients, non-maximum suppression along
/// four quantized directions, then double thresholding with hysteresis.
///
/// A pixel survives suppression only if its magnitude exceeds `low` and is a
/// local maximum across the edge. Pixels above `high` seed edges, which then
/// grow through 8-connected surviving pixels.
pub fn hysteresis_edges(data: &Array2<u8>, thresholds: EdgeThresholds) -> Mask {
    let (h, w) = data.dim();
    let mut edges = Array2::from_elem((h, w), false);
    if h == 0 || w == 0 {
        return edges;
    }

    let gradients = sobel_gradients(data);
    let magnitude = gradients.mapv(Gradient::magnitude);

    let mag_at = |r: isize, c: isize| -> i32 {
        if r < 0 || c < 0 || r >= h as isize || c >= w as isize {
            0
        } else {
            magnitude[[r as usize, c as usize]]
        }
    };

    // 0 = suppressed, 1 = weak candidate, 2 = strong.
    let mut class = Array2::<u8>::zeros((h, w));
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for row in 0..h {
        for col in 0..w {
            let m = magnitude[[row, col]];
            if m <= thresholds.low {
                continue;
            }

            let g = gradients[[row, col]];
            let ax = g.gx.abs() as f64;
            let ay = g.gy.abs() as f64;
            let (r, c) = (row as isize, col as isize);

            let (before, after) = if ay <= ax * TAN_22_5 {
                (mag_at(r, c - 1), mag_at(r, c + 1))
            } else if ay > ax * TAN_67_5 {
                (mag_at(r - 1, c), mag_at(r + 1, c))
            } else if (g.gx < 0) == (g.gy < 0) {
                (mag_at(r - 1, c - 1), mag_at(r + 1, c + 1))
            } else {
                (mag_at(r - 1, c + 1), mag_at(r + 1, c - 1))
            };

            if m > before && m >= after {
                if m > thresholds.high {
                    class[[row, col]] = 2;
                    stack.push((row, col));
                } else {
                    class[[row, col]] = 1;
                }
            }
        }
    }

    while let Some((row, col)) = stack.pop() {
        if edges[[row, col]] {
            continue;
        }
        edges[[row, col]] = true;

        for dr in -1..=1_isize {
            for dc in -1..=1_isize {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let nr = row as isize + dr;
                let nc = col as isize + dc;
                if nr < 0 || nc < 0 || nr >= h as isize || nc >= w as isize {
                    continue;
                }
                let (nr, nc) = (nr as usize, nc as usize);
                if class[[nr, nc]] > 0 && !edges[[nr, nc]] {
                    stack.push((nr, nc));
                }
            }
        }
    }

    edges
}
