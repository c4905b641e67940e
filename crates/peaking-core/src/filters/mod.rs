pub mod gaussian_blur;
pub mod sharpen;

use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// Build an `h x w` array by evaluating `f(row, col)` for every pixel,
/// spreading rows across the Rayon pool for large frames.
pub(crate) fn map_pixels<T, F>(h: usize, w: usize, f: F) -> Array2<T>
where
    T: Copy + Default + Send,
    F: Fn(usize, usize) -> T + Sync,
{
    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        let rows: Vec<Vec<T>> = (0..h)
            .into_par_iter()
            .map(|row| (0..w).map(|col| f(row, col)).collect())
            .collect();

        let mut result = Array2::<T>::default((h, w));
        for (row, row_data) in rows.into_iter().enumerate() {
            for (col, val) in row_data.into_iter().enumerate() {
                result[[row, col]] = val;
            }
        }
        result
    } else {
        Array2::from_shape_fn((h, w), |(row, col)| f(row, col))
    }
}

/// Correlate with a 3x3 kernel. Out-of-range neighbors replicate the
/// nearest edge pixel.
pub fn convolve3x3(data: &Array2<u8>, kernel: &[[f32; 3]; 3]) -> Array2<f32> {
    let (h, w) = data.dim();
    if h == 0 || w == 0 {
        return Array2::zeros((h, w));
    }

    map_pixels(h, w, |row, col| {
        let mut sum = 0.0f32;
        for (kr, kernel_row) in kernel.iter().enumerate() {
            let src_row = clamp_index(row as isize + kr as isize - 1, h);
            for (kc, &kv) in kernel_row.iter().enumerate() {
                if kv == 0.0 {
                    continue;
                }
                let src_col = clamp_index(col as isize + kc as isize - 1, w);
                sum += data[[src_row, src_col]] as f32 * kv;
            }
        }
        sum
    })
}

#[inline]
pub(crate) fn clamp_index(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}

/// Round and saturate to the 8-bit range.
#[inline]
pub(crate) fn saturate_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
