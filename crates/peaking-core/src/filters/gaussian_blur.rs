use ndarray::Array2;

use super::{clamp_index, map_pixels, saturate_u8};

/// Apply a separable Gaussian blur with a `ksize`-wide kernel to an 8-bit map.
///
/// The sigma is derived from the kernel size. Even sizes are rounded up to the
/// next odd size so the kernel stays centered.
pub fn gaussian_blur_u8(data: &Array2<u8>, ksize: usize) -> Array2<u8> {
    let (h, w) = data.dim();
    if h == 0 || w == 0 || ksize <= 1 {
        return data.clone();
    }

    let kernel = make_gaussian_kernel(ksize | 1);
    let input = data.mapv(f32::from);
    let row_pass = convolve_rows(&input, &kernel);
    convolve_cols(&row_pass, &kernel).mapv(saturate_u8)
}

/// Sigma for a kernel of `ksize` taps: `0.3 * ((ksize - 1) * 0.5 - 1) + 0.8`.
pub fn sigma_for_kernel(ksize: usize) -> f32 {
    0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

fn make_gaussian_kernel(ksize: usize) -> Vec<f32> {
    let sigma = sigma_for_kernel(ksize);
    let radius = ksize / 2;
    let mut kernel = vec![0.0f32; ksize];
    let s2 = 2.0 * sigma * sigma;
    let mut sum = 0.0f32;

    for (i, k) in kernel.iter_mut().enumerate() {
        let x = i as f32 - radius as f32;
        *k = (-x * x / s2).exp();
        sum += *k;
    }

    for v in &mut kernel {
        *v /= sum;
    }

    kernel
}

fn convolve_rows(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;

    map_pixels(h, w, |row, col| {
        let mut sum = 0.0f32;
        for (ki, &kv) in kernel.iter().enumerate() {
            let src_col = clamp_index(col as isize + ki as isize - radius as isize, w);
            sum += data[[row, src_col]] * kv;
        }
        sum
    })
}

fn convolve_cols(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;

    map_pixels(h, w, |row, col| {
        let mut sum = 0.0f32;
        for (ki, &kv) in kernel.iter().enumerate() {
            let src_row = clamp_index(row as isize + ki as isize - radius as isize, h);
            sum += data[[src_row, col]] * kv;
        }
        sum
    })
}
