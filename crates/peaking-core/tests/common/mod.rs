#![allow(dead_code)]

use ndarray::{Array2, Array3};

use peaking_core::frame::{ColorFrame, Frame};

/// Side of one checkerboard block.
pub const BLOCK: usize = 20;

/// Build a gray frame filled with one value.
pub fn uniform_gray(h: usize, w: usize, value: u8) -> Frame {
    Frame::new(Array2::from_elem((h, w), value))
}

/// Build a color frame filled with one color.
pub fn uniform_color(h: usize, w: usize, rgb: [u8; 3]) -> ColorFrame {
    ColorFrame::from_elem(h, w, rgb)
}

/// Alternating `BLOCK x BLOCK` blocks of gray 100 and 200.
pub fn checkerboard_gray(h: usize, w: usize) -> Frame {
    Frame::new(Array2::from_shape_fn((h, w), |(r, c)| {
        if (r / BLOCK + c / BLOCK) % 2 == 0 {
            100
        } else {
            200
        }
    }))
}

/// Color version of `checkerboard_gray` with equal channels.
pub fn checkerboard_color(h: usize, w: usize) -> ColorFrame {
    let gray = checkerboard_gray(h, w);
    ColorFrame::new(Array3::from_shape_fn((h, w, 3), |(r, c, _)| gray.data[[r, c]]))
}

/// Left half `lo`, right half `hi`.
pub fn vertical_step(h: usize, w: usize, lo: u8, hi: u8) -> Frame {
    Frame::new(Array2::from_shape_fn((h, w), |(_, c)| if c < w / 2 { lo } else { hi }))
}

/// Distance of a pixel index to the nearest block boundary.
pub fn boundary_distance(i: usize) -> usize {
    let m = i % BLOCK;
    m.min(BLOCK - m)
}

/// Coordinates of every set pixel.
pub fn set_pixels(mask: &Array2<bool>) -> Vec<(usize, usize)> {
    mask.indexed_iter()
        .filter(|(_, &v)| v)
        .map(|(idx, _)| idx)
        .collect()
}
