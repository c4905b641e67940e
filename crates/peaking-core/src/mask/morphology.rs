use ndarray::Array2;

use crate::filters::map_pixels;

/// Side of the square structuring element.
const ELEMENT_SIZE: isize = 2;

/// Morphological opening (erosion followed by dilation) with a 2x2 element.
///
/// Removes foreground specks that cannot contain a 2x2 block while leaving
/// larger regions in place. Erosion looks forward and dilation looks back,
/// so surviving regions are not shifted.
pub fn morphological_opening(mask: &Array2<bool>) -> Array2<bool> {
    let eroded = erode(mask);
    dilate(&eroded)
}

/// Binary erosion: a pixel stays true only if every in-bounds pixel of the
/// 2x2 block starting at it is true.
pub fn erode(mask: &Array2<bool>) -> Array2<bool> {
    let (h, w) = mask.dim();
    map_pixels(h, w, |row, col| {
        if !mask[[row, col]] {
            return false;
        }
        for dr in 0..ELEMENT_SIZE {
            for dc in 0..ELEMENT_SIZE {
                let nr = row as isize + dr;
                let nc = col as isize + dc;
                if nr < h as isize && nc < w as isize && !mask[[nr as usize, nc as usize]] {
                    return false;
                }
            }
        }
        true
    })
}

/// Binary dilation: a pixel becomes true if any pixel of the 2x2 block
/// ending at it is true.
pub fn dilate(mask: &Array2<bool>) -> Array2<bool> {
    let (h, w) = mask.dim();
    map_pixels(h, w, |row, col| {
        for dr in 0..ELEMENT_SIZE {
            for dc in 0..ELEMENT_SIZE {
                let nr = row as isize - dr;
                let nc = col as isize - dc;
                if nr >= 0 && nc >= 0 && mask[[nr as usize, nc as usize]] {
                    return true;
                }
            }
        }
        false
    })
}
