use ndarray::Array2;

use crate::filters::{clamp_index, map_pixels};

/// Horizontal and vertical Sobel responses of one pixel neighborhood.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gradient {
    pub gx: i32,
    pub gy: i32,
}

impl Gradient {
    /// L1 magnitude `|gx| + |gy|`.
    pub fn magnitude(self) -> i32 {
        self.gx.abs() + self.gy.abs()
    }
}

/// Compute Sobel gradients with replicated borders.
///
/// Sobel kernels:
///   Gx = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]]
///   Gy = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]]
pub fn sobel_gradients(data: &Array2<u8>) -> Array2<Gradient> {
    let (h, w) = data.dim();
    if h == 0 || w == 0 {
        return Array2::default((h, w));
    }

    map_pixels(h, w, |row, col| {
        let up = clamp_index(row as isize - 1, h);
        let down = clamp_index(row as isize + 1, h);
        let left = clamp_index(col as isize - 1, w);
        let right = clamp_index(col as isize + 1, w);
        let p = |r: usize, c: usize| data[[r, c]] as i32;

        let gx = -p(up, left) + p(up, right) - 2 * p(row, left) + 2 * p(row, right) - p(down, left)
            + p(down, right);
        let gy = -p(up, left) - 2 * p(up, col) - p(up, right)
            + p(down, left)
            + 2 * p(down, col)
            + p(down, right);

        Gradient { gx, gy }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_step_has_horizontal_gradient() {
        let data = Array2::from_shape_fn((5, 6), |(_, c)| if c < 3 { 0u8 } else { 100 });
        let g = sobel_gradients(&data);
        assert_eq!(g[[2, 2]], Gradient { gx: 400, gy: 0 });
        assert_eq!(g[[2, 0]].magnitude(), 0);
    }
}
