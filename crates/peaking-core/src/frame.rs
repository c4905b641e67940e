use ndarray::{Array2, Array3};

/// Per-pixel detail magnitude in [0, 255].
pub type FocusMap = Array2<u8>;

/// Binary decision per pixel. `true` corresponds to the 255 value of an
/// 8-bit mask.
pub type Mask = Array2<bool>;

/// A single 8-bit intensity frame.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<u8>,
}

impl Frame {
    pub fn new(data: Array2<u8>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }
}

/// An 8-bit RGB frame.
#[derive(Clone, Debug)]
pub struct ColorFrame {
    /// Pixel data, shape = (height, width, 3), channels in R, G, B order.
    pub data: Array3<u8>,
}

impl ColorFrame {
    pub fn new(data: Array3<u8>) -> Self {
        Self { data }
    }

    /// A frame filled with one color.
    pub fn from_elem(height: usize, width: usize, rgb: [u8; 3]) -> Self {
        Self {
            data: Array3::from_shape_fn((height, width, 3), |(_, _, c)| rgb[c]),
        }
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// Spatial dimensions as (height, width).
    pub fn dim(&self) -> (usize, usize) {
        let (h, w, _) = self.data.dim();
        (h, w)
    }

    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        [
            self.data[[row, col, 0]],
            self.data[[row, col, 1]],
            self.data[[row, col, 2]],
        ]
    }
}

/// Number of pixels set in a mask.
pub fn mask_count(mask: &Mask) -> usize {
    mask.iter().filter(|&&v| v).count()
}
