pub mod laplacian;
pub mod threshold;

pub use laplacian::{focus_map, laplacian_magnitude};
pub use threshold::{adaptive_threshold, focus_mask, ThresholdStats};
