pub mod canny;
pub mod sobel;

pub use canny::{detect_edges, edge_thresholds, hysteresis_edges, EdgeThresholds};
