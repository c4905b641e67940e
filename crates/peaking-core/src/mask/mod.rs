pub mod combine;
pub mod morphology;

pub use combine::combine_masks;
pub use morphology::{dilate, erode, morphological_opening};
