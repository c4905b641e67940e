use thiserror::Error;

use crate::pipeline::PipelineStage;

#[derive(Error, Debug)]
pub enum PeakingError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("{stage}: expected {expected:?} buffer, got {actual:?}")]
    ShapeMismatch {
        stage: PipelineStage,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("{stage}: {message}")]
    Stage {
        stage: PipelineStage,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, PeakingError>;
