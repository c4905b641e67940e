use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use ndarray::Array3;

use crate::error::{PeakingError, Result};
use crate::frame::ColorFrame;
use crate::pipeline::PipelineStage;

/// Decode a compressed image buffer (any format the `image` crate sniffs)
/// into an RGB frame. Zero-area images are rejected.
pub fn decode_frame(bytes: &[u8]) -> Result<ColorFrame> {
    let img = image::load_from_memory(bytes)?;
    rgb_image_to_frame(img.to_rgb8())
}

/// Encode a frame as JPEG with the given quality (1-100).
pub fn encode_jpeg(frame: &ColorFrame, quality: u8) -> Result<Vec<u8>> {
    let img = frame_to_rgb_image(frame)?;
    let mut buf = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, quality.clamp(1, 100));
    encoder
        .encode_image(&img)
        .map_err(|e| PeakingError::Stage {
            stage: PipelineStage::Encoding,
            message: e.to_string(),
        })?;
    Ok(buf)
}

pub(crate) fn rgb_image_to_frame(img: RgbImage) -> Result<ColorFrame> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(PeakingError::InvalidDimensions {
            width: w,
            height: h,
        });
    }
    let data = Array3::from_shape_vec((h as usize, w as usize, 3), img.into_raw()).map_err(
        |e| PeakingError::Stage {
            stage: PipelineStage::Decoding,
            message: e.to_string(),
        },
    )?;
    Ok(ColorFrame::new(data))
}

pub(crate) fn frame_to_rgb_image(frame: &ColorFrame) -> Result<RgbImage> {
    let (h, w) = frame.dim();
    RgbImage::from_raw(w as u32, h as u32, frame.data.iter().copied().collect()).ok_or(
        PeakingError::InvalidDimensions {
            width: w as u32,
            height: h as u32,
        },
    )
}
