use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use ndarray::Array2;

use crate::error::Result;
use crate::frame::{ColorFrame, Mask};

use super::codec::{encode_jpeg, frame_to_rgb_image, rgb_image_to_frame};

/// Load any supported image file as an RGB frame.
pub fn load_color_image(path: &Path) -> Result<ColorFrame> {
    let img = image::open(path)?;
    rgb_image_to_frame(img.to_rgb8())
}

/// Save a color frame, choosing format from file extension.
/// JPEG output uses `jpeg_quality`; other formats ignore it.
pub fn save_color_image(frame: &ColorFrame, path: &Path, jpeg_quality: u8) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") => {
            std::fs::write(path, encode_jpeg(frame, jpeg_quality)?)?;
        }
        _ => {
            frame_to_rgb_image(frame)?.save(path)?;
        }
    }
    Ok(())
}

/// Save an 8-bit single-channel map as grayscale PNG.
pub fn save_gray_png(data: &Array2<u8>, path: &Path) -> Result<()> {
    let (h, w) = data.dim();
    let mut img = GrayImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            img.put_pixel(col as u32, row as u32, Luma([data[[row, col]]]));
        }
    }
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a binary mask as a 0/255 grayscale PNG.
pub fn save_mask_png(mask: &Mask, path: &Path) -> Result<()> {
    save_gray_png(&mask.mapv(|v| if v { 255 } else { 0 }), path)
}
