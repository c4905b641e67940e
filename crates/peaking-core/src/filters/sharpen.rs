use crate::consts::SHARPEN_KERNEL;
use crate::frame::Frame;

use super::{convolve3x3, saturate_u8};

/// Amplify local contrast with the fixed 3x3 detail kernel
/// (center +9, neighbors -1). Borders replicate edge pixels and the
/// result saturates to 8 bits.
///
/// Flat regions are left unchanged since the kernel weights sum to 1.
pub fn sharpen(frame: &Frame) -> Frame {
    let response = convolve3x3(&frame.data, &SHARPEN_KERNEL);
    Frame::new(response.mapv(saturate_u8))
}
