use ndarray::Array3;

use crate::error::{PeakingError, Result};
use crate::filters::saturate_u8;
use crate::frame::{ColorFrame, Mask};
use crate::params::EdgeColor;
use crate::pipeline::config::OverlayMode;
use crate::pipeline::PipelineStage;

/// Paint `mask` onto `original` in `color`.
///
/// `AlphaBlend` adds `alpha * color` to masked pixels and saturates,
/// `Replace` sets masked pixels to `color`. Unmasked pixels are untouched in
/// both modes.
pub fn composite(
    original: &ColorFrame,
    mask: &Mask,
    color: EdgeColor,
    mode: OverlayMode,
    alpha: f32,
) -> Result<ColorFrame> {
    if original.dim() != mask.dim() {
        return Err(PeakingError::ShapeMismatch {
            stage: PipelineStage::Compositing,
            expected: original.dim(),
            actual: mask.dim(),
        });
    }

    let rgb = color.rgb();
    let data = Array3::from_shape_fn(original.data.dim(), |(row, col, ch)| {
        let base = original.data[[row, col, ch]];
        if !mask[[row, col]] {
            return base;
        }
        match mode {
            OverlayMode::AlphaBlend => saturate_u8(base as f32 + rgb[ch] as f32 * alpha),
            OverlayMode::Replace => rgb[ch],
        }
    });

    Ok(ColorFrame::new(data))
}
