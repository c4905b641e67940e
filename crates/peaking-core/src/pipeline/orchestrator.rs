use tracing::debug;

use crate::edges::detect_edges;
use crate::error::{PeakingError, Result};
use crate::filters::sharpen::sharpen;
use crate::focus::{focus_map, focus_mask};
use crate::frame::{mask_count, ColorFrame};
use crate::io::codec::{decode_frame, encode_jpeg};
use crate::mask::combine_masks;
use crate::overlay::composite;
use crate::params::RequestParameters;
use crate::prepare::prepare_frame;

use super::config::PeakingConfig;
use super::policy::SourcePolicy;
use super::types::{PeakingOutput, PipelineStage};

/// Encoded result of one frame.
#[derive(Clone, Debug)]
pub struct EncodedFrame {
    /// JPEG bytes.
    pub bytes: Vec<u8>,
    pub width: usize,
    pub height: usize,
    pub highlighted_pixels: usize,
}

/// Run every stage on one decoded frame.
///
/// Pipeline: prepare (downscale + grayscale) -> sharpen -> focus map ->
/// adaptive focus mask -> edge map -> combine -> composite.
pub fn run_pipeline(
    color: &ColorFrame,
    params: &RequestParameters,
    config: &PeakingConfig,
) -> Result<PeakingOutput> {
    let policy = SourcePolicy::resolve(config, params);
    let (h, w) = color.dim();
    if h == 0 || w == 0 {
        return Err(PeakingError::InvalidDimensions {
            width: w as u32,
            height: h as u32,
        });
    }

    // Step 1: Downscale (file sources) and grayscale.
    let (prepared, gray) = prepare_frame(color, policy.max_dimension);
    let dim = prepared.dim();
    ensure_dim(PipelineStage::Preparing, dim, gray.dim())?;

    // Step 2: Sharpen before scoring so sensor noise does not dominate.
    let sharpened = sharpen(&gray);
    ensure_dim(PipelineStage::Enhancing, dim, sharpened.dim())?;

    // Step 3: Focus map.
    let focus = focus_map(&sharpened, policy.focus_smoothing);
    ensure_dim(PipelineStage::Scoring, dim, focus.dim())?;

    // Step 4: Adaptive threshold.
    let (in_focus, threshold) = focus_mask(&focus, policy.sensitivity);
    ensure_dim(PipelineStage::Thresholding, dim, in_focus.dim())?;
    debug!(
        mean = threshold.mean,
        std_dev = threshold.std_dev,
        threshold = threshold.threshold,
        "focus threshold"
    );

    // Step 5: Edges on the sharpened frame.
    let (edges, edge_thresholds) = detect_edges(&sharpened, policy.edge_base, policy.sensitivity);
    ensure_dim(PipelineStage::EdgeDetection, dim, edges.dim())?;
    debug!(
        low = edge_thresholds.low,
        high = edge_thresholds.high,
        "edge thresholds"
    );

    // Step 6: Keep only in-focus edges.
    let mask = combine_masks(&edges, &in_focus, policy.dilate())?;

    // Step 7: Paint.
    let frame = composite(
        &prepared,
        &mask,
        params.edge_color,
        policy.overlay_mode,
        policy.overlay_alpha,
    )?;

    debug!(
        width = dim.1,
        height = dim.0,
        source = %policy.source_kind,
        sensitivity = %policy.sensitivity,
        highlighted = mask_count(&mask),
        "frame processed"
    );

    Ok(PeakingOutput {
        frame,
        sharpened,
        focus_map: focus,
        focus_mask: in_focus,
        edges,
        mask,
        threshold,
        edge_thresholds,
        policy,
    })
}

/// Decode, process and re-encode one compressed frame.
pub fn process_encoded(
    bytes: &[u8],
    params: &RequestParameters,
    config: &PeakingConfig,
) -> Result<EncodedFrame> {
    let color = decode_frame(bytes)?;
    let output = run_pipeline(&color, params, config)?;
    let encoded = encode_jpeg(&output.frame, output.policy.encode_quality)?;
    let (height, width) = output.frame.dim();
    Ok(EncodedFrame {
        bytes: encoded,
        width,
        height,
        highlighted_pixels: mask_count(&output.mask),
    })
}

fn ensure_dim(
    stage: PipelineStage,
    expected: (usize, usize),
    actual: (usize, usize),
) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(PeakingError::ShapeMismatch {
            stage,
            expected,
            actual,
        })
    }
}
