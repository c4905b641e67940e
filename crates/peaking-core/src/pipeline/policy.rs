use crate::consts::{DOWNSCALE_FLOOR_DIMENSION, DOWNSCALE_STEPS};
use crate::params::{RequestParameters, Sensitivity, SourceKind};

use super::config::{OverlayMode, PeakingConfig};

/// Everything source-dependent, resolved once per request.
#[derive(Clone, Debug, PartialEq)]
pub struct SourcePolicy {
    pub source_kind: SourceKind,
    pub sensitivity: Sensitivity,
    /// Largest allowed frame side, or `None` to keep the input size.
    pub max_dimension: Option<usize>,
    /// Kernel size of the focus smoothing blur, or `None` for the raw map.
    pub focus_smoothing: Option<usize>,
    pub edge_base: f64,
    pub dilation_cutoff: u32,
    pub encode_quality: u8,
    pub overlay_mode: OverlayMode,
    pub overlay_alpha: f32,
}

impl SourcePolicy {
    pub fn resolve(config: &PeakingConfig, params: &RequestParameters) -> Self {
        let profile = match params.source_kind {
            SourceKind::Webcam => &config.webcam,
            SourceKind::File => &config.file,
        };

        Self {
            source_kind: params.source_kind,
            sensitivity: params.sensitivity,
            max_dimension: profile
                .downscale
                .then(|| target_max_dimension(params.sensitivity)),
            focus_smoothing: profile
                .smooth_focus
                .then_some(config.focus.block_size + 1),
            edge_base: profile.edge_base,
            dilation_cutoff: profile.dilation_cutoff,
            encode_quality: profile.encode_quality,
            overlay_mode: config.overlay.mode,
            overlay_alpha: config.overlay.alpha,
        }
    }

    /// Whether the final mask gets the extra dilation pass.
    pub fn dilate(&self) -> bool {
        self.sensitivity.get() > self.dilation_cutoff
    }
}

/// Step function from sensitivity to the largest allowed frame side.
/// Higher sensitivity keeps more resolution.
pub fn target_max_dimension(sensitivity: Sensitivity) -> usize {
    DOWNSCALE_STEPS
        .iter()
        .find(|(bound, _)| sensitivity.get() > *bound)
        .map(|&(_, dim)| dim)
        .unwrap_or(DOWNSCALE_FLOOR_DIMENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_boundaries() {
        let dim = |s| target_max_dimension(Sensitivity::new(s));
        assert_eq!(dim(100), 720);
        assert_eq!(dim(81), 720);
        assert_eq!(dim(80), 640);
        assert_eq!(dim(61), 640);
        assert_eq!(dim(60), 576);
        assert_eq!(dim(41), 576);
        assert_eq!(dim(40), 512);
        assert_eq!(dim(1), 512);
    }
}
