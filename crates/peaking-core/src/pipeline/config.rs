use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_FILE_DILATION_CUTOFF, DEFAULT_FILE_EDGE_BASE, DEFAULT_FILE_ENCODE_QUALITY,
    DEFAULT_FOCUS_BLOCK_SIZE, DEFAULT_OVERLAY_ALPHA, DEFAULT_WEBCAM_DILATION_CUTOFF,
    DEFAULT_WEBCAM_EDGE_BASE, DEFAULT_WEBCAM_ENCODE_QUALITY,
};

/// Full focus-peaking configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PeakingConfig {
    #[serde(default)]
    pub overlay: OverlayConfig,
    #[serde(default)]
    pub focus: FocusConfig,
    #[serde(default = "SourceProfile::webcam")]
    pub webcam: SourceProfile,
    #[serde(default = "SourceProfile::file")]
    pub file: SourceProfile,
}

impl Default for PeakingConfig {
    fn default() -> Self {
        Self {
            overlay: OverlayConfig::default(),
            focus: FocusConfig::default(),
            webcam: SourceProfile::webcam(),
            file: SourceProfile::file(),
        }
    }
}

/// How the final mask is painted onto the frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum OverlayMode {
    /// `original + overlay * alpha`, clipped.
    #[default]
    AlphaBlend,
    /// Masked pixels are set to the highlight color.
    Replace,
}

impl std::fmt::Display for OverlayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlphaBlend => write!(f, "Alpha blend"),
            Self::Replace => write!(f, "Replace"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    #[serde(default)]
    pub mode: OverlayMode,
    /// Blend weight of the highlight color in `AlphaBlend` mode.
    #[serde(default = "default_alpha")]
    pub alpha: f32,
}

fn default_alpha() -> f32 {
    DEFAULT_OVERLAY_ALPHA
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            mode: OverlayMode::default(),
            alpha: DEFAULT_OVERLAY_ALPHA,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FocusConfig {
    /// Block size of the smoothed focus estimate; the kernel is `block_size + 1` wide.
    #[serde(default = "default_block_size")]
    pub block_size: usize,
}

fn default_block_size() -> usize {
    DEFAULT_FOCUS_BLOCK_SIZE
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_FOCUS_BLOCK_SIZE,
        }
    }
}

/// Per-source tuning. Webcam and file sources each get one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceProfile {
    /// Base of the low hysteresis threshold.
    pub edge_base: f64,
    /// Sensitivity above which the final mask is dilated once.
    pub dilation_cutoff: u32,
    /// JPEG quality of the encoded result.
    pub encode_quality: u8,
    /// Smooth the focus map into a block-level estimate.
    pub smooth_focus: bool,
    /// Downscale large frames according to sensitivity.
    pub downscale: bool,
}

impl SourceProfile {
    pub fn webcam() -> Self {
        Self {
            edge_base: DEFAULT_WEBCAM_EDGE_BASE,
            dilation_cutoff: DEFAULT_WEBCAM_DILATION_CUTOFF,
            encode_quality: DEFAULT_WEBCAM_ENCODE_QUALITY,
            smooth_focus: false,
            downscale: false,
        }
    }

    pub fn file() -> Self {
        Self {
            edge_base: DEFAULT_FILE_EDGE_BASE,
            dilation_cutoff: DEFAULT_FILE_DILATION_CUTOFF,
            encode_quality: DEFAULT_FILE_ENCODE_QUALITY,
            smooth_focus: true,
            downscale: true,
        }
    }
}

impl Default for SourceProfile {
    fn default() -> Self {
        Self::file()
    }
}
