use crate::edges::EdgeThresholds;
use crate::focus::ThresholdStats;
use crate::frame::{ColorFrame, FocusMap, Frame, Mask};

use super::policy::SourcePolicy;

/// Pipeline processing stage, used for logging and error context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Decoding,
    Preparing,
    Enhancing,
    Scoring,
    Thresholding,
    EdgeDetection,
    Combining,
    Compositing,
    Encoding,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decoding => write!(f, "Decoding frame"),
            Self::Preparing => write!(f, "Preparing frame"),
            Self::Enhancing => write!(f, "Enhancing detail"),
            Self::Scoring => write!(f, "Scoring focus"),
            Self::Thresholding => write!(f, "Thresholding focus map"),
            Self::EdgeDetection => write!(f, "Detecting edges"),
            Self::Combining => write!(f, "Combining masks"),
            Self::Compositing => write!(f, "Compositing overlay"),
            Self::Encoding => write!(f, "Encoding frame"),
        }
    }
}

/// Everything one pipeline run produced. Intermediate maps are kept so
/// callers can inspect or dump them.
#[derive(Clone, Debug)]
pub struct PeakingOutput {
    /// Annotated color frame, ready for encoding.
    pub frame: ColorFrame,
    /// Sharpened grayscale frame fed to scoring and edge detection.
    pub sharpened: Frame,
    pub focus_map: FocusMap,
    pub focus_mask: Mask,
    pub edges: Mask,
    /// Final mask painted onto `frame`.
    pub mask: Mask,
    pub threshold: ThresholdStats,
    pub edge_thresholds: EdgeThresholds,
    pub policy: SourcePolicy,
}
