pub mod config;
pub mod policy;
mod orchestrator;
mod types;

pub use config::{OverlayMode, PeakingConfig};
pub use orchestrator::{process_encoded, run_pipeline, EncodedFrame};
pub use policy::SourcePolicy;
pub use types::{PeakingOutput, PipelineStage};
