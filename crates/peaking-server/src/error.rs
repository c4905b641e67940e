use peaking_core::error::PeakingError;
use thiserror::Error;

/// Failures while handling one client request. None of them end the session;
/// each one is reported back as a single `error` event.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Malformed message or payload.
    #[error("{0}")]
    Protocol(String),

    /// The frame bytes are not a valid image.
    #[error("Failed to decode frame: {0}")]
    Decode(String),

    /// Any failure inside the pipeline or its worker task.
    #[error("Error processing image: {0}")]
    Processing(String),
}

impl From<PeakingError> for ServerError {
    fn from(err: PeakingError) -> Self {
        match err {
            PeakingError::Decode(_) | PeakingError::InvalidDimensions { .. } => {
                Self::Decode(err.to_string())
            }
            other => Self::Processing(other.to_string()),
        }
    }
}

/// Failures loading the server configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    ReadFile(String, std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(String),
    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),
}
