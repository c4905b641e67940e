//! JSON event envelopes exchanged over the WebSocket.
//!
//! Every text frame is `{"event": <name>, "data": <payload>}`. The client
//! sends `process_frame`; the server answers with `processed_frame` or
//! `error`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use peaking_core::params::{EdgeColor, RequestParameters, Sensitivity, SourceKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ServerError;

pub const PROCESS_FRAME: &str = "process_frame";

pub const MISSING_FRAME_MESSAGE: &str = "Invalid data format: expected 'frame' in JSON object";

/// Incoming message before the payload is interpreted.
#[derive(Debug, Deserialize)]
pub struct ClientEnvelope {
    pub event: String,
    #[serde(default)]
    pub data: Value,
}

impl ClientEnvelope {
    pub fn parse(text: &str) -> Result<Self, ServerError> {
        serde_json::from_str(text)
            .map_err(|e| ServerError::Protocol(format!("Invalid message: {e}")))
    }
}

/// Payload of `process_frame`. Every field but `frame` is optional.
#[derive(Debug, Default, Deserialize)]
pub struct ProcessFramePayload {
    #[serde(default)]
    pub frame: Option<String>,
    #[serde(default)]
    pub edge_color: Option<String>,
    #[serde(default)]
    pub sensitivity: Option<f64>,
    #[serde(default)]
    pub source_type: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default, rename = "peaking-enabled")]
    pub peaking_enabled: Option<bool>,
    #[serde(default, rename = "isEdgeDetectionEnabled")]
    pub edge_detection_enabled: Option<bool>,
}

impl ProcessFramePayload {
    pub fn from_value(data: Value) -> Result<Self, ServerError> {
        if !data.is_object() {
            return Err(ServerError::Protocol(MISSING_FRAME_MESSAGE.into()));
        }
        serde_json::from_value(data)
            .map_err(|e| ServerError::Protocol(format!("Invalid frame payload: {e}")))
    }

    /// Only an explicit `false`, under any of the flag names, disables
    /// processing.
    pub fn enabled(&self) -> bool {
        ![
            self.enabled,
            self.peaking_enabled,
            self.edge_detection_enabled,
        ]
        .contains(&Some(false))
    }

    /// Validated parameters; sensitivity is truncated and clamped.
    pub fn to_params(&self) -> RequestParameters {
        RequestParameters {
            sensitivity: self
                .sensitivity
                .map(|s| Sensitivity::new(s.trunc() as i64))
                .unwrap_or_default(),
            edge_color: self
                .edge_color
                .as_deref()
                .map(EdgeColor::parse)
                .unwrap_or_default(),
            source_kind: self
                .source_type
                .as_deref()
                .map(SourceKind::parse)
                .unwrap_or_default(),
            enabled: self.enabled(),
        }
    }
}

/// Outgoing events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    ProcessedFrame { frame: String, frame_number: u64 },
    Error { message: String },
}

impl ServerEvent {
    pub fn error(err: &ServerError) -> Self {
        Self::Error {
            message: err.to_string(),
        }
    }

    pub fn to_json(&self) -> String {
        // Both variants hold only strings and integers.
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}

/// Decode a base64 frame, tolerating a `data:<mime>;base64,` prefix.
pub fn decode_frame_payload(encoded: &str) -> Result<Vec<u8>, ServerError> {
    let body = match encoded.split_once(',') {
        Some((head, body)) if head.starts_with("data:") => body,
        _ => encoded,
    };
    STANDARD
        .decode(body.trim())
        .map_err(|e| ServerError::Decode(format!("invalid base64: {e}")))
}

pub fn encode_frame_payload(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
