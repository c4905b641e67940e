use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SENSITIVITY, MAX_SENSITIVITY};

/// Highlight color of the overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeColor {
    #[default]
    Red,
    Green,
    Blue,
    Yellow,
}

impl EdgeColor {
    /// Case-insensitive lookup. Unknown names fall back to red.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "green" => Self::Green,
            "blue" => Self::Blue,
            "yellow" => Self::Yellow,
            _ => Self::Red,
        }
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            Self::Red => [255, 0, 0],
            Self::Green => [0, 255, 0],
            Self::Blue => [0, 0, 255],
            Self::Yellow => [255, 255, 0],
        }
    }
}

impl std::fmt::Display for EdgeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Green => write!(f, "green"),
            Self::Blue => write!(f, "blue"),
            Self::Yellow => write!(f, "yellow"),
        }
    }
}

/// Where a frame comes from. Webcam frames take the fast path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Webcam,
    #[default]
    File,
}

impl SourceKind {
    /// Case-insensitive lookup. Anything but "webcam" is a file source.
    pub fn parse(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("webcam") {
            Self::Webcam
        } else {
            Self::File
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Webcam => write!(f, "webcam"),
            Self::File => write!(f, "file"),
        }
    }
}

/// User sensitivity in `1..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "u32")]
pub struct Sensitivity(u32);

impl Sensitivity {
    /// Values at or below zero become 1, values above 100 become 100.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(1, MAX_SENSITIVITY as i64) as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Sensitivity as a fraction, `0.01..=1.0`.
    pub fn fraction(self) -> f64 {
        self.0 as f64 / MAX_SENSITIVITY as f64
    }
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self(DEFAULT_SENSITIVITY)
    }
}

impl From<i64> for Sensitivity {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Sensitivity> for u32 {
    fn from(value: Sensitivity) -> Self {
        value.0
    }
}

impl std::fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated per-request parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequestParameters {
    #[serde(default)]
    pub sensitivity: Sensitivity,
    #[serde(default)]
    pub edge_color: EdgeColor,
    #[serde(default)]
    pub source_kind: SourceKind,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for RequestParameters {
    fn default() -> Self {
        Self {
            sensitivity: Sensitivity::default(),
            edge_color: EdgeColor::default(),
            source_kind: SourceKind::default(),
            enabled: true,
        }
    }
}

impl RequestParameters {
    pub fn new(sensitivity: i64, edge_color: EdgeColor, source_kind: SourceKind) -> Self {
        Self {
            sensitivity: Sensitivity::new(sensitivity),
            edge_color,
            source_kind,
            enabled: true,
        }
    }
}
