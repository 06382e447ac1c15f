//! Error types for the scatter-layer crates.

use thiserror::Error;

/// Result type alias using ScatterError.
pub type ScatterResult<T> = Result<T, ScatterError>;

/// Primary error type for marker styling operations.
///
/// All variants describe configuration defects that should be surfaced at
/// setup time; the per-feature render path itself is infallible once a
/// configuration has been resolved.
#[derive(Debug, Error)]
pub enum ScatterError {
    // === Colorscale Errors ===
    #[error("Colorscale is empty")]
    EmptyColorscale,

    #[error("Unknown colorscale preset: {0}")]
    UnknownPreset(String),

    #[error("Invalid color '{color}': {message}")]
    InvalidColor { color: String, message: String },

    // === Classification Errors ===
    #[error("Classes list is empty")]
    EmptyClasses,

    #[error("{classes} class thresholds but only {colors} colors in the colorscale")]
    ClassCountMismatch { classes: usize, colors: usize },

    // === Domain Errors ===
    #[error("Invalid domain: min ({min}) must be below max ({max})")]
    InvalidDomain { min: f64, max: f64 },

    // === Infrastructure Errors ===
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

// Conversion from common error types
impl From<std::io::Error> for ScatterError {
    fn from(err: std::io::Error) -> Self {
        ScatterError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ScatterError {
    fn from(err: serde_json::Error) -> Self {
        ScatterError::Parse(format!("JSON error: {}", err))
    }
}
