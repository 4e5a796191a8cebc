//! Error types for tframp.
//!
//! The color ramp itself never fails: every input is clamped. These errors
//! cover the surrounding pieces (configuration, presets, rendering, output).

use thiserror::Error;

/// The main error type for tframp operations.
#[derive(Error, Debug)]
pub enum RampError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Image encoding errors
    #[error("Image generation error: {message}")]
    ImageGeneration { message: String },

    /// Renderer errors (bad buffer, empty viewport)
    #[error("Render error: {message}")]
    Render { message: String },
}

/// Convenience type alias for Results with RampError
pub type Result<T> = std::result::Result<T, RampError>;
