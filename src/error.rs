//! Error types for Gradient Flow.
//!
//! The per-tick simulation and renderer are total; errors only arise when a
//! frame or configuration is rejected at construction, or from the I/O done by
//! the frame exporter.

use std::fmt;

/// Errors that can occur while building a simulation or exporting frames.
#[derive(Debug)]
pub enum FlowError {
    /// Frame width or height is not a positive, finite number.
    InvalidFrame { width: f64, height: f64 },
    /// Configuration cannot produce a valid simulation.
    InvalidConfig(String),
    /// Failed to read or write a file.
    Io(std::io::Error),
    /// Failed to parse or serialize a JSON config.
    Json(serde_json::Error),
    /// Failed to encode an exported frame.
    Image(image::ImageError),
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowError::InvalidFrame { width, height } => write!(
                f,
                "Invalid frame {}x{}: width and height must be positive and finite",
                width, height
            ),
            FlowError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            FlowError::Io(e) => write!(f, "I/O error: {}", e),
            FlowError::Json(e) => write!(f, "Config JSON error: {}", e),
            FlowError::Image(e) => write!(f, "Failed to encode frame: {}", e),
        }
    }
}

impl std::error::Error for FlowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FlowError::Io(e) => Some(e),
            FlowError::Json(e) => Some(e),
            FlowError::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FlowError {
    fn from(e: std::io::Error) -> Self {
        FlowError::Io(e)
    }
}

impl From<serde_json::Error> for FlowError {
    fn from(e: serde_json::Error) -> Self {
        FlowError::Json(e)
    }
}

impl From<image::ImageError> for FlowError {
    fn from(e: image::ImageError) -> Self {
        FlowError::Image(e)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FlowError>;
