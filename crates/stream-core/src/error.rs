// File: crates/stream-core/src/error.rs
// Summary: Error type shared by smoothing, stacking and rendering.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Unknown smoothing method: {0}")]
    UnknownMethod(String),

    #[error("Invalid moving-average window {window} for sequence of length {len}")]
    InvalidWindow { window: usize, len: usize },

    #[error("Cubic interpolation needs at least {min} points, got {got}")]
    InsufficientPoints { got: usize, min: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("No stream data to plot")]
    EmptyInput,

    #[error("Stream {stream} has length {got} after smoothing, expected {expected}")]
    ShapeMismatch { stream: usize, expected: usize, got: usize },

    #[error("Render failed: {0}")]
    Render(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StreamError>;
