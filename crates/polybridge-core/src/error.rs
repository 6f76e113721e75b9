//! Error types for polybridge.

use thiserror::Error;

use crate::cell::CellKind;

/// The main error type for polybridge operations.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// A cell, face, or edge references a point that does not exist.
    #[error("point index {index} out of range for {count} points")]
    PointIndexOutOfRange { index: u32, count: usize },

    /// A cell has a point count its kind cannot have.
    #[error("{kind:?} cell cannot have {count} points")]
    InvalidCell { kind: CellKind, count: usize },

    /// Data size mismatch between parallel arrays.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A UV layer with the given name was not found.
    #[error("UV layer '{0}' not found")]
    UvLayerNotFound(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for polybridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;
