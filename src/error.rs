//! Error types for model persistence, configuration and allocation.
//!
//! The numeric core (forward, backward, training, evaluation, splitting) never
//! fails: degenerate inputs are no-ops. Errors only surface where the outside
//! world is involved.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatDogError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to allocate a {rows}x{cols} layer")]
    Allocation { rows: usize, cols: usize },

    #[error("Layer {0} is not allocated")]
    LayerNotAllocated(&'static str),

    #[error("Invalid layer dimensions {rows}x{cols}")]
    InvalidDimensions { rows: i64, cols: i64 },

    #[error("{layer} is {found_rows}x{found_cols}, expected {expected_rows}x{expected_cols}")]
    ArchitectureMismatch {
        layer: &'static str,
        expected_rows: usize,
        expected_cols: usize,
        found_rows: usize,
        found_cols: usize,
    },

    #[error("Model data is truncated")]
    Truncated,

    #[error("Invalid architecture: {0}")]
    InvalidArchitecture(String),
}

pub type Result<T> = std::result::Result<T, CatDogError>;

impl CatDogError {
    /// Maps short reads onto `Truncated`, keeping other I/O failures intact.
    pub(crate) fn from_read(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            CatDogError::Truncated
        } else {
            CatDogError::Io(err)
        }
    }
}
