//! Error types for the pricing library

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading artifacts or serving predictions
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("columns file has no \"data_columns\" key")]
    MissingDataColumns,

    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    #[error("model has {got} coefficients but schema has {expected} columns")]
    CoefficientMismatch { expected: usize, got: usize },

    #[error("feature dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("unknown location: {0}")]
    UnknownLocation(String),

    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, Error>;
