//! Error Types
//!
//! Numeric degeneracy and unknown ids are never errors; only the cases
//! below are surfaced to callers.

use thiserror::Error;

/// Errors raised by the vector store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Errors raised by the text pipeline
#[derive(Error, Debug)]
pub enum TextError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{which} marker not found: {marker:?}")]
    BoundNotFound { which: Bound, marker: String },
}

/// Which end of an extraction region was missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Start => write!(f, "Start"),
            Bound::End => write!(f, "End"),
        }
    }
}

/// Any error raised while building or querying a session
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Text(#[from] TextError),
}

pub type Result<T> = std::result::Result<T, Error>;
pub type StoreResult<T> = std::result::Result<T, StoreError>;
pub type TextResult<T> = std::result::Result<T, TextError>;
