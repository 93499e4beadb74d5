//! Error types for traversal construction.

use thiserror::Error;

/// Errors that can occur constructing a grid traversal.
#[derive(Error, Debug)]
pub enum GridError {
    /// Origin or direction contained a NaN or infinite component.
    #[error("ray origin or direction has a non-finite component")]
    NonFinite,

    /// Cell size must be positive and finite.
    #[error("invalid cell size: {0}")]
    InvalidCellSize(f64),

    /// Maximum distance must be non-negative (infinity means unbounded).
    #[error("invalid max distance: {0}")]
    InvalidMaxDistance(f64),
}

/// Result type for traversal construction.
pub type Result<T> = std::result::Result<T, GridError>;
