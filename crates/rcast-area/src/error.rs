//! Error types for area construction and conversion.

use thiserror::Error;

/// Errors that can occur constructing or converting areas.
#[derive(Error, Debug)]
pub enum AreaError {
    /// A corner point contained a NaN or infinite component.
    #[error("corner point has non-finite component: ({x}, {y}, {z})")]
    NonFiniteCorner {
        /// X component of the offending corner.
        x: f64,
        /// Y component of the offending corner.
        y: f64,
        /// Z component of the offending corner.
        z: f64,
    },

    /// No conversion function is registered for the type.
    #[error("no converter registered for type {0}")]
    NoConverter(&'static str),
}

/// Result type for area operations.
pub type Result<T> = std::result::Result<T, AreaError>;
