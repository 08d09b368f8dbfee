//! Error types for grid construction.

use thiserror::Error;

/// Errors that can occur when building a [`Grid`](crate::Grid).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// Grid must have at least 2 samples along each axis.
    #[error("grid must be at least 2x2 samples, got {width}x{height}")]
    InvalidDimensions {
        /// Requested number of columns.
        width: usize,
        /// Requested number of rows.
        height: usize,
    },

    /// Span must be finite and strictly positive.
    #[error("span must be finite and positive, got {0}")]
    InvalidSpan(f64),

    /// Bump radius must be finite, non-negative and smaller than the span.
    #[error("bump radius must satisfy 0 <= r_s < span ({span}), got {radius}")]
    InvalidBumpRadius {
        /// Requested bump radius.
        radius: f64,
        /// Grid half-width.
        span: f64,
    },
}

/// Result type for surface operations.
pub type Result<T> = std::result::Result<T, SurfaceError>;
