//! Error types for spacetime computations.

use thiserror::Error;

/// Errors from spacetime computations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpacetimeError {
    /// Boost velocity at or beyond the speed of light (c = 1).
    #[error("boost velocity must satisfy |v| < 1, got {0}")]
    Superluminal(f64),
}

/// Result type for spacetime operations.
pub type Result<T> = std::result::Result<T, SpacetimeError>;
