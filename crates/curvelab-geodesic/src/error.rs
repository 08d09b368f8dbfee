//! Error types for the geodesic engine.

use curvelab_surface::SurfaceError;
use thiserror::Error;

/// Errors that can occur while configuring geodesic computations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeodesicError {
    /// Grid construction failed.
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    /// A ray needs at least two samples to span the domain.
    #[error("ray needs at least 2 samples, got {0}")]
    TooFewSamples(usize),
}

/// Result type for geodesic operations.
pub type Result<T> = std::result::Result<T, GeodesicError>;
