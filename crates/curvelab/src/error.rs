//! Top-level error type.

use curvelab_geodesic::GeodesicError;
use curvelab_spacetime::SpacetimeError;
use curvelab_surface::SurfaceError;
use thiserror::Error;

/// Errors surfaced by the facade: configuration I/O plus anything the
/// underlying engines reject.
#[derive(Error, Debug)]
pub enum LabError {
    /// Reading or writing a config file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for [`LabConfig`](crate::LabConfig).
    #[error("invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config could not be rendered as TOML.
    #[error("could not serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// A config value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Grid parameters rejected.
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    /// Geodesic computation rejected its inputs.
    #[error(transparent)]
    Geodesic(#[from] GeodesicError),

    /// Spacetime computation rejected its inputs.
    #[error(transparent)]
    Spacetime(#[from] SpacetimeError),
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, LabError>;
