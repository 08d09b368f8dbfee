//! Lab configuration loaded from TOML.
//!
//! Every section and field is optional; missing values fall back to the
//! defaults of the interactive lab.
//!
//! ```toml
//! [surface]
//! resolution = 96
//! bump_radius = 1.2
//!
//! [triangle]
//! a = [-1.8, -0.5]
//!
//! [ray]
//! y = 0.4
//! ```

use std::fs;
use std::path::Path;

use curvelab_geodesic::{GeodesicTriangle, DEFAULT_RAY_SAMPLES};
use curvelab_math::Point2;
use curvelab_spacetime::{lorentz_factor, Event, LabEvents};
use curvelab_surface::Grid;
use serde::{Deserialize, Serialize};

use crate::error::{LabError, Result};

/// Grid parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Samples per axis (square grid).
    pub resolution: usize,
    /// Half-width of the planar domain.
    pub span: f64,
    /// Toy Schwarzschild radius.
    pub bump_radius: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            resolution: 64,
            span: 3.5,
            bump_radius: 1.0,
        }
    }
}

impl SurfaceConfig {
    /// Build the grid these parameters describe.
    pub fn build_grid(&self) -> Result<Grid> {
        Ok(Grid::square(self.resolution, self.span, self.bump_radius)?)
    }
}

/// Triangle vertices as `[x, y]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriangleConfig {
    /// Vertex A.
    pub a: [f64; 2],
    /// Vertex B.
    pub b: [f64; 2],
    /// Vertex C.
    pub c: [f64; 2],
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self {
            a: [-1.8, -0.5],
            b: [1.2, -0.3],
            c: [0.6, 1.6],
        }
    }
}

impl TriangleConfig {
    /// The configured triangle.
    pub fn triangle(&self) -> GeodesicTriangle {
        let p = |v: [f64; 2]| Point2::new(v[0], v[1]);
        GeodesicTriangle::new(p(self.a), p(self.b), p(self.c))
    }
}

/// Ray proxy parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RayConfig {
    /// Constant planar `y` of the ray.
    pub y: f64,
    /// Number of samples along the ray.
    pub samples: usize,
}

impl Default for RayConfig {
    fn default() -> Self {
        Self {
            y: 0.0,
            samples: DEFAULT_RAY_SAMPLES,
        }
    }
}

/// Special-relativity lab parameters. Events are `[t, x]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacetimeConfig {
    /// Initial boost velocity (`|v| < 1`).
    pub velocity: f64,
    /// Event E0.
    pub e0: [f64; 2],
    /// Event E2.
    pub e2: [f64; 2],
    /// Event E3.
    pub e3: [f64; 2],
}

impl Default for SpacetimeConfig {
    fn default() -> Self {
        let events = LabEvents::default();
        Self {
            velocity: curvelab_spacetime::labs::DEFAULT_VELOCITY,
            e0: [events.e0.t, events.e0.x],
            e2: [events.e2.t, events.e2.x],
            e3: [events.e3.t, events.e3.x],
        }
    }
}

impl SpacetimeConfig {
    /// The configured lab events.
    pub fn events(&self) -> LabEvents {
        let e = |v: [f64; 2]| Event::new(v[0], v[1]);
        LabEvents {
            e0: e(self.e0),
            e2: e(self.e2),
            e3: e(self.e3),
        }
    }
}

/// Complete lab configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Grid parameters.
    pub surface: SurfaceConfig,
    /// Triangle vertices.
    pub triangle: TriangleConfig,
    /// Ray proxy.
    pub ray: RayConfig,
    /// Special-relativity lab.
    pub spacetime: SpacetimeConfig,
}

impl LabConfig {
    /// Parse a config from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: LabConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading config from {}", path.display());
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every value the engines would reject.
    pub fn validate(&self) -> Result<()> {
        self.surface.build_grid()?;
        if self.ray.samples < 2 {
            return Err(LabError::InvalidConfig(
                "ray.samples must be at least 2".into(),
            ));
        }
        if !self.ray.y.is_finite() {
            return Err(LabError::InvalidConfig("ray.y must be finite".into()));
        }
        let points = [self.triangle.a, self.triangle.b, self.triangle.c];
        if points.iter().flatten().any(|v| !v.is_finite()) {
            return Err(LabError::InvalidConfig(
                "triangle vertices must be finite".into(),
            ));
        }
        lorentz_factor(self.spacetime.velocity)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_lab() {
        let config = LabConfig::default();
        assert_eq!(config.surface.resolution, 64);
        assert_eq!(config.surface.span, 3.5);
        assert_eq!(config.surface.bump_radius, 1.0);
        assert_eq!(config.ray.samples, 161);
        assert_eq!(config.triangle.triangle(), GeodesicTriangle::default());
        assert_eq!(config.spacetime.events(), LabEvents::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = LabConfig::from_toml_str(
            r#"
            [surface]
            resolution = 96

            [ray]
            y = 0.4
            "#,
        )
        .unwrap();
        assert_eq!(config.surface.resolution, 96);
        assert_eq!(config.surface.span, 3.5);
        assert_eq!(config.ray.y, 0.4);
        assert_eq!(config.ray.samples, 161);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(LabConfig::from_toml_str("").unwrap(), LabConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = LabConfig::from_toml_str("[surface]\nbump_radius = 4.0").unwrap_err();
        assert!(matches!(err, LabError::Surface(_)));

        let err = LabConfig::from_toml_str("[ray]\nsamples = 1").unwrap_err();
        assert!(matches!(err, LabError::InvalidConfig(_)));

        let err = LabConfig::from_toml_str("[spacetime]\nvelocity = 1.2").unwrap_err();
        assert!(matches!(err, LabError::Spacetime(_)));

        let err = LabConfig::from_toml_str("[surface]\nresolution = \"big\"").unwrap_err();
        assert!(matches!(err, LabError::ConfigParse(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = LabConfig::default();
        config.surface.bump_radius = 1.25;
        config.triangle.c = [0.0, 2.0];
        let text = config.to_toml_string().unwrap();
        assert_eq!(LabConfig::from_toml_str(&text).unwrap(), config);
    }
}
