//! Straight-line "light ray" sampled across the surface.
//!
//! The ray runs at constant `y` from `x = -span` to `x = +span`. Comparing
//! its length over the surface with its planar length gives a crude proxy
//! for deflection / time delay near the bump.

use curvelab_math::{distance, Point2, Point3};
use curvelab_surface::Grid;
use serde::{Deserialize, Serialize};

use crate::error::{GeodesicError, Result};

/// Default number of samples (160 intervals).
pub const DEFAULT_RAY_SAMPLES: usize = 161;

/// One sample along the ray.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaySample {
    /// Planar position of the sample.
    pub planar: Point2,
    /// Height of the nearest grid cell.
    pub height: f64,
}

impl RaySample {
    /// Sample position lifted onto the surface.
    pub fn point3d(&self) -> Point3 {
        Point3::new(self.planar.x, self.planar.y, self.height)
    }
}

/// Sampled ray with its planar and surface lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RayProfile {
    /// Samples from `x = -span` to `x = +span`.
    pub samples: Vec<RaySample>,
    /// Exact planar length, `2 * span`.
    pub planar_length: f64,
    /// Sum of 3D distances between consecutive samples.
    pub surface_length: f64,
    /// `surface_length - planar_length`.
    pub excess: f64,
}

/// Sample `sample_count` evenly spaced points along the line `y = ray_y`.
///
/// `ray_y` is clamped into `[-span, span]`. Heights come from the nearest
/// grid cell, not an interpolation, so the result depends on resolution.
pub fn sample_ray(grid: &Grid, ray_y: f64, sample_count: usize) -> Result<Vec<RaySample>> {
    if sample_count < 2 {
        return Err(GeodesicError::TooFewSamples(sample_count));
    }
    let span = grid.span();
    let y = ray_y.clamp(-span, span);
    let intervals = (sample_count - 1) as f64;

    Ok((0..sample_count)
        .map(|k| {
            let x = -span + 2.0 * span * k as f64 / intervals;
            let planar = Point2::new(x, y);
            RaySample {
                planar,
                height: grid.height_at(grid.cell_at(planar)),
            }
        })
        .collect())
}

/// Sample the ray and compare its surface length with its planar length.
pub fn measure_ray(grid: &Grid, ray_y: f64, sample_count: usize) -> Result<RayProfile> {
    let samples = sample_ray(grid, ray_y, sample_count)?;
    let surface_length = samples
        .windows(2)
        .map(|w| distance(&w[0].point3d(), &w[1].point3d()))
        .sum();
    let planar_length = 2.0 * grid.span();
    Ok(RayProfile {
        samples,
        planar_length,
        surface_length,
        excess: surface_length - planar_length,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_too_few_samples() {
        let grid = Grid::square(16, 3.5, 1.0).unwrap();
        assert_eq!(sample_ray(&grid, 0.0, 1), Err(GeodesicError::TooFewSamples(1)));
        assert!(measure_ray(&grid, 0.0, 0).is_err());
    }

    #[test]
    fn test_sample_positions() {
        let grid = Grid::square(16, 3.5, 1.0).unwrap();
        let samples = sample_ray(&grid, 0.25, 5).unwrap();
        let xs: Vec<f64> = samples.iter().map(|s| s.planar.x).collect();
        assert_eq!(xs, vec![-3.5, -1.75, 0.0, 1.75, 3.5]);
        assert!(samples.iter().all(|s| s.planar.y == 0.25));
    }

    #[test]
    fn test_ray_y_is_clamped() {
        let grid = Grid::square(16, 3.5, 1.0).unwrap();
        let samples = sample_ray(&grid, 9.0, 3).unwrap();
        assert!(samples.iter().all(|s| s.planar.y == 3.5));
    }

    #[test]
    fn test_flat_surface_has_no_excess() {
        let grid = Grid::square(64, 3.5, 0.0).unwrap();
        let profile = measure_ray(&grid, 0.3, DEFAULT_RAY_SAMPLES).unwrap();
        assert_eq!(profile.samples.len(), 161);
        assert_relative_eq!(profile.planar_length, 7.0);
        assert_relative_eq!(profile.surface_length, 7.0, epsilon = 1e-9);
        assert!(profile.excess.abs() < 1e-9);
    }

    #[test]
    fn test_ray_through_bump_is_longer() {
        let grid = Grid::square(64, 3.5, 1.0).unwrap();
        let profile = measure_ray(&grid, 0.0, DEFAULT_RAY_SAMPLES).unwrap();
        assert!(profile.surface_length > profile.planar_length);
        assert!(profile.excess > 0.0);
    }
}
