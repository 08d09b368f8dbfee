//! Curved-space scene with explicit, caller-driven recomputation.
//!
//! The scene owns the current inputs (grid parameters, the three triangle
//! points, the ray height) and caches every derived value. Changing an
//! input drops only the caches that depend on it; the next read
//! recomputes them. All computation goes through the pure functions of
//! `curvelab-geodesic`.

use curvelab_geodesic::{
    measure_ray, GeodesicTriangle, RayProfile, TriangleMetrics, TriangleSolution,
};
use curvelab_math::Point2;
use curvelab_surface::Grid;
use serde::{Deserialize, Serialize};

use crate::config::{LabConfig, SurfaceConfig};
use crate::error::{LabError, Result};

/// Serializable summary of everything the scene derives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneReport {
    /// Grid parameters in effect.
    pub surface: SurfaceConfig,
    /// Planar triangle vertices `[A, B, C]`.
    pub vertices: [[f64; 2]; 3],
    /// Triangle metrics.
    pub metrics: TriangleMetrics,
    /// Human-readable deficit label.
    pub deficit_label: String,
    /// Ray height.
    pub ray_y: f64,
    /// Planar ray length.
    pub ray_planar_length: f64,
    /// Surface ray length.
    pub ray_surface_length: f64,
    /// Surface minus planar length.
    pub ray_excess: f64,
}

/// Curved-space inputs plus memoized derived values.
#[derive(Debug, Clone)]
pub struct CurvedSpaceScene {
    surface: SurfaceConfig,
    grid: Grid,
    triangle: GeodesicTriangle,
    ray_y: f64,
    ray_samples: usize,
    solution: Option<TriangleSolution>,
    ray: Option<RayProfile>,
}

impl CurvedSpaceScene {
    /// Scene from a validated config.
    pub fn new(config: &LabConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            surface: config.surface.clone(),
            grid: config.surface.build_grid()?,
            triangle: config.triangle.triangle(),
            ray_y: config.ray.y,
            ray_samples: config.ray.samples,
            solution: None,
            ray: None,
        })
    }

    /// Current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current grid parameters.
    pub fn surface(&self) -> &SurfaceConfig {
        &self.surface
    }

    /// Current triangle.
    pub fn triangle(&self) -> &GeodesicTriangle {
        &self.triangle
    }

    /// Current ray height.
    pub fn ray_y(&self) -> f64 {
        self.ray_y
    }

    /// Replace the grid parameters. On error the scene is unchanged.
    pub fn set_surface(&mut self, surface: SurfaceConfig) -> Result<()> {
        if surface == self.surface {
            return Ok(());
        }
        self.grid = surface.build_grid()?;
        self.surface = surface;
        self.solution = None;
        self.ray = None;
        log::debug!("scene surface changed: {:?}", self.surface);
        Ok(())
    }

    /// Change the resolution.
    pub fn set_resolution(&mut self, resolution: usize) -> Result<()> {
        self.set_surface(SurfaceConfig {
            resolution,
            ..self.surface.clone()
        })
    }

    /// Change the span.
    pub fn set_span(&mut self, span: f64) -> Result<()> {
        self.set_surface(SurfaceConfig {
            span,
            ..self.surface.clone()
        })
    }

    /// Change the bump radius.
    pub fn set_bump_radius(&mut self, bump_radius: f64) -> Result<()> {
        self.set_surface(SurfaceConfig {
            bump_radius,
            ..self.surface.clone()
        })
    }

    /// Move a triangle vertex (`0 = A`, `1 = B`, `2 = C`).
    pub fn set_vertex(&mut self, index: usize, p: Point2) -> Result<()> {
        if index > 2 {
            return Err(LabError::InvalidConfig(format!(
                "vertex index must be 0, 1 or 2, got {index}"
            )));
        }
        if self.triangle.vertices[index] != p {
            self.triangle.set_vertex(index, p);
            self.solution = None;
        }
        Ok(())
    }

    /// Move the ray.
    pub fn set_ray_y(&mut self, ray_y: f64) {
        if ray_y != self.ray_y {
            self.ray_y = ray_y;
            self.ray = None;
        }
    }

    /// Whether the triangle solution is cached.
    pub fn has_cached_solution(&self) -> bool {
        self.solution.is_some()
    }

    /// Whether the ray profile is cached.
    pub fn has_cached_ray(&self) -> bool {
        self.ray.is_some()
    }

    /// Triangle paths and metrics, recomputed only if an input changed.
    pub fn solution(&mut self) -> &TriangleSolution {
        let solution = match self.solution.take() {
            Some(s) => s,
            None => {
                log::debug!("recomputing triangle geodesics");
                self.triangle.solve(&self.grid)
            }
        };
        self.solution.insert(solution)
    }

    /// Ray profile, recomputed only if an input changed.
    pub fn ray(&mut self) -> Result<&RayProfile> {
        let profile = match self.ray.take() {
            Some(p) => p,
            None => {
                log::debug!("resampling ray at y={}", self.ray_y);
                measure_ray(&self.grid, self.ray_y, self.ray_samples)?
            }
        };
        let profile: &RayProfile = self.ray.insert(profile);
        Ok(profile)
    }

    /// Summary of all derived values.
    pub fn report(&mut self) -> Result<SceneReport> {
        let metrics = self.solution().metrics;
        let ray = self.ray()?;
        let (ray_planar_length, ray_surface_length, ray_excess) =
            (ray.planar_length, ray.surface_length, ray.excess);
        Ok(SceneReport {
            surface: self.surface.clone(),
            vertices: self.triangle.vertices.map(|p| [p.x, p.y]),
            metrics,
            deficit_label: metrics.deficit_sign().to_string(),
            ray_y: self.ray_y,
            ray_planar_length,
            ray_surface_length,
            ray_excess,
        })
    }
}
