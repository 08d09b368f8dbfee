//! Geodesic triangles between three free planar points.

use curvelab_math::{Point2, Point3};
use curvelab_surface::{Grid, GridCell};
use serde::{Deserialize, Serialize};

use crate::metrics::TriangleMetrics;
use crate::path::GridPath;
use crate::solver::shortest_path;

/// Three planar points `A`, `B`, `C`; not snapped to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeodesicTriangle {
    /// Vertices `[A, B, C]`.
    pub vertices: [Point2; 3],
}

impl Default for GeodesicTriangle {
    fn default() -> Self {
        Self::new(
            Point2::new(-1.8, -0.5),
            Point2::new(1.2, -0.3),
            Point2::new(0.6, 1.6),
        )
    }
}

/// Paths and metrics of a solved triangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleSolution {
    /// Snapped vertex cells `[A, B, C]`.
    pub cells: [GridCell; 3],
    /// Geodesics `[A→B, B→C, C→A]`.
    pub paths: [GridPath; 3],
    /// Lengths, angles and deficit.
    pub metrics: TriangleMetrics,
}

impl GeodesicTriangle {
    /// Create a triangle from its three vertices.
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Move one vertex (`0 = A`, `1 = B`, `2 = C`).
    ///
    /// # Panics
    ///
    /// Panics if `index > 2`.
    pub fn set_vertex(&mut self, index: usize, p: Point2) {
        self.vertices[index] = p;
    }

    /// Vertices snapped to their nearest cells.
    pub fn cells(&self, grid: &Grid) -> [GridCell; 3] {
        self.vertices.map(|p| grid.cell_at(p))
    }

    /// Surface positions of the snapped vertices.
    pub fn snapped_points(&self, grid: &Grid) -> [Point3; 3] {
        self.vertices.map(|p| grid.snapped_point3d(p))
    }

    /// Solve the three edges and derive the metrics.
    ///
    /// The edges are independent searches and run in parallel.
    pub fn solve(&self, grid: &Grid) -> TriangleSolution {
        let cells = self.cells(grid);
        let [a, b, c] = cells;

        let (ab, (bc, ca)) = rayon::join(
            || shortest_path(grid, a, b),
            || {
                rayon::join(
                    || shortest_path(grid, b, c),
                    || shortest_path(grid, c, a),
                )
            },
        );

        let lengths = [ab.length(grid), bc.length(grid), ca.length(grid)];
        let metrics = TriangleMetrics::new(lengths, &self.snapped_points(grid));

        log::debug!(
            "triangle solved: lengths={:?}, angle_sum={:.4}°",
            lengths,
            metrics.angle_sum_deg
        );

        TriangleSolution {
            cells,
            paths: [ab, bc, ca],
            metrics,
        }
    }
}
