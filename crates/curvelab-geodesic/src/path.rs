//! Grid paths produced by the solver.

use curvelab_math::{distance, Point2, Point3};
use curvelab_surface::{Grid, GridCell};
use serde::{Deserialize, Serialize};

/// An ordered sequence of cells from a source to a target.
///
/// Empty when the target was not reached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPath {
    /// Cells in source-to-target order.
    pub cells: Vec<GridCell>,
}

impl GridPath {
    /// Create a path from cells.
    pub fn new(cells: Vec<GridCell>) -> Self {
        Self { cells }
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// First cell.
    pub fn start(&self) -> Option<GridCell> {
        self.cells.first().copied()
    }

    /// Last cell.
    pub fn end(&self) -> Option<GridCell> {
        self.cells.last().copied()
    }

    /// Surface length of the path on `grid`.
    pub fn length(&self, grid: &Grid) -> f64 {
        path_length(grid, self)
    }

    /// Planar positions of the cells, for drawing.
    pub fn planar_points(&self, grid: &Grid) -> Vec<Point2> {
        self.cells.iter().map(|&c| grid.planar(c)).collect()
    }

    /// Surface points of the cells.
    pub fn surface_points(&self, grid: &Grid) -> Vec<Point3> {
        self.cells.iter().map(|&c| grid.point3d(c)).collect()
    }
}

/// Sum of 3D distances between consecutive cells of `path`.
///
/// Zero for empty and single-cell paths.
pub fn path_length(grid: &Grid, path: &GridPath) -> f64 {
    path.cells
        .windows(2)
        .map(|w| distance(&grid.point3d(w[0]), &grid.point3d(w[1])))
        .sum()
}
