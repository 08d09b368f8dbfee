//! Sampling grid over the planar domain `[-span, span]²` and its height field.

use curvelab_math::{Point2, Point3};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SurfaceError};

/// Integer cell coordinates `(i, j)` on a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    /// Column index, `0 <= i < width`.
    pub i: usize,
    /// Row index, `0 <= j < height`.
    pub j: usize,
}

impl GridCell {
    /// Create a new cell.
    pub const fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

/// Height of the Flamm-like bump at planar radius `r`.
///
/// The disk `r <= bump_radius` is flattened to 0; outside it the height is
/// `2 * sqrt(bump_radius * (r - bump_radius))`.
#[inline]
pub fn bump_height(r: f64, bump_radius: f64) -> f64 {
    if r <= bump_radius {
        return 0.0;
    }
    2.0 * (bump_radius * (r - bump_radius)).sqrt()
}

/// Immutable sampling of the bump surface.
///
/// Cell `(i, j)` sits at `x = -span + i * dx`, `y = -span + j * dy` with
/// `dx = 2 * span / (width - 1)` and `dy = 2 * span / (height - 1)`.
///
/// Only [`Grid::new`] builds one; serialize [`Grid`] for inspection but
/// rebuild it from its parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    span: f64,
    bump_radius: f64,
    dx: f64,
    dy: f64,
}

impl Grid {
    /// Build a grid of `width x height` samples over `[-span, span]²`.
    pub fn new(width: usize, height: usize, span: f64, bump_radius: f64) -> Result<Self> {
        if width < 2 || height < 2 {
            return Err(SurfaceError::InvalidDimensions { width, height });
        }
        if !span.is_finite() || span <= 0.0 {
            return Err(SurfaceError::InvalidSpan(span));
        }
        if !bump_radius.is_finite() || bump_radius < 0.0 || bump_radius >= span {
            return Err(SurfaceError::InvalidBumpRadius {
                radius: bump_radius,
                span,
            });
        }

        log::debug!(
            "building {}x{} grid, span={}, bump_radius={}",
            width,
            height,
            span,
            bump_radius
        );

        Ok(Self {
            width,
            height,
            span,
            bump_radius,
            dx: 2.0 * span / (width - 1) as f64,
            dy: 2.0 * span / (height - 1) as f64,
        })
    }

    /// Square grid with `resolution` samples per axis.
    pub fn square(resolution: usize, span: f64, bump_radius: f64) -> Result<Self> {
        Self::new(resolution, resolution, span, bump_radius)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Half-width of the planar domain.
    pub fn span(&self) -> f64 {
        self.span
    }

    /// Radius of the flattened interior disk.
    pub fn bump_radius(&self) -> f64 {
        self.bump_radius
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: GridCell) -> bool {
        cell.i < self.width && cell.j < self.height
    }

    /// Flat index `j * width + i`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the grid.
    #[inline]
    pub fn index(&self, cell: GridCell) -> usize {
        self.check(cell);
        cell.j * self.width + cell.i
    }

    /// Inverse of [`Grid::index`].
    #[inline]
    pub fn cell(&self, index: usize) -> GridCell {
        GridCell::new(index % self.width, index / self.width)
    }

    /// Planar position of a cell.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the grid.
    pub fn planar(&self, cell: GridCell) -> Point2 {
        self.check(cell);
        Point2::new(
            -self.span + cell.i as f64 * self.dx,
            -self.span + cell.j as f64 * self.dy,
        )
    }

    /// Surface height at a cell.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the grid.
    pub fn height_at(&self, cell: GridCell) -> f64 {
        let p = self.planar(cell);
        bump_height(p.x.hypot(p.y), self.bump_radius)
    }

    /// 3D surface point `(x, y, z)` of a cell.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the grid.
    pub fn point3d(&self, cell: GridCell) -> Point3 {
        let p = self.planar(cell);
        Point3::new(p.x, p.y, bump_height(p.x.hypot(p.y), self.bump_radius))
    }

    /// Snap a planar point to its nearest cell.
    ///
    /// Each axis is scaled to cell units, rounded half away from zero and
    /// clamped into the grid, so points outside the domain land on the
    /// border.
    pub fn cell_at(&self, p: Point2) -> GridCell {
        let i = self.snap_axis(p.x, self.width);
        let j = self.snap_axis(p.y, self.height);
        GridCell::new(i, j)
    }

    /// 3D surface point of the cell nearest to `p`.
    pub fn snapped_point3d(&self, p: Point2) -> Point3 {
        self.point3d(self.cell_at(p))
    }

    fn snap_axis(&self, v: f64, samples: usize) -> usize {
        let max = (samples - 1) as f64;
        let k = ((v + self.span) * max / (2.0 * self.span)).round();
        // NaN casts to 0
        k.clamp(0.0, max) as usize
    }

    #[inline]
    fn check(&self, cell: GridCell) {
        assert!(
            self.contains(cell),
            "cell ({}, {}) outside {}x{} grid",
            cell.i,
            cell.j,
            self.width,
            self.height
        );
    }
}
