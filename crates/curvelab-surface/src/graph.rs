//! Implicit 8-connected graph over the grid cells.
//!
//! Adjacency is never materialized: neighbours are enumerated on demand and
//! edge weights are the 3D distance between the two cells' surface points.

use curvelab_math::distance;

use crate::grid::{Grid, GridCell};

/// Offsets of the 8 neighbours, row by row.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl Grid {
    /// In-bounds neighbours of `cell` (up to 8, fewer on the border).
    pub fn neighbors(&self, cell: GridCell) -> impl Iterator<Item = GridCell> + '_ {
        let (w, h) = (self.width() as isize, self.height() as isize);
        let (i, j) = (cell.i as isize, cell.j as isize);
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(di, dj)| {
            let (ni, nj) = (i + di, j + dj);
            if ni < 0 || nj < 0 || ni >= w || nj >= h {
                None
            } else {
                Some(GridCell::new(ni as usize, nj as usize))
            }
        })
    }

    /// Weight of the edge between two cells: their 3D surface distance.
    pub fn edge_weight(&self, a: GridCell, b: GridCell) -> f64 {
        distance(&self.point3d(a), &self.point3d(b))
    }
}
