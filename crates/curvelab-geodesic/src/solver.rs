//! Dijkstra shortest paths over the implicit grid graph.
//!
//! Uses a binary min-heap with decrease-key by reinsertion: stale entries
//! stay in the heap and are skipped once their cell is settled.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use curvelab_math::distance;
use curvelab_surface::{Grid, GridCell};

use crate::path::GridPath;

#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    dist: f64,
    index: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.dist == other.dist
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap
        other.dist.partial_cmp(&self.dist).unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distances and predecessor links left by one search.
struct Search {
    dist: Vec<f64>,
    prev: Vec<Option<usize>>,
    source: usize,
    target: usize,
}

impl Search {
    fn run(grid: &Grid, source: GridCell, target: GridCell) -> Self {
        let n = grid.cell_count();
        let s = grid.index(source);
        let t = grid.index(target);

        let mut dist = vec![f64::INFINITY; n];
        let mut prev: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut heap = BinaryHeap::new();
        let mut settled_count = 0usize;

        dist[s] = 0.0;
        heap.push(HeapEntry { dist: 0.0, index: s });

        while let Some(HeapEntry { dist: d, index: k }) = heap.pop() {
            if settled[k] {
                continue;
            }
            settled[k] = true;
            settled_count += 1;
            if k == t {
                break;
            }

            let cell = grid.cell(k);
            let p = grid.point3d(cell);
            for nb in grid.neighbors(cell) {
                let kk = grid.index(nb);
                if settled[kk] {
                    continue;
                }
                let nd = d + distance(&p, &grid.point3d(nb));
                if nd < dist[kk] {
                    dist[kk] = nd;
                    prev[kk] = Some(k);
                    heap.push(HeapEntry {
                        dist: nd,
                        index: kk,
                    });
                }
            }
        }

        log::trace!(
            "dijkstra ({}, {}) -> ({}, {}): settled {} of {} cells",
            source.i,
            source.j,
            target.i,
            target.j,
            settled_count,
            n
        );

        Self {
            dist,
            prev,
            source: s,
            target: t,
        }
    }

    fn reached(&self) -> bool {
        self.target == self.source || self.prev[self.target].is_some()
    }

    fn path(&self, grid: &Grid) -> GridPath {
        if !self.reached() {
            return GridPath::default();
        }
        let mut cells = Vec::new();
        let mut k = Some(self.target);
        while let Some(idx) = k {
            cells.push(grid.cell(idx));
            k = self.prev[idx];
        }
        cells.reverse();
        GridPath::new(cells)
    }
}

/// Shortest path on the surface from `source` to `target`.
///
/// When `source == target` the path is the single cell `[source]`. The
/// path is empty only if the target could not be reached, which cannot
/// happen on a connected grid.
///
/// # Panics
///
/// Panics if either cell is outside the grid. Callers snap planar points
/// with [`Grid::cell_at`] first.
pub fn shortest_path(grid: &Grid, source: GridCell, target: GridCell) -> GridPath {
    Search::run(grid, source, target).path(grid)
}

/// Surface distance from `source` to `target` along the shortest path.
///
/// Returns `None` if the target is unreachable.
///
/// # Panics
///
/// Panics if either cell is outside the grid.
pub fn geodesic_distance(grid: &Grid, source: GridCell, target: GridCell) -> Option<f64> {
    let search = Search::run(grid, source, target);
    let d = search.dist[search.target];
    d.is_finite().then_some(d)
}
