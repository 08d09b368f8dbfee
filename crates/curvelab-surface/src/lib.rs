#![warn(missing_docs)]

//! Surface model for the curvelab geodesic engine.
//!
//! A [`Grid`] samples the Flamm-like bump `z(r)` over a square planar
//! domain and exposes the sampled points as an implicit 8-connected graph
//! whose edge weights are 3D distances.
//!
//! # Example
//!
//! ```
//! use curvelab_surface::{Grid, GridCell};
//!
//! let grid = Grid::square(64, 3.5, 1.0).unwrap();
//! let p = grid.point3d(GridCell::new(0, 0));
//! assert!(p.z > 0.0);
//! ```

pub mod error;
pub mod graph;
pub mod grid;

pub use error::{Result, SurfaceError};
pub use grid::{bump_height, Grid, GridCell};
