#![warn(missing_docs)]

//! Geodesic engine for the curvelab curved-space toy.
//!
//! Shortest paths on a sampled [`Grid`](curvelab_surface::Grid) stand in
//! for geodesics. From three of them this crate derives the lengths,
//! vertex angles and angle-sum deficit of a triangle, and it measures how
//! much longer a straight ray is when it has to follow the surface.
//!
//! # Example
//!
//! ```
//! use curvelab_geodesic::{measure_ray, GeodesicTriangle, DEFAULT_RAY_SAMPLES};
//! use curvelab_surface::Grid;
//!
//! let grid = Grid::square(64, 3.5, 1.0).unwrap();
//! let solution = GeodesicTriangle::default().solve(&grid);
//! println!("angle sum: {:.2}°", solution.metrics.angle_sum_deg);
//!
//! let ray = measure_ray(&grid, 0.0, DEFAULT_RAY_SAMPLES).unwrap();
//! assert!(ray.excess > 0.0);
//! ```

pub mod error;
pub mod metrics;
pub mod path;
pub mod ray;
pub mod solver;
pub mod triangle;

pub use error::{GeodesicError, Result};
pub use metrics::{vertex_angle, DeficitSign, TriangleMetrics};
pub use path::{path_length, GridPath};
pub use ray::{measure_ray, sample_ray, RayProfile, RaySample, DEFAULT_RAY_SAMPLES};
pub use solver::{geodesic_distance, shortest_path};
pub use triangle::{GeodesicTriangle, TriangleSolution};
