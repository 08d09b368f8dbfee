#![warn(missing_docs)]

//! Relativity intuition through toy geometry.
//!
//! A sheet with a Flamm-like bump is sampled on a grid; shortest grid
//! paths stand in for geodesics between three draggable points, and the
//! resulting triangle's lengths, angles and angle deficit are reported
//! alongside a straight "light ray" whose surface length exceeds its
//! planar length near the bump. The special-relativity labs check boosts,
//! intervals and proper time.
//!
//! # Example
//!
//! ```
//! use curvelab::{CurvedSpaceScene, LabConfig};
//!
//! let mut scene = CurvedSpaceScene::new(&LabConfig::default()).unwrap();
//! let report = scene.report().unwrap();
//! println!(
//!     "AB={:.3} BC={:.3} CA={:.3}, deficit {:+.2}° ({})",
//!     report.metrics.lengths[0],
//!     report.metrics.lengths[1],
//!     report.metrics.lengths[2],
//!     report.metrics.deficit_deg,
//!     report.deficit_label,
//! );
//! ```

pub mod config;
pub mod error;
pub mod scene;

pub use config::{LabConfig, RayConfig, SpacetimeConfig, SurfaceConfig, TriangleConfig};
pub use error::{LabError, Result};
pub use scene::{CurvedSpaceScene, SceneReport};

pub use curvelab_geodesic;
pub use curvelab_math;
pub use curvelab_spacetime;
pub use curvelab_surface;

pub use curvelab_geodesic::{
    geodesic_distance, measure_ray, path_length, sample_ray, shortest_path, vertex_angle,
    DeficitSign, GeodesicTriangle, GridPath, RayProfile, RaySample, TriangleMetrics,
    TriangleSolution, DEFAULT_RAY_SAMPLES,
};
pub use curvelab_math::{Point2, Point3};
pub use curvelab_spacetime::{
    classify, interval_squared, proper_time, Boost, Event, IntervalClass, LabSession, LabTask,
};
pub use curvelab_surface::{Grid, GridCell};
