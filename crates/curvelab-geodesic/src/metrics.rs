//! Lengths, vertex angles and the angle-sum deficit of a geodesic triangle.

use std::fmt;

use curvelab_math::{angle_between, radians_sum_to_degrees, Point3};
use serde::{Deserialize, Serialize};

/// Angle at `b` between the arms towards `a` and `c`, in radians.
///
/// Lies in `[0, π]` and is symmetric in `a` and `c`. A zero-length arm
/// (e.g. two triangle points dragged onto the same cell) gives 0.
pub fn vertex_angle(a: &Point3, b: &Point3, c: &Point3) -> f64 {
    angle_between(&(a - b), &(c - b))
}

/// Sign of the angle-sum deficit.
///
/// A zero deficit counts as non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeficitSign {
    /// Angle sum at or above 180°.
    NonNegative,
    /// Angle sum below 180°.
    Negative,
}

impl DeficitSign {
    /// Classify a deficit in degrees.
    pub fn of(deficit_deg: f64) -> Self {
        if deficit_deg >= 0.0 {
            Self::NonNegative
        } else {
            Self::Negative
        }
    }
}

impl fmt::Display for DeficitSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonNegative => write!(f, "positive curvature"),
            Self::Negative => write!(f, "negative-ish region"),
        }
    }
}

/// Derived metrics of a triangle on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleMetrics {
    /// Geodesic lengths `[AB, BC, CA]`.
    pub lengths: [f64; 3],
    /// Interior angles `[A, B, C]` in radians.
    pub angles: [f64; 3],
    /// Sum of the interior angles in degrees.
    pub angle_sum_deg: f64,
    /// `angle_sum_deg - 180`.
    pub deficit_deg: f64,
}

impl TriangleMetrics {
    /// Build metrics from the three edge lengths and the snapped vertex
    /// positions `[A, B, C]`.
    pub fn new(lengths: [f64; 3], vertices: &[Point3; 3]) -> Self {
        let [a, b, c] = vertices;
        let angles = [
            vertex_angle(c, a, b),
            vertex_angle(a, b, c),
            vertex_angle(b, c, a),
        ];
        let angle_sum_deg = radians_sum_to_degrees(&angles);
        Self {
            lengths,
            angles,
            angle_sum_deg,
            deficit_deg: angle_sum_deg - 180.0,
        }
    }

    /// Geodesic perimeter `AB + BC + CA`.
    pub fn perimeter(&self) -> f64 {
        self.lengths.iter().sum()
    }

    /// Interior angles in degrees.
    pub fn angles_deg(&self) -> [f64; 3] {
        self.angles.map(f64::to_degrees)
    }

    /// Sign of the deficit.
    pub fn deficit_sign(&self) -> DeficitSign {
        DeficitSign::of(self.deficit_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_vertex_angle_symmetric_and_bounded() {
        let a = Point3::new(1.0, 0.2, 0.3);
        let b = Point3::new(-0.4, 0.1, 0.0);
        let c = Point3::new(0.5, 2.0, 1.1);
        let abc = vertex_angle(&a, &b, &c);
        assert_eq!(abc, vertex_angle(&c, &b, &a));
        assert!((0.0..=PI).contains(&abc));
    }

    #[test]
    fn test_vertex_angle_straight_and_right() {
        let b = Point3::origin();
        assert_relative_eq!(
            vertex_angle(&Point3::new(1.0, 0.0, 0.0), &b, &Point3::new(-2.0, 0.0, 0.0)),
            PI,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            vertex_angle(&Point3::new(0.0, 0.0, 3.0), &b, &Point3::new(0.0, 1.0, 0.0)),
            PI / 2.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_vertex_angle_degenerate_is_zero() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let q = Point3::new(2.0, 0.0, 1.0);
        assert_eq!(vertex_angle(&p, &p, &q), 0.0);
        assert_eq!(vertex_angle(&q, &p, &p), 0.0);
    }

    #[test]
    fn test_right_triangle_metrics() {
        let vertices = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(0.0, 4.0, 0.0),
        ];
        let m = TriangleMetrics::new([3.0, 5.0, 4.0], &vertices);
        assert_relative_eq!(m.angles[0], PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(m.angles_deg()[1], (4.0_f64 / 3.0).atan().to_degrees(), epsilon = 1e-9);
        assert_relative_eq!(m.angle_sum_deg, 180.0, epsilon = 1e-9);
        assert!(m.deficit_deg.abs() < 1e-9);
        assert_relative_eq!(m.perimeter(), 12.0);
    }

    #[test]
    fn test_collapsed_triangle() {
        let p = Point3::new(0.5, 0.5, 0.0);
        let m = TriangleMetrics::new([0.0; 3], &[p, p, p]);
        assert_eq!(m.angles, [0.0; 3]);
        assert_eq!(m.deficit_deg, -180.0);
        assert_eq!(m.deficit_sign(), DeficitSign::Negative);
    }

    #[test]
    fn test_deficit_sign_labels() {
        assert_eq!(DeficitSign::of(0.0), DeficitSign::NonNegative);
        assert_eq!(DeficitSign::of(1.5), DeficitSign::NonNegative);
        assert_eq!(DeficitSign::of(-0.01), DeficitSign::Negative);
        assert_eq!(DeficitSign::NonNegative.to_string(), "positive curvature");
        assert_eq!(DeficitSign::Negative.to_string(), "negative-ish region");
    }
}
