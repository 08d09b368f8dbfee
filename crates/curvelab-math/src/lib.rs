#![warn(missing_docs)]

//! Math types for the curvelab geodesic engine.
//!
//! Thin wrappers around nalgebra providing the point and vector types
//! shared by the surface model, the solver and the metrics, plus a few
//! distance and angle helpers.

use nalgebra::Vector3;

/// A point in 3D space (a sampled surface point).
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A point in the planar parameter domain.
pub type Point2 = nalgebra::Point2<f64>;

/// Euclidean distance between two 3D points.
#[inline]
pub fn distance(a: &Point3, b: &Point3) -> f64 {
    (b - a).norm()
}

/// Unsigned angle between two vectors in radians, in `[0, π]`.
///
/// Returns 0 when either vector has zero length. The cosine is clamped
/// into `[-1, 1]` before `acos` so rounding never produces NaN.
pub fn angle_between(u: &Vec3, v: &Vec3) -> f64 {
    let du = u.norm();
    let dv = v.norm();
    if du == 0.0 || dv == 0.0 {
        return 0.0;
    }
    let cos = u.dot(v) / (du * dv);
    cos.clamp(-1.0, 1.0).acos()
}

/// Convert a sum of angles in radians to degrees.
pub fn radians_sum_to_degrees(angles: &[f64]) -> f64 {
    angles.iter().sum::<f64>().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_distance() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 2.0, 2.0);
        assert_relative_eq!(distance(&a, &b), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_between_right_angle() {
        let u = Vec3::x();
        let v = Vec3::y();
        assert_relative_eq!(angle_between(&u, &v), PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_between_parallel_clamps() {
        // Nearly parallel vectors whose cosine may round above 1.
        let u = Vec3::new(1.0, 1e-17, 0.0);
        let v = Vec3::new(3.0, 0.0, 0.0);
        let angle = angle_between(&u, &v);
        assert!(!angle.is_nan());
        assert!(angle.abs() < 1e-12);

        let w = Vec3::new(-2.0, 0.0, 0.0);
        assert_relative_eq!(angle_between(&u, &w), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_between_zero_vector() {
        assert_eq!(angle_between(&Vec3::zeros(), &Vec3::x()), 0.0);
        assert_eq!(angle_between(&Vec3::y(), &Vec3::zeros()), 0.0);
    }

    #[test]
    fn test_radians_sum_to_degrees() {
        let sum = radians_sum_to_degrees(&[PI / 2.0, PI / 4.0, PI / 4.0]);
        assert_relative_eq!(sum, 180.0, epsilon = 1e-12);
    }
}
