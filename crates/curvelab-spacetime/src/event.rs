//! Events in 1+1 Minkowski spacetime and their invariant interval.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tolerance on `|s²|` below which two events count as lightlike in the labs.
pub const LAB_LIGHTLIKE_TOLERANCE: f64 = 1e-9;

/// Tolerance used by the interactive diagram.
pub const DIAGRAM_LIGHTLIKE_TOLERANCE: f64 = 1e-6;

/// An event `(t, x)` in units where `c = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Event {
    /// Time coordinate.
    pub t: f64,
    /// Space coordinate.
    pub x: f64,
}

impl Event {
    /// Create an event.
    pub const fn new(t: f64, x: f64) -> Self {
        Self { t, x }
    }

    /// The origin event.
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Causal character of the separation between two events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntervalClass {
    /// `s² > 0`: one event can influence the other.
    Timelike,
    /// `s² < 0`: no causal connection, order is frame dependent.
    Spacelike,
    /// `s² = 0`: connected by a light signal.
    Lightlike,
}

impl fmt::Display for IntervalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timelike => write!(f, "Timelike"),
            Self::Spacelike => write!(f, "Spacelike"),
            Self::Lightlike => write!(f, "Lightlike"),
        }
    }
}

/// Invariant interval `s² = Δt² − Δx²` (timelike-positive signature).
pub fn interval_squared(a: &Event, b: &Event) -> f64 {
    let dt = a.t - b.t;
    let dx = a.x - b.x;
    dt * dt - dx * dx
}

/// Classify the separation of two events with the lab tolerance.
pub fn classify(a: &Event, b: &Event) -> IntervalClass {
    classify_with(a, b, LAB_LIGHTLIKE_TOLERANCE)
}

/// Classify the separation of two events, treating `|s²| < tolerance` as lightlike.
pub fn classify_with(a: &Event, b: &Event, tolerance: f64) -> IntervalClass {
    classify_interval(interval_squared(a, b), tolerance)
}

/// Classify an already computed `s²`.
pub fn classify_interval(s2: f64, tolerance: f64) -> IntervalClass {
    if s2.abs() < tolerance {
        IntervalClass::Lightlike
    } else if s2 > 0.0 {
        IntervalClass::Timelike
    } else {
        IntervalClass::Spacelike
    }
}

/// Proper time between two events, `sqrt(max(0, s²))`.
///
/// Zero for spacelike and lightlike separations.
pub fn proper_time(a: &Event, b: &Event) -> f64 {
    interval_squared(a, b).max(0.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interval_and_classification() {
        let e0 = Event::origin();
        let e2 = Event::new(2.0, 0.6);
        let e3 = Event::new(3.0, 2.4);
        assert_relative_eq!(interval_squared(&e0, &e2), 3.64, epsilon = 1e-12);
        assert_eq!(classify(&e0, &e2), IntervalClass::Timelike);
        assert_eq!(classify(&e2, &Event::new(2.5, 3.0)), IntervalClass::Spacelike);
        assert_eq!(classify(&e2, &e3), IntervalClass::Spacelike);
        assert_eq!(interval_squared(&e0, &e2), interval_squared(&e2, &e0));
    }

    #[test]
    fn test_lightlike_tolerances() {
        let a = Event::origin();
        let b = Event::new(1.0, 1.0);
        assert_eq!(classify(&a, &b), IntervalClass::Lightlike);

        let near = Event::new(1.0 + 1e-7, 1.0);
        assert_eq!(classify(&a, &near), IntervalClass::Timelike);
        assert_eq!(
            classify_with(&a, &near, DIAGRAM_LIGHTLIKE_TOLERANCE),
            IntervalClass::Lightlike
        );
    }

    #[test]
    fn test_proper_time() {
        let e0 = Event::origin();
        assert_relative_eq!(proper_time(&e0, &Event::new(5.0, 3.0)), 4.0, epsilon = 1e-12);
        assert_eq!(proper_time(&e0, &Event::new(1.0, 3.0)), 0.0);
    }

    #[test]
    fn test_class_display() {
        assert_eq!(IntervalClass::Lightlike.to_string(), "Lightlike");
    }
}
