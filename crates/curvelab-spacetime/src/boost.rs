//! Lorentz boosts along x.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpacetimeError};
use crate::event::Event;

/// Lorentz factor `γ = 1 / sqrt(1 − v²)`.
pub fn lorentz_factor(v: f64) -> Result<f64> {
    if !v.is_finite() || v.abs() >= 1.0 {
        return Err(SpacetimeError::Superluminal(v));
    }
    Ok(1.0 / (1.0 - v * v).sqrt())
}

/// A boost to a frame moving with velocity `v` along x.
///
/// Serializes as its velocity alone; deserializing recomputes `γ` and
/// rejects `|v| >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Boost {
    v: f64,
    gamma: f64,
}

impl Boost {
    /// Boost with velocity `v`, `|v| < 1`.
    pub fn new(v: f64) -> Result<Self> {
        Ok(Self {
            v,
            gamma: lorentz_factor(v)?,
        })
    }

    /// Identity boost.
    pub fn identity() -> Self {
        Self { v: 0.0, gamma: 1.0 }
    }

    /// Frame velocity.
    pub fn velocity(&self) -> f64 {
        self.v
    }

    /// Lorentz factor of this boost.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Coordinates of `event` in the boosted frame:
    /// `t' = γ(t − v x)`, `x' = γ(x − v t)`.
    pub fn apply(&self, event: &Event) -> Event {
        Event::new(
            self.gamma * (event.t - self.v * event.x),
            self.gamma * (event.x - self.v * event.t),
        )
    }

    /// Only the boosted time coordinate `t'`.
    pub fn time(&self, event: &Event) -> f64 {
        self.gamma * (event.t - self.v * event.x)
    }
}

impl Default for Boost {
    fn default() -> Self {
        Self::identity()
    }
}

impl TryFrom<f64> for Boost {
    type Error = SpacetimeError;

    fn try_from(v: f64) -> Result<Self> {
        Self::new(v)
    }
}

impl From<Boost> for f64 {
    fn from(boost: Boost) -> Self {
        boost.v
    }
}
