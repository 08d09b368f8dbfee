//! Guided special-relativity lab checks.
//!
//! A [`LabSession`] holds the shared lab state (boost slider, fixed events,
//! an optional user-placed event) and evaluates the active task's pass
//! condition. Outcomes are structured numbers; wording is up to the
//! presentation layer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::boost::Boost;
use crate::error::Result;
use crate::event::{classify, interval_squared, proper_time, Event, IntervalClass};

/// Minimum explored velocity range for the proper-time task.
pub const MIN_EXPLORED_RANGE: f64 = 0.1;

/// Allowed drift of `s²` across boosts in the proper-time task.
pub const PROPER_TIME_TOLERANCE: f64 = 1e-3;

/// Maximum `|s²|` for a placed event to count as null-separated.
pub const NULL_TOLERANCE: f64 = 1e-6;

/// Default boost velocity when a session starts.
pub const DEFAULT_VELOCITY: f64 = 0.6;

/// The lab tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabTask {
    /// SR-1: find a boost that flips the order of two spacelike events
    /// without flipping a timelike pair.
    CausalitySimultaneity,
    /// SR-2: proper time stays constant while the boost changes.
    ProperTimeInvariance,
    /// SR-3: place an event null-separated from E2.
    NullSeparation,
}

impl LabTask {
    /// All tasks in order.
    pub const ALL: [LabTask; 3] = [
        LabTask::CausalitySimultaneity,
        LabTask::ProperTimeInvariance,
        LabTask::NullSeparation,
    ];

    /// Short id such as `SR-1`.
    pub fn id(&self) -> &'static str {
        match self {
            Self::CausalitySimultaneity => "SR-1",
            Self::ProperTimeInvariance => "SR-2",
            Self::NullSeparation => "SR-3",
        }
    }

    /// Title of the task.
    pub fn title(&self) -> &'static str {
        match self {
            Self::CausalitySimultaneity => "Causality & Simultaneity",
            Self::ProperTimeInvariance => "Proper time is invariant",
            Self::NullSeparation => "Null = 45°, τ = 0",
        }
    }

    /// Look a task up by its id (`SR-1`, case-insensitive, dash optional).
    pub fn from_id(id: &str) -> Option<Self> {
        let normalized: String = id
            .chars()
            .filter(|c| *c != '-')
            .collect::<String>()
            .to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|t| t.id().replace('-', "") == normalized)
    }
}

impl fmt::Display for LabTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id(), self.title())
    }
}

/// The fixed events every task refers to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabEvents {
    /// E0 at the origin.
    pub e0: Event,
    /// E2, timelike to E0.
    pub e2: Event,
    /// E3, spacelike to E2.
    pub e3: Event,
}

impl Default for LabEvents {
    fn default() -> Self {
        Self {
            e0: Event::origin(),
            e2: Event::new(2.0, 0.6),
            e3: Event::new(3.0, 2.4),
        }
    }
}

/// How far the user has moved the boost slider.
///
/// Tasks must not pass on their initial state alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoostExploration {
    /// Whether the slider was moved since the last reset.
    pub touched: bool,
    /// Smallest velocity seen.
    pub v_min_seen: f64,
    /// Largest velocity seen.
    pub v_max_seen: f64,
}

impl BoostExploration {
    /// Fresh tracker starting at `v`.
    pub fn new(v: f64) -> Self {
        Self {
            touched: false,
            v_min_seen: v,
            v_max_seen: v,
        }
    }

    /// Record a slider move to `v`.
    pub fn record(&mut self, v: f64) {
        self.touched = true;
        self.v_min_seen = self.v_min_seen.min(v);
        self.v_max_seen = self.v_max_seen.max(v);
    }

    /// Width of the explored velocity range.
    pub fn range(&self) -> f64 {
        (self.v_max_seen - self.v_min_seen).abs()
    }
}

/// Task-specific numbers behind a pass/fail verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "task", rename_all = "snake_case")]
pub enum CheckDetail {
    /// SR-1 numbers.
    Simultaneity {
        /// Class of the (E0, E2) separation.
        class_e0_e2: IntervalClass,
        /// `t'` of E2 in the boosted frame.
        t_prime_e2: f64,
        /// `t'` of E3 in the boosted frame.
        t_prime_e3: f64,
        /// Whether `t'(E3) < t'(E2)`.
        flipped: bool,
    },
    /// SR-2 numbers.
    ProperTime {
        /// Class of the (E0, E2) separation.
        class_e0_e2: IntervalClass,
        /// Proper time E0→E2 in the boosted frame.
        tau: f64,
        /// `|s²(v) − s²(0)|`.
        drift: f64,
        /// Explored velocity range.
        explored_range: f64,
    },
    /// SR-3 numbers.
    NullPlacement {
        /// `s²(E2, E4)`, or `None` if E4 has not been placed.
        s2: Option<f64>,
    },
}

/// Result of evaluating a task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// The evaluated task.
    pub task: LabTask,
    /// Whether the pass condition holds.
    pub pass: bool,
    /// Numbers behind the verdict.
    pub detail: CheckDetail,
}

/// Shared lab state and the active task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabSession {
    active: LabTask,
    boost: Boost,
    events: LabEvents,
    exploration: BoostExploration,
    placed: Option<Event>,
}

impl Default for LabSession {
    fn default() -> Self {
        Self {
            active: LabTask::CausalitySimultaneity,
            boost: Boost::new(DEFAULT_VELOCITY).unwrap_or_default(),
            events: LabEvents::default(),
            exploration: BoostExploration::new(DEFAULT_VELOCITY),
            placed: None,
        }
    }
}

impl LabSession {
    /// Start a session on SR-1 with the given events and initial velocity.
    pub fn new(events: LabEvents, v: f64) -> Result<Self> {
        Ok(Self {
            active: LabTask::CausalitySimultaneity,
            boost: Boost::new(v)?,
            events,
            exploration: BoostExploration::new(v),
            placed: None,
        })
    }

    /// Active task.
    pub fn active(&self) -> LabTask {
        self.active
    }

    /// Current boost velocity.
    pub fn velocity(&self) -> f64 {
        self.boost.velocity()
    }

    /// The fixed events.
    pub fn events(&self) -> &LabEvents {
        &self.events
    }

    /// Slider exploration since the last task switch.
    pub fn exploration(&self) -> &BoostExploration {
        &self.exploration
    }

    /// The user-placed event, if any.
    pub fn placed_event(&self) -> Option<Event> {
        self.placed
    }

    /// Switch task. Resets slider tracking; the placed event survives only
    /// on the null-separation task.
    pub fn select(&mut self, task: LabTask) {
        if task != LabTask::NullSeparation {
            self.placed = None;
        }
        self.active = task;
        self.exploration = BoostExploration::new(self.boost.velocity());
        log::debug!("lab task selected: {}", task);
    }

    /// Move the boost slider.
    pub fn set_velocity(&mut self, v: f64) -> Result<()> {
        self.boost = Boost::new(v)?;
        self.exploration.record(v);
        Ok(())
    }

    /// Place the free event (only meaningful on SR-3).
    pub fn place_event(&mut self, event: Event) {
        self.placed = Some(event);
    }

    /// Boosted times `t'` of E0, E2, E3 and the placed event, in that order.
    pub fn boosted_times(&self) -> Vec<(Event, f64)> {
        let LabEvents { e0, e2, e3 } = self.events;
        [Some(e0), Some(e2), Some(e3), self.placed]
            .into_iter()
            .flatten()
            .map(|e| (e, self.boost.time(&e)))
            .collect()
    }

    /// Evaluate the active task.
    pub fn check(&self) -> CheckOutcome {
        match self.active {
            LabTask::CausalitySimultaneity => self.check_simultaneity(),
            LabTask::ProperTimeInvariance => self.check_proper_time(),
            LabTask::NullSeparation => self.check_null(),
        }
    }

    fn check_simultaneity(&self) -> CheckOutcome {
        let LabEvents { e0, e2, e3 } = self.events;
        let class_e0_e2 = classify(&e0, &e2);
        let t_prime_e2 = self.boost.time(&e2);
        let t_prime_e3 = self.boost.time(&e3);
        let flipped = t_prime_e3 < t_prime_e2;
        CheckOutcome {
            task: self.active,
            pass: self.exploration.touched && class_e0_e2 == IntervalClass::Timelike && flipped,
            detail: CheckDetail::Simultaneity {
                class_e0_e2,
                t_prime_e2,
                t_prime_e3,
                flipped,
            },
        }
    }

    fn check_proper_time(&self) -> CheckOutcome {
        let LabEvents { e0, e2, .. } = self.events;
        let class_e0_e2 = classify(&e0, &e2);
        let rest = interval_squared(&e2, &e0);
        let (b0, b2) = (self.boost.apply(&e0), self.boost.apply(&e2));
        let drift = (interval_squared(&b2, &b0) - rest).abs();
        let explored_range = self.exploration.range();
        let moved_enough = self.exploration.touched && explored_range >= MIN_EXPLORED_RANGE;
        CheckOutcome {
            task: self.active,
            pass: class_e0_e2 == IntervalClass::Timelike
                && moved_enough
                && drift < PROPER_TIME_TOLERANCE,
            detail: CheckDetail::ProperTime {
                class_e0_e2,
                tau: proper_time(&b2, &b0),
                drift,
                explored_range,
            },
        }
    }

    fn check_null(&self) -> CheckOutcome {
        let s2 = self.placed.map(|e4| interval_squared(&e4, &self.events.e2));
        CheckOutcome {
            task: self.active,
            pass: s2.is_some_and(|s| s.abs() < NULL_TOLERANCE),
            detail: CheckDetail::NullPlacement { s2 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_task_ids() {
        assert_eq!(LabTask::from_id("SR-1"), Some(LabTask::CausalitySimultaneity));
        assert_eq!(LabTask::from_id("sr2"), Some(LabTask::ProperTimeInvariance));
        assert_eq!(LabTask::from_id("Sr-3"), Some(LabTask::NullSeparation));
        assert_eq!(LabTask::from_id("SR-4"), None);
        assert_eq!(LabTask::NullSeparation.to_string(), "SR-3: Null = 45°, τ = 0");
    }

    #[test]
    fn test_simultaneity_needs_slider_motion() {
        let mut lab = LabSession::default();
        // The default v = 0.6 already flips E2/E3, but nothing was touched.
        let outcome = lab.check();
        assert!(!outcome.pass);
        match outcome.detail {
            CheckDetail::Simultaneity { flipped, .. } => assert!(flipped),
            other => panic!("unexpected detail {other:?}"),
        }

        lab.set_velocity(0.2).unwrap();
        assert!(!lab.check().pass);

        lab.set_velocity(0.9).unwrap();
        let outcome = lab.check();
        assert!(outcome.pass);
        match outcome.detail {
            CheckDetail::Simultaneity {
                class_e0_e2,
                t_prime_e2,
                t_prime_e3,
                ..
            } => {
                assert_eq!(class_e0_e2, IntervalClass::Timelike);
                assert!(t_prime_e3 < t_prime_e2);
            }
            other => panic!("unexpected detail {other:?}"),
        }
    }

    #[test]
    fn test_proper_time_requires_exploration() {
        let mut lab = LabSession::default();
        lab.select(LabTask::ProperTimeInvariance);
        lab.set_velocity(0.65).unwrap();
        // Range explored is only 0.05.
        assert!(!lab.check().pass);

        lab.set_velocity(-0.4).unwrap();
        let outcome = lab.check();
        assert!(outcome.pass);
        match outcome.detail {
            CheckDetail::ProperTime {
                tau,
                drift,
                explored_range,
                ..
            } => {
                assert_relative_eq!(tau, 3.64_f64.sqrt(), epsilon = 1e-9);
                assert!(drift < 1e-9);
                assert_relative_eq!(explored_range, 1.05, epsilon = 1e-12);
            }
            other => panic!("unexpected detail {other:?}"),
        }
    }

    #[test]
    fn test_proper_time_fails_for_spacelike_pair() {
        let events = LabEvents {
            e0: Event::origin(),
            e2: Event::new(0.5, 2.0),
            e3: Event::new(3.0, 2.4),
        };
        let mut lab = LabSession::new(events, 0.0).unwrap();
        lab.select(LabTask::ProperTimeInvariance);
        lab.set_velocity(0.5).unwrap();
        assert!(!lab.check().pass);
    }

    #[test]
    fn test_null_placement() {
        let mut lab = LabSession::default();
        lab.select(LabTask::NullSeparation);
        assert_eq!(
            lab.check().detail,
            CheckDetail::NullPlacement { s2: None }
        );
        assert!(!lab.check().pass);

        lab.place_event(Event::new(2.0 + 1.5, 0.6 - 1.5));
        assert!(lab.check().pass);

        lab.place_event(Event::new(3.0, 0.6));
        assert!(!lab.check().pass);
    }

    #[test]
    fn test_switching_task_resets_state() {
        let mut lab = LabSession::default();
        lab.select(LabTask::NullSeparation);
        lab.place_event(Event::new(1.0, 1.0));
        lab.set_velocity(0.1).unwrap();
        assert!(lab.exploration().touched);

        lab.select(LabTask::CausalitySimultaneity);
        assert_eq!(lab.placed_event(), None);
        assert!(!lab.exploration().touched);
        assert_eq!(lab.exploration().v_min_seen, 0.1);
        assert_eq!(lab.boosted_times().len(), 3);
    }

    #[test]
    fn test_superluminal_slider_rejected() {
        let mut lab = LabSession::default();
        assert!(lab.set_velocity(1.0).is_err());
        assert_eq!(lab.velocity(), DEFAULT_VELOCITY);
        assert!(!lab.exploration().touched);
        assert!(LabSession::new(LabEvents::default(), 2.0).is_err());
    }
}
