#![warn(missing_docs)]

//! Special-relativity invariants for the curvelab labs.
//!
//! Events live in 1+1 Minkowski spacetime with `c = 1`. The crate computes
//! the invariant interval, classifies separations, applies Lorentz boosts
//! and evaluates the guided lab tasks built on them.
//!
//! # Example
//!
//! ```
//! use curvelab_spacetime::{classify, Boost, Event, IntervalClass};
//!
//! let e0 = Event::origin();
//! let e2 = Event::new(2.0, 0.6);
//! assert_eq!(classify(&e0, &e2), IntervalClass::Timelike);
//!
//! // E3 is spacelike to E2, so a fast enough boost reverses their order.
//! let e3 = Event::new(3.0, 2.4);
//! assert_eq!(classify(&e2, &e3), IntervalClass::Spacelike);
//! let boost = Boost::new(0.6).unwrap();
//! assert!(boost.time(&e3) < boost.time(&e2));
//! ```

pub mod boost;
pub mod error;
pub mod event;
pub mod labs;

pub use boost::{lorentz_factor, Boost};
pub use error::{Result, SpacetimeError};
pub use event::{
    classify, classify_interval, classify_with, interval_squared, proper_time, Event,
    IntervalClass, DIAGRAM_LIGHTLIKE_TOLERANCE, LAB_LIGHTLIKE_TOLERANCE,
};
pub use labs::{BoostExploration, CheckDetail, CheckOutcome, LabEvents, LabSession, LabTask};
