//! Fault lifecycle engine for pump telemetry.
//!
//! Given an immutable, validated fault catalog (from `faultwatch-core`),
//! this crate provides the three algorithms of the lifecycle:
//!
//! - [`Classifier`] — maps a telemetry sample to a scenario via explicit
//!   labels, healthy-envelope checks, and weighted multi-criteria scoring.
//! - [`TransitionManager`] — the severity-gated state machine holding the
//!   current fault state.
//! - [`Predictor`] — ranked progression forecasts and depth-bounded,
//!   cycle-safe forecast trees.
//!
//! [`FaultEngine`] bundles the three behind the surface a transport layer
//! consumes. Everything is synchronous pure computation; the transition
//! mutex is the only lock.

pub mod classifier;
pub mod engine;
pub mod progression;
pub mod transition;

pub use classifier::{
    ClassificationResult, Classifier, ConfidenceSource, DimensionMatch, ACCEPTANCE_FLOOR,
    EXPLICIT_LABEL_CONFIDENCE, NORMAL_CONFIDENCE, UNKNOWN_CONFIDENCE, UNKNOWN_SCENARIO,
};
pub use engine::FaultEngine;
pub use progression::{ForecastEntry, ForecastNode, Predictor};
pub use transition::{TransitionCheck, TransitionManager, TransitionOutcome};
