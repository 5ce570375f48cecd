//! Core types, fault catalog, and error types for the faultwatch fault
//! lifecycle engine.
//!
//! This crate defines the shared value types ([`TelemetrySample`],
//! [`FaultScenario`], [`Severity`]), the validated immutable
//! [`FaultCatalog`], the error taxonomy ([`FaultError`]), and the tracing
//! conventions used across all faultwatch crates.
//!
//! It has minimal external dependencies and is intended to be depended on
//! by every other crate in the workspace. The algorithms (classification,
//! transitions, progression forecasting) live in `faultwatch-engine`.

pub mod catalog;
pub mod error;
pub mod scenario;
pub mod severity;
pub mod telemetry;
pub mod tracing_config;

pub use catalog::{CatalogFile, FaultCatalog, NORMAL_ID};
pub use error::{FaultError, FaultResult};
pub use scenario::{
    CheckOutcome, DetectionCheck, DetectionProfile, FaultCategory, FaultScenario, NormalBounds,
    ProgressionEdge, SensorRange,
};
pub use severity::Severity;
pub use telemetry::{PhaseCurrents, SensorDimension, TelemetrySample};
