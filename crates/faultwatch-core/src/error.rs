//! Error types for catalog construction and loading.
//!
//! The engine has exactly one fatal error class: a catalog that fails
//! integrity validation at load time. Everything else in the public API is
//! a first-class negative result (`Option`, empty collection, or an
//! explicit rejection with a reason), never an error.

/// Convenience alias used across the faultwatch crates.
pub type FaultResult<T> = Result<T, FaultError>;

/// Fatal catalog-integrity violations, raised once at load time.
///
/// Traversal correctness (forecast trees, transition legality) depends on a
/// consistent catalog graph, so the process must refuse to start with a
/// broken one rather than surface these lazily at query time.
#[derive(Debug, thiserror::Error)]
pub enum FaultError {
    /// Two scenarios share the same id.
    #[error("Duplicate scenario id {id:?} in catalog. Scenario ids must be unique.")]
    DuplicateScenario {
        /// The offending id.
        id: String,
    },

    /// A progression edge points at an id that is not in the catalog.
    #[error(
        "Scenario {scenario:?} declares a progression to unknown scenario {target:?}. \
         Add the target to the catalog or remove the edge."
    )]
    DanglingProgressionEdge {
        /// Scenario declaring the edge.
        scenario: String,
        /// The missing target id.
        target: String,
    },

    /// A scenario declares a progression to itself.
    #[error("Scenario {scenario:?} declares a progression to itself. Self-loops are not allowed.")]
    SelfLoopProgression {
        /// The offending scenario id.
        scenario: String,
    },

    /// A progression probability is outside 0..=100.
    #[error(
        "Progression {scenario:?} -> {target:?} has probability {probability}, \
         expected a percentage in 0..=100."
    )]
    ProbabilityOutOfRange {
        scenario: String,
        target: String,
        probability: f64,
    },

    /// The catalog has no NORMAL scenario.
    #[error(
        "Catalog has no {normal_id:?} scenario. The healthy state is the initial and \
         repair target state and must always exist."
    )]
    MissingNormalScenario {
        /// The reserved healthy-state id.
        normal_id: &'static str,
    },

    /// A catalog file failed to parse.
    #[error("Failed to parse catalog file: {source}")]
    CatalogParse {
        #[from]
        source: serde_json::Error,
    },
}
