//! The engine facade wiring catalog, classifier, state machine, and
//! predictor into the surface consumed by transport layers.
//!
//! [`FaultEngine`] is a synchronous library object: it performs no I/O,
//! never blocks beyond the transition mutex, and is safe to share behind an
//! `Arc` across whatever event loop or thread pool owns the requests.

use std::sync::Arc;

use faultwatch_core::{FaultCatalog, FaultScenario, TelemetrySample};

use crate::classifier::{ClassificationResult, Classifier};
use crate::progression::{ForecastEntry, ForecastNode, Predictor};
use crate::transition::{TransitionCheck, TransitionManager, TransitionOutcome};

/// Facade over the fault lifecycle engine.
#[derive(Debug)]
pub struct FaultEngine {
    catalog: Arc<FaultCatalog>,
    classifier: Classifier,
    transitions: TransitionManager,
    predictor: Predictor,
}

impl FaultEngine {
    /// Creates an engine over a validated catalog, starting in NORMAL.
    #[must_use]
    pub fn new(catalog: Arc<FaultCatalog>) -> Self {
        Self {
            classifier: Classifier::new(Arc::clone(&catalog)),
            transitions: TransitionManager::new(Arc::clone(&catalog)),
            predictor: Predictor::new(Arc::clone(&catalog)),
            catalog,
        }
    }

    /// Creates an engine over the built-in Grundfos-derived catalog.
    #[must_use]
    pub fn with_builtin_catalog() -> Self {
        Self::new(Arc::new(FaultCatalog::builtin()))
    }

    /// The shared catalog.
    #[must_use]
    pub fn catalog(&self) -> &FaultCatalog {
        &self.catalog
    }

    /// Classifies a telemetry sample. Pure; runs fully in parallel across
    /// calls.
    #[must_use]
    pub fn classify(&self, sample: &TelemetrySample) -> ClassificationResult {
        self.classifier.classify(sample)
    }

    /// The currently active fault scenario.
    #[must_use]
    pub fn current_state(&self) -> FaultScenario {
        self.transitions.current_scenario()
    }

    /// Pure transition-legality query.
    #[must_use]
    pub fn can_transition_to(&self, target_id: &str) -> TransitionCheck {
        self.transitions.can_transition_to(target_id)
    }

    /// Ids reachable from the current state, in catalog order.
    #[must_use]
    pub fn allowed_transitions(&self) -> Vec<String> {
        self.transitions.allowed_transitions()
    }

    /// Attempts a state transition; atomic with respect to the current
    /// state.
    pub fn transition_to(&self, target_id: &str) -> TransitionOutcome {
        self.transitions.transition_to(target_id)
    }

    /// Ranked direct progression forecast for a scenario.
    #[must_use]
    pub fn forecast(&self, id: &str) -> Vec<ForecastEntry> {
        self.predictor.forecast(id)
    }

    /// Depth-bounded progression forecast tree.
    #[must_use]
    pub fn forecast_tree(&self, id: &str, max_depth: usize) -> Vec<ForecastNode> {
        self.predictor.forecast_tree(id, max_depth)
    }

    /// Catalog lookup; `None` means "no information".
    #[must_use]
    pub fn catalog_entry(&self, id: &str) -> Option<&FaultScenario> {
        self.catalog.lookup(id)
    }

    /// All catalog scenarios, in stable listing order.
    #[must_use]
    pub fn catalog_all(&self) -> &[FaultScenario] {
        self.catalog.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faultwatch_core::NORMAL_ID;

    #[test]
    fn engine_starts_normal_with_builtin_catalog() {
        let engine = FaultEngine::with_builtin_catalog();
        assert_eq!(engine.current_state().id, NORMAL_ID);
        assert_eq!(engine.catalog_all().len(), 11);
    }

    #[test]
    fn catalog_entry_delegates_to_lookup() {
        let engine = FaultEngine::with_builtin_catalog();
        assert!(engine.catalog_entry("CAVITATION").is_some());
        assert!(engine.catalog_entry("GHOST").is_none());
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FaultEngine>();
    }
}
