//! Severity-gated fault state machine.
//!
//! States are the catalog scenario ids; the initial state is NORMAL and
//! NORMAL is always re-enterable (repair). Legality is asymmetric:
//!
//! 1. Unknown target: rejected.
//! 2. From NORMAL: anything may develop from a healthy system.
//! 3. To NORMAL: repair/reset is always permitted.
//! 4. From CRITICAL: only a full repair clears the fault; no escalation or
//!    lateral change.
//! 5. To a lesser non-NORMAL severity: rejected; faults do not self-heal
//!    partially.
//! 6. Otherwise (equal or greater severity): accepted.
//!
//! The single mutable field is the current scenario id, behind a mutex so
//! that concurrent check/commit pairs from different request handlers are
//! serialized. Everything else reads the shared immutable catalog.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use faultwatch_core::{FaultCatalog, FaultScenario, Severity, NORMAL_ID};

/// Answer to a pure legality query. Not an error: rejection is a
/// first-class outcome the caller presents to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionCheck {
    pub allowed: bool,
    pub reason: String,
}

impl TransitionCheck {
    fn allow(reason: impl Into<String>) -> Self {
        Self {
            allowed: true,
            reason: reason.into(),
        }
    }

    fn reject(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: reason.into(),
        }
    }
}

/// Result of attempting a transition.
///
/// On rejection, `scenario` is `None` and the state is untouched; there is
/// no partial update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionOutcome {
    pub accepted: bool,
    /// Human-readable message for the operator interface.
    pub message: String,
    /// The new current scenario on success.
    pub scenario: Option<FaultScenario>,
}

/// Stateful transition manager owning the current fault state.
///
/// Construct one per monitored system and share it behind the server
/// context; the internal mutex makes `&self` methods safe from any thread.
#[derive(Debug)]
pub struct TransitionManager {
    catalog: Arc<FaultCatalog>,
    current: Mutex<String>,
}

impl TransitionManager {
    /// Creates a manager in the NORMAL state.
    #[must_use]
    pub fn new(catalog: Arc<FaultCatalog>) -> Self {
        Self {
            catalog,
            current: Mutex::new(NORMAL_ID.to_owned()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, String> {
        // A panic while holding the lock leaves the id intact; the value is
        // still coherent, so recover instead of propagating the poison.
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current scenario id.
    #[must_use]
    pub fn current_id(&self) -> String {
        self.lock().clone()
    }

    /// Current scenario definition.
    #[must_use]
    pub fn current_scenario(&self) -> FaultScenario {
        let current = self.lock();
        self.catalog
            .lookup(&current)
            .or_else(|| self.catalog.lookup(NORMAL_ID))
            .cloned()
            .expect("validated catalog always contains NORMAL")
    }

    /// Pure legality query; does not commit anything.
    #[must_use]
    pub fn can_transition_to(&self, target_id: &str) -> TransitionCheck {
        let current = self.lock();
        evaluate(&self.catalog, &current, target_id)
    }

    /// Ids reachable from the current state, in catalog order.
    ///
    /// Drives UI affordances; never mutates state.
    #[must_use]
    pub fn allowed_transitions(&self) -> Vec<String> {
        let current = self.lock();
        self.catalog
            .all()
            .iter()
            .filter(|scenario| evaluate(&self.catalog, &current, &scenario.id).allowed)
            .map(|scenario| scenario.id.clone())
            .collect()
    }

    /// Attempts a transition, re-validating and committing atomically under
    /// a single lock hold.
    #[instrument(
        name = "faultwatch::transition",
        skip(self),
        fields(to_state = target_id)
    )]
    pub fn transition_to(&self, target_id: &str) -> TransitionOutcome {
        let mut current = self.lock();
        let check = evaluate(&self.catalog, &current, target_id);
        if !check.allowed {
            debug!(
                from_state = current.as_str(),
                allowed = false,
                reason = check.reason.as_str(),
                "transition rejected"
            );
            return TransitionOutcome {
                accepted: false,
                message: check.reason,
                scenario: None,
            };
        }

        // Known id: evaluate() rejects unknown targets.
        let Some(scenario) = self.catalog.lookup(target_id) else {
            return TransitionOutcome {
                accepted: false,
                message: format!("Unknown state: {target_id}"),
                scenario: None,
            };
        };

        let previous = std::mem::replace(&mut *current, target_id.to_owned());
        let previous_name = self
            .catalog
            .lookup(&previous)
            .map_or(previous.clone(), |s| s.name.clone());
        let message = if target_id == NORMAL_ID {
            format!("System repaired; back to normal operation (was: {previous_name})")
        } else {
            format!("{} injected: {}", scenario.name, scenario.description)
        };
        debug!(
            from_state = previous.as_str(),
            allowed = true,
            "transition committed"
        );
        TransitionOutcome {
            accepted: true,
            message,
            scenario: Some(scenario.clone()),
        }
    }
}

/// Evaluates the transition rule set for `current_id -> target_id`.
///
/// Rules are checked in the fixed order documented at module level.
fn evaluate(catalog: &FaultCatalog, current_id: &str, target_id: &str) -> TransitionCheck {
    let Some(target) = catalog.lookup(target_id) else {
        return TransitionCheck::reject(format!("Unknown state: {target_id}"));
    };
    let current_severity = catalog
        .lookup(current_id)
        .map_or(Severity::Normal, |scenario| scenario.severity);

    if current_severity.is_normal() {
        return TransitionCheck::allow("Transition allowed from normal state");
    }
    if target.severity.is_normal() {
        return TransitionCheck::allow("Repair/reset allowed");
    }
    if current_severity.is_critical() {
        return TransitionCheck::reject(
            "Critical state: the system must first be repaired (return to Normal) \
             before another fault can be simulated",
        );
    }
    if target.severity < current_severity {
        return TransitionCheck::reject(format!(
            "Cannot transition from a {} state to the less severe {} ({}); \
             repair to Normal first",
            current_severity, target.severity, target.name
        ));
    }
    TransitionCheck::allow("Transition allowed")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> TransitionManager {
        TransitionManager::new(Arc::new(FaultCatalog::builtin()))
    }

    // ─── Legality rules ──────────────────────────────────────────────

    #[test]
    fn starts_in_normal() {
        let manager = manager();
        assert_eq!(manager.current_id(), NORMAL_ID);
        assert_eq!(manager.current_scenario().id, NORMAL_ID);
    }

    #[test]
    fn from_normal_everything_is_reachable() {
        let manager = manager();
        for scenario in manager.catalog.all() {
            let check = manager.can_transition_to(&scenario.id);
            assert!(check.allowed, "{}: {}", scenario.id, check.reason);
        }
    }

    #[test]
    fn unknown_target_is_rejected_with_reason() {
        let manager = manager();
        let check = manager.can_transition_to("GHOST");
        assert!(!check.allowed);
        assert!(check.reason.contains("Unknown state"));
    }

    #[test]
    fn repair_is_always_allowed() {
        let manager = manager();
        for id in ["MINOR_VIBRATION", "CAVITATION", "BEARING_WEAR", "OVERLOAD"] {
            assert!(manager.transition_to(id).accepted, "{id}");
            assert!(manager.can_transition_to(NORMAL_ID).allowed);
            assert!(manager.transition_to(NORMAL_ID).accepted);
        }
    }

    #[test]
    fn critical_state_only_allows_repair() {
        let manager = manager();
        assert!(manager.transition_to("OVERLOAD").accepted);
        let allowed = manager.allowed_transitions();
        assert_eq!(allowed, vec![NORMAL_ID.to_owned()]);
    }

    #[test]
    fn cannot_downgrade_without_repair() {
        let manager = manager();
        assert!(manager.transition_to("BEARING_WEAR").accepted);
        let check = manager.can_transition_to("MINOR_VIBRATION");
        assert!(!check.allowed);
        assert!(check.reason.contains("repair"));
    }

    #[test]
    fn lateral_and_upward_moves_are_allowed() {
        let manager = manager();
        assert!(manager.transition_to("CAVITATION").accepted);
        // Same severity.
        assert!(manager.can_transition_to("SEAL_LEAK").allowed);
        // Higher severity.
        assert!(manager.can_transition_to("PUMP_SEIZURE").allowed);
    }

    // ─── Atomicity ───────────────────────────────────────────────────

    #[test]
    fn rejected_transition_leaves_state_untouched() {
        let manager = manager();
        assert!(manager.transition_to("OVERLOAD").accepted);
        let before = manager.current_id();
        let outcome = manager.transition_to("FILTER_CLOGGING");
        assert!(!outcome.accepted);
        assert!(outcome.scenario.is_none());
        assert_eq!(manager.current_id(), before);
    }

    #[test]
    fn successful_transition_returns_new_scenario_and_message() {
        let manager = manager();
        let outcome = manager.transition_to("CAVITATION");
        assert!(outcome.accepted);
        assert_eq!(outcome.scenario.as_ref().map(|s| s.id.as_str()), Some("CAVITATION"));
        assert!(outcome.message.contains("Cavitation"));
    }

    #[test]
    fn repair_message_names_the_previous_fault() {
        let manager = manager();
        assert!(manager.transition_to("SEAL_LEAK").accepted);
        let outcome = manager.transition_to(NORMAL_ID);
        assert!(outcome.accepted);
        assert!(outcome.message.contains("Seal Leak"));
    }

    #[test]
    fn allowed_transitions_preserve_catalog_order() {
        let manager = manager();
        assert!(manager.transition_to("CAVITATION").accepted);
        let allowed = manager.allowed_transitions();
        let catalog_order: Vec<String> = manager
            .catalog
            .all()
            .iter()
            .map(|s| s.id.clone())
            .filter(|id| allowed.contains(id))
            .collect();
        assert_eq!(allowed, catalog_order);
    }

    #[test]
    fn manager_is_safe_to_share_across_threads() {
        let manager = Arc::new(manager());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let manager = Arc::clone(&manager);
                std::thread::spawn(move || {
                    if i % 2 == 0 {
                        let _ = manager.transition_to("CAVITATION");
                    } else {
                        let _ = manager.allowed_transitions();
                    }
                    manager.current_id()
                })
            })
            .collect();
        for handle in handles {
            let id = handle.join().unwrap();
            assert!(manager.catalog.contains(&id));
        }
    }
}
