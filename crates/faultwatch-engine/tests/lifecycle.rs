//! End-to-end fault lifecycle flows over the built-in catalog:
//! inject, forecast, escalate, repair — the paths a transport layer drives.

use faultwatch_core::{Severity, TelemetrySample, NORMAL_ID};
use faultwatch_engine::classifier::{ConfidenceSource, EXPLICIT_LABEL_CONFIDENCE};
use faultwatch_engine::FaultEngine;

fn engine() -> FaultEngine {
    FaultEngine::with_builtin_catalog()
}

// ─── Injection and repair flow ───────────────────────────────────────────────

#[test]
fn critical_injection_locks_out_everything_but_repair() {
    let engine = engine();

    // From NORMAL, a critical fault may be injected directly.
    let outcome = engine.transition_to("PUMP_SEIZURE");
    assert!(outcome.accepted, "{}", outcome.message);
    assert_eq!(engine.current_state().id, "PUMP_SEIZURE");

    // A lesser fault is rejected: repair is required first.
    let outcome = engine.transition_to("FILTER_CLOGGING");
    assert!(!outcome.accepted);
    assert!(outcome.message.contains("repair"));
    assert_eq!(engine.current_state().id, "PUMP_SEIZURE");

    // Only NORMAL remains reachable.
    assert_eq!(engine.allowed_transitions(), vec![NORMAL_ID.to_owned()]);

    // Repair resets the machine.
    let outcome = engine.transition_to(NORMAL_ID);
    assert!(outcome.accepted);
    assert_eq!(engine.current_state().id, NORMAL_ID);
}

#[test]
fn escalation_follows_severity_upward_only() {
    let engine = engine();
    assert!(engine.transition_to("MINOR_VIBRATION").accepted);
    assert!(engine.transition_to("BEARING_WEAR").accepted);
    assert!(engine.transition_to("OVERLOAD").accepted);

    // Downward moves were already impossible mid-chain.
    assert!(!engine.can_transition_to("CAVITATION").allowed);
}

#[test]
fn every_scenario_is_reachable_from_normal() {
    let engine = engine();
    for scenario in engine.catalog_all() {
        assert!(
            engine.can_transition_to(&scenario.id).allowed,
            "{} should be reachable from NORMAL",
            scenario.id
        );
    }
}

// ─── Classification driving the lifecycle ────────────────────────────────────

#[test]
fn injected_label_classifies_and_transitions() {
    let engine = engine();

    // The simulator reports the injected fault on the sample itself.
    let sample = TelemetrySample::new(7.2, 88.0, 12.0, 400.0, 4.0, 14.0)
        .with_fault_label("Bearing Wear");
    let result = engine.classify(&sample);
    assert_eq!(result.scenario_id, "BEARING_WEAR");
    assert!((result.confidence - EXPLICIT_LABEL_CONFIDENCE).abs() < 1e-9);

    let outcome = engine.transition_to(&result.scenario_id);
    assert!(outcome.accepted);
    assert_eq!(engine.current_state().severity, Severity::High);
}

#[test]
fn sensor_inference_separates_cavitation_from_bearing_wear() {
    let engine = engine();

    // Low inlet pressure + elevated vibration + normal temperature.
    let cavitation = TelemetrySample::new(5.8, 68.0, 11.0, 400.0, 2.0, 12.0);
    assert_eq!(engine.classify(&cavitation).scenario_id, "CAVITATION");

    // Same vibration family but hot bearings and healthy pressure.
    let bearing = TelemetrySample::new(7.2, 88.0, 12.0, 400.0, 4.0, 14.0);
    assert_eq!(engine.classify(&bearing).scenario_id, "BEARING_WEAR");
}

#[test]
fn healthy_telemetry_classifies_normal() {
    let engine = engine();
    let sample = TelemetrySample::new(1.8, 65.0, 10.0, 400.0, 5.0, 15.0);
    let result = engine.classify(&sample);
    assert_eq!(result.scenario_id, NORMAL_ID);
    assert_eq!(result.source, ConfidenceSource::NormalBounds);
    assert!((result.confidence - 100.0).abs() < 1e-9);
}

// ─── Forecasting after a transition ──────────────────────────────────────────

#[test]
fn forecast_after_injection_ranks_by_probability() {
    let engine = engine();
    assert!(engine.transition_to("BEARING_WEAR").accepted);

    let forecast = engine.forecast(&engine.current_state().id);
    let ranked: Vec<(&str, f64)> = forecast
        .iter()
        .map(|entry| (entry.target_id.as_str(), entry.probability))
        .collect();
    assert_eq!(ranked, [("PUMP_SEIZURE", 70.0), ("OVERLOAD", 30.0)]);
}

#[test]
fn forecast_tree_shows_the_path_to_seizure() {
    let engine = engine();
    let tree = engine.forecast_tree("FILTER_CLOGGING", 3);

    // Most likely branch: filter clogging -> cavitation.
    assert_eq!(tree[0].entry.target_id, "CAVITATION");
    // Its most likely continuation: impeller wear.
    assert_eq!(tree[0].children[0].entry.target_id, "IMPELLER_WEAR");
    // And impeller wear most likely overloads the motor.
    assert_eq!(
        tree[0].children[0].children[0].entry.target_id,
        "OVERLOAD"
    );
}

#[test]
fn forecast_of_normal_is_empty() {
    let engine = engine();
    assert!(engine.forecast(NORMAL_ID).is_empty());
    assert!(engine.forecast_tree(NORMAL_ID, 3).is_empty());
}

// ─── Full operator session ───────────────────────────────────────────────────

#[test]
fn full_session_inject_diagnose_forecast_repair() {
    let engine = engine();

    // Operator injects cavitation.
    let outcome = engine.transition_to("CAVITATION");
    assert!(outcome.accepted);

    // Telemetry now reflects the fault and classifies accordingly.
    let sample = TelemetrySample::new(5.2, 68.0, 10.5, 400.0, 2.2, 12.5)
        .with_fault_label("Cavitation");
    let result = engine.classify(&sample);
    assert_eq!(result.scenario_id, "CAVITATION");

    // The maintenance view asks what happens if nobody intervenes.
    let forecast = engine.forecast("CAVITATION");
    assert_eq!(forecast[0].target_id, "IMPELLER_WEAR");
    assert_eq!(forecast[0].probability, 60.0);

    // The fault degrades as predicted, then the pump is repaired.
    assert!(engine.transition_to("IMPELLER_WEAR").accepted);
    assert!(engine.transition_to(NORMAL_ID).accepted);
    assert_eq!(engine.current_state().severity, Severity::Normal);
}
