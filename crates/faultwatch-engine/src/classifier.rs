//! Weighted multi-criteria scenario classification.
//!
//! A telemetry sample is classified in priority order:
//!
//! 1. **Explicit label short-circuit** — a known, non-normal fault label on
//!    the sample is operator/injection intent and is authoritative over
//!    sensor inference. Fixed confidence of 95.
//! 2. **Normal-range check** — every monitored dimension inside the healthy
//!    envelope, and no scored scenario reaching full confidence, classifies
//!    as NORMAL at 100.
//! 3. **Weighted scoring** — each scenario's declarative detection profile
//!    is folded over the sample: full weight inside a declared range,
//!    partial weight inside the tolerance band, zero otherwise. The raw sum
//!    is normalized against the profile's maximum achievable score, then a
//!    priority boost of `(tier - 1) * 5` points is added when at least half
//!    the checks matched fully.
//! 4. **Selection** — credible candidates (confidence above the acceptance
//!    floor) are sorted by priority tier first, then confidence; the top
//!    one wins. With no credible candidate the result is the `UNKNOWN`
//!    sentinel at a fixed low confidence: anomalous but unclassified, never
//!    a fabricated diagnosis.
//!
//! The priority-first sort and the boost deliberately bias ambiguous
//! readings toward the more dangerous interpretation. Under-reporting a
//! developing bearing failure costs more than a spurious warning; this is a
//! safety-first tie-break, not a scoring bug.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use faultwatch_core::scenario::CheckOutcome;
use faultwatch_core::telemetry::SensorDimension;
use faultwatch_core::{FaultCatalog, FaultScenario, TelemetrySample, NORMAL_ID};

// ─── Tuning constants ───────────────────────────────────────────────────────

/// Sentinel scenario id for "anomalous but unclassified". Not a catalog
/// entry: it can never be transitioned to or forecast from.
pub const UNKNOWN_SCENARIO: &str = "UNKNOWN";

/// Confidence assigned when a sample carries a known explicit fault label.
pub const EXPLICIT_LABEL_CONFIDENCE: f64 = 95.0;

/// Confidence assigned to an in-bounds NORMAL classification.
pub const NORMAL_CONFIDENCE: f64 = 100.0;

/// Minimum confidence a scored scenario needs to be accepted.
pub const ACCEPTANCE_FLOOR: f64 = 35.0;

/// Confidence reported with the `UNKNOWN` sentinel.
pub const UNKNOWN_CONFIDENCE: f64 = 30.0;

/// Percentage points added per priority tier above 1 when a scenario
/// matched at least half of its checks fully.
const PRIORITY_BOOST_STEP: f64 = 5.0;

// ─── Result types ───────────────────────────────────────────────────────────

/// Which rule produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceSource {
    /// Explicit operator/injection label on the sample.
    ExplicitLabel,
    /// All dimensions inside the healthy envelope.
    NormalBounds,
    /// Weighted sensor scoring.
    SensorScore,
    /// No credible candidate; `UNKNOWN` sentinel.
    Unclassified,
}

/// Audit record for one detection check of the winning scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionMatch {
    pub dimension: SensorDimension,
    /// Sample value, or `None` when the dimension was unavailable.
    pub value: Option<f64>,
    pub outcome: CheckOutcome,
    /// Full weight of the check.
    pub weight: f64,
    /// Weight actually awarded.
    pub awarded: f64,
}

/// Outcome of classifying one telemetry sample.
///
/// Transient: created per call, never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Catalog id, or [`UNKNOWN_SCENARIO`].
    pub scenario_id: String,
    /// 0..=100. A support score, not a calibrated probability.
    pub confidence: f64,
    pub source: ConfidenceSource,
    /// Per-dimension match audit for the winning scenario; empty for
    /// explicit-label, normal, and unknown outcomes.
    pub diagnostics: Vec<DimensionMatch>,
}

impl ClassificationResult {
    fn without_diagnostics(scenario_id: &str, confidence: f64, source: ConfidenceSource) -> Self {
        Self {
            scenario_id: scenario_id.to_owned(),
            confidence,
            source,
            diagnostics: Vec::new(),
        }
    }
}

struct Candidate {
    id: String,
    priority: u8,
    confidence: f64,
    diagnostics: Vec<DimensionMatch>,
}

// ─── Classifier ─────────────────────────────────────────────────────────────

/// Pure classification function over a shared catalog.
///
/// Stateless; safe to call concurrently from any number of threads.
#[derive(Debug, Clone)]
pub struct Classifier {
    catalog: Arc<FaultCatalog>,
}

impl Classifier {
    #[must_use]
    pub fn new(catalog: Arc<FaultCatalog>) -> Self {
        Self { catalog }
    }

    /// Classifies a telemetry sample into a catalog scenario, NORMAL, or
    /// the `UNKNOWN` sentinel.
    #[must_use]
    #[instrument(
        name = "faultwatch::classify",
        skip(self, sample),
        fields(has_label = sample.fault_label.is_some())
    )]
    pub fn classify(&self, sample: &TelemetrySample) -> ClassificationResult {
        // Rule 1: explicit label wins over sensor inference.
        if let Some(label) = sample.fault_label.as_deref() {
            if let Some(id) = self.catalog.label_to_id(label) {
                if id != NORMAL_ID {
                    debug!(scenario_id = id, "explicit label short-circuit");
                    return ClassificationResult::without_diagnostics(
                        id,
                        EXPLICIT_LABEL_CONFIDENCE,
                        ConfidenceSource::ExplicitLabel,
                    );
                }
            }
        }

        let mut candidates: Vec<Candidate> = self
            .catalog
            .all()
            .iter()
            .filter(|scenario| !scenario.severity.is_normal())
            .filter_map(|scenario| score_scenario(scenario, sample))
            .collect();

        // Rule 2: healthy envelope, unless a scored scenario reaches full
        // confidence and beats the NORMAL claim.
        let beats_normal = candidates
            .iter()
            .any(|candidate| candidate.confidence >= NORMAL_CONFIDENCE);
        if self.catalog.normal_bounds().contains(sample) && !beats_normal {
            debug!(scenario_id = NORMAL_ID, "all dimensions within normal bounds");
            return ClassificationResult::without_diagnostics(
                NORMAL_ID,
                NORMAL_CONFIDENCE,
                ConfidenceSource::NormalBounds,
            );
        }

        // Rule 4: credible candidates only, priority tier before confidence.
        // The sort is stable, so equal (priority, confidence) pairs keep
        // catalog declaration order.
        candidates.retain(|candidate| candidate.confidence > ACCEPTANCE_FLOOR);
        candidates.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then(b.confidence.total_cmp(&a.confidence))
        });

        if let Some(best) = candidates.into_iter().next() {
            debug!(
                scenario_id = best.id.as_str(),
                confidence = best.confidence,
                "sensor-score classification"
            );
            return ClassificationResult {
                scenario_id: best.id,
                confidence: best.confidence,
                source: ConfidenceSource::SensorScore,
                diagnostics: best.diagnostics,
            };
        }

        debug!("no credible candidate; reporting UNKNOWN");
        ClassificationResult::without_diagnostics(
            UNKNOWN_SCENARIO,
            UNKNOWN_CONFIDENCE,
            ConfidenceSource::Unclassified,
        )
    }
}

/// Scores one scenario's detection profile against a sample.
///
/// Returns `None` for scenarios without a profile or with zero raw score;
/// they are not candidates.
fn score_scenario(scenario: &FaultScenario, sample: &TelemetrySample) -> Option<Candidate> {
    let profile = scenario.detection.as_ref()?;
    if profile.checks.is_empty() {
        return None;
    }

    let mut raw = 0.0;
    let mut full_matches = 0_usize;
    let mut diagnostics = Vec::with_capacity(profile.checks.len());
    for check in &profile.checks {
        let value = sample.dimension(check.dimension);
        let outcome = check.evaluate(value);
        let awarded = check.awarded(outcome);
        raw += awarded;
        if outcome == CheckOutcome::Full {
            full_matches += 1;
        }
        diagnostics.push(DimensionMatch {
            dimension: check.dimension,
            value,
            outcome,
            weight: check.weight,
            awarded,
        });
    }
    if raw <= 0.0 {
        return None;
    }

    let base = raw / profile.max_score() * 100.0;
    let priority = scenario.severity.priority_tier();
    let boost = if full_matches * 2 >= profile.checks.len() {
        f64::from(priority - 1) * PRIORITY_BOOST_STEP
    } else {
        0.0
    };

    Some(Candidate {
        id: scenario.id.clone(),
        priority,
        confidence: (base + boost).min(100.0),
        diagnostics,
    })
}
