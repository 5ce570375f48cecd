//! Fault scenario definitions: identity, metadata, detection thresholds,
//! and progression edges.
//!
//! A [`FaultScenario`] is the unit of the fault catalog. Its
//! [`DetectionProfile`] is a declarative list of per-dimension range checks
//! the classifier folds over, so detection behavior is data, not code: new
//! dimensions or scenarios change the catalog, never the algorithm.

use serde::{Deserialize, Serialize};

use crate::severity::Severity;
use crate::telemetry::{SensorDimension, TelemetrySample};

// ---------------------------------------------------------------------------
// Sensor ranges and detection checks
// ---------------------------------------------------------------------------

/// An inclusive numeric range over one sensor dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorRange {
    pub lo: f64,
    pub hi: f64,
}

impl SensorRange {
    #[must_use]
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Whether `value` falls inside the range, bounds inclusive.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lo && value <= self.hi
    }

    /// The range expanded by a fractional tolerance on both bounds.
    ///
    /// Bounds scale multiplicatively (`lo * (1 - tol)`, `hi * (1 + tol)`),
    /// matching how sensor drift behaves relative to magnitude. A zero
    /// lower bound stays at zero.
    #[must_use]
    pub fn expanded(&self, tolerance: f64) -> Self {
        Self {
            lo: self.lo * (1.0 - tolerance),
            hi: self.hi * (1.0 + tolerance),
        }
    }
}

/// How a sample value related to one detection check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckOutcome {
    /// Inside a declared range; full weight awarded.
    Full,
    /// Inside the tolerance band just outside a range; partial weight.
    Partial,
    /// Outside every band, or the dimension was unavailable.
    Miss,
}

/// One weighted range check over a sensor dimension.
///
/// A check may declare several acceptable ranges (e.g. supply voltage that
/// is out of spec either low *or* high); the full weight is awarded once if
/// the value falls in any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionCheck {
    pub dimension: SensorDimension,
    pub ranges: Vec<SensorRange>,
    /// Weight awarded on a full match.
    pub weight: f64,
    /// Fraction of `weight` awarded on a tolerance-band match.
    pub partial_credit: f64,
    /// Fractional expansion of range bounds forming the tolerance band.
    pub tolerance: f64,
}

impl DetectionCheck {
    /// A single-range check with the dimension's default weight, partial
    /// credit, and tolerance.
    #[must_use]
    pub fn new(dimension: SensorDimension, lo: f64, hi: f64) -> Self {
        Self {
            dimension,
            ranges: vec![SensorRange::new(lo, hi)],
            weight: dimension.default_weight(),
            partial_credit: dimension.default_partial_credit(),
            tolerance: dimension.default_tolerance(),
        }
    }

    /// Adds an alternate acceptable range.
    #[must_use]
    pub fn or_range(mut self, lo: f64, hi: f64) -> Self {
        self.ranges.push(SensorRange::new(lo, hi));
        self
    }

    /// Overrides the full-match weight.
    #[must_use]
    pub const fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Evaluates the check against a sample value.
    ///
    /// `None` (dimension unavailable) is a miss, never an error.
    #[must_use]
    pub fn evaluate(&self, value: Option<f64>) -> CheckOutcome {
        let Some(value) = value else {
            return CheckOutcome::Miss;
        };
        if self.ranges.iter().any(|range| range.contains(value)) {
            return CheckOutcome::Full;
        }
        if self
            .ranges
            .iter()
            .any(|range| range.expanded(self.tolerance).contains(value))
        {
            return CheckOutcome::Partial;
        }
        CheckOutcome::Miss
    }

    /// Weight awarded for a given outcome.
    #[must_use]
    pub fn awarded(&self, outcome: CheckOutcome) -> f64 {
        match outcome {
            CheckOutcome::Full => self.weight,
            CheckOutcome::Partial => self.weight * self.partial_credit,
            CheckOutcome::Miss => 0.0,
        }
    }
}

/// The declarative detection profile of a scenario.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DetectionProfile {
    pub checks: Vec<DetectionCheck>,
}

impl DetectionProfile {
    #[must_use]
    pub fn new(checks: Vec<DetectionCheck>) -> Self {
        Self { checks }
    }

    /// Maximum achievable raw score: the sum of all full weights.
    ///
    /// The classifier normalizes raw scores against this to obtain a
    /// confidence percentage.
    #[must_use]
    pub fn max_score(&self) -> f64 {
        self.checks.iter().map(|check| check.weight).sum()
    }
}

// ---------------------------------------------------------------------------
// Normal-operation bounds
// ---------------------------------------------------------------------------

/// Envelope of healthy operation.
///
/// A sample inside every bound is a candidate for the NORMAL
/// classification; any bound violation disqualifies it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalBounds {
    pub vibration_max: f64,
    pub temperature_max: f64,
    pub current_max: f64,
    pub imbalance_max: f64,
    pub voltage_min: f64,
    pub voltage_max: f64,
    pub pressure_min: f64,
    pub flow_min: f64,
}

impl Default for NormalBounds {
    /// Baseline for a 400 V three-phase CR pump installation.
    fn default() -> Self {
        Self {
            vibration_max: 2.5,
            temperature_max: 70.0,
            current_max: 12.0,
            imbalance_max: 3.0,
            voltage_min: 380.0,
            voltage_max: 420.0,
            pressure_min: 4.0,
            flow_min: 13.0,
        }
    }
}

impl NormalBounds {
    /// Whether every monitored dimension of `sample` is inside the healthy
    /// envelope. An unavailable imbalance (zero phase average) does not
    /// disqualify a stopped-but-healthy pump.
    #[must_use]
    pub fn contains(&self, sample: &TelemetrySample) -> bool {
        let imbalance_ok = sample
            .currents
            .imbalance_pct()
            .is_none_or(|imbalance| imbalance <= self.imbalance_max);
        sample.vibration_mm_s <= self.vibration_max
            && sample.motor_temp_c <= self.temperature_max
            && sample.currents.average() <= self.current_max
            && imbalance_ok
            && sample.voltage_v >= self.voltage_min
            && sample.voltage_v <= self.voltage_max
            && sample.pressure_bar >= self.pressure_min
            && sample.flow_m3_h >= self.flow_min
    }
}

// ---------------------------------------------------------------------------
// Progression edges and scenarios
// ---------------------------------------------------------------------------

/// Fault category, for grouping and UI affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultCategory {
    Normal,
    Mechanical,
    Hydraulic,
    Electrical,
}

/// A directed, probability-weighted edge stating that an active fault may
/// evolve into another fault if unaddressed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionEdge {
    /// Catalog id of the fault this one can evolve into.
    pub target: String,
    /// Likelihood of this progression, 0..=100.
    pub probability: f64,
    /// Estimated time before progression if not fixed.
    pub time_window: String,
    /// What accelerates this progression.
    pub trigger: String,
    /// What to do to prevent it.
    pub prevention: String,
}

impl ProgressionEdge {
    #[must_use]
    pub fn new(
        target: impl Into<String>,
        probability: f64,
        time_window: impl Into<String>,
        trigger: impl Into<String>,
        prevention: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            probability,
            time_window: time_window.into(),
            trigger: trigger.into(),
            prevention: prevention.into(),
        }
    }
}

/// A complete fault scenario definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaultScenario {
    /// Unique catalog key, e.g. `"BEARING_WEAR"`.
    pub id: String,
    /// Technical name, e.g. `"Bearing Wear"`. Doubles as the explicit
    /// fault label used by upstream bridges.
    pub name: String,
    pub severity: Severity,
    pub category: FaultCategory,
    /// What is happening.
    pub description: String,
    /// Observable symptoms.
    pub symptoms: Vec<String>,
    /// Possible causes.
    pub causes: Vec<String>,
    /// What to do to fix it.
    pub repair_action: String,
    /// Estimated repair time.
    pub maintenance_time: String,
    /// Reference into the troubleshooting manual, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_page: Option<String>,
    /// Detection thresholds; `None` for scenarios that are never inferred
    /// from sensors (NORMAL uses [`NormalBounds`] instead).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detection: Option<DetectionProfile>,
    /// Outgoing progression edges, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub progressions: Vec<ProgressionEdge>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_contains_is_inclusive() {
        let range = SensorRange::new(4.5, 6.5);
        assert!(range.contains(4.5));
        assert!(range.contains(6.5));
        assert!(!range.contains(6.51));
    }

    #[test]
    fn expanded_range_scales_both_bounds() {
        let band = SensorRange::new(10.0, 20.0).expanded(0.10);
        assert!((band.lo - 9.0).abs() < 1e-9);
        assert!((band.hi - 22.0).abs() < 1e-9);
    }

    #[test]
    fn check_full_partial_miss() {
        let check = DetectionCheck::new(SensorDimension::Vibration, 4.5, 6.5);
        assert_eq!(check.evaluate(Some(5.0)), CheckOutcome::Full);
        // 4.2 is outside [4.5, 6.5] but inside the 10% band [4.05, 7.15].
        assert_eq!(check.evaluate(Some(4.2)), CheckOutcome::Partial);
        assert_eq!(check.evaluate(Some(3.0)), CheckOutcome::Miss);
        assert_eq!(check.evaluate(None), CheckOutcome::Miss);
    }

    #[test]
    fn check_with_alternate_range_awards_full_once() {
        let check = DetectionCheck::new(SensorDimension::Voltage, 340.0, 375.0)
            .or_range(425.0, 460.0);
        assert_eq!(check.evaluate(Some(360.0)), CheckOutcome::Full);
        assert_eq!(check.evaluate(Some(440.0)), CheckOutcome::Full);
        assert_eq!(check.evaluate(Some(400.0)), CheckOutcome::Miss);
        assert!((check.awarded(CheckOutcome::Full) - check.weight).abs() < 1e-9);
    }

    #[test]
    fn partial_award_is_fraction_of_weight() {
        let check = DetectionCheck::new(SensorDimension::Pressure, 1.5, 3.0);
        let awarded = check.awarded(CheckOutcome::Partial);
        assert!((awarded - check.weight * check.partial_credit).abs() < 1e-9);
    }

    #[test]
    fn max_score_sums_full_weights() {
        let profile = DetectionProfile::new(vec![
            DetectionCheck::new(SensorDimension::Vibration, 4.5, 6.5),
            DetectionCheck::new(SensorDimension::Pressure, 1.5, 3.0).with_weight(3.0),
        ]);
        assert!((profile.max_score() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn normal_bounds_accept_baseline_sample() {
        let sample = crate::telemetry::TelemetrySample::new(1.8, 65.0, 10.0, 400.0, 5.0, 15.0);
        assert!(NormalBounds::default().contains(&sample));
    }

    #[test]
    fn normal_bounds_reject_any_violation() {
        let bounds = NormalBounds::default();
        let base = crate::telemetry::TelemetrySample::new(1.8, 65.0, 10.0, 400.0, 5.0, 15.0);

        let mut hot = base.clone();
        hot.motor_temp_c = 75.0;
        assert!(!bounds.contains(&hot));

        let mut low_pressure = base.clone();
        low_pressure.pressure_bar = 2.0;
        assert!(!bounds.contains(&low_pressure));

        let mut undervolt = base;
        undervolt.voltage_v = 360.0;
        assert!(!bounds.contains(&undervolt));
    }

    #[test]
    fn stopped_pump_with_zero_current_can_still_be_normal_on_imbalance() {
        // Imbalance is undefined at zero current; the bound must not reject
        // the sample for that dimension alone.
        let mut sample = crate::telemetry::TelemetrySample::new(0.1, 25.0, 0.0, 400.0, 5.0, 15.0);
        sample.flow_m3_h = 15.0;
        assert!(NormalBounds::default().contains(&sample));
    }
}
