//! The fault catalog: an immutable, validated registry of fault scenarios.
//!
//! The catalog is built once at startup — either from the built-in
//! Grundfos CR-derived data set ([`FaultCatalog::builtin`]) or from a JSON
//! config file ([`FaultCatalog::from_json_str`]) — and is thereafter
//! read-only. Referential integrity (every progression edge points at a real
//! catalog id, no duplicates, no self-loops, probabilities in range, NORMAL
//! present) is enforced at construction; the process refuses to start with
//! an inconsistent graph rather than fail lazily during traversal.
//!
//! Iteration order is insertion order, so listing endpoints built on
//! [`FaultCatalog::all`] are deterministic.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FaultError, FaultResult};
use crate::scenario::{
    DetectionCheck, DetectionProfile, FaultCategory, FaultScenario, NormalBounds, ProgressionEdge,
};
use crate::severity::Severity;
use crate::telemetry::SensorDimension as Dim;
use crate::tracing_config::TARGET_PREFIX;

/// Reserved id of the healthy state. Always present in a valid catalog.
pub const NORMAL_ID: &str = "NORMAL";

// ---------------------------------------------------------------------------
// Catalog file format
// ---------------------------------------------------------------------------

/// On-disk catalog representation, for deployments that load scenario data
/// from a config file instead of the built-in table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Healthy-operation envelope used by the classifier's normal check.
    #[serde(default)]
    pub normal_bounds: NormalBounds,
    /// Scenario definitions, in listing order.
    pub scenarios: Vec<FaultScenario>,
}

// ---------------------------------------------------------------------------
// FaultCatalog
// ---------------------------------------------------------------------------

/// Immutable registry of fault scenarios.
///
/// Safe for unsynchronized concurrent reads; no writer exists after
/// construction. Share via `Arc`.
#[derive(Debug, Clone)]
pub struct FaultCatalog {
    scenarios: Vec<FaultScenario>,
    index: HashMap<String, usize>,
    /// Lowercased explicit-label (id or name) to scenario id.
    labels: HashMap<String, String>,
    normal_bounds: NormalBounds,
}

impl FaultCatalog {
    /// Builds and validates a catalog from scenario definitions.
    ///
    /// # Errors
    ///
    /// Returns a [`FaultError`] on the first integrity violation found:
    /// duplicate id, missing NORMAL scenario, self-loop progression,
    /// dangling progression target, or probability outside 0..=100.
    pub fn new(scenarios: Vec<FaultScenario>, normal_bounds: NormalBounds) -> FaultResult<Self> {
        let mut index = HashMap::with_capacity(scenarios.len());
        let mut labels = HashMap::with_capacity(scenarios.len() * 2);
        for (position, scenario) in scenarios.iter().enumerate() {
            if index.insert(scenario.id.clone(), position).is_some() {
                return Err(FaultError::DuplicateScenario {
                    id: scenario.id.clone(),
                });
            }
            labels.insert(scenario.id.to_lowercase(), scenario.id.clone());
            labels.insert(scenario.name.to_lowercase(), scenario.id.clone());
        }

        if !index.contains_key(NORMAL_ID) {
            return Err(FaultError::MissingNormalScenario {
                normal_id: NORMAL_ID,
            });
        }

        for scenario in &scenarios {
            for edge in &scenario.progressions {
                if edge.target == scenario.id {
                    return Err(FaultError::SelfLoopProgression {
                        scenario: scenario.id.clone(),
                    });
                }
                if !index.contains_key(&edge.target) {
                    return Err(FaultError::DanglingProgressionEdge {
                        scenario: scenario.id.clone(),
                        target: edge.target.clone(),
                    });
                }
                if !(0.0..=100.0).contains(&edge.probability) {
                    return Err(FaultError::ProbabilityOutOfRange {
                        scenario: scenario.id.clone(),
                        target: edge.target.clone(),
                        probability: edge.probability,
                    });
                }
            }
        }

        debug!(
            target: TARGET_PREFIX,
            scenario_count = scenarios.len(),
            "catalog validated"
        );
        Ok(Self {
            scenarios,
            index,
            labels,
            normal_bounds,
        })
    }

    /// Loads and validates a catalog from its JSON file representation.
    ///
    /// # Errors
    ///
    /// Returns [`FaultError::CatalogParse`] on malformed JSON, or any
    /// integrity violation from [`FaultCatalog::new`].
    pub fn from_json_str(json: &str) -> FaultResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.scenarios, file.normal_bounds)
    }

    /// Looks up a scenario by id. `None` means "no information", never a
    /// fatal condition.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&FaultScenario> {
        self.index.get(id).map(|&position| &self.scenarios[position])
    }

    /// Whether `id` is a catalog scenario.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All scenarios, in stable insertion order.
    #[must_use]
    pub fn all(&self) -> &[FaultScenario] {
        &self.scenarios
    }

    /// Outgoing progression edges of `id`, in declaration order.
    ///
    /// Empty for unknown ids and for terminal scenarios.
    #[must_use]
    pub fn progression_edges(&self, id: &str) -> &[ProgressionEdge] {
        self.lookup(id)
            .map_or(&[], |scenario| scenario.progressions.as_slice())
    }

    /// Resolves an explicit fault label (scenario id or technical name,
    /// case-insensitive) to a catalog id.
    #[must_use]
    pub fn label_to_id(&self, label: &str) -> Option<&str> {
        self.labels
            .get(&label.trim().to_lowercase())
            .map(String::as_str)
    }

    /// Scenarios of a given severity tier, in insertion order.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&FaultScenario> {
        self.scenarios
            .iter()
            .filter(|scenario| scenario.severity == severity)
            .collect()
    }

    /// Healthy-operation envelope for the classifier's normal check.
    #[must_use]
    pub const fn normal_bounds(&self) -> &NormalBounds {
        &self.normal_bounds
    }

    /// Number of scenarios.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the catalog is empty. Never true for a validated catalog,
    /// which must at least contain NORMAL.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// The built-in catalog derived from the Grundfos CR pump
    /// troubleshooting manual.
    ///
    /// The data is statically known to satisfy every integrity invariant;
    /// a violation here is a programming error in this module and aborts at
    /// startup, which is exactly the load-time contract for a broken
    /// catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin_scenarios(), NormalBounds::default())
            .expect("built-in catalog must pass integrity validation")
    }
}

// ---------------------------------------------------------------------------
// Built-in scenario data
// ---------------------------------------------------------------------------

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|&item| item.to_owned()).collect()
}

#[allow(clippy::too_many_lines)]
fn builtin_scenarios() -> Vec<FaultScenario> {
    vec![
        // ── NORMAL ───────────────────────────────────────────────────────
        FaultScenario {
            id: NORMAL_ID.to_owned(),
            name: "Normal Operation".to_owned(),
            severity: Severity::Normal,
            category: FaultCategory::Normal,
            description: "Pump operating within normal parameters. All sensors indicate \
                          optimal values."
                .to_owned(),
            symptoms: strings(&[
                "Stable and low vibrations",
                "Normal motor temperature (< 70°C)",
                "Flow and pressure within spec",
                "Stable electrical current",
            ]),
            causes: strings(&["No anomaly detected"]),
            repair_action: "No action required. Continue regular monitoring.".to_owned(),
            maintenance_time: "N/A".to_owned(),
            manual_page: Some("General Operation".to_owned()),
            detection: None,
            progressions: Vec::new(),
        },
        // ── Level 1: LOW ─────────────────────────────────────────────────
        FaultScenario {
            id: "FILTER_CLOGGING".to_owned(),
            name: "Filter Clogging".to_owned(),
            severity: Severity::Low,
            category: FaultCategory::Hydraulic,
            description: "Inlet strainer is becoming clogged, slightly reducing flow rate."
                .to_owned(),
            symptoms: strings(&[
                "Slight flow reduction (-10%)",
                "Dropping inlet pressure",
                "Slightly modified pumping noise",
                "No notable temperature change",
            ]),
            causes: strings(&[
                "Debris accumulation in filter",
                "Non-compliant water quality",
                "Maintenance interval exceeded",
            ]),
            repair_action: "Clean or replace inlet strainer. Check water source quality."
                .to_owned(),
            maintenance_time: "15-30 minutes".to_owned(),
            manual_page: Some("Page 5 - Filter Maintenance".to_owned()),
            detection: Some(DetectionProfile::new(vec![
                DetectionCheck::new(Dim::Vibration, 1.5, 3.5),
                DetectionCheck::new(Dim::Pressure, 3.5, 4.5),
                DetectionCheck::new(Dim::Flow, 12.0, 14.0),
                DetectionCheck::new(Dim::Temperature, 60.0, 72.0),
            ])),
            progressions: vec![
                ProgressionEdge::new(
                    "CAVITATION",
                    65.0,
                    "2-4 hours",
                    "Continued operation with clogged filter reduces NPSH",
                    "Clean filter immediately. Check inlet pressure is above 0.5 bar",
                ),
                ProgressionEdge::new(
                    "IMPELLER_WEAR",
                    25.0,
                    "1-2 weeks",
                    "Debris passing through damages impeller",
                    "Install finer mesh strainer. Improve water source filtration",
                ),
                ProgressionEdge::new(
                    "OVERLOAD",
                    10.0,
                    "4-8 hours",
                    "Severe blockage causes motor strain",
                    "Stop pump and clear blockage before motor current rises >15A",
                ),
            ],
        },
        FaultScenario {
            id: "MINOR_VIBRATION".to_owned(),
            name: "Minor Vibration".to_owned(),
            severity: Severity::Low,
            category: FaultCategory::Mechanical,
            description: "Slight vibration increase detected. Monitoring recommended.".to_owned(),
            symptoms: strings(&[
                "Slightly elevated vibrations (3-4 mm/s)",
                "Otherwise stable operation",
                "No significant abnormal noise",
            ]),
            causes: strings(&[
                "Slight impeller imbalance",
                "Slightly loose fasteners",
                "Early seal wear",
            ]),
            repair_action: "Check fastener torque. Schedule an inspection.".to_owned(),
            maintenance_time: "30 minutes - 1 hour".to_owned(),
            manual_page: Some("Page 7 - Vibration Analysis".to_owned()),
            detection: Some(DetectionProfile::new(vec![
                DetectionCheck::new(Dim::Vibration, 3.0, 4.5),
                DetectionCheck::new(Dim::Temperature, 60.0, 72.0),
                DetectionCheck::new(Dim::Current, 9.0, 12.0),
            ])),
            progressions: vec![
                ProgressionEdge::new(
                    "BEARING_WEAR",
                    55.0,
                    "1-4 weeks",
                    "Unaddressed vibration accelerates bearing degradation",
                    "Check and tighten all mounting bolts. Verify alignment with dial indicator",
                ),
                ProgressionEdge::new(
                    "IMPELLER_WEAR",
                    30.0,
                    "2-6 weeks",
                    "Imbalance causes uneven impeller wear",
                    "Balance impeller if vibration >4mm/s. Check for debris on impeller",
                ),
                ProgressionEdge::new(
                    "SEAL_LEAK",
                    15.0,
                    "1-3 weeks",
                    "Vibration damages mechanical seal faces",
                    "Reduce vibration below 3mm/s. Inspect seal for wear marks",
                ),
            ],
        },
        // ── Level 2: MEDIUM ──────────────────────────────────────────────
        FaultScenario {
            id: "CAVITATION".to_owned(),
            name: "Cavitation".to_owned(),
            severity: Severity::Medium,
            category: FaultCategory::Hydraulic,
            description: "Vapor bubbles forming in fluid causing progressive impeller damage."
                .to_owned(),
            symptoms: strings(&[
                "Crackling/gravel-like noise",
                "Moderate vibrations (4-6 mm/s)",
                "Flow fluctuations",
                "Reduced hydraulic performance",
            ]),
            causes: strings(&[
                "Insufficient NPSH available",
                "Fluid temperature too high",
                "Inlet valve partially closed",
                "Excessive suction height",
            ]),
            repair_action: "Check NPSH. Fully open inlet valve. Reduce fluid temperature \
                            if possible."
                .to_owned(),
            maintenance_time: "1-2 hours".to_owned(),
            manual_page: Some("Page 8 - Cavitation Troubleshooting".to_owned()),
            detection: Some(DetectionProfile::new(vec![
                DetectionCheck::new(Dim::Vibration, 4.5, 6.5),
                // Low inlet pressure is the key cavitation indicator and
                // outweighs every other dimension for this scenario.
                DetectionCheck::new(Dim::Pressure, 1.5, 3.0).with_weight(3.0),
                DetectionCheck::new(Dim::Flow, 10.0, 14.0),
                DetectionCheck::new(Dim::Temperature, 60.0, 75.0),
            ])),
            progressions: vec![
                ProgressionEdge::new(
                    "IMPELLER_WEAR",
                    60.0,
                    "2-7 days",
                    "Bubble collapse erodes impeller material",
                    "Increase inlet pressure above 2 bar. Lower fluid temp below 60°C",
                ),
                ProgressionEdge::new(
                    "BEARING_WEAR",
                    25.0,
                    "1-3 weeks",
                    "Cavitation-induced vibration damages bearings",
                    "Eliminate cavitation noise. Keep vibration below 5mm/s",
                ),
                ProgressionEdge::new(
                    "SEAL_LEAK",
                    15.0,
                    "1-2 weeks",
                    "Pressure fluctuations damage seal",
                    "Stabilize inlet pressure. Check seal flush system is working",
                ),
            ],
        },
        FaultScenario {
            id: "IMPELLER_WEAR".to_owned(),
            name: "Impeller Wear".to_owned(),
            severity: Severity::Medium,
            category: FaultCategory::Mechanical,
            description: "Impeller showing wear signs, reducing pumping efficiency.".to_owned(),
            symptoms: strings(&[
                "Progressive flow reduction",
                "Increased vibrations",
                "Reduced efficiency",
                "Slightly increased power consumption",
            ]),
            causes: strings(&[
                "Normal age-related wear",
                "Abrasive particles in fluid",
                "Prolonged uncorrected cavitation",
            ]),
            repair_action: "Schedule impeller replacement. Check pumped fluid condition."
                .to_owned(),
            maintenance_time: "2-4 hours".to_owned(),
            manual_page: Some("Page 10 - Impeller Inspection".to_owned()),
            detection: Some(DetectionProfile::new(vec![
                DetectionCheck::new(Dim::Vibration, 4.0, 6.0),
                DetectionCheck::new(Dim::Flow, 10.0, 13.0),
                DetectionCheck::new(Dim::Current, 10.0, 13.0),
                DetectionCheck::new(Dim::Pressure, 3.5, 5.0),
                DetectionCheck::new(Dim::Temperature, 60.0, 75.0),
            ])),
            progressions: vec![
                ProgressionEdge::new(
                    "OVERLOAD",
                    50.0,
                    "1-3 days",
                    "Motor works harder to compensate for reduced efficiency",
                    "Monitor motor current closely. Replace impeller when current >12A \
                     continuously",
                ),
                ProgressionEdge::new(
                    "BEARING_WEAR",
                    35.0,
                    "1-2 weeks",
                    "Imbalanced worn impeller stresses bearings",
                    "Schedule impeller replacement within 1 week. Check bearing temperature daily",
                ),
                ProgressionEdge::new(
                    "PUMP_SEIZURE",
                    15.0,
                    "2-4 weeks",
                    "Severe wear causes impeller contact with casing",
                    "Stop pump if unusual noise heard. Inspect clearances before catastrophic \
                     failure",
                ),
            ],
        },
        FaultScenario {
            id: "SEAL_LEAK".to_owned(),
            name: "Seal Leak".to_owned(),
            severity: Severity::Medium,
            category: FaultCategory::Mechanical,
            description: "Mechanical seal has a leak. Short-term intervention required."
                .to_owned(),
            symptoms: strings(&[
                "Visible leak at seal location",
                "Slight pressure drop",
                "Moisture traces on motor",
                "Possible temperature increase",
            ]),
            causes: strings(&[
                "Normal seal wear",
                "Dry running",
                "Particles in fluid",
                "Misalignment",
            ]),
            repair_action: "Replace mechanical seal. Check alignment and fluid quality."
                .to_owned(),
            maintenance_time: "2-3 hours".to_owned(),
            manual_page: Some("Page 12 - Seal Replacement".to_owned()),
            detection: Some(DetectionProfile::new(vec![
                DetectionCheck::new(Dim::Pressure, 3.8, 5.0),
                DetectionCheck::new(Dim::Temperature, 70.0, 80.0),
                DetectionCheck::new(Dim::Vibration, 2.0, 4.0),
            ])),
            progressions: vec![
                ProgressionEdge::new(
                    "BEARING_WEAR",
                    45.0,
                    "3-7 days",
                    "Leaking fluid contaminates bearing lubricant",
                    "Replace seal immediately. Clean and re-grease bearings after seal change",
                ),
                ProgressionEdge::new(
                    "WINDING_DEFECT",
                    35.0,
                    "1-2 weeks",
                    "Moisture ingress damages motor insulation",
                    "Protect motor from leaking fluid. Check insulation resistance with megger",
                ),
                ProgressionEdge::new(
                    "PUMP_SEIZURE",
                    20.0,
                    "1-3 weeks",
                    "Total seal failure leads to dry running",
                    "Monitor seal leakage rate. Stop pump if leak becomes a stream",
                ),
            ],
        },
        // ── Level 3: HIGH ────────────────────────────────────────────────
        FaultScenario {
            id: "BEARING_WEAR".to_owned(),
            name: "Bearing Wear".to_owned(),
            severity: Severity::High,
            category: FaultCategory::Mechanical,
            description: "Bearings showing advanced wear signs. Urgent intervention recommended."
                .to_owned(),
            symptoms: strings(&[
                "High vibrations (6-8 mm/s)",
                "Rumbling or whistling noise",
                "Rising motor temperature",
                "Perceptible mechanical play",
            ]),
            causes: strings(&[
                "Natural bearing wear",
                "Insufficient lubrication",
                "Excessive radial load",
                "Lubricant contamination",
            ]),
            repair_action: "STOP THE PUMP as soon as possible. Replace bearings.".to_owned(),
            maintenance_time: "3-5 hours".to_owned(),
            manual_page: Some("Page 14 - Bearing Replacement".to_owned()),
            detection: Some(DetectionProfile::new(vec![
                DetectionCheck::new(Dim::Vibration, 6.5, 9.5),
                DetectionCheck::new(Dim::Temperature, 80.0, 95.0),
                DetectionCheck::new(Dim::Current, 10.0, 15.0),
                DetectionCheck::new(Dim::Pressure, 3.0, 5.5),
            ])),
            progressions: vec![
                ProgressionEdge::new(
                    "PUMP_SEIZURE",
                    70.0,
                    "2-24 hours",
                    "Complete bearing failure causes rotor seizure",
                    "STOP PUMP NOW. Do not operate with vibration >8mm/s or temp >85°C",
                ),
                ProgressionEdge::new(
                    "OVERLOAD",
                    30.0,
                    "1-4 hours",
                    "Increased friction causes motor overload",
                    "Monitor current closely. Stop if current exceeds 20A for >5 minutes",
                ),
            ],
        },
        FaultScenario {
            id: "WINDING_DEFECT".to_owned(),
            name: "Winding Defect".to_owned(),
            severity: Severity::High,
            category: FaultCategory::Electrical,
            description: "Defect detected in motor winding. Imminent failure risk.".to_owned(),
            symptoms: strings(&[
                "Unstable motor current",
                "High motor temperature",
                "Possible burning smell",
                "Electromagnetic vibrations",
            ]),
            causes: strings(&[
                "Partial short circuit in winding",
                "Deteriorated insulation",
                "Prolonged overheating",
                "Moisture in motor",
            ]),
            repair_action: "STOP IMMEDIATELY. Have motor rewound or replaced.".to_owned(),
            maintenance_time: "4-8 hours (rewinding) or replacement".to_owned(),
            manual_page: Some("Page 16 - Motor Troubleshooting".to_owned()),
            detection: Some(DetectionProfile::new(vec![
                DetectionCheck::new(Dim::Imbalance, 8.0, 25.0),
                DetectionCheck::new(Dim::Temperature, 85.0, 100.0),
                DetectionCheck::new(Dim::Current, 25.0, 35.0),
                DetectionCheck::new(Dim::Vibration, 5.5, 8.0),
            ])),
            progressions: vec![
                ProgressionEdge::new(
                    "OVERLOAD",
                    80.0,
                    "30 min - 2 hours",
                    "Short circuit increases current draw rapidly",
                    "STOP IMMEDIATELY. Test insulation resistance - must be >1 megohm",
                ),
                ProgressionEdge::new(
                    "PUMP_SEIZURE",
                    20.0,
                    "1-4 hours",
                    "Complete motor failure stops pump",
                    "Do not attempt restart. Motor requires professional inspection",
                ),
            ],
        },
        FaultScenario {
            id: "SUPPLY_FAULT".to_owned(),
            name: "Supply Fault".to_owned(),
            severity: Severity::High,
            category: FaultCategory::Electrical,
            description: "Electrical supply problem detected. Verification required.".to_owned(),
            symptoms: strings(&[
                "Unstable or incorrect voltage",
                "Unbalanced current between phases",
                "Difficult starts",
                "Reduced performance",
            ]),
            causes: strings(&[
                "Incorrect supply voltage",
                "Missing or weak phase",
                "Loose connections",
                "Variable frequency drive issue",
            ]),
            repair_action: "Check electrical supply. Inspect VFD. Tighten connections."
                .to_owned(),
            maintenance_time: "1-3 hours".to_owned(),
            manual_page: Some("Page 18 - Electrical Checks".to_owned()),
            detection: Some(DetectionProfile::new(vec![
                // Out of spec either low or high.
                DetectionCheck::new(Dim::Voltage, 340.0, 375.0).or_range(425.0, 460.0),
                DetectionCheck::new(Dim::Imbalance, 5.0, 20.0),
                DetectionCheck::new(Dim::Temperature, 70.0, 90.0),
            ])),
            progressions: vec![
                ProgressionEdge::new(
                    "WINDING_DEFECT",
                    50.0,
                    "2-8 hours",
                    "Phase imbalance causes uneven heating in windings",
                    "Check phase balance - must be within 2%. Repair supply before restart",
                ),
                ProgressionEdge::new(
                    "OVERLOAD",
                    35.0,
                    "1-4 hours",
                    "Single phasing causes remaining phases to overload",
                    "Verify all 3 phases present. Check fuses and contactors",
                ),
                ProgressionEdge::new(
                    "BEARING_WEAR",
                    15.0,
                    "1-2 weeks",
                    "Voltage fluctuations cause inconsistent motor torque",
                    "Install voltage stabilizer. Monitor power quality continuously",
                ),
            ],
        },
        // ── Level 4: CRITICAL ────────────────────────────────────────────
        FaultScenario {
            id: "OVERLOAD".to_owned(),
            name: "Overload".to_owned(),
            severity: Severity::Critical,
            category: FaultCategory::Electrical,
            description: "CRITICAL: Motor is overloaded. Immediate shutdown required to \
                          avoid permanent damage."
                .to_owned(),
            symptoms: strings(&[
                "Very high current (> 120% nominal)",
                "Critical motor temperature (> 90°C)",
                "Thermal breaker activated or imminent",
                "Risk of motor destruction",
            ]),
            causes: strings(&[
                "Partial mechanical blockage",
                "Impeller blocked by foreign object",
                "Discharge valve closed",
                "Fluid viscosity too high",
            ]),
            repair_action: "EMERGENCY STOP. Identify and remove blockage cause before restart."
                .to_owned(),
            maintenance_time: "Variable depending on cause".to_owned(),
            manual_page: Some("Page 20 - Emergency Procedures".to_owned()),
            detection: Some(DetectionProfile::new(vec![
                DetectionCheck::new(Dim::Current, 25.0, 45.0),
                DetectionCheck::new(Dim::Temperature, 90.0, 105.0),
                DetectionCheck::new(Dim::Vibration, 7.5, 11.0),
                DetectionCheck::new(Dim::Flow, 3.0, 10.0),
            ])),
            progressions: vec![
                ProgressionEdge::new(
                    "PUMP_SEIZURE",
                    85.0,
                    "5-30 minutes",
                    "Continued operation under overload destroys motor/bearings",
                    "IMMEDIATE SHUTDOWN. Remove blockage and verify free rotation before restart",
                ),
                ProgressionEdge::new(
                    "WINDING_DEFECT",
                    15.0,
                    "10-60 minutes",
                    "Overcurrent burns winding insulation",
                    "Reduce load immediately. Check thermal protection settings",
                ),
            ],
        },
        FaultScenario {
            id: "PUMP_SEIZURE".to_owned(),
            name: "Pump Seizure".to_owned(),
            severity: Severity::Critical,
            category: FaultCategory::Mechanical,
            description: "CRITICAL: Pump is blocked or seized. Immediate stop to avoid \
                          destruction."
                .to_owned(),
            symptoms: strings(&[
                "Complete flow stoppage",
                "Extremely high current",
                "Very high vibrations then stop",
                "Mechanical blocking noise",
            ]),
            causes: strings(&[
                "Foreign object blocking impeller",
                "Bearing seizure",
                "Fluid freezing",
                "Major mechanical failure",
            ]),
            repair_action: "DO NOT RESTART. Complete disassembly required for inspection \
                            and repair."
                .to_owned(),
            maintenance_time: "4-8 hours minimum".to_owned(),
            manual_page: Some("Page 22 - Major Failures".to_owned()),
            detection: Some(DetectionProfile::new(vec![
                DetectionCheck::new(Dim::Current, 35.0, 60.0),
                DetectionCheck::new(Dim::Temperature, 95.0, 120.0),
                DetectionCheck::new(Dim::Vibration, 9.0, 15.0),
                DetectionCheck::new(Dim::Flow, 0.0, 3.0),
                DetectionCheck::new(Dim::Pressure, 0.0, 2.0),
            ])),
            progressions: Vec::new(),
        },
    ]
}
