//! Telemetry sample types consumed by the classifier.
//!
//! A [`TelemetrySample`] is a point-in-time snapshot of the monitored sensor
//! dimensions, produced once per sampling interval by an external simulator
//! or bridge. Samples are immutable values; the engine never owns or mutates
//! the telemetry stream.
//!
//! Sensor dimensions are a closed, typed set ([`SensorDimension`]) rather
//! than free-form string keys, so a misspelled dimension is a compile error
//! instead of a silent classification miss.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Sensor dimensions
// ---------------------------------------------------------------------------

/// The monitored sensor dimensions of a pump telemetry sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorDimension {
    /// Casing vibration, mm/s RMS.
    Vibration,
    /// Motor winding temperature, °C.
    Temperature,
    /// Average phase current, A.
    Current,
    /// Phase-current imbalance, percent of the phase average.
    Imbalance,
    /// Supply voltage, V.
    Voltage,
    /// Inlet pressure, bar.
    Pressure,
    /// Flow rate, m³/h.
    Flow,
}

impl SensorDimension {
    /// All dimensions, in catalog-declaration order.
    pub const ALL: [Self; 7] = [
        Self::Vibration,
        Self::Temperature,
        Self::Current,
        Self::Imbalance,
        Self::Voltage,
        Self::Pressure,
        Self::Flow,
    ];

    /// Default full-match weight for this dimension.
    ///
    /// Vibration and temperature are the strongest discriminators between
    /// mechanical/thermal fault families and weigh highest; current and
    /// phase imbalance identify the electrical family; voltage, pressure,
    /// and flow are supporting evidence.
    #[must_use]
    pub const fn default_weight(self) -> f64 {
        match self {
            Self::Vibration | Self::Temperature => 2.0,
            Self::Current | Self::Imbalance => 1.5,
            Self::Voltage => 1.2,
            Self::Pressure | Self::Flow => 1.0,
        }
    }

    /// Default partial-credit fraction awarded inside the tolerance band.
    #[must_use]
    pub const fn default_partial_credit(self) -> f64 {
        match self {
            Self::Vibration | Self::Pressure => 0.4,
            Self::Imbalance => 0.35,
            Self::Temperature | Self::Flow => 0.3,
            Self::Current | Self::Voltage => 0.25,
        }
    }

    /// Default fractional tolerance applied to range bounds.
    ///
    /// Temperature ranges are tight in the catalog, so the band is narrower.
    #[must_use]
    pub const fn default_tolerance(self) -> f64 {
        match self {
            Self::Temperature => 0.05,
            _ => 0.10,
        }
    }

    /// Stable lowercase name, matching the serde representation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vibration => "vibration",
            Self::Temperature => "temperature",
            Self::Current => "current",
            Self::Imbalance => "imbalance",
            Self::Voltage => "voltage",
            Self::Pressure => "pressure",
            Self::Flow => "flow",
        }
    }
}

impl fmt::Display for SensorDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Phase currents
// ---------------------------------------------------------------------------

/// Instantaneous current on the three supply phases, in amperes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PhaseCurrents {
    pub l1: f64,
    pub l2: f64,
    pub l3: f64,
}

impl PhaseCurrents {
    #[must_use]
    pub const fn new(l1: f64, l2: f64, l3: f64) -> Self {
        Self { l1, l2, l3 }
    }

    /// Balanced currents, the same value on every phase.
    #[must_use]
    pub const fn balanced(amps: f64) -> Self {
        Self::new(amps, amps, amps)
    }

    /// Mean of the three phase currents.
    #[must_use]
    pub fn average(&self) -> f64 {
        (self.l1 + self.l2 + self.l3) / 3.0
    }

    /// Maximum deviation from the phase average, as a percentage of it.
    ///
    /// Returns `None` when the average is zero (motor stopped or sensors
    /// dark); the imbalance is undefined there and callers must treat the
    /// dimension as absent rather than divide by zero.
    #[must_use]
    pub fn imbalance_pct(&self) -> Option<f64> {
        let avg = self.average();
        if avg == 0.0 {
            return None;
        }
        let max_dev = [self.l1, self.l2, self.l3]
            .into_iter()
            .map(|phase| (phase - avg).abs())
            .fold(0.0_f64, f64::max);
        Some(max_dev / avg * 100.0)
    }
}

// ---------------------------------------------------------------------------
// Telemetry sample
// ---------------------------------------------------------------------------

/// One telemetry snapshot from the pump.
///
/// `fault_label` carries the explicit fault identity when an upstream actor
/// directly commanded a fault (operator injection), as opposed to sensor
/// values being merely consistent with one. The classifier treats a known
/// non-normal label as authoritative over sensor inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySample {
    /// Casing vibration, mm/s RMS.
    pub vibration_mm_s: f64,
    /// Motor winding temperature, °C.
    pub motor_temp_c: f64,
    /// Supply voltage, V.
    pub voltage_v: f64,
    /// Inlet pressure, bar.
    pub pressure_bar: f64,
    /// Flow rate, m³/h.
    pub flow_m3_h: f64,
    /// Per-phase motor currents.
    pub currents: PhaseCurrents,
    /// Explicit fault label from the upstream bridge, if any.
    ///
    /// Arrives as a display string (e.g. `"Bearing Wear"`); resolution to a
    /// scenario id is the catalog's job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault_label: Option<String>,
}

impl TelemetrySample {
    /// Creates a sample with balanced phase currents and no explicit label.
    #[must_use]
    pub fn new(
        vibration_mm_s: f64,
        motor_temp_c: f64,
        current_avg_a: f64,
        voltage_v: f64,
        pressure_bar: f64,
        flow_m3_h: f64,
    ) -> Self {
        Self {
            vibration_mm_s,
            motor_temp_c,
            voltage_v,
            pressure_bar,
            flow_m3_h,
            currents: PhaseCurrents::balanced(current_avg_a),
            fault_label: None,
        }
    }

    /// Sets the explicit fault label.
    #[must_use]
    pub fn with_fault_label(mut self, label: impl Into<String>) -> Self {
        self.fault_label = Some(label.into());
        self
    }

    /// Sets per-phase currents.
    #[must_use]
    pub const fn with_currents(mut self, currents: PhaseCurrents) -> Self {
        self.currents = currents;
        self
    }

    /// Resolves a typed dimension to its value in this sample.
    ///
    /// `None` means the dimension is unavailable (currently only imbalance,
    /// when the phase average is zero). Absent dimensions count as "did not
    /// match" during scoring, never as an error.
    #[must_use]
    pub fn dimension(&self, dimension: SensorDimension) -> Option<f64> {
        match dimension {
            SensorDimension::Vibration => Some(self.vibration_mm_s),
            SensorDimension::Temperature => Some(self.motor_temp_c),
            SensorDimension::Current => Some(self.currents.average()),
            SensorDimension::Imbalance => self.currents.imbalance_pct(),
            SensorDimension::Voltage => Some(self.voltage_v),
            SensorDimension::Pressure => Some(self.pressure_bar),
            SensorDimension::Flow => Some(self.flow_m3_h),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_average() {
        let currents = PhaseCurrents::new(10.0, 11.0, 12.0);
        assert!((currents.average() - 11.0).abs() < 1e-9);
    }

    #[test]
    fn imbalance_of_balanced_phases_is_zero() {
        let currents = PhaseCurrents::balanced(10.0);
        assert_eq!(currents.imbalance_pct(), Some(0.0));
    }

    #[test]
    fn imbalance_undefined_for_zero_average() {
        let currents = PhaseCurrents::balanced(0.0);
        assert_eq!(currents.imbalance_pct(), None);
    }

    #[test]
    fn imbalance_uses_worst_phase() {
        // avg = 10, worst deviation = 2 on l3 -> 20%
        let currents = PhaseCurrents::new(9.0, 9.0, 12.0);
        let imbalance = currents.imbalance_pct().unwrap();
        assert!((imbalance - 20.0).abs() < 1e-9);
    }

    #[test]
    fn dimension_resolution_covers_all_dimensions() {
        let sample = TelemetrySample::new(1.8, 65.0, 10.0, 400.0, 5.0, 15.0);
        for dimension in SensorDimension::ALL {
            assert!(sample.dimension(dimension).is_some(), "{dimension}");
        }
    }

    #[test]
    fn missing_imbalance_resolves_to_none() {
        let sample =
            TelemetrySample::new(1.8, 65.0, 0.0, 400.0, 5.0, 15.0);
        assert_eq!(sample.dimension(SensorDimension::Imbalance), None);
        assert_eq!(sample.dimension(SensorDimension::Current), Some(0.0));
    }

    #[test]
    fn sample_serde_roundtrip() {
        let sample = TelemetrySample::new(5.8, 68.0, 11.0, 400.0, 2.0, 12.0)
            .with_fault_label("Cavitation");
        let json = serde_json::to_string(&sample).unwrap();
        let decoded: TelemetrySample = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, sample);
    }

    #[test]
    fn fault_label_omitted_from_json_when_absent() {
        let sample = TelemetrySample::new(1.8, 65.0, 10.0, 400.0, 5.0, 15.0);
        let json = serde_json::to_string(&sample).unwrap();
        assert!(!json.contains("fault_label"));
    }
}
