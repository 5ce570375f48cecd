//! Ordered fault severity tiers.
//!
//! Severity drives two distinct mechanisms:
//!
//! - **Transition legality**: the state machine only permits moves to equal
//!   or greater severity, with `Normal` always re-enterable (repair).
//! - **Classification priority**: higher tiers win close calls in the
//!   classifier, so an ambiguous reading is flagged as the more dangerous
//!   interpretation rather than the more benign one.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity tier of a fault scenario.
///
/// Total order: `Normal < Low < Medium < High < Critical`. The derived
/// `Ord` follows declaration order and is relied on by the transition rules.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Healthy operation, no fault active.
    #[default]
    Normal,
    /// Light warning; monitoring recommended.
    Low,
    /// Moderate issue; planned intervention.
    Medium,
    /// Serious issue; urgent intervention.
    High,
    /// Critical fault; immediate stop required.
    Critical,
}

impl Severity {
    /// All tiers in ascending order.
    pub const ALL: [Self; 5] = [
        Self::Normal,
        Self::Low,
        Self::Medium,
        Self::High,
        Self::Critical,
    ];

    /// Numeric level, `Normal` = 0 through `Critical` = 4.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    /// Classifier priority tier (1..=4).
    ///
    /// Used for the priority boost and the priority-first candidate sort.
    /// `Normal` shares tier 1 with `Low`; it never competes in weighted
    /// scoring, so the value only exists to keep the mapping total.
    #[must_use]
    pub const fn priority_tier(self) -> u8 {
        match self {
            Self::Normal | Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    /// Whether this is the healthy tier.
    #[must_use]
    pub const fn is_normal(self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Whether this is the critical tier.
    #[must_use]
    pub const fn is_critical(self) -> bool {
        matches!(self, Self::Critical)
    }

    /// Human-readable tier label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_is_totally_ordered() {
        assert!(Severity::Normal < Severity::Low);
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn levels_match_declaration_order() {
        for (i, severity) in Severity::ALL.iter().enumerate() {
            assert_eq!(usize::from(severity.level()), i);
        }
    }

    #[test]
    fn priority_tiers_span_one_to_four() {
        assert_eq!(Severity::Normal.priority_tier(), 1);
        assert_eq!(Severity::Low.priority_tier(), 1);
        assert_eq!(Severity::Medium.priority_tier(), 2);
        assert_eq!(Severity::High.priority_tier(), 3);
        assert_eq!(Severity::Critical.priority_tier(), 4);
    }

    #[test]
    fn severity_display() {
        assert_eq!(Severity::Normal.to_string(), "NORMAL");
        assert_eq!(Severity::Critical.to_string(), "CRITICAL");
    }

    #[test]
    fn severity_serde_roundtrip() {
        for severity in Severity::ALL {
            let json = serde_json::to_string(&severity).unwrap();
            let decoded: Severity = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, severity);
        }
    }

    #[test]
    fn severity_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"critical\""
        );
    }
}
