//! Tracing conventions for faultwatch.
//!
//! The engine emits structured events and spans via `tracing`; consumers
//! bring their own subscriber. This module centralizes the target prefix,
//! span names, and field names so logs stay queryable across components.
//!
//! Filter faultwatch logs with:
//! ```text
//! RUST_LOG=faultwatch=debug
//! ```

use tracing::Level;

/// Target prefix used by all faultwatch tracing spans and events.
pub const TARGET_PREFIX: &str = "faultwatch";

/// Standard tracing span names used across the engine.
pub mod span_names {
    /// One classification of a telemetry sample.
    pub const CLASSIFY: &str = "faultwatch::classify";
    /// One committed or rejected state transition.
    pub const TRANSITION: &str = "faultwatch::transition";
    /// Direct-children progression forecast.
    pub const FORECAST: &str = "faultwatch::forecast";
    /// Depth-bounded forecast tree expansion.
    pub const FORECAST_TREE: &str = "faultwatch::forecast_tree";
}

/// Standard structured field names used in tracing events.
pub mod field_names {
    pub const SCENARIO_ID: &str = "scenario_id";
    pub const CONFIDENCE: &str = "confidence";
    pub const SOURCE: &str = "source";
    pub const FULL_MATCHES: &str = "full_matches";
    pub const CHECK_COUNT: &str = "check_count";
    pub const FROM_STATE: &str = "from_state";
    pub const TO_STATE: &str = "to_state";
    pub const ALLOWED: &str = "allowed";
    pub const EDGE_COUNT: &str = "edge_count";
    pub const MAX_DEPTH: &str = "max_depth";
}

/// Parse a log level string (case-insensitive).
///
/// Recognized values: `trace`, `debug`, `info`, `warn`, `error`.
/// Returns `None` for unrecognized strings.
#[must_use]
pub fn parse_level(s: &str) -> Option<Level> {
    match s.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Returns the recommended `tracing::Level` for the given environment.
///
/// Checks `FAULTWATCH_LOG_LEVEL` first, then falls back to the provided
/// default.
#[must_use]
pub fn level_from_env(default: Level) -> Level {
    std::env::var("FAULTWATCH_LOG_LEVEL")
        .ok()
        .and_then(|s| parse_level(&s))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_prefix_is_faultwatch() {
        assert_eq!(TARGET_PREFIX, "faultwatch");
    }

    #[test]
    fn span_names_are_consistent() {
        assert!(span_names::CLASSIFY.starts_with("faultwatch::"));
        assert!(span_names::TRANSITION.starts_with("faultwatch::"));
        assert!(span_names::FORECAST.starts_with("faultwatch::"));
        assert!(span_names::FORECAST_TREE.starts_with("faultwatch::"));
    }

    #[test]
    fn parse_level_recognizes_valid_levels() {
        assert_eq!(parse_level("trace"), Some(Level::TRACE));
        assert_eq!(parse_level("debug"), Some(Level::DEBUG));
        assert_eq!(parse_level("info"), Some(Level::INFO));
        assert_eq!(parse_level("warn"), Some(Level::WARN));
        assert_eq!(parse_level("error"), Some(Level::ERROR));
    }

    #[test]
    fn parse_level_case_insensitive() {
        assert_eq!(parse_level("WARN"), Some(Level::WARN));
        assert_eq!(parse_level("Info"), Some(Level::INFO));
    }

    #[test]
    fn parse_level_returns_none_for_invalid() {
        assert_eq!(parse_level("verbose"), None);
        assert_eq!(parse_level(""), None);
    }
}
