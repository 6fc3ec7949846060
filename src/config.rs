//! Construction-time configuration for the paging engine.
//!
//! Covers the tunable gesture feel: the page shown at startup, the fling
//! velocity threshold, and the snap animation's timing curve. Configs can be
//! built in code, loaded from JSON, or picked from the built-in presets.

use std::collections::HashMap;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// Default fling threshold in px/s.
pub const DEFAULT_SNAP_VELOCITY: f32 = 600.0;

/// Tunable paging behavior, fixed at engine construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    /// Page index shown before any gesture (clamped once panes exist).
    pub initial_page: usize,
    /// Release velocity, in px/s, above which a drag becomes a fling.
    pub snap_velocity: f32,
    /// Timing curve for the snap animation.
    pub easing: Easing,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            initial_page: 0,
            snap_velocity: DEFAULT_SNAP_VELOCITY,
            easing: Easing::default(),
        }
    }
}

/// Built-in gesture-feel presets, keyed by name.
static PRESETS: Lazy<HashMap<&'static str, PagerConfig>> = Lazy::new(|| {
    let mut presets = HashMap::new();
    presets.insert("default", PagerConfig::default());
    presets.insert(
        "snappy",
        PagerConfig {
            snap_velocity: 350.0,
            easing: Easing::EaseOut,
            ..PagerConfig::default()
        },
    );
    presets.insert(
        "gentle",
        PagerConfig {
            snap_velocity: 900.0,
            easing: Easing::EaseInOut,
            ..PagerConfig::default()
        },
    );
    presets
});

impl PagerConfig {
    /// Parses a config from a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse pager config JSON")
    }

    /// Looks up a built-in preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        PRESETS.get(name).copied()
    }

    /// Names of all built-in presets, sorted.
    pub fn preset_names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = PRESETS.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = PagerConfig::default();
        assert_eq!(config.initial_page, 0);
        assert_eq!(config.snap_velocity, 600.0);
        assert_eq!(config.easing, Easing::EaseOut);
    }

    #[test]
    fn parses_partial_json_with_defaults() {
        let config = PagerConfig::from_json_str(r#"{"snap_velocity": 450.0}"#).unwrap();
        assert_eq!(config.snap_velocity, 450.0);
        assert_eq!(config.initial_page, 0);
    }

    #[test]
    fn parses_full_json() {
        let json = r#"{"initial_page": 2, "snap_velocity": 800.0, "easing": "ease_in_out"}"#;
        let config = PagerConfig::from_json_str(json).unwrap();
        assert_eq!(config.initial_page, 2);
        assert_eq!(config.easing, Easing::EaseInOut);
    }

    #[test]
    fn malformed_json_reports_context() {
        let err = PagerConfig::from_json_str("{not json").unwrap_err();
        assert!(err.to_string().contains("pager config"));
    }

    #[test]
    fn presets_are_resolvable_by_listed_name() {
        for name in PagerConfig::preset_names() {
            assert!(PagerConfig::preset(name).is_some(), "missing preset {name}");
        }
        assert!(PagerConfig::preset("nonexistent").is_none());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = PagerConfig {
            initial_page: 1,
            snap_velocity: 720.0,
            easing: Easing::Linear,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(PagerConfig::from_json_str(&json).unwrap(), config);
    }
}
