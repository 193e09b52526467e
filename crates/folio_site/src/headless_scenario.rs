//! Scenario definition for headless page runs.

use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::path::Path;

/// Instant a scenario starts at when it does not name one
pub const DEFAULT_START: &str = "2026-01-14T09:00:00";

const START_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Sequence of inputs and checks against one mounted page.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    /// Wall-clock instant at mount, `YYYY-MM-DDTHH:MM:SS`
    #[serde(default)]
    pub start: Option<String>,
    /// Page config for this run; the caller's config is used when absent
    #[serde(default)]
    pub page: Option<SiteConfig>,
    pub steps: Vec<ScenarioStep>,
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(SiteError::Scenario)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| SiteError::io(path, e))?;
        Self::from_json(&raw)
    }

    pub fn start_instant(&self) -> Result<NaiveDateTime> {
        let raw = self.start.as_deref().unwrap_or(DEFAULT_START);
        NaiveDateTime::parse_from_str(raw, START_FORMAT).map_err(|source| SiteError::InvalidStart {
            value: raw.to_string(),
            source,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    // Input
    Scroll { y: f32 },
    Click { id: String },
    ToggleTheme,
    KeyDown {
        key: String,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        alt: bool,
        #[serde(default)]
        meta: bool,
    },
    ContextMenu,

    // Time
    Wait { ms: u64 },
    Tick { frames: u32 },

    // Checks
    AssertExists { id: String },
    AssertTextContains { id: String, value: String },
    AssertClass { id: String, class: String },
    AssertScrolled { value: bool },
    AssertDark { value: bool },
    AssertDateLabel { value: String },
    AssertSuppressed { count: u32 },
}

impl ScenarioStep {
    /// Name used in reports for assertion steps
    pub fn assertion_name(&self) -> Option<&'static str> {
        match self {
            ScenarioStep::AssertExists { .. } => Some("assert_exists"),
            ScenarioStep::AssertTextContains { .. } => Some("assert_text_contains"),
            ScenarioStep::AssertClass { .. } => Some("assert_class"),
            ScenarioStep::AssertScrolled { .. } => Some("assert_scrolled"),
            ScenarioStep::AssertDark { .. } => Some("assert_dark"),
            ScenarioStep::AssertDateLabel { .. } => Some("assert_date_label"),
            ScenarioStep::AssertSuppressed { .. } => Some("assert_suppressed"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_steps() {
        let scenario = HeadlessScenario::from_json(
            r#"{"steps": [
                {"type": "scroll", "y": 64},
                {"type": "toggle_theme"},
                {"type": "key_down", "key": "I", "ctrl": true, "shift": true},
                {"type": "assert_dark", "value": true}
            ]}"#,
        )
        .unwrap();
        assert_eq!(scenario.steps.len(), 4);
        assert!(matches!(
            scenario.steps[2],
            ScenarioStep::KeyDown { ctrl: true, shift: true, alt: false, meta: false, .. }
        ));
        assert_eq!(scenario.steps[3].assertion_name(), Some("assert_dark"));
    }

    #[test]
    fn default_start_is_fixed() {
        let scenario = HeadlessScenario::from_json(r#"{"steps": []}"#).unwrap();
        assert_eq!(
            scenario.start_instant().unwrap().to_string(),
            "2026-01-14 09:00:00"
        );
    }

    #[test]
    fn bad_start_is_reported() {
        let scenario =
            HeadlessScenario::from_json(r#"{"start": "yesterday", "steps": []}"#).unwrap();
        assert!(matches!(
            scenario.start_instant(),
            Err(SiteError::InvalidStart { .. })
        ));
    }

    #[test]
    fn unknown_step_is_rejected() {
        let err = HeadlessScenario::from_json(r#"{"steps": [{"type": "fly"}]}"#).unwrap_err();
        assert!(matches!(err, SiteError::Scenario(_)));
    }
}
