//! Headless scenarios against the full page.

use folio_site::{run_scenario, HeadlessReport, ReportStatus, RunOutcome, SiteConfig};
use pretty_assertions::assert_eq;

fn run(input: &str) -> RunOutcome {
    run_scenario(input, &SiteConfig::default()).unwrap()
}

#[test]
fn smoke_scenario_passes() {
    let outcome = run(r#"{
        "start": "2026-01-14T23:59:30",
        "steps": [
            {"type": "assert_exists", "id": "navbar"},
            {"type": "assert_date_label", "value": "Wed, Jan 14 2026"},
            {"type": "assert_class", "id": "navbar", "class": "bg-black"},
            {"type": "scroll", "y": 50},
            {"type": "assert_scrolled", "value": true},
            {"type": "assert_class", "id": "navbar", "class": "backdrop-blur-xl"},
            {"type": "toggle_theme"},
            {"type": "assert_dark", "value": true},
            {"type": "assert_class", "id": "resume-button", "class": "bg-white"},
            {"type": "wait", "ms": 60000},
            {"type": "assert_date_label", "value": "Thu, Jan 15 2026"},
            {"type": "assert_text_contains", "id": "date-badge", "value": "Jan 15"},
            {"type": "assert_text_contains", "id": "job-0", "value": "Senior ML Engineer"}
        ]
    }"#);

    assert!(!outcome.is_failed(), "{:?}", outcome.report());
    let report = outcome.report();
    assert_eq!(report.status, ReportStatus::Passed);
    assert_eq!(report.steps_run, 13);
    assert_eq!(report.elapsed_ms, 60_000);
    assert_eq!(report.elapsed_frames, 3_750);
}

#[test]
fn failing_assertion_is_reported() {
    let outcome = run(r#"{
        "steps": [
            {"type": "scroll", "y": 49},
            {"type": "assert_scrolled", "value": true}
        ]
    }"#);

    assert!(outcome.is_failed());
    assert_eq!(
        outcome.report(),
        &HeadlessReport {
            status: ReportStatus::Failed,
            failed_step_index: Some(1),
            assertion: Some("assert_scrolled".to_string()),
            message: Some("scrolled: expected true, got false".to_string()),
            steps_run: 2,
            elapsed_frames: 0,
            elapsed_ms: 0,
        }
    );
}

#[test]
fn unrelated_clicks_do_not_toggle_theme() {
    let outcome = run(r#"{
        "steps": [
            {"type": "click", "id": "resume-button"},
            {"type": "click", "id": "navbar"},
            {"type": "key_down", "key": "Enter"},
            {"type": "context_menu"},
            {"type": "tick", "frames": 10},
            {"type": "assert_dark", "value": false},
            {"type": "click", "id": "theme-toggle"},
            {"type": "assert_dark", "value": true}
        ]
    }"#);
    assert!(!outcome.is_failed(), "{:?}", outcome.report());
    assert_eq!(outcome.report().elapsed_ms, 160);
}

#[test]
fn scenario_page_config_overrides_caller() {
    let outcome = run(r#"{
        "page": {"variant": "classic", "suppress_devtools": true},
        "steps": [
            {"type": "scroll", "y": 20},
            {"type": "assert_scrolled", "value": true},
            {"type": "key_down", "key": "F12"},
            {"type": "key_down", "key": "u", "ctrl": true},
            {"type": "context_menu"},
            {"type": "assert_suppressed", "count": 3}
        ]
    }"#);
    assert!(!outcome.is_failed(), "{:?}", outcome.report());
}

#[test]
fn missing_element_fails_with_message() {
    let outcome = run(r#"{"steps": [{"type": "assert_exists", "id": "blog"}]}"#);
    let report = outcome.report();
    assert_eq!(report.assertion.as_deref(), Some("assert_exists"));
    assert_eq!(report.message.as_deref(), Some("blog: element not found"));
}
