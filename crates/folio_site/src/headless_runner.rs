//! Scenario runner that drives a mounted page without a browser.
//!
//! Time is deterministic: the page is mounted against a [`ManualClock`] set to
//! the scenario start, and every frame advances both the clock and the page by
//! the same tick.

use crate::config::SiteConfig;
use crate::error::Result;
use crate::headless_assert::{
    evaluate_assert_class, evaluate_assert_exists, evaluate_assert_text_contains, evaluate_value,
    AssertionResult,
};
use crate::headless_report::HeadlessReport;
use crate::headless_scenario::{HeadlessScenario, ScenarioStep};
use crate::page::Page;
use folio_core::{Event, KeyCode, ManualClock, Modifiers};
use folio_theme::THEME_TOGGLE_ID;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct HeadlessRunConfig {
    /// Logical milliseconds between frames.
    pub tick_ms: u64,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self { tick_ms: 16 }
    }
}

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: HeadlessReport },
    Failed { report: HeadlessReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HeadlessReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Parse and run scenario JSON against a fresh page.
pub fn run_scenario(input: &str, config: &SiteConfig) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    run_loaded_scenario(&scenario, config, HeadlessRunConfig::default())
}

/// Run a pre-loaded scenario against a fresh page.
pub fn run_loaded_scenario(
    scenario: &HeadlessScenario,
    config: &SiteConfig,
    run_cfg: HeadlessRunConfig,
) -> Result<RunOutcome> {
    let clock = ManualClock::at(scenario.start_instant()?);
    let page_config = scenario.page.clone().unwrap_or_else(|| config.clone());
    let mut run = Run {
        page: Page::mount(page_config, Rc::new(clock.clone()))?,
        clock,
        tick: Duration::from_millis(run_cfg.tick_ms.max(1)),
        elapsed_frames: 0,
        elapsed_ms: 0,
    };

    for (step_index, step) in scenario.steps.iter().enumerate() {
        tracing::debug!(step_index, ?step, "scenario step");
        if let AssertionResult::Failed { message, .. } = run.step(step) {
            let assertion = step.assertion_name().unwrap_or("step");
            tracing::debug!(step_index, assertion, %message, "scenario failed");
            let report = HeadlessReport::failed(
                assertion,
                step_index,
                message,
                run.elapsed_frames,
                run.elapsed_ms,
            );
            return Ok(RunOutcome::Failed { report });
        }
    }

    Ok(RunOutcome::Passed {
        report: HeadlessReport::passed(scenario.steps.len(), run.elapsed_frames, run.elapsed_ms),
    })
}

struct Run {
    page: Page,
    clock: ManualClock,
    tick: Duration,
    elapsed_frames: u64,
    elapsed_ms: u64,
}

impl Run {
    fn step(&mut self, step: &ScenarioStep) -> AssertionResult {
        match step {
            ScenarioStep::Scroll { y } => self.input(Event::scroll(*y)),
            ScenarioStep::Click { id } => self.input(Event::click(id.as_str())),
            ScenarioStep::ToggleTheme => self.input(Event::click(THEME_TOGGLE_ID)),
            ScenarioStep::KeyDown {
                key,
                shift,
                ctrl,
                alt,
                meta,
            } => self.input(Event::key_down(
                KeyCode::from_name(key),
                Modifiers::new(*shift, *ctrl, *alt, *meta),
            )),
            ScenarioStep::ContextMenu => self.input(Event::context_menu()),
            ScenarioStep::Wait { ms } => {
                let mut remaining = Duration::from_millis(*ms);
                while !remaining.is_zero() {
                    let dt = remaining.min(self.tick);
                    self.frame(dt);
                    remaining -= dt;
                }
                AssertionResult::Passed
            }
            ScenarioStep::Tick { frames } => {
                for _ in 0..*frames {
                    self.frame(self.tick);
                }
                AssertionResult::Passed
            }
            ScenarioStep::AssertExists { id } => evaluate_assert_exists(id, &self.page.render()),
            ScenarioStep::AssertTextContains { id, value } => {
                evaluate_assert_text_contains(id, value, &self.page.render())
            }
            ScenarioStep::AssertClass { id, class } => {
                evaluate_assert_class(id, class, &self.page.render())
            }
            ScenarioStep::AssertScrolled { value } => {
                evaluate_value("scrolled", value, &self.page.is_scrolled())
            }
            ScenarioStep::AssertDark { value } => {
                evaluate_value("dark", value, &self.page.is_dark())
            }
            ScenarioStep::AssertDateLabel { value } => {
                evaluate_value("date_label", value, &self.page.date_label())
            }
            ScenarioStep::AssertSuppressed { count } => {
                evaluate_value("suppressed", count, &self.page.suppressed_events())
            }
        }
    }

    fn input(&self, event: Event) -> AssertionResult {
        let mut event = event.with_timestamp(self.elapsed_ms);
        self.page.dispatch(&mut event);
        AssertionResult::Passed
    }

    fn frame(&mut self, dt: Duration) {
        self.clock.advance(dt);
        self.page.advance(dt);
        self.elapsed_frames = self.elapsed_frames.saturating_add(1);
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt.as_millis() as u64);
    }
}
