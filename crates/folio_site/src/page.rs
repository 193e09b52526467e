//! Page composition
//!
//! [`Page`] owns every controller for one mounted page and the event and timer
//! plumbing that feeds them. Hosts push input through [`Page::dispatch`] and
//! time through [`Page::advance`], then take a [`RenderSnapshot`] to render.
//! Dropping the page (or calling [`Page::unmount`]) releases every listener
//! and interval.

use crate::components;
use crate::config::SiteConfig;
use crate::document::{self, DocumentOptions};
use crate::error::Result;
use crate::snapshot::RenderSnapshot;
use crate::view::Node;
use folio_animation::{AnimationId, AnimationScheduler, MarqueeAnimator, MarqueeConfig};
use folio_core::{
    clock::REFRESH_INTERVAL, Clock, ClockFormatter, DevtoolsGuard, Event, EventDispatcher,
    ScrollObserver, TimerQueue,
};
use folio_theme::{ColorScheme, ThemeController, THEME_TOGGLE_ID};
use std::rc::Rc;
use std::time::Duration;

pub struct Page {
    config: SiteConfig,
    dispatcher: EventDispatcher,
    timers: TimerQueue,
    scroll: ScrollObserver,
    theme: ThemeController,
    date: ClockFormatter,
    marquee: MarqueeAnimator,
    scheduler: AnimationScheduler,
    marquee_id: AnimationId,
    guard: Option<DevtoolsGuard>,
    refresh: Duration,
}

impl Page {
    pub fn mount(config: SiteConfig, clock: Rc<dyn Clock>) -> Result<Self> {
        Self::mount_with_refresh(config, clock, REFRESH_INTERVAL)
    }

    /// Mount with a custom date-label refresh period
    pub fn mount_with_refresh(
        config: SiteConfig,
        clock: Rc<dyn Clock>,
        refresh: Duration,
    ) -> Result<Self> {
        let marquee = MarqueeAnimator::new(MarqueeConfig {
            copies: config.copies(),
            duration_ms: config.marquee_duration_ms,
        })?;

        let dispatcher = EventDispatcher::new();
        let timers = TimerQueue::new();

        let scroll = ScrollObserver::mount(&dispatcher, config.threshold());
        let theme = ThemeController::mount(&dispatcher, config.default_scheme, THEME_TOGGLE_ID);
        let date = ClockFormatter::mount_with_interval(clock, &timers, refresh);
        let guard = config
            .suppress_devtools
            .then(|| DevtoolsGuard::mount(&dispatcher));

        let mut scheduler = AnimationScheduler::new();
        let marquee_id = scheduler.add(marquee.animation());

        tracing::debug!(
            variant = ?config.variant,
            threshold = config.threshold(),
            copies = marquee.copies(),
            "page mounted"
        );

        Ok(Self {
            config,
            dispatcher,
            timers,
            scroll,
            theme,
            date,
            marquee,
            scheduler,
            marquee_id,
            guard,
            refresh,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Route one input event to the controllers; `false` when a listener
    /// prevented the default action
    pub fn dispatch(&self, event: &mut Event) -> bool {
        self.dispatcher.dispatch(event)
    }

    /// Move time forward: fires due intervals and ticks animations
    pub fn advance(&mut self, dt: Duration) {
        let fired = self.timers.advance(dt);
        self.scheduler.tick(dt.as_nanos() as f64 / 1_000_000.0);
        tracing::trace!(
            dt_ms = dt.as_millis() as u64,
            fired,
            marquee = self.marquee_offset_percent(),
            "page advanced"
        );
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll.is_past_threshold()
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn scheme(&self) -> ColorScheme {
        self.theme.scheme()
    }

    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    pub fn date_label(&self) -> String {
        self.date.label()
    }

    pub fn marquee(&self) -> &MarqueeAnimator {
        &self.marquee
    }

    pub fn marquee_offset_percent(&self) -> f32 {
        self.scheduler.value(self.marquee_id).unwrap_or(0.0)
    }

    /// Logical milliseconds since mount
    pub fn elapsed_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    /// Events swallowed by the devtools guard (0 when it is disabled)
    pub fn suppressed_events(&self) -> u32 {
        self.guard.as_ref().map_or(0, DevtoolsGuard::suppressed)
    }

    /// Registered event listeners across all controllers
    pub fn listener_count(&self) -> usize {
        self.dispatcher.total_listeners()
    }

    pub fn active_intervals(&self) -> usize {
        self.timers.active_intervals()
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            scrolled: self.is_scrolled(),
            dark: self.is_dark(),
            date_label: self.date_label(),
            marquee_offset_percent: self.marquee_offset_percent(),
            marquee_copies: self.marquee.copies(),
        }
    }

    pub fn render(&self) -> Node {
        components::render(&self.snapshot())
    }

    pub fn render_document(&self) -> String {
        document::render_document(
            &self.snapshot(),
            &self.marquee,
            DocumentOptions {
                suppress_devtools: self.config.suppress_devtools,
                scroll_threshold: self.config.threshold(),
                date_refresh: self.refresh,
            },
        )
    }

    /// Tear down every controller; equivalent to dropping the page
    pub fn unmount(self) {
        tracing::debug!("page unmounted");
    }
}
