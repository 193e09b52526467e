//! Live date label
//!
//! The navbar shows the current date as `Wed, Jan 14 2026`. The label is
//! computed on mount and then once per refresh interval; wall-clock time comes
//! from a [`Clock`] so headless runs can pin it.

use crate::state::State;
use crate::subscription::Subscription;
use crate::timer::TimerQueue;
use chrono::{Local, NaiveDateTime};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// en-US short weekday, short month, unpadded day, full year
pub const DATE_LABEL_FORMAT: &str = "%a, %b %-d %Y";

/// How often the label is recomputed
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Format a wall-clock instant as the navbar date label
pub fn format_date_label(instant: NaiveDateTime) -> String {
    instant.format(DATE_LABEL_FORMAT).to_string()
}

/// Source of wall-clock time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The host's local wall clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to
///
/// Clones share the same instant.
#[derive(Clone, Debug)]
pub struct ManualClock {
    instant: Rc<Cell<NaiveDateTime>>,
}

impl ManualClock {
    pub fn at(instant: NaiveDateTime) -> Self {
        Self {
            instant: Rc::new(Cell::new(instant)),
        }
    }

    pub fn set(&self, instant: NaiveDateTime) {
        self.instant.set(instant);
    }

    pub fn advance(&self, delta: Duration) {
        let step = chrono::Duration::milliseconds(delta.as_millis() as i64);
        let current = self.instant.get();
        self.instant
            .set(current.checked_add_signed(step).unwrap_or(current));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.instant.get()
    }
}

/// Keeps the date label current while mounted
pub struct ClockFormatter {
    label: State<String>,
    _interval: Subscription,
}

impl ClockFormatter {
    /// Compute the label now and schedule a refresh every [`REFRESH_INTERVAL`]
    pub fn mount(clock: Rc<dyn Clock>, timers: &TimerQueue) -> Self {
        Self::mount_with_interval(clock, timers, REFRESH_INTERVAL)
    }

    pub fn mount_with_interval(clock: Rc<dyn Clock>, timers: &TimerQueue, every: Duration) -> Self {
        let label = State::new(format_date_label(clock.now()));

        let signal = label.clone();
        let interval = timers.set_interval(every, move || {
            let next = format_date_label(clock.now());
            if signal.set(next) {
                tracing::debug!(label = %signal.get(), "date label refreshed");
            }
        });

        Self {
            label,
            _interval: interval,
        }
    }

    pub fn label(&self) -> String {
        self.label.get()
    }

    pub fn signal(&self) -> State<String> {
        self.label.clone()
    }

    /// Clear the refresh interval
    pub fn unmount(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn instant(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, s))
            .unwrap()
    }

    #[test]
    fn formats_fixed_instant() {
        assert_eq!(format_date_label(instant(2026, 1, 14, 9, 30, 0)), "Wed, Jan 14 2026");
    }

    #[test]
    fn single_digit_days_are_not_padded() {
        assert_eq!(format_date_label(instant(2026, 3, 5, 0, 0, 0)), "Thu, Mar 5 2026");
    }

    #[test]
    fn label_computed_on_mount() {
        let timers = TimerQueue::new();
        let clock = ManualClock::at(instant(2026, 1, 14, 12, 0, 0));
        let formatter = ClockFormatter::mount(Rc::new(clock), &timers);
        assert_eq!(formatter.label(), "Wed, Jan 14 2026");
    }

    #[test]
    fn refreshes_at_most_once_per_window() {
        let timers = TimerQueue::new();
        let clock = ManualClock::at(instant(2026, 1, 14, 23, 59, 30));
        let formatter = ClockFormatter::mount(Rc::new(clock.clone()), &timers);
        let signal = formatter.signal();

        // Midnight passes, but the window has not elapsed yet
        clock.advance(Duration::from_secs(45));
        timers.advance(Duration::from_secs(45));
        assert_eq!(formatter.label(), "Wed, Jan 14 2026");
        assert_eq!(signal.revision(), 0);

        clock.advance(Duration::from_secs(15));
        timers.advance(Duration::from_secs(15));
        assert_eq!(formatter.label(), "Thu, Jan 15 2026");
        assert_eq!(signal.revision(), 1);
    }

    #[test]
    fn unmount_clears_interval() {
        let timers = TimerQueue::new();
        let clock = ManualClock::at(instant(2026, 1, 14, 0, 0, 0));
        let formatter = ClockFormatter::mount(Rc::new(clock), &timers);
        assert_eq!(timers.active_intervals(), 1);
        formatter.unmount();
        assert_eq!(timers.active_intervals(), 0);
    }
}
