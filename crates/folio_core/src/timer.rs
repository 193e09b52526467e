//! Interval timers for a single-threaded host loop
//!
//! The queue never sleeps or spawns. The host (a browser frame callback, the
//! CLI's tokio interval, or a headless scenario) moves time forward with
//! [`TimerQueue::advance`], and every interval that became due fires once per
//! elapsed period.

use crate::subscription::Subscription;
use slotmap::{new_key_type, SlotMap};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

new_key_type! {
    /// Identifier of a registered interval
    pub struct TimerId;
}

type TimerCallback = Rc<RefCell<dyn FnMut()>>;

struct Interval {
    period_ms: u64,
    next_due_ms: u64,
    callback: TimerCallback,
}

#[derive(Default)]
struct Timers {
    now_ms: u64,
    intervals: SlotMap<TimerId, Interval>,
}

/// Shared handle to the page's timer queue
#[derive(Clone, Default)]
pub struct TimerQueue {
    timers: Rc<RefCell<Timers>>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed since the queue was created
    pub fn now_ms(&self) -> u64 {
        self.timers.borrow().now_ms
    }

    /// Fire `callback` every `period` until the guard drops
    ///
    /// The first firing happens one full period after registration.
    pub fn set_interval<F>(&self, period: Duration, callback: F) -> Subscription
    where
        F: FnMut() + 'static,
    {
        let period_ms = (period.as_millis() as u64).max(1);
        let id = {
            let mut timers = self.timers.borrow_mut();
            let next_due_ms = timers.now_ms + period_ms;
            timers.intervals.insert(Interval {
                period_ms,
                next_due_ms,
                callback: Rc::new(RefCell::new(callback)),
            })
        };
        tracing::trace!(?id, period_ms, "interval registered");

        let timers = Rc::downgrade(&self.timers);
        Subscription::new(move || {
            if let Some(timers) = timers.upgrade() {
                timers.borrow_mut().intervals.remove(id);
                tracing::trace!(?id, "interval cleared");
            }
        })
    }

    /// Move time forward, firing due intervals in due-time order
    ///
    /// Returns how many callbacks ran.
    pub fn advance(&self, delta: Duration) -> usize {
        let target_ms = self.now_ms() + delta.as_millis() as u64;
        let mut fired = 0;

        loop {
            // Earliest due interval at or before the target
            let next = {
                let timers = self.timers.borrow();
                timers
                    .intervals
                    .iter()
                    .filter(|(_, i)| i.next_due_ms <= target_ms)
                    .min_by_key(|(_, i)| i.next_due_ms)
                    .map(|(id, i)| (id, i.next_due_ms, i.callback.clone()))
            };
            let Some((id, due_ms, callback)) = next else {
                break;
            };

            {
                let mut timers = self.timers.borrow_mut();
                timers.now_ms = due_ms;
                if let Some(interval) = timers.intervals.get_mut(id) {
                    interval.next_due_ms = due_ms + interval.period_ms;
                }
            }
            (&mut *callback.borrow_mut())();
            fired += 1;
        }

        self.timers.borrow_mut().now_ms = target_ms;
        fired
    }

    /// Number of live intervals
    pub fn active_intervals(&self) -> usize {
        self.timers.borrow().intervals.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn fires_once_per_period() {
        let timers = TimerQueue::new();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let _guard = timers.set_interval(Duration::from_secs(60), move || c.set(c.get() + 1));

        timers.advance(Duration::from_secs(59));
        assert_eq!(count.get(), 0);
        timers.advance(Duration::from_secs(1));
        assert_eq!(count.get(), 1);
        timers.advance(Duration::from_secs(150));
        assert_eq!(count.get(), 3);
        assert_eq!(timers.now_ms(), 210_000);
    }

    #[test]
    fn cleared_interval_never_fires() {
        let timers = TimerQueue::new();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let guard = timers.set_interval(Duration::from_millis(10), move || c.set(c.get() + 1));
        assert_eq!(timers.active_intervals(), 1);

        drop(guard);
        timers.advance(Duration::from_millis(100));
        assert_eq!(count.get(), 0);
        assert_eq!(timers.active_intervals(), 0);
    }

    #[test]
    fn intervals_interleave_by_due_time() {
        let timers = TimerQueue::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = log.clone();
        let _fast = timers.set_interval(Duration::from_millis(10), move || a.borrow_mut().push('f'));
        let b = log.clone();
        let _slow = timers.set_interval(Duration::from_millis(25), move || b.borrow_mut().push('s'));

        timers.advance(Duration::from_millis(30));
        assert_eq!(*log.borrow(), vec!['f', 'f', 's', 'f']);
    }
}
