//! Threshold-triggered scroll tracking
//!
//! The navbar switches presentation once the document has scrolled past a
//! fixed pixel offset. [`ScrollObserver`] owns that boolean.

use crate::events::{event_types, EventData, EventDispatcher};
use crate::state::State;
use crate::subscription::Subscription;

/// `true` once `offset_y` reaches `threshold` (inclusive)
pub fn past_threshold(offset_y: f32, threshold: f32) -> bool {
    offset_y >= threshold
}

/// Tracks whether the document is scrolled past a fixed threshold
///
/// Mounting registers one scroll listener; dropping the observer removes it.
pub struct ScrollObserver {
    threshold: f32,
    past: State<bool>,
    _listener: Subscription,
}

impl ScrollObserver {
    /// Register with the dispatcher; the signal starts out `false`
    pub fn mount(dispatcher: &EventDispatcher, threshold: f32) -> Self {
        let past = State::new(false);
        let signal = past.clone();
        let listener = dispatcher.listen(event_types::SCROLL, move |event| {
            if let EventData::Scroll { offset_y } = event.data {
                let next = past_threshold(offset_y, threshold);
                if signal.set(next) {
                    tracing::debug!(offset_y, threshold, scrolled = next, "scroll threshold crossed");
                }
            }
        });

        Self {
            threshold,
            past,
            _listener: listener,
        }
    }

    pub fn is_past_threshold(&self) -> bool {
        self.past.get()
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Handle onto the observed signal for watchers
    pub fn signal(&self) -> State<bool> {
        self.past.clone()
    }

    /// Release the scroll listener
    pub fn unmount(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Event;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn boundary_is_inclusive() {
        for threshold in [20.0, 50.0] {
            assert!(!past_threshold(threshold - 0.5, threshold));
            assert!(!past_threshold(0.0, threshold));
            assert!(past_threshold(threshold, threshold));
            assert!(past_threshold(threshold + 1.0, threshold));
        }
    }

    #[test]
    fn follows_scroll_events() {
        let dispatcher = EventDispatcher::new();
        let observer = ScrollObserver::mount(&dispatcher, 50.0);
        assert!(!observer.is_past_threshold());

        dispatcher.dispatch(&mut Event::scroll(49.9));
        assert!(!observer.is_past_threshold());
        dispatcher.dispatch(&mut Event::scroll(50.0));
        assert!(observer.is_past_threshold());
        dispatcher.dispatch(&mut Event::scroll(10.0));
        assert!(!observer.is_past_threshold());
    }

    #[test]
    fn notifies_only_on_change() {
        let dispatcher = EventDispatcher::new();
        let observer = ScrollObserver::mount(&dispatcher, 20.0);
        let changes = Rc::new(Cell::new(0));
        let c = changes.clone();
        let _watch = observer.signal().watch(move |_| c.set(c.get() + 1));

        for offset in [0.0, 5.0, 25.0, 30.0, 400.0, 19.0, 2.0] {
            dispatcher.dispatch(&mut Event::scroll(offset));
        }
        assert_eq!(changes.get(), 2);
    }

    #[test]
    fn unmount_removes_listener() {
        let dispatcher = EventDispatcher::new();
        let observer = ScrollObserver::mount(&dispatcher, 20.0);
        let signal = observer.signal();
        assert_eq!(dispatcher.listener_count(event_types::SCROLL), 1);

        observer.unmount();
        assert_eq!(dispatcher.listener_count(event_types::SCROLL), 0);
        dispatcher.dispatch(&mut Event::scroll(500.0));
        assert!(!signal.get());
    }
}
