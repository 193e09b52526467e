//! Scoped release of listeners and timers
//!
//! Anything that registers a callback with a shared registry hands back a
//! [`Subscription`]. The registration lives exactly as long as the guard.

use std::fmt;

/// Guard that runs its release hook exactly once, on drop or on [`cancel`].
///
/// [`cancel`]: Subscription::cancel
#[must_use = "dropping a Subscription immediately releases what it holds"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Create a guard around a release hook
    pub fn new<F: FnOnce() + 'static>(release: F) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard that holds nothing
    pub fn empty() -> Self {
        Self { release: None }
    }

    /// Release now instead of at end of scope
    pub fn cancel(mut self) {
        self.run_release();
    }

    /// Whether the release hook has not run yet
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn releases_on_drop() {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        {
            let _sub = Subscription::new(move || counter.set(counter.get() + 1));
            assert_eq!(released.get(), 0);
        }
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn cancel_releases_once() {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        let sub = Subscription::new(move || counter.set(counter.get() + 1));
        assert!(sub.is_active());
        sub.cancel();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn empty_guard_is_inactive() {
        assert!(!Subscription::empty().is_active());
    }
}
