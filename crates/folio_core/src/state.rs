//! Observable state holders
//!
//! A [`State`] has exactly one writer (its owning controller) and any number
//! of readers. Writes that do not change the value are dropped, so watchers
//! only hear about real transitions.

use crate::subscription::Subscription;
use slotmap::{new_key_type, SlotMap};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

new_key_type! {
    /// Identifier of a state watcher
    pub struct WatcherId;
}

type Watcher<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Inner<T> {
    value: T,
    revision: u64,
    watchers: SlotMap<WatcherId, Watcher<T>>,
}

/// Shared, single-threaded observable value
pub struct State<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> State<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                revision: 0,
                watchers: SlotMap::with_key(),
            })),
        }
    }

    /// Snapshot of the current value
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Read the current value without cloning
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Number of accepted writes since creation
    pub fn revision(&self) -> u64 {
        self.inner.borrow().revision
    }

    /// Overwrite the value; returns `true` if it changed
    pub fn set(&self, value: T) -> bool {
        let watchers: Vec<Watcher<T>> = {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return false;
            }
            inner.value = value;
            inner.revision += 1;
            inner.watchers.values().cloned().collect()
        };

        let current = self.get();
        for watcher in watchers {
            // A watcher that writes this state is not re-entered
            if let Ok(mut watcher) = watcher.try_borrow_mut() {
                (&mut *watcher)(&current);
            }
        }
        true
    }

    /// Derive the next value from the current one
    pub fn update(&self, f: impl FnOnce(&T) -> T) -> bool {
        let next = self.with(f);
        self.set(next)
    }

    /// Call `f` after every change until the guard drops
    ///
    /// `f` may write this state; the nested change is applied and other
    /// watchers see it, but `f` itself is not called again for it.
    pub fn watch<F>(&self, f: F) -> Subscription
    where
        F: FnMut(&T) + 'static,
    {
        let id = self
            .inner
            .borrow_mut()
            .watchers
            .insert(Rc::new(RefCell::new(f)));
        let inner = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().watchers.remove(id);
            }
        })
    }

    pub fn watcher_count(&self) -> usize {
        self.inner.borrow().watchers.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("State")
            .field("value", &inner.value)
            .field("revision", &inner.revision)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn unchanged_writes_are_dropped() {
        let state = State::new(false);
        let fired = Rc::new(Cell::new(0));
        let f = fired.clone();
        let _watch = state.watch(move |_| f.set(f.get() + 1));

        assert!(!state.set(false));
        assert!(state.set(true));
        assert!(!state.set(true));
        assert!(state.set(false));

        assert_eq!(fired.get(), 2);
        assert_eq!(state.revision(), 2);
    }

    #[test]
    fn watchers_see_new_value() {
        let state = State::new(String::from("a"));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let _watch = state.watch(move |v: &String| s.borrow_mut().push(v.clone()));

        state.set("b".to_string());
        state.update(|v| format!("{v}c"));

        assert_eq!(*seen.borrow(), vec!["b".to_string(), "bc".to_string()]);
    }

    #[test]
    fn watcher_may_write_its_own_state() {
        let state = State::new(0u32);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let clamp = state.clone();
        let _clamp = state.watch(move |v| {
            if *v > 10 {
                clamp.set(10);
            }
        });
        let s = seen.clone();
        let _log = state.watch(move |v| s.borrow_mut().push(*v));

        state.set(42);
        assert_eq!(state.get(), 10);
        assert!(seen.borrow().contains(&10));
        assert_eq!(state.revision(), 2);
    }

    #[test]
    fn watch_guard_releases() {
        let state = State::new(0u32);
        let guard = state.watch(|_| {});
        assert_eq!(state.watcher_count(), 1);
        drop(guard);
        assert_eq!(state.watcher_count(), 0);
    }
}
