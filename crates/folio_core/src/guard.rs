//! Context-menu and devtools-shortcut suppression
//!
//! Purely cosmetic: it cancels the browser's default action for the context
//! menu and the usual inspector shortcuts. It does not stop anyone from
//! opening the inspector another way.

use crate::events::{event_types, EventData, EventDispatcher, KeyCode, Modifiers};
use crate::subscription::Subscription;
use std::cell::Cell;
use std::rc::Rc;

/// F12, Ctrl/Cmd+Shift+I/J/C, and Ctrl/Cmd+U (view source)
pub fn is_devtools_shortcut(key: KeyCode, modifiers: Modifiers) -> bool {
    if key == KeyCode::F12 {
        return true;
    }
    if !modifiers.command() {
        return false;
    }
    if modifiers.shift() && matches!(key, KeyCode::I | KeyCode::J | KeyCode::C) {
        return true;
    }
    key == KeyCode::U && !modifiers.shift()
}

/// Cancels context-menu events and devtools shortcuts while mounted
pub struct DevtoolsGuard {
    suppressed: Rc<Cell<u32>>,
    _listeners: [Subscription; 2],
}

impl DevtoolsGuard {
    pub fn mount(dispatcher: &EventDispatcher) -> Self {
        let suppressed = Rc::new(Cell::new(0));

        let count = suppressed.clone();
        let context_menu = dispatcher.listen(event_types::CONTEXT_MENU, move |event| {
            event.prevent_default();
            count.set(count.get() + 1);
        });

        let count = suppressed.clone();
        let key_down = dispatcher.listen(event_types::KEY_DOWN, move |event| {
            if let EventData::Key { key, modifiers, .. } = event.data {
                if is_devtools_shortcut(key, modifiers) {
                    tracing::trace!(?key, "devtools shortcut suppressed");
                    event.prevent_default();
                    count.set(count.get() + 1);
                }
            }
        });

        Self {
            suppressed,
            _listeners: [context_menu, key_down],
        }
    }

    /// How many events have been cancelled so far
    pub fn suppressed(&self) -> u32 {
        self.suppressed.get()
    }
}
