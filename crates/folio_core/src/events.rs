//! Event dispatch system
//!
//! The browser event surface the page consumes: scroll, click, context menu
//! and key down. Listeners are registered per event type and released by the
//! [`Subscription`] returned from [`EventDispatcher::listen`].

use crate::subscription::Subscription;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// Event type identifier
pub type EventType = u32;

/// Event types the page listens to
pub mod event_types {
    use super::EventType;

    pub const CLICK: EventType = 2;
    /// Secondary-button press that would open the browser context menu
    pub const CONTEXT_MENU: EventType = 3;
    pub const KEY_DOWN: EventType = 20;
    pub const SCROLL: EventType = 30;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    /// Element id the event was aimed at, if any
    pub target: Option<String>,
    pub data: EventData,
    pub timestamp: u64,
    pub propagation_stopped: bool,
    pub default_prevented: bool,
}

/// Event-specific data
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
        button: u8,
    },
    Key {
        key: KeyCode,
        modifiers: Modifiers,
        repeat: bool,
    },
    /// Absolute vertical scroll offset of the document, in CSS pixels
    Scroll {
        offset_y: f32,
    },
    None,
}

impl Event {
    pub fn new(event_type: EventType, data: EventData) -> Self {
        Self {
            event_type,
            target: None,
            data,
            timestamp: 0,
            propagation_stopped: false,
            default_prevented: false,
        }
    }

    /// Document scroll to an absolute offset
    pub fn scroll(offset_y: f32) -> Self {
        Self::new(event_types::SCROLL, EventData::Scroll { offset_y })
    }

    /// Primary-button click on the element with the given id
    pub fn click(target: impl Into<String>) -> Self {
        let mut event = Self::new(
            event_types::CLICK,
            EventData::Pointer {
                x: 0.0,
                y: 0.0,
                button: 0,
            },
        );
        event.target = Some(target.into());
        event
    }

    pub fn context_menu() -> Self {
        Self::new(
            event_types::CONTEXT_MENU,
            EventData::Pointer {
                x: 0.0,
                y: 0.0,
                button: 2,
            },
        )
    }

    pub fn key_down(key: KeyCode, modifiers: Modifiers) -> Self {
        Self::new(
            event_types::KEY_DOWN,
            EventData::Key {
                key,
                modifiers,
                repeat: false,
            },
        )
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Suppress the browser's default action for this event
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether the event targets the element with `id`
    pub fn targets(&self, id: &str) -> bool {
        self.target.as_deref() == Some(id)
    }
}

/// Virtual key codes (platform-agnostic)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const C: KeyCode = KeyCode(0x43);
    pub const I: KeyCode = KeyCode(0x49);
    pub const J: KeyCode = KeyCode(0x4A);
    pub const U: KeyCode = KeyCode(0x55);

    pub const TAB: KeyCode = KeyCode(0x09);
    pub const ENTER: KeyCode = KeyCode(0x0D);
    pub const ESCAPE: KeyCode = KeyCode(0x1B);
    pub const SPACE: KeyCode = KeyCode(0x20);

    pub const F12: KeyCode = KeyCode(0x7B);

    pub const UNKNOWN: KeyCode = KeyCode(0);

    /// Map a DOM `KeyboardEvent.key` name onto a key code
    pub fn from_name(name: &str) -> KeyCode {
        match name {
            "F12" => Self::F12,
            "Tab" => Self::TAB,
            "Enter" => Self::ENTER,
            "Escape" => Self::ESCAPE,
            " " | "Space" => Self::SPACE,
            single if single.chars().count() == 1 => {
                let c = single.chars().next().unwrap_or('\0').to_ascii_uppercase();
                if c.is_ascii_alphanumeric() {
                    KeyCode(c as u32)
                } else {
                    Self::UNKNOWN
                }
            }
            _ => Self::UNKNOWN,
        }
    }
}

/// Keyboard modifier flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { bits: 0 };
    pub const SHIFT: u8 = 0b0001;
    pub const CTRL: u8 = 0b0010;
    pub const ALT: u8 = 0b0100;
    pub const META: u8 = 0b1000;

    pub const fn new(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0;
        if shift {
            bits |= Self::SHIFT;
        }
        if ctrl {
            bits |= Self::CTRL;
        }
        if alt {
            bits |= Self::ALT;
        }
        if meta {
            bits |= Self::META;
        }
        Self { bits }
    }

    pub const fn shift(&self) -> bool {
        self.bits & Self::SHIFT != 0
    }

    pub const fn ctrl(&self) -> bool {
        self.bits & Self::CTRL != 0
    }

    pub const fn alt(&self) -> bool {
        self.bits & Self::ALT != 0
    }

    pub const fn meta(&self) -> bool {
        self.bits & Self::META != 0
    }

    /// Ctrl or Cmd, whichever the visitor's platform uses for shortcuts
    pub const fn command(&self) -> bool {
        self.ctrl() || self.meta()
    }
}

new_key_type! {
    /// Identifier of a registered listener
    pub struct ListenerId;
}

/// Event handler function type
pub type EventHandler = Rc<RefCell<dyn FnMut(&mut Event)>>;

struct Listener {
    event_type: EventType,
    order: u64,
    handler: EventHandler,
}

#[derive(Default)]
struct ListenerRegistry {
    listeners: SlotMap<ListenerId, Listener>,
    next_order: u64,
}

/// Dispatches events to registered handlers
///
/// Cloning the dispatcher yields another handle onto the same registry.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    registry: Rc<RefCell<ListenerRegistry>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an event type
    ///
    /// The handler stays registered until the returned guard is dropped.
    pub fn listen<F>(&self, event_type: EventType, handler: F) -> Subscription
    where
        F: FnMut(&mut Event) + 'static,
    {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let order = registry.next_order;
            registry.next_order += 1;
            registry.listeners.insert(Listener {
                event_type,
                order,
                handler: Rc::new(RefCell::new(handler)),
            })
        };
        tracing::trace!(event_type, ?id, "listener registered");

        let registry = Rc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().listeners.remove(id);
                tracing::trace!(event_type, ?id, "listener released");
            }
        })
    }

    /// Dispatch an event to every handler of its type, in registration order
    ///
    /// Handlers may dispatch further events. A handler that is already
    /// running is skipped for nested dispatches instead of being re-entered.
    /// Returns `false` if a handler prevented the default action.
    pub fn dispatch(&self, event: &mut Event) -> bool {
        let mut matching: SmallVec<[(u64, EventHandler); 4]> = self
            .registry
            .borrow()
            .listeners
            .values()
            .filter(|l| l.event_type == event.event_type)
            .map(|l| (l.order, l.handler.clone()))
            .collect();
        matching.sort_by_key(|(order, _)| *order);

        // Registry borrow is released here, so handlers may drop guards
        for (_, handler) in matching {
            if event.propagation_stopped {
                break;
            }
            // A handler that dispatches the same event type is not re-entered
            match handler.try_borrow_mut() {
                Ok(mut handler) => (&mut *handler)(event),
                Err(_) => tracing::trace!(event_type = event.event_type, "handler busy, skipped"),
            }
        }

        !event.default_prevented
    }

    /// Number of live listeners for an event type
    pub fn listener_count(&self, event_type: EventType) -> usize {
        self.registry
            .borrow()
            .listeners
            .values()
            .filter(|l| l.event_type == event_type)
            .count()
    }

    /// Number of live listeners across all event types
    pub fn total_listeners(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}
