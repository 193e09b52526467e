//! Folio Core Runtime
//!
//! The presentation-state primitives shared by every other Folio crate:
//!
//! - **Event Dispatch**: scroll, click, context-menu and key events routed to
//!   listeners registered per event type
//! - **Scoped Subscriptions**: every listener and timer is held by a
//!   [`Subscription`] guard that releases it when dropped
//! - **Observable State**: [`State`] holders with change-only notification
//! - **Timers**: a single-threaded interval queue driven by the host loop
//! - **Controllers**: [`ScrollObserver`], [`ClockFormatter`], [`DevtoolsGuard`]
//!
//! # Example
//!
//! ```rust
//! use folio_core::{Event, EventDispatcher, ScrollObserver};
//!
//! let dispatcher = EventDispatcher::new();
//! let observer = ScrollObserver::mount(&dispatcher, 50.0);
//!
//! dispatcher.dispatch(&mut Event::scroll(49.0));
//! assert!(!observer.is_past_threshold());
//!
//! dispatcher.dispatch(&mut Event::scroll(50.0));
//! assert!(observer.is_past_threshold());
//!
//! // Dropping the observer removes its scroll listener
//! drop(observer);
//! assert_eq!(dispatcher.listener_count(folio_core::event_types::SCROLL), 0);
//! ```

pub mod clock;
pub mod events;
pub mod guard;
pub mod scroll;
pub mod state;
pub mod subscription;
pub mod timer;

pub use clock::{format_date_label, Clock, ClockFormatter, ManualClock, SystemClock};
pub use events::{event_types, Event, EventData, EventDispatcher, EventType, KeyCode, Modifiers};
pub use guard::{is_devtools_shortcut, DevtoolsGuard};
pub use scroll::{past_threshold, ScrollObserver};
pub use state::State;
pub use subscription::Subscription;
pub use timer::TimerQueue;
