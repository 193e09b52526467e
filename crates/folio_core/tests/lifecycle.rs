//! Mount/unmount lifecycle of the core controllers sharing one dispatcher
//! and one timer queue.

use chrono::NaiveDate;
use folio_core::{
    event_types, ClockFormatter, DevtoolsGuard, Event, EventDispatcher, KeyCode, ManualClock,
    Modifiers, ScrollObserver, TimerQueue,
};
use pretty_assertions::assert_eq;
use std::rc::Rc;
use std::time::Duration;

fn noon_jan_14() -> ManualClock {
    let instant = NaiveDate::from_ymd_opt(2026, 1, 14)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap();
    ManualClock::at(instant)
}

#[test]
fn controllers_release_everything_on_teardown() {
    let dispatcher = EventDispatcher::new();
    let timers = TimerQueue::new();

    let scroll = ScrollObserver::mount(&dispatcher, 50.0);
    let clock = ClockFormatter::mount(Rc::new(noon_jan_14()), &timers);
    let guard = DevtoolsGuard::mount(&dispatcher);

    assert_eq!(dispatcher.listener_count(event_types::SCROLL), 1);
    assert_eq!(dispatcher.listener_count(event_types::CONTEXT_MENU), 1);
    assert_eq!(dispatcher.listener_count(event_types::KEY_DOWN), 1);
    assert_eq!(timers.active_intervals(), 1);

    drop((scroll, clock, guard));

    assert_eq!(dispatcher.total_listeners(), 0);
    assert_eq!(timers.active_intervals(), 0);
}

#[test]
fn unrelated_events_do_not_disturb_signals() {
    let dispatcher = EventDispatcher::new();
    let timers = TimerQueue::new();
    let manual = noon_jan_14();

    let scroll = ScrollObserver::mount(&dispatcher, 20.0);
    let clock = ClockFormatter::mount(Rc::new(manual.clone()), &timers);
    let _guard = DevtoolsGuard::mount(&dispatcher);

    dispatcher.dispatch(&mut Event::click("theme-toggle"));
    dispatcher.dispatch(&mut Event::context_menu());
    dispatcher.dispatch(&mut Event::key_down(
        KeyCode::I,
        Modifiers::new(true, true, false, false),
    ));

    assert!(!scroll.is_past_threshold());
    assert_eq!(scroll.signal().revision(), 0);
    assert_eq!(clock.label(), "Wed, Jan 14 2026");

    // A day passes in one host step: the label catches up on the next tick
    manual.advance(Duration::from_secs(24 * 60 * 60));
    timers.advance(Duration::from_secs(60));
    assert_eq!(clock.label(), "Thu, Jan 15 2026");
}
