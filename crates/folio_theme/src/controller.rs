//! Theme controller
//!
//! Owns the dark/light flag for one mounted page. The only writer is an
//! explicit user action: a click on the sun/moon control or a direct call to
//! [`ThemeController::toggle`]. Nothing is persisted and the system
//! preference is never consulted.

use crate::scheme::ColorScheme;
use folio_core::{event_types, EventDispatcher, State, Subscription};
use std::cell::Cell;
use std::rc::Rc;

/// Element id of the sun/moon toggle button
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

pub struct ThemeController {
    scheme: State<ColorScheme>,
    toggles: Rc<Cell<u32>>,
    toggle_id: String,
    _listener: Subscription,
}

impl ThemeController {
    /// Start in `initial` and listen for clicks on `toggle_id`
    pub fn mount(dispatcher: &EventDispatcher, initial: ColorScheme, toggle_id: &str) -> Self {
        let scheme = State::new(initial);
        let toggles = Rc::new(Cell::new(0));

        let signal = scheme.clone();
        let count = toggles.clone();
        let target = toggle_id.to_string();
        let listener = dispatcher.listen(event_types::CLICK, move |event| {
            if event.targets(&target) {
                flip(&signal, &count);
            }
        });

        Self {
            scheme,
            toggles,
            toggle_id: toggle_id.to_string(),
            _listener: listener,
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme.get()
    }

    pub fn is_dark(&self) -> bool {
        self.scheme().is_dark()
    }

    /// Flip between light and dark
    pub fn toggle(&self) {
        flip(&self.scheme, &self.toggles);
    }

    /// Set the scheme directly; any value is accepted
    pub fn set_scheme(&self, scheme: ColorScheme) {
        let current = self.scheme.get();
        if current != scheme {
            tracing::debug!(
                "ThemeController::set_scheme - switching from {:?} to {:?}",
                current,
                scheme
            );
            self.scheme.set(scheme);
            self.toggles.set(self.toggles.get() + 1);
        }
    }

    /// Number of scheme switches since mount
    pub fn toggle_count(&self) -> u32 {
        self.toggles.get()
    }

    pub fn toggle_id(&self) -> &str {
        &self.toggle_id
    }

    /// Handle onto the scheme signal for watchers
    pub fn signal(&self) -> State<ColorScheme> {
        self.scheme.clone()
    }

    /// Stop listening for toggle clicks
    pub fn unmount(self) {}
}

fn flip(scheme: &State<ColorScheme>, toggles: &Cell<u32>) {
    let from = scheme.get();
    let to = from.toggle();
    tracing::debug!("ThemeController::toggle - switching from {:?} to {:?}", from, to);
    scheme.set(to);
    toggles.set(toggles.get() + 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{Event, KeyCode, Modifiers};

    #[test]
    fn defaults_to_initial_scheme() {
        let dispatcher = EventDispatcher::new();
        let light = ThemeController::mount(&dispatcher, ColorScheme::Light, THEME_TOGGLE_ID);
        assert!(!light.is_dark());
        let dark = ThemeController::mount(&dispatcher, ColorScheme::Dark, "other-toggle");
        assert!(dark.is_dark());
    }

    #[test]
    fn click_on_toggle_flips() {
        let dispatcher = EventDispatcher::new();
        let theme = ThemeController::mount(&dispatcher, ColorScheme::Light, THEME_TOGGLE_ID);

        dispatcher.dispatch(&mut Event::click(THEME_TOGGLE_ID));
        assert!(theme.is_dark());
        dispatcher.dispatch(&mut Event::click(THEME_TOGGLE_ID));
        assert!(!theme.is_dark());
        assert_eq!(theme.toggle_count(), 2);
    }

    #[test]
    fn other_events_leave_scheme_alone() {
        let dispatcher = EventDispatcher::new();
        let theme = ThemeController::mount(&dispatcher, ColorScheme::Light, THEME_TOGGLE_ID);

        dispatcher.dispatch(&mut Event::click("resume-button"));
        dispatcher.dispatch(&mut Event::scroll(900.0));
        dispatcher.dispatch(&mut Event::context_menu());
        dispatcher.dispatch(&mut Event::key_down(KeyCode::ENTER, Modifiers::NONE));

        assert!(!theme.is_dark());
        assert_eq!(theme.toggle_count(), 0);
        assert_eq!(theme.signal().revision(), 0);
    }

    #[test]
    fn set_scheme_is_idempotent() {
        let dispatcher = EventDispatcher::new();
        let theme = ThemeController::mount(&dispatcher, ColorScheme::Light, THEME_TOGGLE_ID);
        theme.set_scheme(ColorScheme::Light);
        assert_eq!(theme.toggle_count(), 0);
        theme.set_scheme(ColorScheme::Dark);
        assert_eq!(theme.toggle_count(), 1);
        assert!(theme.is_dark());
    }

    #[test]
    fn unmounted_controller_stops_listening() {
        let dispatcher = EventDispatcher::new();
        let theme = ThemeController::mount(&dispatcher, ColorScheme::Light, THEME_TOGGLE_ID);
        let signal = theme.signal();
        theme.unmount();

        dispatcher.dispatch(&mut Event::click(THEME_TOGGLE_ID));
        assert_eq!(signal.get(), ColorScheme::Light);
    }
}
