//! Theme selection across every role.

use folio_core::{Event, EventDispatcher, KeyCode, Modifiers};
use folio_theme::{style_for, ColorScheme, StyleContext, StyleRole, ThemeController, THEME_TOGGLE_ID};
use pretty_assertions::assert_eq;

#[test]
fn light_and_dark_differ_for_colored_roles() {
    let colored = [
        StyleRole::Page,
        StyleRole::NavBar,
        StyleRole::PrimaryButton,
        StyleRole::SecondaryButton,
        StyleRole::Card,
        StyleRole::Chip,
        StyleRole::TimelineDot,
        StyleRole::Footer,
    ];
    for role in colored {
        for scrolled in [false, true] {
            let light = style_for(StyleContext::new(false, scrolled), role);
            let dark = style_for(StyleContext::new(true, scrolled), role);
            assert_ne!(light, dark, "{role:?} scrolled={scrolled}");
        }
    }
}

#[test]
fn only_navbar_roles_depend_on_scroll() {
    let scroll_sensitive = [
        StyleRole::NavBar,
        StyleRole::NavLink,
        StyleRole::NavMenu,
        StyleRole::DateBadge,
        StyleRole::ThemeToggle,
    ];
    for role in StyleRole::ALL {
        for dark in [false, true] {
            let top = style_for(StyleContext::new(dark, false), role);
            let scrolled = style_for(StyleContext::new(dark, true), role);
            if scroll_sensitive.contains(&role) {
                assert_ne!(top, scrolled, "{role:?} dark={dark}");
            } else {
                assert_eq!(top, scrolled, "{role:?} dark={dark}");
            }
        }
    }
}

#[test]
fn selection_is_pure() {
    for role in StyleRole::ALL {
        let ctx = StyleContext::new(true, true);
        assert_eq!(style_for(ctx, role), style_for(ctx, role));
    }
}

#[test]
fn controller_drives_selection() {
    let dispatcher = EventDispatcher::new();
    let theme = ThemeController::mount(&dispatcher, ColorScheme::Light, THEME_TOGGLE_ID);

    let before = style_for(StyleContext::new(theme.is_dark(), false), StyleRole::Page);
    dispatcher.dispatch(&mut Event::scroll(400.0));
    dispatcher.dispatch(&mut Event::key_down(KeyCode::SPACE, Modifiers::NONE));
    assert_eq!(
        style_for(StyleContext::new(theme.is_dark(), false), StyleRole::Page),
        before
    );

    dispatcher.dispatch(&mut Event::click(THEME_TOGGLE_ID));
    let after = style_for(StyleContext::new(theme.is_dark(), false), StyleRole::Page);
    assert!(after.contains("bg-[#0f0f0f]"));
}

#[test]
fn scheme_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&ColorScheme::Dark).unwrap(), "\"dark\"");
    let parsed: ColorScheme = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(parsed, ColorScheme::Light);
}
