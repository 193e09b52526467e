//! Folio Theme System
//!
//! Light/dark theming for the portfolio page.
//!
//! # Overview
//!
//! - [`ColorScheme`]: the light/dark pair, selected by a single flag
//! - [`ThemeController`]: owns the flag and flips it on the sun/moon click
//! - [`style_for`]: the one place that maps `(dark, scrolled, role)` to a
//!   utility-class set; components never branch on the theme themselves
//! - [`Palette`]: the few raw colors the page exposes as CSS variables
//!
//! # Quick Start
//!
//! ```rust
//! use folio_core::{Event, EventDispatcher};
//! use folio_theme::{style_for, ColorScheme, StyleContext, StyleRole, ThemeController};
//!
//! let dispatcher = EventDispatcher::new();
//! let theme = ThemeController::mount(&dispatcher, ColorScheme::Light, "theme-toggle");
//!
//! dispatcher.dispatch(&mut Event::click("theme-toggle"));
//! assert!(theme.is_dark());
//!
//! let ctx = StyleContext::new(theme.is_dark(), false);
//! let classes = style_for(ctx, StyleRole::PrimaryButton);
//! assert!(classes.contains("bg-white"));
//! ```

pub mod controller;
pub mod palette;
pub mod scheme;
pub mod style;
pub mod themes;
pub mod tokens;

pub use controller::{ThemeController, THEME_TOGGLE_ID};
pub use palette::{Palette, Rgba};
pub use scheme::ColorScheme;
pub use style::{style_for, variant_classes, StyleContext};
pub use tokens::{ClassSet, StyleRole};
