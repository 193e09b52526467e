//! Style selection
//!
//! [`style_for`] is the single function that decides how a role looks for a
//! given theme and scroll state. Components pass the context through and never
//! inspect the flags themselves.

use crate::scheme::ColorScheme;
use crate::themes;
use crate::tokens::{ClassSet, StyleRole};

/// The signals a style decision may depend on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleContext {
    pub dark: bool,
    pub scrolled: bool,
}

impl StyleContext {
    /// Every context, ordered light, light scrolled, dark, dark scrolled
    pub const ALL: [StyleContext; 4] = [
        StyleContext { dark: false, scrolled: false },
        StyleContext { dark: false, scrolled: true },
        StyleContext { dark: true, scrolled: false },
        StyleContext { dark: true, scrolled: true },
    ];

    pub fn new(dark: bool, scrolled: bool) -> Self {
        Self { dark, scrolled }
    }

    pub fn scheme(&self) -> ColorScheme {
        ColorScheme::from_dark(self.dark)
    }
}

/// Utility classes for `role` under `ctx`
pub fn style_for(ctx: StyleContext, role: StyleRole) -> ClassSet {
    let mut classes = ClassSet::parse(role.base()).with_role(role);
    classes.extend_str(variant(ctx, role));
    classes
}

/// The part of [`style_for`] that depends on `ctx`: variant classes not
/// already in the role's base
pub fn variant_classes(ctx: StyleContext, role: StyleRole) -> ClassSet {
    let base = ClassSet::parse(role.base());
    let mut classes = ClassSet::new().with_role(role);
    for class in ClassSet::parse(variant(ctx, role)).iter() {
        if !base.contains(class) {
            classes.push(class);
        }
    }
    classes
}

fn variant(ctx: StyleContext, role: StyleRole) -> &'static str {
    match ctx.scheme() {
        ColorScheme::Light => themes::light::variant(role, ctx.scrolled),
        ColorScheme::Dark => themes::dark::variant(role, ctx.scrolled),
    }
}
