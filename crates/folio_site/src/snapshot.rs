//! Per-render copy of the page signals

use folio_theme::{style_for, ClassSet, StyleContext, StyleRole};
use serde::Serialize;

/// Everything a render may depend on, captured at one instant
///
/// Components read this and nothing else, so rendering the same snapshot
/// twice yields the same tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub scrolled: bool,
    pub dark: bool,
    pub date_label: String,
    /// Current marquee translation in percent of the strip width
    pub marquee_offset_percent: f32,
    pub marquee_copies: usize,
}

impl RenderSnapshot {
    pub fn style_context(&self) -> StyleContext {
        StyleContext::new(self.dark, self.scrolled)
    }

    /// Classes for `role` under this snapshot's theme and scroll state
    pub fn style(&self, role: StyleRole) -> ClassSet {
        style_for(self.style_context(), role)
    }
}

impl Default for RenderSnapshot {
    fn default() -> Self {
        Self {
            scrolled: false,
            dark: false,
            date_label: String::new(),
            marquee_offset_percent: 0.0,
            marquee_copies: 2,
        }
    }
}
