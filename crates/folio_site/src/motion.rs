//! Entrance motions used by the page
//!
//! Components reference the class names; the document head emits the matching
//! `@keyframes` once.

use folio_animation::{MotionAnimation, MotionPreset};

pub const NAV_DROP_IN: &str = "motion-nav-drop-in";
pub const GREETING: &str = "motion-fade-in-200";
pub const NAME: &str = "motion-slide-in-left-300";
pub const TAGLINE: &str = "motion-fade-in-400";
pub const ACTIONS: &str = "motion-rise-in-500";
pub const PORTRAIT: &str = "motion-scale-in";

/// Every motion the page uses, in the order they start
pub fn page_motions() -> Vec<MotionAnimation> {
    vec![
        MotionPreset::nav_drop_in(),
        MotionPreset::fade_in(200),
        MotionPreset::slide_in_left(300),
        MotionPreset::fade_in(400),
        MotionPreset::rise_in(500),
        MotionPreset::scale_in(800),
    ]
}

/// `@keyframes` plus class rules for [`page_motions`]
pub fn motion_css() -> String {
    let mut css = String::new();
    for motion in page_motions() {
        css.push_str(&motion.css_keyframes());
        css.push('\n');
        css.push_str(&motion.css_class_rule());
        css.push('\n');
    }
    css
}
