//! Entrance motion presets used across the page
//!
//! Each preset is a [`MotionAnimation`] with a stable class name, so the page
//! can emit the CSS once and reference it from any element.

use crate::easing::Easing;
use crate::motion::{MotionAnimation, MotionProperties};

/// Pre-built entrance motions
pub struct MotionPreset;

impl MotionPreset {
    /// Navbar drops in from above with a spring-like settle
    pub fn nav_drop_in() -> MotionAnimation {
        MotionAnimation::new("motion-nav-drop-in", 800)
            .from(MotionProperties::translate(0.0, -100.0).with_opacity(0.0))
            .to(MotionProperties::translate(0.0, 0.0).with_opacity(1.0))
            .easing(Easing::SPRING)
    }

    /// Plain fade after `delay_ms`
    pub fn fade_in(delay_ms: u32) -> MotionAnimation {
        MotionAnimation::new(format!("motion-fade-in-{delay_ms}"), 600)
            .from(MotionProperties::opacity(0.0))
            .to(MotionProperties::opacity(1.0))
            .delay(delay_ms)
    }

    /// Fade while sliding in from the left by 20px
    pub fn slide_in_left(delay_ms: u32) -> MotionAnimation {
        MotionAnimation::new(format!("motion-slide-in-left-{delay_ms}"), 600)
            .from(MotionProperties::opacity(0.0).with_translate_x(-20.0))
            .to(MotionProperties::opacity(1.0).with_translate_x(0.0))
            .delay(delay_ms)
    }

    /// Fade while rising 20px
    pub fn rise_in(delay_ms: u32) -> MotionAnimation {
        MotionAnimation::new(format!("motion-rise-in-{delay_ms}"), 600)
            .from(MotionProperties::opacity(0.0).with_translate_y(20.0))
            .to(MotionProperties::opacity(1.0).with_translate_y(0.0))
            .delay(delay_ms)
    }

    /// Fade while growing from 90% size
    pub fn scale_in(duration_ms: u32) -> MotionAnimation {
        MotionAnimation::new("motion-scale-in", duration_ms)
            .from(MotionProperties::opacity(0.0).with_scale(0.9))
            .to(MotionProperties::opacity(1.0).with_scale(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names_encode_delay() {
        assert_eq!(MotionPreset::fade_in(200).name(), "motion-fade-in-200");
        assert_eq!(MotionPreset::rise_in(500).name(), "motion-rise-in-500");
    }

    #[test]
    fn presets_end_fully_visible() {
        for motion in [
            MotionPreset::nav_drop_in(),
            MotionPreset::fade_in(0),
            MotionPreset::slide_in_left(300),
            MotionPreset::rise_in(500),
            MotionPreset::scale_in(800),
        ] {
            let end = motion.sample(10_000.0);
            assert_eq!(end.opacity, Some(1.0), "{}", motion.name());
        }
    }
}
