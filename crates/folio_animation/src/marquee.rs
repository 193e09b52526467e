//! Infinite marquee
//!
//! The skills strip is rendered as `copies` identical runs of the skill list
//! laid side by side. A linear, endlessly repeating animation shifts the strip
//! left by exactly one copy's width and then starts over; because the next
//! copy sits where the first one began, the restart is invisible.
//!
//! Offsets are expressed as a percentage of the whole strip's width (what
//! CSS `translateX(%)` measures), so one copy is `100 / copies` percent.

use crate::easing::Easing;
use crate::error::AnimationError;
use crate::keyframe::{Iterations, Keyframe, KeyframeAnimation};

/// Duplication and speed of a marquee
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarqueeConfig {
    /// Number of times the content is repeated in the strip
    pub copies: usize,
    /// Time to scroll by one copy's width
    pub duration_ms: u32,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            copies: 2,
            duration_ms: 20_000,
        }
    }
}

/// Drives the endless horizontal scroll of a duplicated strip
#[derive(Clone, Debug)]
pub struct MarqueeAnimator {
    config: MarqueeConfig,
    animation: KeyframeAnimation,
}

impl MarqueeAnimator {
    pub fn new(config: MarqueeConfig) -> Result<Self, AnimationError> {
        if config.copies < 2 {
            return Err(AnimationError::InsufficientCopies {
                copies: config.copies,
            });
        }
        if config.duration_ms == 0 {
            return Err(AnimationError::ZeroDuration);
        }

        let shift = 100.0 / config.copies as f32;
        let animation = KeyframeAnimation::new(
            config.duration_ms,
            vec![
                Keyframe::new(0.0, 0.0, Easing::Linear),
                Keyframe::new(1.0, -shift, Easing::Linear),
            ],
        )
        .with_iterations(Iterations::Infinite);

        Ok(Self { config, animation })
    }

    pub fn config(&self) -> MarqueeConfig {
        self.config
    }

    pub fn copies(&self) -> usize {
        self.config.copies
    }

    pub fn duration_ms(&self) -> u32 {
        self.config.duration_ms
    }

    /// One copy's width as a percentage of the strip
    pub fn shift_percent(&self) -> f32 {
        100.0 / self.config.copies as f32
    }

    /// The rendered strip: every item `copies` times, input order kept
    pub fn strip<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let mut strip = Vec::with_capacity(items.len() * self.config.copies);
        for _ in 0..self.config.copies {
            strip.extend_from_slice(items);
        }
        strip
    }

    /// Horizontal offset after `elapsed_ms`, in percent of the strip (always <= 0)
    pub fn offset_percent(&self, elapsed_ms: f64) -> f32 {
        self.animation.value_at(elapsed_ms)
    }

    /// Horizontal offset in pixels for a given copy width
    pub fn offset_px(&self, elapsed_ms: f64, copy_width: f32) -> f32 {
        self.offset_percent(elapsed_ms) / self.shift_percent() * copy_width
    }

    /// Whether the strip always fills the viewport while shifted by one copy
    pub fn covers_viewport(&self, copy_width: f32, viewport_width: f32) -> bool {
        (self.config.copies as f32 - 1.0) * copy_width >= viewport_width
    }

    /// The looping animation, ready to hand to a scheduler
    pub fn animation(&self) -> KeyframeAnimation {
        self.animation.clone()
    }

    /// CSS `@keyframes` rule equivalent to this animator
    pub fn css_keyframes(&self, name: &str) -> String {
        format!(
            "@keyframes {name} {{ from {{ transform: translateX(0%); }} to {{ transform: translateX(-{}%); }} }}",
            format_percent(self.shift_percent())
        )
    }

    /// Value for the CSS `animation` shorthand
    pub fn css_animation(&self, name: &str) -> String {
        format!(
            "{name} {}ms {} {}",
            self.config.duration_ms,
            Easing::Linear.css(),
            Iterations::Infinite.css()
        )
    }
}

/// Up to four decimals, trailing zeros trimmed (`50`, `33.3333`)
fn format_percent(value: f32) -> String {
    let text = format!("{value:.4}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    text.to_string()
}
