//! Multi-property entrance motion
//!
//! Describes an element animating from one set of visual properties to
//! another (opacity, translation, scale), with a delay and easing. The page is
//! static markup, so a motion is rendered to a CSS `@keyframes` rule plus the
//! `animation` shorthand that references it.

use crate::easing::Easing;
use crate::keyframe::Iterations;
use std::fmt::Write as _;

/// Properties that can be animated together
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MotionProperties {
    /// Opacity (0.0 to 1.0)
    pub opacity: Option<f32>,
    /// Translation X in pixels
    pub translate_x: Option<f32>,
    /// Translation Y in pixels
    pub translate_y: Option<f32>,
    /// Uniform scale factor
    pub scale: Option<f32>,
}

impl MotionProperties {
    pub fn opacity(value: f32) -> Self {
        Self {
            opacity: Some(value),
            ..Default::default()
        }
    }

    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            translate_x: Some(x),
            translate_y: Some(y),
            ..Default::default()
        }
    }

    pub fn with_opacity(mut self, value: f32) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn with_translate_x(mut self, px: f32) -> Self {
        self.translate_x = Some(px);
        self
    }

    pub fn with_translate_y(mut self, px: f32) -> Self {
        self.translate_y = Some(px);
        self
    }

    pub fn with_scale(mut self, value: f32) -> Self {
        self.scale = Some(value);
        self
    }

    /// Interpolate between two property sets
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            opacity: lerp_opt(self.opacity, other.opacity, t),
            translate_x: lerp_opt(self.translate_x, other.translate_x, t),
            translate_y: lerp_opt(self.translate_y, other.translate_y, t),
            scale: lerp_opt(self.scale, other.scale, t),
        }
    }

    /// CSS declarations for this frame, e.g. `opacity: 0; transform: translateY(-100px)`
    pub fn css_declarations(&self) -> String {
        let mut decls = Vec::new();
        if let Some(opacity) = self.opacity {
            decls.push(format!("opacity: {opacity}"));
        }

        let mut transforms = Vec::new();
        if self.translate_x.is_some() || self.translate_y.is_some() {
            transforms.push(format!(
                "translate({}px, {}px)",
                self.translate_x.unwrap_or(0.0),
                self.translate_y.unwrap_or(0.0)
            ));
        }
        if let Some(scale) = self.scale {
            transforms.push(format!("scale({scale})"));
        }
        if !transforms.is_empty() {
            decls.push(format!("transform: {}", transforms.join(" ")));
        }

        decls.join("; ")
    }
}

fn lerp_opt(a: Option<f32>, b: Option<f32>, t: f32) -> Option<f32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a + (b - a) * t),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// A named from/to motion with timing
#[derive(Clone, Debug, PartialEq)]
pub struct MotionAnimation {
    name: String,
    duration_ms: u32,
    delay_ms: u32,
    easing: Easing,
    iterations: Iterations,
    from: MotionProperties,
    to: MotionProperties,
}

impl MotionAnimation {
    pub fn new(name: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            name: name.into(),
            duration_ms,
            delay_ms: 0,
            easing: Easing::EaseOut,
            iterations: Iterations::Finite(1),
            from: MotionProperties::default(),
            to: MotionProperties::default(),
        }
    }

    pub fn from(mut self, properties: MotionProperties) -> Self {
        self.from = properties;
        self
    }

    pub fn to(mut self, properties: MotionProperties) -> Self {
        self.to = properties;
        self
    }

    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn iterations(mut self, iterations: Iterations) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Properties after `elapsed_ms` since mount (delay included)
    pub fn sample(&self, elapsed_ms: f64) -> MotionProperties {
        let local = elapsed_ms - self.delay_ms as f64;
        if local <= 0.0 {
            return self.from.clone();
        }
        let t = (local / self.duration_ms.max(1) as f64).min(1.0) as f32;
        self.from.lerp(&self.to, self.easing.apply(t))
    }

    /// The `@keyframes` rule for this motion
    pub fn css_keyframes(&self) -> String {
        let mut css = String::new();
        let _ = write!(
            css,
            "@keyframes {} {{ from {{ {}; }} to {{ {}; }} }}",
            self.name,
            self.from.css_declarations(),
            self.to.css_declarations()
        );
        css
    }

    /// Value for the CSS `animation` shorthand
    pub fn css_animation(&self) -> String {
        format!(
            "{} {}ms {} {}ms {} both",
            self.name,
            self.duration_ms,
            self.easing.css(),
            self.delay_ms,
            self.iterations.css()
        )
    }

    /// Class rule `.{name} { animation: ... }` that applies the motion
    pub fn css_class_rule(&self) -> String {
        format!(".{} {{ animation: {}; }}", self.name, self.css_animation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop_in() -> MotionAnimation {
        MotionAnimation::new("nav-drop-in", 800)
            .from(MotionProperties::translate(0.0, -100.0).with_opacity(0.0))
            .to(MotionProperties::translate(0.0, 0.0).with_opacity(1.0))
            .easing(Easing::Linear)
    }

    #[test]
    fn keyframes_rule() {
        assert_eq!(
            drop_in().css_keyframes(),
            "@keyframes nav-drop-in { from { opacity: 0; transform: translate(0px, -100px); } \
             to { opacity: 1; transform: translate(0px, 0px); } }"
        );
    }

    #[test]
    fn animation_shorthand() {
        assert_eq!(
            drop_in().delay(200).css_animation(),
            "nav-drop-in 800ms linear 200ms 1 both"
        );
    }

    #[test]
    fn sample_respects_delay() {
        let motion = drop_in().delay(100);
        assert_eq!(motion.sample(50.0).opacity, Some(0.0));
        assert_eq!(motion.sample(500.0).opacity, Some(0.5));
        assert_eq!(motion.sample(5_000.0).translate_y, Some(0.0));
    }
}
