//! Folio Animation System
//!
//! Declarative animation parameters for the portfolio page.
//!
//! # Features
//!
//! - **Keyframe Animations**: timed sequences with easing, finite or infinite
//! - **Motion Presets**: entrance animations (drop-in, fade, slide, scale)
//!   that render to CSS `@keyframes`
//! - **Scheduler**: ticks every registered animation once per frame
//! - **Marquee**: the seamless, endlessly scrolling skills strip

pub mod easing;
pub mod error;
pub mod keyframe;
pub mod marquee;
pub mod motion;
pub mod presets;
pub mod scheduler;

pub use easing::Easing;
pub use error::AnimationError;
pub use keyframe::{Iterations, Keyframe, KeyframeAnimation};
pub use marquee::{MarqueeAnimator, MarqueeConfig};
pub use motion::{MotionAnimation, MotionProperties};
pub use presets::MotionPreset;
pub use scheduler::{AnimationId, AnimationScheduler};
