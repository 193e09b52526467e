//! Animation scheduler
//!
//! Holds every running keyframe animation on the page and advances them
//! together once per frame. The host supplies the frame delta.

use crate::keyframe::KeyframeAnimation;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct AnimationId;
}

/// The animation scheduler that ticks all active animations
#[derive(Default)]
pub struct AnimationScheduler {
    animations: SlotMap<AnimationId, KeyframeAnimation>,
    elapsed_ms: f64,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register and start an animation
    pub fn add(&mut self, mut animation: KeyframeAnimation) -> AnimationId {
        animation.start();
        self.animations.insert(animation)
    }

    pub fn get(&self, id: AnimationId) -> Option<&KeyframeAnimation> {
        self.animations.get(id)
    }

    pub fn remove(&mut self, id: AnimationId) -> Option<KeyframeAnimation> {
        self.animations.remove(id)
    }

    /// Current value of an animation
    pub fn value(&self, id: AnimationId) -> Option<f32> {
        self.animations.get(id).map(KeyframeAnimation::value)
    }

    /// Tick all animations
    pub fn tick(&mut self, dt_ms: f64) {
        self.elapsed_ms += dt_ms;
        for (_, animation) in self.animations.iter_mut() {
            animation.tick(dt_ms);
        }
        tracing::trace!(dt_ms, elapsed_ms = self.elapsed_ms, "animations ticked");
    }

    /// Total time the scheduler has been ticked
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        self.animations.values().any(KeyframeAnimation::is_playing)
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyframe::Iterations;

    #[test]
    fn ticks_every_animation() {
        let mut scheduler = AnimationScheduler::new();
        let once = scheduler.add(KeyframeAnimation::linear(100, 0.0, 10.0));
        let forever = scheduler.add(
            KeyframeAnimation::linear(100, 0.0, 10.0).with_iterations(Iterations::Infinite),
        );

        scheduler.tick(150.0);

        assert_eq!(scheduler.value(once), Some(10.0));
        assert_eq!(scheduler.value(forever), Some(5.0));
        assert!(scheduler.has_active_animations());

        scheduler.remove(forever);
        assert!(!scheduler.has_active_animations());
        assert_eq!(scheduler.len(), 1);
    }
}
