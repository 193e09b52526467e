//! Keyframe animations
//!
//! A single animated value sampled from keyframes placed on a normalized
//! 0..1 timeline. Animations can run a fixed number of iterations or loop
//! forever; elapsed time is kept in f64 so an endless loop does not drift.

use crate::easing::Easing;

/// A single keyframe in a single-value animation
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe {
    /// Time position (0.0 to 1.0)
    pub time: f32,
    /// Target value at this keyframe
    pub value: f32,
    /// Easing function to use when transitioning TO this keyframe
    pub easing: Easing,
}

impl Keyframe {
    pub fn new(time: f32, value: f32, easing: Easing) -> Self {
        Self {
            time,
            value,
            easing,
        }
    }
}

/// How many times an animation plays
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Iterations {
    Finite(u32),
    Infinite,
}

impl Iterations {
    /// CSS `animation-iteration-count` value
    pub fn css(&self) -> String {
        match self {
            Iterations::Finite(n) => n.to_string(),
            Iterations::Infinite => "infinite".to_string(),
        }
    }
}

impl Default for Iterations {
    fn default() -> Self {
        Iterations::Finite(1)
    }
}

/// A keyframe-based animation (single value)
#[derive(Clone, Debug)]
pub struct KeyframeAnimation {
    duration_ms: u32,
    keyframes: Vec<Keyframe>,
    iterations: Iterations,
    elapsed_ms: f64,
    playing: bool,
}

impl KeyframeAnimation {
    /// Keyframes are sorted by time on construction
    pub fn new(duration_ms: u32, mut keyframes: Vec<Keyframe>) -> Self {
        keyframes.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self {
            duration_ms: duration_ms.max(1),
            keyframes,
            iterations: Iterations::default(),
            elapsed_ms: 0.0,
            playing: false,
        }
    }

    /// Straight line from `from` to `to` over one iteration
    pub fn linear(duration_ms: u32, from: f32, to: f32) -> Self {
        Self::new(
            duration_ms,
            vec![
                Keyframe::new(0.0, from, Easing::Linear),
                Keyframe::new(1.0, to, Easing::Linear),
            ],
        )
    }

    pub fn with_iterations(mut self, iterations: Iterations) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn iterations(&self) -> Iterations {
        self.iterations
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Fraction of the current iteration (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        self.progress_at(self.elapsed_ms)
    }

    /// Iterations fully played so far
    pub fn completed_iterations(&self) -> u64 {
        (self.elapsed_ms / self.duration_ms as f64).floor() as u64
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        self.sample(self.progress())
    }

    /// Value after `elapsed_ms` of playback, independent of internal state
    pub fn value_at(&self, elapsed_ms: f64) -> f32 {
        self.sample(self.progress_at(elapsed_ms))
    }

    fn progress_at(&self, elapsed_ms: f64) -> f32 {
        let duration = self.duration_ms as f64;
        let elapsed = elapsed_ms.max(0.0);
        match self.iterations {
            Iterations::Infinite => ((elapsed % duration) / duration) as f32,
            Iterations::Finite(n) => {
                let total = duration * n as f64;
                if elapsed >= total {
                    return 1.0;
                }
                ((elapsed % duration) / duration) as f32
            }
        }
    }

    /// Interpolate the keyframes at a normalized position
    pub fn sample(&self, progress: f32) -> f32 {
        let Some(first) = self.keyframes.first() else {
            return 0.0;
        };
        let progress = progress.clamp(0.0, 1.0);

        // Find surrounding keyframes
        let mut prev_kf = first;
        let mut next_kf = first;
        for kf in &self.keyframes {
            if kf.time <= progress {
                prev_kf = kf;
            }
            if kf.time >= progress {
                next_kf = kf;
                break;
            }
        }

        if (prev_kf.time - next_kf.time).abs() < f32::EPSILON {
            return prev_kf.value;
        }

        let local_progress = (progress - prev_kf.time) / (next_kf.time - prev_kf.time);
        let eased = next_kf.easing.apply(local_progress);

        prev_kf.value + (next_kf.value - prev_kf.value) * eased
    }

    /// Advance the animation by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f64) {
        if !self.playing {
            return;
        }

        self.elapsed_ms += dt_ms.max(0.0);

        if let Iterations::Finite(n) = self.iterations {
            let total = self.duration_ms as f64 * n as f64;
            if self.elapsed_ms >= total {
                self.elapsed_ms = total;
                self.playing = false;
            }
        }
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_between_keyframes() {
        let anim = KeyframeAnimation::new(
            1000,
            vec![
                Keyframe::new(0.0, 0.0, Easing::Linear),
                Keyframe::new(0.5, 100.0, Easing::Linear),
                Keyframe::new(1.0, 50.0, Easing::Linear),
            ],
        );
        assert_eq!(anim.sample(0.25), 50.0);
        assert_eq!(anim.sample(0.5), 100.0);
        assert_eq!(anim.sample(0.75), 75.0);
    }

    #[test]
    fn finite_animation_stops_at_end() {
        let mut anim = KeyframeAnimation::linear(400, 0.0, 1.0);
        anim.start();
        anim.tick(300.0);
        assert!(anim.is_playing());
        anim.tick(300.0);
        assert!(!anim.is_playing());
        assert_eq!(anim.value(), 1.0);
    }

    #[test]
    fn infinite_animation_wraps() {
        let mut anim =
            KeyframeAnimation::linear(1000, 0.0, -50.0).with_iterations(Iterations::Infinite);
        anim.start();
        for _ in 0..25 {
            anim.tick(100.0);
        }
        assert!(anim.is_playing());
        assert_eq!(anim.completed_iterations(), 2);
        assert!((anim.value() - -25.0).abs() < 1e-3);
    }

    #[test]
    fn stopped_animation_ignores_ticks() {
        let mut anim = KeyframeAnimation::linear(100, 0.0, 1.0);
        anim.tick(50.0);
        assert_eq!(anim.elapsed_ms(), 0.0);
    }

    #[test]
    fn iteration_count_css() {
        assert_eq!(Iterations::Infinite.css(), "infinite");
        assert_eq!(Iterations::Finite(3).css(), "3");
    }
}
