//! Transition state for the segmented switch.
//!
//! At most one transition runs at a time. A tap during a running transition
//! restarts from the last committed active index (queue-of-one, last tap
//! wins); transitions are short enough that no cancellation API is needed.

use std::time::{Duration, Instant};

use kalike_core::SwitchConfig;

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, progress};

/// One transition between two segment indices
#[derive(Debug, Clone)]
struct ActiveTransition {
    start: Instant,
    from_index: usize,
    to_index: usize,
    duration: Duration,
    easing: EasingType,
}

/// Snapshot of the running transition for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSample {
    pub from_index: usize,
    pub to_index: usize,
    /// Eased progress, clamped to [0, 1], monotonically non-decreasing
    /// within one transition
    pub progress: f64,
}

/// Drives pill transitions over time.
///
/// Call [`begin`](Self::begin) when the selection changes, then
/// [`sample`](Self::sample) every frame for the current eased progress and
/// [`update`](Self::update) to retire completed transitions.
#[derive(Debug, Clone)]
pub struct SwitchAnimator {
    transition: Option<ActiveTransition>,
    enabled: bool,
    duration: Duration,
    easing: EasingType,
}

impl SwitchAnimator {
    pub fn new(config: &SwitchConfig) -> Self {
        Self {
            transition: None,
            enabled: config.animation_enabled && config.animation_duration_ms > 0,
            duration: Duration::from_millis(config.animation_duration_ms),
            easing: config.easing,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Start a transition between two differing indices.
    ///
    /// Resets progress to zero. When animation is disabled this is a no-op
    /// and the pill snaps to the target.
    pub fn begin(&mut self, from_index: usize, to_index: usize) {
        if from_index == to_index || !self.enabled {
            self.transition = None;
            return;
        }
        self.transition = Some(ActiveTransition {
            start: Instant::now(),
            from_index,
            to_index,
            duration: self.duration,
            easing: self.easing,
        });
    }

    /// Eased progress of the running transition, if any
    pub fn sample(&self) -> Option<TransitionSample> {
        self.transition.as_ref().map(|t| TransitionSample {
            from_index: t.from_index,
            to_index: t.to_index,
            progress: t.easing.apply(progress(t.start, t.duration)),
        })
    }

    /// Retire the transition once it has run to completion.
    ///
    /// Returns true while a transition is still running (the caller should
    /// keep ticking at the animation frame rate).
    pub fn update(&mut self) -> bool {
        if let Some(t) = &self.transition {
            if is_complete(t.start, t.duration) {
                self.transition = None;
            }
        }
        self.transition.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(duration_ms: u64) -> SwitchConfig {
        SwitchConfig {
            animation_duration_ms: duration_ms,
            easing: EasingType::Linear,
            ..Default::default()
        }
    }

    #[test]
    fn test_begin_starts_transition() {
        let mut animator = SwitchAnimator::new(&config(400));
        animator.begin(0, 1);
        assert!(animator.is_animating());

        let sample = animator.sample().unwrap();
        assert_eq!(sample.from_index, 0);
        assert_eq!(sample.to_index, 1);
        assert!(sample.progress < 0.5);
    }

    #[test]
    fn test_same_index_is_not_a_transition() {
        let mut animator = SwitchAnimator::new(&config(400));
        animator.begin(1, 1);
        assert!(!animator.is_animating());
        assert!(animator.sample().is_none());
    }

    #[test]
    fn test_disabled_animation_snaps() {
        let disabled = SwitchConfig {
            animation_enabled: false,
            ..Default::default()
        };
        let mut animator = SwitchAnimator::new(&disabled);
        animator.begin(0, 1);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut animator = SwitchAnimator::new(&config(0));
        animator.begin(0, 1);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_update_retires_completed_transition() {
        let mut animator = SwitchAnimator::new(&config(1));
        animator.begin(0, 1);
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(animator.sample().unwrap().progress, 1.0);
        assert!(!animator.update());
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_progress_monotonic_within_transition() {
        let mut animator = SwitchAnimator::new(&config(20));
        animator.begin(0, 1);
        let mut prev = 0.0;
        for _ in 0..10 {
            std::thread::sleep(Duration::from_millis(3));
            if let Some(sample) = animator.sample() {
                assert!(sample.progress >= prev);
                prev = sample.progress;
            }
        }
    }

    #[test]
    fn test_new_transition_replaces_running_one() {
        let mut animator = SwitchAnimator::new(&config(400));
        animator.begin(0, 1);
        animator.begin(1, 2);
        let sample = animator.sample().unwrap();
        assert_eq!(sample.from_index, 1);
        assert_eq!(sample.to_index, 2);
        assert!(sample.progress < 0.5, "new transition must restart at 0");
    }
}
