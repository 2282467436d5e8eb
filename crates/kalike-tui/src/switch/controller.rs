//! Selection controller: the public segmented-switch type.
//!
//! Owns the labels, the active/previous indices, the layout tracker and the
//! animator, and turns selection changes into [`SwitchEvent`]s for the host.

use kalike_core::SwitchConfig;

use super::animation::SwitchAnimator;
use super::geometry::{resolve, PillGeometry};
use super::layout::SegmentLayouts;

/// Emitted once per completed selection change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchEvent {
    pub index: usize,
    pub label: String,
}

/// An animated 2-4 segment switch
#[derive(Debug, Clone)]
pub struct SegmentedSwitch {
    labels: Vec<String>,
    active: usize,
    previous: usize,
    layouts: SegmentLayouts,
    animator: SwitchAnimator,
    inset: f64,
}

impl SegmentedSwitch {
    /// Create a switch over `labels` with `initial` selected.
    ///
    /// An out-of-range initial index is clamped to the valid range; this is
    /// a closed, internally driven control, so clamping beats panicking.
    pub fn new(labels: Vec<String>, initial: usize, config: &SwitchConfig) -> Self {
        debug_assert!(!labels.is_empty(), "switch needs at least one segment");
        let count = labels.len();
        let initial = initial.min(count.saturating_sub(1));
        Self {
            labels,
            active: initial,
            previous: initial,
            layouts: SegmentLayouts::new(count),
            animator: SwitchAnimator::new(config),
            inset: config.inset,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn segment_count(&self) -> usize {
        self.labels.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn previous_index(&self) -> usize {
        self.previous
    }

    pub fn active_label(&self) -> &str {
        &self.labels[self.active]
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Select a segment.
    ///
    /// Same index is a no-op returning `None`; out-of-range indices are
    /// clamped. Otherwise the transition starts from the last committed
    /// active index and the event carries the newly active label.
    pub fn select(&mut self, index: usize) -> Option<SwitchEvent> {
        let index = index.min(self.labels.len().saturating_sub(1));
        if index == self.active {
            return None;
        }

        self.previous = self.active;
        self.animator.begin(self.previous, index);
        self.active = index;

        Some(SwitchEvent {
            index,
            label: self.labels[index].clone(),
        })
    }

    /// Cycle to the next segment, wrapping
    pub fn next(&mut self) -> Option<SwitchEvent> {
        self.select((self.active + 1) % self.labels.len())
    }

    /// Cycle to the previous segment, wrapping
    pub fn prev(&mut self) -> Option<SwitchEvent> {
        self.select((self.active + self.labels.len() - 1) % self.labels.len())
    }

    /// Record a segment's measured box, called by the renderer every frame
    pub fn record_layout(&mut self, index: usize, x: f64, width: f64) {
        self.layouts.record(index, x, width);
    }

    /// Forget measurements (segment labels or container changed shape)
    pub fn invalidate_layout(&mut self) {
        self.layouts.clear();
    }

    /// Retire a completed transition; returns true while still animating
    pub fn tick(&mut self) -> bool {
        self.animator.update()
    }

    /// Resolve the pill for the current frame.
    ///
    /// Falls back to equal-division boxes until every segment has been
    /// measured; once measurements are in, uses them with the configured
    /// inset, interpolating while a transition runs.
    pub fn pill(&self, container_width: f64) -> PillGeometry {
        if !self.layouts.all_measured() {
            let fallback = self
                .layouts
                .equal_division(container_width, self.active)
                .inset(self.inset);
            return resolve(fallback, fallback, 1.0);
        }

        if let Some(sample) = self.animator.sample() {
            if let (Some(from), Some(to)) = (
                self.layouts.get(sample.from_index),
                self.layouts.get(sample.to_index),
            ) {
                return resolve(from.inset(self.inset), to.inset(self.inset), sample.progress);
            }
        }

        // At rest: the pill sits exactly on the active segment.
        let active_box = self
            .layouts
            .get(self.active)
            .unwrap_or_else(|| self.layouts.equal_division(container_width, self.active))
            .inset(self.inset);
        resolve(active_box, active_box, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kalike_core::EasingType;

    fn config() -> SwitchConfig {
        SwitchConfig {
            inset: 24.0,
            easing: EasingType::Linear,
            ..Default::default()
        }
    }

    fn two_segments() -> SegmentedSwitch {
        SegmentedSwitch::new(vec!["Vowels".into(), "Consonants".into()], 0, &config())
    }

    #[test]
    fn test_select_emits_event_with_label() {
        let mut switch = two_segments();
        let event = switch.select(1).unwrap();
        assert_eq!(event.index, 1);
        assert_eq!(event.label, "Consonants");
        assert_eq!(switch.active_index(), 1);
        assert_eq!(switch.previous_index(), 0);
        assert!(switch.is_animating());
    }

    #[test]
    fn test_select_same_index_is_noop() {
        let mut switch = two_segments();
        switch.select(1);
        let was_animating = switch.is_animating();

        // Second call with the current index: no event, no state change.
        assert!(switch.select(1).is_none());
        assert_eq!(switch.active_index(), 1);
        assert_eq!(switch.previous_index(), 0);
        assert_eq!(switch.is_animating(), was_animating);
    }

    #[test]
    fn test_out_of_range_select_clamps() {
        let mut switch = two_segments();
        let event = switch.select(99).unwrap();
        assert_eq!(event.index, 1);

        // Clamped to an already-active index: no-op.
        assert!(switch.select(99).is_none());
    }

    #[test]
    fn test_out_of_range_initial_index_clamps() {
        let switch = SegmentedSwitch::new(vec!["a".into(), "b".into()], 7, &config());
        assert_eq!(switch.active_index(), 1);
    }

    #[test]
    fn test_next_prev_wrap() {
        let mut switch =
            SegmentedSwitch::new(vec!["1".into(), "2".into(), "3".into()], 0, &config());
        switch.next();
        switch.next();
        assert_eq!(switch.active_index(), 2);
        switch.next();
        assert_eq!(switch.active_index(), 0);
        switch.prev();
        assert_eq!(switch.active_index(), 2);
    }

    #[test]
    fn test_degraded_pill_before_measurements() {
        // Scenario: container 300, inset 24, segment 0 active
        let switch = two_segments();
        let pill = switch.pill(300.0);
        assert!((pill.x - 12.0).abs() < 1e-9);
        assert!((pill.width - 126.0).abs() < 1e-9);
        assert_eq!(pill.opacity, 1.0);
    }

    #[test]
    fn test_measured_pill_at_rest() {
        let mut switch = two_segments();
        switch.record_layout(0, 0.0, 150.0);
        switch.record_layout(1, 150.0, 150.0);

        let pill = switch.pill(300.0);
        assert!((pill.x - 12.0).abs() < 1e-9);
        assert!((pill.width - 126.0).abs() < 1e-9);
    }

    #[test]
    fn test_pill_lands_on_target_after_transition() {
        let mut switch = SegmentedSwitch::new(
            vec!["Vowels".into(), "Consonants".into()],
            0,
            &SwitchConfig {
                inset: 24.0,
                animation_duration_ms: 1,
                easing: EasingType::Linear,
                ..Default::default()
            },
        );
        switch.record_layout(0, 0.0, 150.0);
        switch.record_layout(1, 150.0, 150.0);

        switch.select(1);
        std::thread::sleep(std::time::Duration::from_millis(5));
        switch.tick();

        let pill = switch.pill(300.0);
        assert!((pill.x - 162.0).abs() < 1e-9);
        assert!((pill.width - 126.0).abs() < 1e-9);
        assert_eq!(pill.opacity, 1.0);
        assert!(!switch.is_animating());
    }

    #[test]
    fn test_partial_measurement_stays_degraded() {
        let mut switch = two_segments();
        switch.record_layout(0, 0.0, 150.0);
        // Segment 1 never measured: equal-division fallback remains.
        let pill = switch.pill(300.0);
        assert!((pill.x - 12.0).abs() < 1e-9);
    }
}
