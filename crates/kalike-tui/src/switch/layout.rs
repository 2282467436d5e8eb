//! Measured segment boxes and the degraded equal-division fallback.
//!
//! Each segment's horizontal offset and width are recorded after the
//! rendering layer lays it out. Until every segment has been measured at
//! least once the control stays in degraded mode, assuming equal widths.

/// A segment's horizontal position and width, in layout units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentBox {
    /// Offset from the start of the container
    pub x: f64,
    pub width: f64,
}

impl SegmentBox {
    pub fn new(x: f64, width: f64) -> Self {
        Self { x, width }
    }

    /// Shrink horizontally by `inset`, centered: the visual pill is slightly
    /// smaller than its segment
    pub fn inset(&self, inset: f64) -> SegmentBox {
        SegmentBox {
            x: self.x + inset / 2.0,
            width: (self.width - inset).max(0.0),
        }
    }
}

/// Layout tracker: one recorded box per segment index
#[derive(Debug, Clone)]
pub struct SegmentLayouts {
    boxes: Vec<Option<SegmentBox>>,
}

impl SegmentLayouts {
    pub fn new(segment_count: usize) -> Self {
        Self {
            boxes: vec![None; segment_count],
        }
    }

    pub fn segment_count(&self) -> usize {
        self.boxes.len()
    }

    /// Record a segment's measured box.
    ///
    /// Out-of-range indices are ignored; measurements are re-reported every
    /// render pass, so nothing is lost. Boxes are overwritten freely, which
    /// is what keeps the tracker correct across resizes.
    pub fn record(&mut self, index: usize, x: f64, width: f64) {
        if let Some(slot) = self.boxes.get_mut(index) {
            *slot = Some(SegmentBox::new(x, width));
        }
    }

    pub fn get(&self, index: usize) -> Option<SegmentBox> {
        self.boxes.get(index).copied().flatten()
    }

    /// True once every segment has been measured at least once; unlocks
    /// precise geometry mode
    pub fn all_measured(&self) -> bool {
        !self.boxes.is_empty() && self.boxes.iter().all(|b| b.is_some())
    }

    /// Degraded-mode box: container width divided equally among segments
    pub fn equal_division(&self, container_width: f64, index: usize) -> SegmentBox {
        let count = self.boxes.len().max(1) as f64;
        let width = container_width / count;
        SegmentBox::new(index as f64 * width, width)
    }

    /// Forget all measurements (e.g. when the segment set changes)
    pub fn clear(&mut self) {
        for slot in &mut self.boxes {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_measured_requires_every_segment() {
        let mut layouts = SegmentLayouts::new(2);
        assert!(!layouts.all_measured());

        layouts.record(0, 0.0, 150.0);
        assert!(!layouts.all_measured());

        layouts.record(1, 150.0, 150.0);
        assert!(layouts.all_measured());
    }

    #[test]
    fn test_out_of_range_record_is_ignored() {
        let mut layouts = SegmentLayouts::new(2);
        layouts.record(5, 0.0, 100.0);
        assert!(!layouts.all_measured());
        assert_eq!(layouts.get(5), None);
    }

    #[test]
    fn test_record_overwrites_on_new_layout_pass() {
        let mut layouts = SegmentLayouts::new(1);
        layouts.record(0, 0.0, 100.0);
        layouts.record(0, 0.0, 80.0);
        assert_eq!(layouts.get(0), Some(SegmentBox::new(0.0, 80.0)));
    }

    #[test]
    fn test_equal_division_two_segments() {
        let layouts = SegmentLayouts::new(2);
        let a = layouts.equal_division(300.0, 0);
        let b = layouts.equal_division(300.0, 1);
        assert_eq!(a, SegmentBox::new(0.0, 150.0));
        assert_eq!(b, SegmentBox::new(150.0, 150.0));
        // Non-overlapping, adjacent
        assert_eq!(a.x + a.width, b.x);
    }

    #[test]
    fn test_equal_division_four_segments() {
        let layouts = SegmentLayouts::new(4);
        let boxes: Vec<SegmentBox> = (0..4).map(|i| layouts.equal_division(400.0, i)).collect();
        for pair in boxes.windows(2) {
            assert_eq!(pair[0].x + pair[0].width, pair[1].x);
        }
        assert_eq!(boxes[3].x + boxes[3].width, 400.0);
    }

    #[test]
    fn test_degraded_box_with_inset_scenario() {
        // ["Vowels", "Consonants"], container 300, inset 24
        let layouts = SegmentLayouts::new(2);
        let pill = layouts.equal_division(300.0, 0).inset(24.0);
        assert!((pill.x - 12.0).abs() < 1e-9);
        assert!((pill.width - 126.0).abs() < 1e-9);
    }

    #[test]
    fn test_inset_never_goes_negative() {
        let narrow = SegmentBox::new(10.0, 3.0).inset(24.0);
        assert_eq!(narrow.width, 0.0);
    }
}
