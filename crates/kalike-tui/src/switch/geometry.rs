//! Pure pill geometry resolver.
//!
//! Maps `(from box, to box, progress)` to the pill's current position,
//! width and opacity. Moving right, the pill holds its left edge and
//! stretches across the full span for the first half of the transition,
//! then slides and contracts onto the target for the second half. Moving
//! left is the mirror image: the leading edge advances first. All
//! interpolation is piecewise linear between progress 0, 0.5 and 1.
//!
//! This function must stay free of side effects: it is re-evaluated every
//! frame tick with whatever progress the animator currently reports.

use super::layout::SegmentBox;
use super::timing::lerp;

/// Progress point where stretching ends and settling begins
const STRETCH_MIDPOINT: f64 = 0.5;

/// Resolved pill geometry for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillGeometry {
    pub x: f64,
    pub width: f64,
    /// 1.0 when the pill has any width, 0.0 for degenerate zero-width boxes
    pub opacity: f64,
}

/// Piecewise-linear interpolation over control points at progress 0, 0.5, 1
#[inline]
fn interpolate3(progress: f64, stops: [f64; 3]) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    if p <= STRETCH_MIDPOINT {
        lerp(stops[0], stops[1], p / STRETCH_MIDPOINT)
    } else {
        lerp(stops[1], stops[2], (p - STRETCH_MIDPOINT) / STRETCH_MIDPOINT)
    }
}

/// Resolve the pill for a transition from `from` to `to` at `progress`.
///
/// Boundary guarantees: at progress 0 the pill equals `from` exactly, at
/// progress 1 it equals `to` exactly.
pub fn resolve(from: SegmentBox, to: SegmentBox, progress: f64) -> PillGeometry {
    // No horizontal movement: nothing to interpolate.
    if from.x == to.x {
        return PillGeometry {
            x: to.x,
            width: to.width,
            opacity: opacity_for(to.width),
        };
    }

    let (x, width) = if to.x > from.x {
        // Moving right: hold x, stretch width to cover the span, then slide
        // x over while the width contracts onto the target.
        let x = interpolate3(progress, [from.x, from.x, to.x]);
        let width = interpolate3(progress, [from.width, to.x + to.width - from.x, to.width]);
        (x, width)
    } else {
        // Moving left: leading edge advances first, then the tail catches up.
        let x = interpolate3(progress, [from.x, to.x, to.x]);
        let width = interpolate3(progress, [from.width, from.x + from.width - to.x, to.width]);
        (x, width)
    };

    PillGeometry {
        x,
        width,
        opacity: opacity_for(width),
    }
}

#[inline]
fn opacity_for(width: f64) -> f64 {
    if width > 0.0 {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Measured boxes from a 300-wide container, inset 24:
    // segment 0 = (12, 126), segment 1 = (162, 126)
    fn seg0() -> SegmentBox {
        SegmentBox::new(0.0, 150.0).inset(24.0)
    }

    fn seg1() -> SegmentBox {
        SegmentBox::new(150.0, 150.0).inset(24.0)
    }

    #[test]
    fn test_inset_boxes() {
        assert_eq!(seg0(), SegmentBox::new(12.0, 126.0));
        assert_eq!(seg1(), SegmentBox::new(162.0, 126.0));
    }

    #[test]
    fn test_boundary_exactness_moving_right() {
        let start = resolve(seg0(), seg1(), 0.0);
        assert_eq!(start.x, 12.0);
        assert_eq!(start.width, 126.0);

        let end = resolve(seg0(), seg1(), 1.0);
        assert_eq!(end.x, 162.0);
        assert_eq!(end.width, 126.0);
        assert_eq!(end.opacity, 1.0);
    }

    #[test]
    fn test_boundary_exactness_moving_left() {
        let start = resolve(seg1(), seg0(), 0.0);
        assert_eq!(start.x, 162.0);
        assert_eq!(start.width, 126.0);

        let end = resolve(seg1(), seg0(), 1.0);
        assert_eq!(end.x, 12.0);
        assert_eq!(end.width, 126.0);
    }

    #[test]
    fn test_full_stretch_at_midpoint_moving_right() {
        // x holds at 12 while width spans to the far edge of the target:
        // 162 + 126 - 12 = 276
        let mid = resolve(seg0(), seg1(), 0.5);
        assert!((mid.x - 12.0).abs() < 1e-9);
        assert!((mid.width - 276.0).abs() < 1e-9);
    }

    #[test]
    fn test_full_stretch_at_midpoint_moving_left() {
        // Mirror image: x has arrived at 12, width spans 162+126-12 = 276
        let mid = resolve(seg1(), seg0(), 0.5);
        assert!((mid.x - 12.0).abs() < 1e-9);
        assert!((mid.width - 276.0).abs() < 1e-9);
    }

    #[test]
    fn test_monotonicity_moving_right() {
        let mut prev_x = f64::NEG_INFINITY;
        let mut prev_width = f64::NEG_INFINITY;
        for i in 0..=10 {
            let p = i as f64 / 20.0; // [0, 0.5]
            let pill = resolve(seg0(), seg1(), p);
            assert!(pill.x >= prev_x, "x not non-decreasing at p={p}");
            assert!(pill.width >= prev_width, "width shrank during stretch at p={p}");
            prev_x = pill.x;
            prev_width = pill.width;
        }
        for i in 10..=20 {
            let p = i as f64 / 20.0; // [0.5, 1]
            let pill = resolve(seg0(), seg1(), p);
            assert!(pill.x >= prev_x, "x not non-decreasing at p={p}");
            assert!(pill.width <= prev_width, "width grew during settle at p={p}");
            prev_x = pill.x;
            prev_width = pill.width;
        }
    }

    #[test]
    fn test_monotonicity_moving_left() {
        let mut prev_x = f64::INFINITY;
        let mut prev_width = f64::NEG_INFINITY;
        for i in 0..=10 {
            let p = i as f64 / 20.0;
            let pill = resolve(seg1(), seg0(), p);
            assert!(pill.x <= prev_x, "x not non-increasing at p={p}");
            assert!(pill.width >= prev_width, "width shrank during stretch at p={p}");
            prev_x = pill.x;
            prev_width = pill.width;
        }
        for i in 10..=20 {
            let p = i as f64 / 20.0;
            let pill = resolve(seg1(), seg0(), p);
            assert!(pill.x <= prev_x, "x not non-increasing at p={p}");
            assert!(pill.width <= prev_width, "width grew during settle at p={p}");
            prev_x = pill.x;
            prev_width = pill.width;
        }
    }

    #[test]
    fn test_same_position_skips_interpolation() {
        let pill = resolve(seg1(), seg1(), 0.3);
        assert_eq!(pill.x, 162.0);
        assert_eq!(pill.width, 126.0);
        assert_eq!(pill.opacity, 1.0);
    }

    #[test]
    fn test_progress_clamped_outside_range() {
        assert_eq!(resolve(seg0(), seg1(), -1.0), resolve(seg0(), seg1(), 0.0));
        assert_eq!(resolve(seg0(), seg1(), 2.0), resolve(seg0(), seg1(), 1.0));
    }

    #[test]
    fn test_zero_width_boxes_are_invisible() {
        let degenerate = SegmentBox::new(5.0, 0.0);
        let pill = resolve(degenerate, degenerate, 1.0);
        assert_eq!(pill.opacity, 0.0);
    }
}
