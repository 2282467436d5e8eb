//! Animated segmented-switch control.
//!
//! A row of 2-4 segments with a selection pill that slides between them.
//! The pill motion is a "stretch then settle" effect: on its way to the new
//! segment it first grows to span the distance, then contracts onto the
//! target. Geometry is resolved by a pure function of the two segment boxes
//! and a progress value, so the frame clock driving progress stays fully
//! decoupled from the math.
//!
//! The module is layered from pure math outward:
//!
//! - `easing` - pure easing curves
//! - `timing` - progress and interpolation helpers
//! - `layout` - per-segment measured boxes and the degraded equal-division
//!   fallback used until every segment has been measured
//! - `geometry` - the pure pill resolver
//! - `animation` - the transition state machine sampled per frame
//! - `controller` - selection handling and the public control type
//!
//! # Usage
//!
//! ```ignore
//! use kalike_tui::switch::SegmentedSwitch;
//!
//! let mut switch = SegmentedSwitch::new(
//!     vec!["Vowels".into(), "Consonants".into()],
//!     0,
//!     &config.switch,
//! );
//!
//! // On a tap/keypress:
//! if let Some(event) = switch.select(1) {
//!     println!("now showing {}", event.label);
//! }
//!
//! // Every frame: record measured segment rects, then resolve the pill.
//! switch.record_layout(0, 0.0, 150.0);
//! switch.record_layout(1, 150.0, 150.0);
//! let pill = switch.pill(300.0);
//! ```

pub mod animation;
pub mod controller;
pub mod easing;
pub mod geometry;
pub mod layout;
pub mod timing;

pub use animation::{SwitchAnimator, TransitionSample};
pub use controller::{SegmentedSwitch, SwitchEvent};
pub use easing::{EasingType, EasingTypeExt};
pub use geometry::{resolve, PillGeometry};
pub use layout::{SegmentBox, SegmentLayouts};
