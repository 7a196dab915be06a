//! Frame-delta motion gestures: swipe and zoom.
//!
//! Both compare the current frame against the immediately preceding one —
//! index-tip horizontal travel for swipes, thumb-index span change for
//! zooms — scaled by the reference span like every other threshold.
//! A motion gesture is a one-frame event with no hysteresis of its own;
//! the detector's only state is the previous frame sample, owned
//! explicitly here rather than in a module-level slot.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::config::GestureConfig;
use crate::geometry::distance;
use crate::landmark::{Hand, HandLandmark};

/// One-frame motion gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotionGesture {
    SwipeLeft,
    SwipeRight,
    /// Thumb and index spreading apart.
    ZoomIn,
    /// Thumb and index closing together.
    ZoomOut,
}

impl fmt::Display for MotionGesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SwipeLeft => write!(f, "swipe-left"),
            Self::SwipeRight => write!(f, "swipe-right"),
            Self::ZoomIn => write!(f, "zoom-in"),
            Self::ZoomOut => write!(f, "zoom-out"),
        }
    }
}

/// Measurements kept from the previous frame.
#[derive(Debug, Clone, Copy)]
struct MotionSample {
    index_tip_x: f32,
    pinch_span: f32,
}

/// Swipe/zoom detector.  Must be `reset` whenever the hand is lost so a
/// reappearing hand never diffs against a stale frame.
#[derive(Debug, Default)]
pub struct MotionDetector {
    prev: Option<MotionSample>,
}

impl MotionDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe one frame; returns a motion gesture if this frame's delta
    /// against the previous frame crosses a threshold.  Swipe wins over
    /// zoom when both would fire.
    pub fn observe(&mut self, hand: &Hand, config: &GestureConfig) -> Option<MotionGesture> {
        let span = hand.reference_span();
        let sample = MotionSample {
            index_tip_x: hand.point(HandLandmark::IndexTip).x,
            pinch_span: distance(
                hand.point(HandLandmark::ThumbTip),
                hand.point(HandLandmark::IndexTip),
            ),
        };
        let prev = self.prev.replace(sample);
        let prev = prev?;

        let dx = sample.index_tip_x - prev.index_tip_x;
        if dx.abs() > config.swipe_ratio * span {
            let gesture = if dx > 0.0 {
                MotionGesture::SwipeRight
            } else {
                MotionGesture::SwipeLeft
            };
            debug!("swipe: dx={:.3} span={:.3} -> {}", dx, span, gesture);
            return Some(gesture);
        }

        let dspan = sample.pinch_span - prev.pinch_span;
        if dspan.abs() > config.zoom_ratio * span {
            let gesture = if dspan > 0.0 {
                MotionGesture::ZoomIn
            } else {
                MotionGesture::ZoomOut
            };
            debug!("zoom: dspan={:.3} span={:.3} -> {}", dspan, span, gesture);
            return Some(gesture);
        }

        None
    }

    /// Drop the previous-frame sample (hand lost or session restart).
    pub fn reset(&mut self) {
        self.prev = None;
    }
}

// ── Tests ──────────────────────────────────────────────────
