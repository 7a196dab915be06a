//! Per-finger extended-state extraction.
//!
//! Non-thumb fingers use an orientation-invariant test: a finger is
//! extended when its tip is farther from the wrist than its PIP joint.
//! This keeps working when the hand is tilted, where the naive
//! tip-above-PIP y comparison breaks down.  The thumb gets its own
//! two-part test (away from the palm AND laterally abducted), with the
//! abduction direction mirrored by handedness.

use serde::Serialize;

use crate::config::GestureConfig;
use crate::geometry::distance;
use crate::landmark::{Hand, HandLandmark, Handedness};

/// Extended/folded state per finger, recomputed every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FingerState {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerState {
    /// Number of extended fingers (0-5).
    pub fn extended_count(&self) -> u8 {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
            .iter()
            .filter(|&&up| up)
            .count() as u8
    }

    /// Whether all five fingers are folded.
    pub fn all_folded(&self) -> bool {
        self.extended_count() == 0
    }

    /// Whether all five fingers are extended.
    pub fn all_extended(&self) -> bool {
        self.extended_count() == 5
    }
}

/// Derive the five finger states from a validated hand.
pub fn extract(hand: &Hand, handedness: Handedness, config: &GestureConfig) -> FingerState {
    let [(index_tip, index_pip), (middle_tip, middle_pip), (ring_tip, ring_pip), (pinky_tip, pinky_pip)] =
        HandLandmark::finger_tip_pip_pairs();

    FingerState {
        thumb: thumb_extended(hand, handedness, config),
        index: finger_extended(hand, index_tip, index_pip, config),
        middle: finger_extended(hand, middle_tip, middle_pip, config),
        ring: finger_extended(hand, ring_tip, ring_pip, config),
        pinky: finger_extended(hand, pinky_tip, pinky_pip, config),
    }
}

/// Orientation-invariant extension test for a non-thumb finger.
fn finger_extended(
    hand: &Hand,
    tip: HandLandmark,
    pip: HandLandmark,
    config: &GestureConfig,
) -> bool {
    let wrist = hand.point(HandLandmark::Wrist);
    let tip_dist = distance(hand.point(tip), wrist);
    let pip_dist = distance(hand.point(pip), wrist);
    tip_dist > config.finger_extended_ratio * pip_dist
}

/// Thumb extension: away from the palm AND abducted past the index MCP.
///
/// A vertical-position test would misclassify a sideways-pointing thumb,
/// which is a valid open state distinct from thumbs-up/down.  Abduction
/// is signed: for a right hand facing the camera (mirrored webcam view)
/// the thumb opens toward smaller x, for a left hand toward larger x.
fn thumb_extended(hand: &Hand, handedness: Handedness, config: &GestureConfig) -> bool {
    let span = hand.reference_span();
    let tip = hand.point(HandLandmark::ThumbTip);
    let mcp = hand.point(HandLandmark::ThumbMcp);
    let index_mcp = hand.point(HandLandmark::IndexMcp);

    let away = distance(tip, mcp) > config.thumb_extended_ratio * span;

    let lateral = match handedness {
        Handedness::Right => index_mcp.x - tip.x,
        Handedness::Left => tip.x - index_mcp.x,
    };
    let abducted = lateral > config.thumb_lateral_ratio * span;

    away && abducted
}

// ── Tests ──────────────────────────────────────────────────
