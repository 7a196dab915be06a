//! Single-frame gesture classification.
//!
//! A priority-ordered rule table over the finger-state vector plus two
//! direct geometric tests (thumb-index pinch span, thumb direction).
//! Classification is total: every valid hand maps to exactly one label,
//! falling back to the extended-finger count.  Rules lower in the chain
//! never fire for a hand that satisfies an earlier rule.

use std::fmt;

use serde::Serialize;

use crate::config::GestureConfig;
use crate::finger::FingerState;
use crate::geometry::distance;
use crate::landmark::{Hand, HandLandmark};

/// Reference spans below this are degenerate (all landmarks collapsed);
/// ratio thresholds are meaningless there, so such frames are Unknown.
const MIN_REFERENCE_SPAN: f32 = 1e-4;

// ── Labels ─────────────────────────────────────────────────

/// The closed set of gesture labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GestureLabel {
    /// All five fingers folded.
    Fist,
    /// All five fingers extended.
    OpenHand,
    /// Index and middle extended, ring and pinky folded.
    Peace,
    /// Thumb extended pointing up, other fingers folded.
    ThumbUp,
    /// Thumb extended pointing down, other fingers folded.
    ThumbDown,
    /// Only the index extended.
    Point,
    /// Index and pinky extended, middle and ring folded.
    Rock,
    /// Thumb-index pinch with middle, ring and pinky extended.
    Ok,
    /// Thumb-index pinch with the remaining fingers not all open.
    Click,
    /// Fallback: N fingers extended, no named gesture matched.
    Fingers(u8),
    /// Degenerate geometry; no classification possible.
    Unknown,
    /// No hand detected this frame.
    NoHand,
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fist => write!(f, "fist"),
            Self::OpenHand => write!(f, "open-hand"),
            Self::Peace => write!(f, "peace"),
            Self::ThumbUp => write!(f, "thumb-up"),
            Self::ThumbDown => write!(f, "thumb-down"),
            Self::Point => write!(f, "point"),
            Self::Rock => write!(f, "rock"),
            Self::Ok => write!(f, "ok"),
            Self::Click => write!(f, "click"),
            Self::Fingers(n) => write!(f, "fingers-{}", n),
            Self::Unknown => write!(f, "unknown"),
            Self::NoHand => write!(f, "no-hand"),
        }
    }
}

// ── Classification ─────────────────────────────────────────

/// Classify one frame.  Pure: identical inputs yield identical labels.
pub fn classify(hand: &Hand, fingers: &FingerState, config: &GestureConfig) -> GestureLabel {
    let span = hand.reference_span();
    if span < MIN_REFERENCE_SPAN {
        return GestureLabel::Unknown;
    }

    // 1. Pinch gate, checked first because thumb-index proximity can
    //    co-occur with any finger configuration.  The open remaining
    //    fingers discriminate OK from Click.
    let pinch = distance(
        hand.point(HandLandmark::ThumbTip),
        hand.point(HandLandmark::IndexTip),
    );
    if pinch < config.pinch_ratio * span {
        if fingers.middle && fingers.ring && fingers.pinky {
            return GestureLabel::Ok;
        }
        return GestureLabel::Click;
    }

    // 2. Vertical thumb with the other four folded.
    if fingers.thumb && !fingers.index && !fingers.middle && !fingers.ring && !fingers.pinky {
        if let Some(label) = vertical_thumb(hand) {
            return label;
        }
    }

    // 3-8. Finger-pattern rules, fixed priority.
    if fingers.all_folded() {
        return GestureLabel::Fist;
    }
    if fingers.all_extended() {
        return GestureLabel::OpenHand;
    }
    if fingers.index && fingers.middle && !fingers.ring && !fingers.pinky {
        return GestureLabel::Peace;
    }
    if fingers.index && !fingers.thumb && !fingers.middle && !fingers.ring && !fingers.pinky {
        return GestureLabel::Point;
    }
    if fingers.index && fingers.pinky && !fingers.middle && !fingers.ring {
        return GestureLabel::Rock;
    }

    GestureLabel::Fingers(fingers.extended_count())
}

/// Thumb-up/down direction test.  Fires only when the thumb-MCP→tip
/// vector is vertically dominant; a sideways thumb falls through to the
/// finger-count fallback rather than faking a thumbs-up.
fn vertical_thumb(hand: &Hand) -> Option<GestureLabel> {
    let tip = hand.point(HandLandmark::ThumbTip);
    let mcp = hand.point(HandLandmark::ThumbMcp);
    let ip = hand.point(HandLandmark::ThumbIp);

    let dx = tip.x - mcp.x;
    let dy = tip.y - mcp.y;
    if dy.abs() <= dx.abs() {
        return None;
    }
    // Image space: smaller y is up.
    if tip.y < ip.y {
        Some(GestureLabel::ThumbUp)
    } else {
        Some(GestureLabel::ThumbDown)
    }
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finger;
    use crate::landmark::{test_hands, Handedness, Landmark};

    fn config() -> GestureConfig {
        GestureConfig::default()
    }

    fn classify_raw(raw: &[Landmark]) -> GestureLabel {
        let hand = Hand::from_slice(raw).unwrap();
        let fingers = finger::extract(&hand, Handedness::Right, &config());
        classify(&hand, &fingers, &config())
    }

    fn set(raw: &mut [Landmark], lm: HandLandmark, x: f32, y: f32) {
        raw[lm.index()] = Landmark::new(x, y, 0.0);
    }

    #[test]
    fn test_fist() {
        assert_eq!(classify_raw(&test_hands::landmarks([false; 5])), GestureLabel::Fist);
    }

    #[test]
    fn test_open_hand() {
        assert_eq!(classify_raw(&test_hands::landmarks([true; 5])), GestureLabel::OpenHand);
    }

    #[test]
    fn test_peace() {
        let raw = test_hands::landmarks([false, true, true, false, false]);
        assert_eq!(classify_raw(&raw), GestureLabel::Peace);
    }

    #[test]
    fn test_point() {
        let raw = test_hands::landmarks([false, true, false, false, false]);
        assert_eq!(classify_raw(&raw), GestureLabel::Point);
    }

    #[test]
    fn test_rock() {
        let raw = test_hands::landmarks([false, true, false, false, true]);
        assert_eq!(classify_raw(&raw), GestureLabel::Rock);
    }

    #[test]
    fn test_thumb_up() {
        let mut raw = test_hands::landmarks([false; 5]);
        // Thumb re-posed vertical: abducted from the index MCP and
        // pointing up from its own MCP.
        set(&mut raw, HandLandmark::ThumbMcp, 0.36, 0.68);
        set(&mut raw, HandLandmark::ThumbIp, 0.355, 0.60);
        set(&mut raw, HandLandmark::ThumbTip, 0.35, 0.52);
        assert_eq!(classify_raw(&raw), GestureLabel::ThumbUp);
    }

    #[test]
    fn test_thumb_down() {
        let mut raw = test_hands::landmarks([false; 5]);
        set(&mut raw, HandLandmark::ThumbMcp, 0.36, 0.60);
        set(&mut raw, HandLandmark::ThumbIp, 0.355, 0.68);
        set(&mut raw, HandLandmark::ThumbTip, 0.35, 0.76);
        assert_eq!(classify_raw(&raw), GestureLabel::ThumbDown);
    }

    #[test]
    fn test_sideways_thumb_is_not_thumb_up() {
        // The canonical extended thumb points diagonally sideways; with
        // everything else folded this must fall through to fingers-1.
        let raw = test_hands::landmarks([true, false, false, false, false]);
        assert_eq!(classify_raw(&raw), GestureLabel::Fingers(1));
    }

    #[test]
    fn test_click_beats_fist() {
        // A fist whose index tip touches the thumb tip satisfies both the
        // pinch rule and the fist pattern; pinch has priority.
        let mut raw = test_hands::landmarks([false; 5]);
        set(&mut raw, HandLandmark::IndexTip, 0.46, 0.63);
        assert_eq!(classify_raw(&raw), GestureLabel::Click);
    }

    #[test]
    fn test_ok_not_click() {
        // Thumb-index ring closed with middle/ring/pinky open reads as OK.
        let mut raw = test_hands::landmarks([true; 5]);
        set(&mut raw, HandLandmark::IndexTip, 0.26, 0.61);
        assert_eq!(classify_raw(&raw), GestureLabel::Ok);
    }

    #[test]
    fn test_finger_count_fallback() {
        // Thumb + middle + ring + pinky matches no named gesture.
        let raw = test_hands::landmarks([true, false, true, true, true]);
        assert_eq!(classify_raw(&raw), GestureLabel::Fingers(4));
    }

    #[test]
    fn test_degenerate_hand_is_unknown() {
        let raw = vec![Landmark::new(0.5, 0.5, 0.0); crate::landmark::LANDMARK_COUNT];
        assert_eq!(classify_raw(&raw), GestureLabel::Unknown);
    }

    #[test]
    fn test_deterministic() {
        let raw = test_hands::landmarks([false, true, true, false, false]);
        assert_eq!(classify_raw(&raw), classify_raw(&raw));
    }

    #[test]
    fn test_scale_invariant_classification() {
        for fingers in [
            [false; 5],
            [true; 5],
            [false, true, true, false, false],
            [false, true, false, false, true],
        ] {
            let raw = test_hands::landmarks(fingers);
            let expected = classify_raw(&raw);
            for factor in [0.4, 1.6] {
                let scaled = test_hands::scaled_about_wrist(&raw, factor);
                assert_eq!(classify_raw(&scaled), expected, "factor {}", factor);
            }
        }
    }

    #[test]
    fn test_label_display() {
        assert_eq!(GestureLabel::OpenHand.to_string(), "open-hand");
        assert_eq!(GestureLabel::ThumbUp.to_string(), "thumb-up");
        assert_eq!(GestureLabel::Fingers(3).to_string(), "fingers-3");
        assert_eq!(GestureLabel::NoHand.to_string(), "no-hand");
    }
}
