//! Hand landmark data structures.
//!
//! Models the 21-point hand skeleton produced by MediaPipe-style hand
//! landmark detectors.  The index assignment (0 = wrist, 1–4 = thumb,
//! 5–8 = index, 9–12 = middle, 13–16 = ring, 17–20 = pinky) is a fixed
//! contract with the external detector and must never be renumbered.

use serde::{Deserialize, Serialize};

use crate::error::GestureError;

// ── Landmark index enum ────────────────────────────────────

/// The 21 hand landmarks, in detector index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandLandmark {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexMcp,
    IndexPip,
    IndexDip,
    IndexTip,
    MiddleMcp,
    MiddlePip,
    MiddleDip,
    MiddleTip,
    RingMcp,
    RingPip,
    RingDip,
    RingTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

/// Total number of landmarks per hand.
pub const LANDMARK_COUNT: usize = 21;

impl HandLandmark {
    /// Convert landmark enum to array index (0-20).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// String representation for logging and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wrist => "wrist",
            Self::ThumbCmc => "thumb-cmc",
            Self::ThumbMcp => "thumb-mcp",
            Self::ThumbIp => "thumb-ip",
            Self::ThumbTip => "thumb-tip",
            Self::IndexMcp => "index-mcp",
            Self::IndexPip => "index-pip",
            Self::IndexDip => "index-dip",
            Self::IndexTip => "index-tip",
            Self::MiddleMcp => "middle-mcp",
            Self::MiddlePip => "middle-pip",
            Self::MiddleDip => "middle-dip",
            Self::MiddleTip => "middle-tip",
            Self::RingMcp => "ring-mcp",
            Self::RingPip => "ring-pip",
            Self::RingDip => "ring-dip",
            Self::RingTip => "ring-tip",
            Self::PinkyMcp => "pinky-mcp",
            Self::PinkyPip => "pinky-pip",
            Self::PinkyDip => "pinky-dip",
            Self::PinkyTip => "pinky-tip",
        }
    }

    /// Fingertip landmarks, thumb first.
    pub fn fingertips() -> [HandLandmark; 5] {
        [
            Self::ThumbTip,
            Self::IndexTip,
            Self::MiddleTip,
            Self::RingTip,
            Self::PinkyTip,
        ]
    }

    /// (tip, pip) pairs for the four non-thumb fingers, index first.
    pub fn finger_tip_pip_pairs() -> [(HandLandmark, HandLandmark); 4] {
        [
            (Self::IndexTip, Self::IndexPip),
            (Self::MiddleTip, Self::MiddlePip),
            (Self::RingTip, Self::RingPip),
            (Self::PinkyTip, Self::PinkyPip),
        ]
    }
}

// ── Handedness ─────────────────────────────────────────────

/// Which hand the detector reported.  Only used to mirror the thumb's
/// lateral abduction test; all other checks are symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

// ── Landmark point ─────────────────────────────────────────

/// A single tracked hand point in normalized image space.
///
/// `x` and `y` are in [0, 1] relative to frame width/height with y growing
/// downward.  `z` is relative depth per detector convention and is not
/// metrically accurate; the engine never relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

// ── Hand ───────────────────────────────────────────────────

/// One frame's validated hand: exactly 21 finite landmarks.
///
/// Construction through [`Hand::from_slice`] is the malformed-input
/// boundary — a `Hand` value always satisfies the detector contract, so
/// downstream extraction and classification never fail.
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    points: [Landmark; LANDMARK_COUNT],
}

impl Hand {
    /// Validate a raw landmark slice from the detector.
    ///
    /// Fails with a malformed-input error if the count is not exactly 21
    /// or any coordinate is NaN/infinite.  Callers should treat a failed
    /// frame as no-hand rather than crashing.
    pub fn from_slice(landmarks: &[Landmark]) -> Result<Self, GestureError> {
        if landmarks.len() != LANDMARK_COUNT {
            return Err(GestureError::MalformedInput {
                got: landmarks.len(),
            });
        }
        for (index, lm) in landmarks.iter().enumerate() {
            if !lm.is_finite() {
                return Err(GestureError::NonFiniteLandmark { index });
            }
        }
        let mut points = [Landmark::new(0.0, 0.0, 0.0); LANDMARK_COUNT];
        points.copy_from_slice(landmarks);
        Ok(Self { points })
    }

    /// Get a landmark by its anatomical name.
    pub fn point(&self, landmark: HandLandmark) -> Landmark {
        self.points[landmark.index()]
    }

    /// Intra-hand reference span: wrist to index-MCP distance.
    ///
    /// Every distance threshold in the engine is a ratio of this span,
    /// which makes classification invariant to how far the hand is from
    /// the camera.
    pub fn reference_span(&self) -> f32 {
        crate::geometry::distance(
            self.point(HandLandmark::Wrist),
            self.point(HandLandmark::IndexMcp),
        )
    }
}

// ── Test fixtures ──────────────────────────────────────────


// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_indices() {
        assert_eq!(HandLandmark::Wrist.index(), 0);
        assert_eq!(HandLandmark::ThumbTip.index(), 4);
        assert_eq!(HandLandmark::IndexMcp.index(), 5);
        assert_eq!(HandLandmark::IndexTip.index(), 8);
        assert_eq!(HandLandmark::MiddleTip.index(), 12);
        assert_eq!(HandLandmark::RingTip.index(), 16);
        assert_eq!(HandLandmark::PinkyTip.index(), 20);
        assert_eq!(LANDMARK_COUNT, 21);
    }

    #[test]
    fn test_landmark_as_str() {
        assert_eq!(HandLandmark::Wrist.as_str(), "wrist");
        assert_eq!(HandLandmark::ThumbTip.as_str(), "thumb-tip");
        assert_eq!(HandLandmark::PinkyTip.as_str(), "pinky-tip");
    }

    #[test]
    fn test_fingertips_order() {
        let tips = HandLandmark::fingertips();
        assert_eq!(tips[0], HandLandmark::ThumbTip);
        assert_eq!(tips[4], HandLandmark::PinkyTip);
    }

    #[test]
    fn test_from_slice_wrong_count() {
        let short = vec![Landmark::new(0.0, 0.0, 0.0); 10];
        let err = Hand::from_slice(&short).unwrap_err();
        assert!(matches!(err, GestureError::MalformedInput { got: 10 }));
    }

    #[test]
    fn test_from_slice_non_finite() {
        let mut v = vec![Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        v[7].y = f32::NAN;
        let err = Hand::from_slice(&v).unwrap_err();
        assert!(matches!(err, GestureError::NonFiniteLandmark { index: 7 }));
    }

    #[test]
    fn test_from_slice_valid() {
        let v = test_hands::landmarks([true; 5]);
        let hand = Hand::from_slice(&v).unwrap();
        assert_eq!(hand.point(HandLandmark::Wrist).x, 0.5);
        assert!(hand.reference_span() > 0.2);
    }

    #[test]
    fn test_reference_span_scales_with_hand() {
        let v = test_hands::landmarks([true; 5]);
        let hand = Hand::from_slice(&v).unwrap();
        let half = Hand::from_slice(&test_hands::scaled_about_wrist(&v, 0.5)).unwrap();
        let ratio = half.reference_span() / hand.reference_span();
        assert!((ratio - 0.5).abs() < 1e-4, "ratio was {}", ratio);
    }

    #[test]
    fn test_handedness_as_str() {
        assert_eq!(Handedness::Left.as_str(), "left");
        assert_eq!(Handedness::Right.as_str(), "right");
    }

    #[test]
    fn test_landmark_deserialize_default_z() {
        let lm: Landmark = serde_json::from_str(r#"{"x":0.25,"y":0.75}"#).unwrap();
        assert_eq!(lm.x, 0.25);
        assert_eq!(lm.z, 0.0);
    }
}
