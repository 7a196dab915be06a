//! Engine configuration — the one tunable threshold table.
//!
//! Every distance threshold is a ratio of the hand's reference span
//! (wrist to index-MCP), never an absolute normalized distance, so the
//! same config works at any hand-to-camera distance.  Values are
//! validated once at engine construction, not per frame.

use serde::{Deserialize, Serialize};

use crate::error::GestureError;

/// Thresholds and options for the gesture engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Consecutive identical raw frames before a label is considered stable.
    pub stabilization_window: usize,
    /// Thumb-tip to index-tip distance below this ratio of the reference
    /// span counts as a pinch (Click/OK gate).
    pub pinch_ratio: f32,
    /// Thumb tip must be farther than this ratio of the reference span
    /// from the thumb MCP to count as extended.
    pub thumb_extended_ratio: f32,
    /// Thumb tip must be laterally offset from the index MCP by more than
    /// this ratio of the reference span (abducted, not tucked).  The
    /// offset sign is mirrored by handedness.
    pub thumb_lateral_ratio: f32,
    /// A non-thumb finger is extended when its tip is farther from the
    /// wrist than this ratio times its PIP-to-wrist distance.
    pub finger_extended_ratio: f32,
    /// Index-tip x delta between consecutive frames, as a ratio of the
    /// reference span, above which a swipe fires.
    pub swipe_ratio: f32,
    /// Thumb-index span delta between consecutive frames, as a ratio of
    /// the reference span, above which a zoom fires.
    pub zoom_ratio: f32,
    /// Passed through opaquely to the external detector; never read here.
    pub model_confidence: f32,
    /// Passed through opaquely to the external detector; never read here.
    pub tracking_confidence: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            stabilization_window: 6,
            pinch_ratio: 0.15,
            thumb_extended_ratio: 0.25,
            thumb_lateral_ratio: 0.15,
            finger_extended_ratio: 1.1,
            swipe_ratio: 0.5,
            zoom_ratio: 0.25,
            model_confidence: 0.7,
            tracking_confidence: 0.7,
        }
    }
}

impl GestureConfig {
    /// Fail-fast validation, run once at engine construction.
    pub fn validate(&self) -> Result<(), GestureError> {
        if self.stabilization_window == 0 {
            return Err(GestureError::InvalidConfig(
                "stabilization_window must be at least 1".into(),
            ));
        }
        let ratios = [
            ("pinch_ratio", self.pinch_ratio),
            ("thumb_extended_ratio", self.thumb_extended_ratio),
            ("thumb_lateral_ratio", self.thumb_lateral_ratio),
            ("finger_extended_ratio", self.finger_extended_ratio),
            ("swipe_ratio", self.swipe_ratio),
            ("zoom_ratio", self.zoom_ratio),
        ];
        for (name, value) in ratios {
            if !value.is_finite() || value <= 0.0 {
                return Err(GestureError::InvalidConfig(format!(
                    "{} must be a positive finite ratio, got {}",
                    name, value
                )));
            }
        }
        let confidences = [
            ("model_confidence", self.model_confidence),
            ("tracking_confidence", self.tracking_confidence),
        ];
        for (name, value) in confidences {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GestureError::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GestureConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_window_rejected() {
        let config = GestureConfig {
            stabilization_window: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("stabilization_window"));
    }

    #[test]
    fn test_negative_ratio_rejected() {
        let config = GestureConfig {
            pinch_ratio: -0.1,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("pinch_ratio"));
    }

    #[test]
    fn test_nan_ratio_rejected() {
        let config = GestureConfig {
            swipe_ratio: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_confidence_out_of_range_rejected() {
        let config = GestureConfig {
            model_confidence: 1.5,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("model_confidence"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GestureConfig =
            serde_json::from_str(r#"{"stabilization_window": 3}"#).unwrap();
        assert_eq!(config.stabilization_window, 3);
        assert_eq!(config.pinch_ratio, GestureConfig::default().pinch_ratio);
        assert!(config.validate().is_ok());
    }
}
