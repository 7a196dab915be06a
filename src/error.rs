//! Error taxonomy for the gesture engine.
//!
//! Two failure classes exist: malformed detector input (per-frame, the
//! caller treats the frame as no-hand) and invalid configuration (rejected
//! once at engine construction).  Classification itself never fails — an
//! unrecognized pose is a valid `Unknown`/finger-count label, not an error.

use thiserror::Error;

use crate::landmark::LANDMARK_COUNT;

/// Errors produced by the gesture engine.
#[derive(Debug, Error)]
pub enum GestureError {
    /// The detector delivered the wrong number of landmarks.
    #[error("malformed hand data: expected {} landmarks, got {got}", LANDMARK_COUNT)]
    MalformedInput { got: usize },

    /// A landmark carried NaN or infinite coordinates.
    #[error("malformed hand data: landmark {index} has non-finite coordinates")]
    NonFiniteLandmark { index: usize },

    /// A configuration value failed validation at construction time.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GestureError {
    /// Whether this error denotes per-frame malformed input (as opposed to
    /// a construction-time configuration error).
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::MalformedInput { .. } | Self::NonFiniteLandmark { .. }
        )
    }
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_input_message() {
        let err = GestureError::MalformedInput { got: 10 };
        let msg = err.to_string();
        assert!(msg.contains("expected 21"), "got: {}", msg);
        assert!(msg.contains("got 10"), "got: {}", msg);
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_config_error_not_malformed() {
        let err = GestureError::InvalidConfig("pinch_ratio must be positive".into());
        assert!(!err.is_malformed_input());
        assert!(err.to_string().contains("pinch_ratio"));
    }

    #[test]
    fn test_non_finite_is_malformed() {
        let err = GestureError::NonFiniteLandmark { index: 4 };
        assert!(err.is_malformed_input());
        assert!(err.to_string().contains("landmark 4"));
    }
}
