//! Per-frame gesture pipeline.
//!
//! `GestureEngine` owns the only persistent state (stabilizer run state
//! and the motion detector's previous-frame sample) and runs one
//! synchronous pass per frame: landmarks → finger states → raw label →
//! stabilizer → optional change event.  Exclusive `&mut self` access is
//! the serialization guarantee — a host delivering frames concurrently
//! must wrap the engine in its own lock, one engine per tracked hand.

use tracing::{debug, info};

use crate::classifier::{self, GestureLabel};
use crate::config::GestureConfig;
use crate::error::GestureError;
use crate::finger::{self, FingerState};
use crate::landmark::{Hand, Handedness};
use crate::motion::{MotionDetector, MotionGesture};
use crate::stabilizer::{GestureStabilizer, StableChange};

/// Everything the engine produced for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameOutput {
    /// Host-supplied frame timestamp, echoed back.
    pub timestamp_ms: f64,
    /// This frame's raw classification (NoHand when no hand was given).
    pub raw: GestureLabel,
    /// Finger states, when a hand was present.
    pub fingers: Option<FingerState>,
    /// One-frame swipe/zoom event, if any.
    pub motion: Option<MotionGesture>,
    /// Stable-label transition, if this frame completed one.
    pub change: Option<StableChange>,
}

/// Single-hand gesture recognition engine.
pub struct GestureEngine {
    config: GestureConfig,
    stabilizer: GestureStabilizer,
    motion: MotionDetector,
}

impl GestureEngine {
    /// Build an engine, validating the configuration up front.
    pub fn new(config: GestureConfig) -> Result<Self, GestureError> {
        config.validate()?;
        info!(
            "gesture engine ready: window={} pinch_ratio={:.2}",
            config.stabilization_window, config.pinch_ratio
        );
        let stabilizer = GestureStabilizer::new(config.stabilization_window);
        Ok(Self {
            config,
            stabilizer,
            motion: MotionDetector::new(),
        })
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// The currently stable label.
    pub fn stable(&self) -> GestureLabel {
        self.stabilizer.stable()
    }

    /// Process one frame.  `detection` is `None` when the detector saw no
    /// hand; that resets motion state and feeds NoHand to the stabilizer.
    pub fn process(
        &mut self,
        detection: Option<(&Hand, Handedness)>,
        timestamp_ms: f64,
    ) -> FrameOutput {
        let (raw, fingers, motion) = match detection {
            None => {
                self.motion.reset();
                (GestureLabel::NoHand, None, None)
            }
            Some((hand, handedness)) => {
                let fingers = finger::extract(hand, handedness, &self.config);
                let raw = classifier::classify(hand, &fingers, &self.config);
                let motion = self.motion.observe(hand, &self.config);
                (raw, Some(fingers), motion)
            }
        };

        let change = self.stabilizer.observe(raw);
        if let Some(change) = &change {
            debug!(
                "frame {:.1}: stable {} -> {}",
                timestamp_ms, change.previous, change.label
            );
        }

        FrameOutput {
            timestamp_ms,
            raw,
            fingers,
            motion,
            change,
        }
    }

    /// Restart the tracking session: clears stabilizer and motion state
    /// without emitting events.
    pub fn reset(&mut self) {
        self.stabilizer.reset();
        self.motion.reset();
    }
}

// ── Tests ──────────────────────────────────────────────────
