//! Temporal stabilization of the raw gesture stream.
//!
//! Run-length hysteresis: a raw label must repeat for a full window of
//! consecutive frames before it becomes the stable label, and consumers
//! are notified only on change (edge-triggered).  Losing the hand resets
//! the run state immediately so stale history can never resurrect a
//! gesture after the hand reappears.

use serde::Serialize;
use tracing::debug;

use crate::classifier::GestureLabel;

/// Edge-triggered stable-label transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StableChange {
    /// The newly stable label.
    pub label: GestureLabel,
    /// The label that was stable before this change.
    pub previous: GestureLabel,
}

/// Run-length gesture debouncer.  The only persistent state in the
/// pipeline; owned by one engine and updated once per frame.
#[derive(Debug)]
pub struct GestureStabilizer {
    /// Frames a label must persist before it becomes stable.
    window: usize,
    /// Most recent raw label.
    last_raw: GestureLabel,
    /// Consecutive frames `last_raw` has been observed.
    run: usize,
    /// Currently emitted stable label.
    stable: GestureLabel,
}

impl GestureStabilizer {
    /// `window` must be >= 1; the engine validates this via the config.
    pub fn new(window: usize) -> Self {
        Self {
            window,
            last_raw: GestureLabel::NoHand,
            run: 0,
            stable: GestureLabel::NoHand,
        }
    }

    /// The currently stable label.
    pub fn stable(&self) -> GestureLabel {
        self.stable
    }

    /// Feed one raw classification; returns a change event when the
    /// stable label flips.  Re-feeding an already-stable label is
    /// idempotent and never re-emits.
    pub fn observe(&mut self, raw: GestureLabel) -> Option<StableChange> {
        if raw == GestureLabel::NoHand {
            // Immediate reset: no carry-over across hand loss.
            self.last_raw = GestureLabel::NoHand;
            self.run = 0;
            if self.stable != GestureLabel::NoHand {
                let previous = self.stable;
                self.stable = GestureLabel::NoHand;
                debug!("stable: {} -> no-hand", previous);
                return Some(StableChange {
                    label: GestureLabel::NoHand,
                    previous,
                });
            }
            return None;
        }

        if raw == self.last_raw {
            self.run += 1;
        } else {
            self.last_raw = raw;
            self.run = 1;
        }

        if self.run >= self.window && raw != self.stable {
            let previous = self.stable;
            self.stable = raw;
            debug!("stable: {} -> {} after {} frames", previous, raw, self.run);
            return Some(StableChange {
                label: raw,
                previous,
            });
        }
        None
    }

    /// Full reset to the initial no-hand state, without emitting.
    pub fn reset(&mut self) {
        self.last_raw = GestureLabel::NoHand;
        self.run = 0;
        self.stable = GestureLabel::NoHand;
    }
}

// ── Tests ──────────────────────────────────────────────────
