//! handsign — hand gesture classification from 21-point hand landmarks.
//!
//! Consumes per-frame landmark sets from an external MediaPipe-style hand
//! detector and produces a temporally stable gesture label stream:
//!
//! - `landmark`: validated 21-point hand model and the anatomical index enum
//! - `geometry`: distance/angle primitives
//! - `finger`: per-finger extended-state extraction
//! - `classifier`: priority-ordered rule table → `GestureLabel`
//! - `motion`: one-frame swipe/zoom deltas
//! - `stabilizer`: run-length hysteresis with edge-triggered change events
//! - `dispatch`: stable-gesture → action callback registry
//! - `engine`: the per-frame pipeline tying it all together
//!
//! The crate is a pure in-process library: no threads, timers, or I/O.
//! One `GestureEngine` tracks one hand; its `&mut self` frame call is the
//! concurrency contract.

pub mod classifier;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod finger;
pub mod geometry;
pub mod landmark;
pub mod motion;
pub mod stabilizer;

pub use classifier::GestureLabel;
pub use config::GestureConfig;
pub use dispatch::{ActionDispatcher, GestureAction};
pub use engine::{FrameOutput, GestureEngine};
pub use error::GestureError;
pub use finger::FingerState;
pub use landmark::{Hand, HandLandmark, Handedness, Landmark, LANDMARK_COUNT};
pub use motion::MotionGesture;
pub use stabilizer::{GestureStabilizer, StableChange};
