//! Stable-gesture action dispatch.
//!
//! The consumer supplies the action table: one callback per gesture
//! label, invoked only on stable change events — never per frame — so a
//! held gesture triggers its side effect exactly once.

use std::collections::HashMap;

use tracing::debug;

use crate::classifier::GestureLabel;
use crate::stabilizer::StableChange;

/// A side-effecting action bound to a gesture.
pub type GestureAction = Box<dyn FnMut(&StableChange)>;

/// Registry mapping stable gesture labels to consumer callbacks.
#[derive(Default)]
pub struct ActionDispatcher {
    actions: HashMap<GestureLabel, GestureAction>,
}

impl ActionDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an action to a label, replacing any existing binding.
    pub fn bind(&mut self, label: GestureLabel, action: GestureAction) {
        debug!("binding action for {}", label);
        self.actions.insert(label, action);
    }

    /// Remove a binding.  Returns true if one existed.
    pub fn unbind(&mut self, label: GestureLabel) -> bool {
        self.actions.remove(&label).is_some()
    }

    /// Number of bound actions.
    pub fn binding_count(&self) -> usize {
        self.actions.len()
    }

    /// Run the action bound to a change event's new label, if any.
    /// Returns true when an action fired.
    pub fn dispatch(&mut self, change: &StableChange) -> bool {
        match self.actions.get_mut(&change.label) {
            Some(action) => {
                debug!("dispatching action for {}", change.label);
                action(change);
                true
            }
            None => false,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────
