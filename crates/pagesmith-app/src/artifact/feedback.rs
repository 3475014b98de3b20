//! Timed feedback flags for toolbar actions.
//!
//! Each action flips a flag on and schedules an expiry. The flag carries a
//! generation counter so a stale expiry, raced by a re-trigger, cannot
//! clear the newer activation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Toolbar actions that show transient confirmation feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackAction {
    Copy,
    Save,
    Export,
    Run,
}

impl FeedbackAction {
    /// How long the confirmation state lasts
    pub fn duration(self) -> Duration {
        match self {
            FeedbackAction::Copy => Duration::from_millis(2000),
            FeedbackAction::Save => Duration::from_millis(800),
            FeedbackAction::Export => Duration::from_millis(2000),
            FeedbackAction::Run => Duration::from_millis(1000),
        }
    }
}

/// A flag that turns itself off when its scheduled expiry arrives.
#[derive(Debug, Clone, Default)]
pub struct TimedFlag {
    active: bool,
    generation: u64,
}

impl TimedFlag {
    /// Activate the flag and return the generation to stamp on the expiry
    /// timer. Returns `None` when already active: the action is ignored
    /// while its feedback is showing.
    pub fn begin(&mut self) -> Option<u64> {
        if self.active {
            return None;
        }
        self.active = true;
        self.generation += 1;
        Some(self.generation)
    }

    /// Clear the flag if `generation` matches the activation that
    /// scheduled this expiry. Stale expiries are ignored.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.active && self.generation == generation {
            self.active = false;
            true
        } else {
            false
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
