//! Delayed scene transitions
//!
//! Entries are keyed by elapsed real time on the rocket's own clock and fire
//! exactly once. There is no cancellation.

use serde::{Deserialize, Serialize};

use super::scene::SceneAction;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scheduled {
    /// Clock time (seconds) at which the action fires
    pub due: f64,
    pub action: SceneAction,
}

/// Pending transitions, kept sorted by due time (insertion order on ties)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    pending: Vec<Scheduled>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action` to fire `delay` seconds after `now`
    pub fn push(&mut self, now: f64, delay: f64, action: SceneAction) {
        let due = now + delay;
        let pos = self
            .pending
            .iter()
            .position(|s| s.due > due)
            .unwrap_or(self.pending.len());
        self.pending.insert(pos, Scheduled { due, action });
    }

    /// Remove and return every action due at or before `now`, earliest first
    pub fn drain_due(&mut self, now: f64) -> Vec<SceneAction> {
        let split = self
            .pending
            .iter()
            .position(|s| s.due > now)
            .unwrap_or(self.pending.len());
        self.pending.drain(..split).map(|s| s.action).collect()
    }

    pub fn pending(&self) -> &[Scheduled] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
