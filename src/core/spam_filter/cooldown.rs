//! Per-actor cooldown between gated actions

use crate::core::types::{Decision, Rejection};
use crate::utils::clock::{SharedClock, ceil_secs};
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::debug;

/// Rejects an actor that acted less than `cooldown_ms` ago
pub struct CooldownGate {
    cooldown_ms: u64,
    /// Actor -> epoch ms of the last allowed action
    last_action: Mutex<HashMap<String, u64>>,
    clock: SharedClock,
}

impl CooldownGate {
    pub fn new(cooldown_ms: u64, clock: SharedClock) -> Self {
        Self {
            cooldown_ms,
            last_action: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Check the actor and start a new cooldown when allowed
    pub fn check(&self, actor: &str) -> Decision {
        self.check_at(actor, self.clock.now_ms(), true)
    }

    /// Report what [`check`](Self::check) would decide, without recording
    pub fn peek(&self, actor: &str) -> Decision {
        self.check_at(actor, self.clock.now_ms(), false)
    }

    /// Cooldown check at a given instant
    /// If `record` is true, an allowed action becomes the actor's last action
    pub(super) fn check_at(&self, actor: &str, now: u64, record: bool) -> Decision {
        let mut last_action = self.last_action.lock();

        if let Some(&last) = last_action.get(actor) {
            // A clock that went backwards counts as no time elapsed.
            let elapsed = now.saturating_sub(last);
            if elapsed < self.cooldown_ms {
                let wait_secs = ceil_secs(self.cooldown_ms - elapsed);
                debug!("Cooldown active for {}: {}ms elapsed", actor, elapsed);
                return Rejection::CooldownActive { wait_secs }.into();
            }
        }

        if record {
            // Avoid String allocation if actor already exists
            if let Some(slot) = last_action.get_mut(actor) {
                *slot = now;
            } else {
                last_action.insert(actor.to_string(), now);
            }
        }

        Decision::Allow
    }

    /// Forget the actor's last action
    pub fn reset(&self, actor: &str) {
        self.last_action.lock().remove(actor);
    }

    /// Drop records whose cooldown has already elapsed
    pub fn cleanup(&self) -> usize {
        self.cleanup_at(self.clock.now_ms())
    }

    pub(super) fn cleanup_at(&self, now: u64) -> usize {
        let mut last_action = self.last_action.lock();
        let before = last_action.len();
        last_action.retain(|_, &mut last| now.saturating_sub(last) < self.cooldown_ms);
        before - last_action.len()
    }

    /// Number of actors with a recorded action
    pub fn tracked_actors(&self) -> usize {
        self.last_action.lock().len()
    }

    pub fn cooldown_ms(&self) -> u64 {
        self.cooldown_ms
    }
}
