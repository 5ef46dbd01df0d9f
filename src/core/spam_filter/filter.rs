//! Composite chat spam filter

use super::cooldown::CooldownGate;
use super::pattern::RepeatedPatternGate;
use crate::config::SpamFilterConfig;
use crate::core::types::Decision;
use crate::utils::clock::SharedClock;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Sizes of the spam filter's tracking maps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SpamFilterStats {
    pub tracked_actors: usize,
    pub tracked_patterns: usize,
}

/// Cooldown gate followed by the repeated-pattern gate
pub struct SpamFilter {
    cooldown: CooldownGate,
    pattern: RepeatedPatternGate,
    clock: SharedClock,
    cleanup_interval: Duration,
}

impl SpamFilter {
    pub fn new(config: &SpamFilterConfig, clock: SharedClock) -> Self {
        info!(
            "Creating spam filter: cooldown {}ms, {} repeats per {}ms",
            config.cooldown_ms, config.max_repeated, config.pattern_window_ms
        );
        Self {
            cooldown: CooldownGate::new(config.cooldown_ms, clock.clone()),
            pattern: RepeatedPatternGate::new(
                config.max_repeated,
                config.pattern_window_ms,
                clock.clone(),
            ),
            clock,
            cleanup_interval: config.cleanup_interval(),
        }
    }

    /// Check a chat message, short-circuiting on the first rejection
    ///
    /// An allowed cooldown check starts the actor's cooldown even if the
    /// caller never sends the message. A cooldown rejection leaves the
    /// pattern counts untouched.
    pub fn check_message(&self, actor: &str, text: &str) -> Decision {
        self.evaluate(actor, text, true)
    }

    /// Read-only variant of [`check_message`](Self::check_message)
    pub fn peek_message(&self, actor: &str, text: &str) -> Decision {
        self.evaluate(actor, text, false)
    }

    fn evaluate(&self, actor: &str, text: &str, record: bool) -> Decision {
        let now = self.clock.now_ms();

        let decision = self.cooldown.check_at(actor, now, record);
        if !decision.is_valid() {
            return decision;
        }

        self.pattern.check_at(actor, text, now, record)
    }

    /// Clear both gates for the actor, e.g. on logout
    pub fn reset_user(&self, actor: &str) {
        debug!("Resetting spam trackers for {}", actor);
        self.cooldown.reset(actor);
        self.pattern.reset(actor);
    }

    /// Sweep expired state from both gates
    pub fn cleanup(&self) -> usize {
        let now = self.clock.now_ms();
        let removed = self.cooldown.cleanup_at(now) + self.pattern.cleanup_at(now);
        if removed > 0 {
            debug!("Spam filter cleanup removed {} entries", removed);
        }
        removed
    }

    /// Start a background task that calls [`cleanup`](Self::cleanup) every
    /// `period`; the caller owns the returned handle
    pub fn start_cleanup_task(self: Arc<Self>, period: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                self.cleanup();
            }
        })
    }

    pub fn stats(&self) -> SpamFilterStats {
        SpamFilterStats {
            tracked_actors: self.cooldown.tracked_actors(),
            tracked_patterns: self.pattern.tracked_patterns(),
        }
    }

    pub fn cooldown(&self) -> &CooldownGate {
        &self.cooldown
    }

    pub fn pattern(&self) -> &RepeatedPatternGate {
        &self.pattern
    }

    /// Configured period for [`start_cleanup_task`](Self::start_cleanup_task)
    pub fn cleanup_interval(&self) -> Duration {
        self.cleanup_interval
    }
}
