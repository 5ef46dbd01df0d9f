//! Per-actor comment limiter

use super::types::{CommentAction, CommentHistory, CommentStatus, RestrictionLevel};
use crate::config::CommentLimitConfig;
use crate::core::types::Rejection;
use crate::utils::clock::{SharedClock, ceil_hours, ceil_minutes, ceil_secs};
use dashmap::DashMap;
use tracing::{debug, warn};

pub struct CommentRateLimiter {
    config: CommentLimitConfig,
    /// Actor -> comment history
    histories: DashMap<String, CommentHistory>,
    clock: SharedClock,
}

impl CommentRateLimiter {
    pub fn new(config: CommentLimitConfig, clock: SharedClock) -> Self {
        Self {
            config,
            histories: DashMap::new(),
            clock,
        }
    }

    /// Check whether `actor` may comment on `photo_id` right now
    pub fn check_can_comment(&self, actor: &str, photo_id: &str) -> CommentStatus {
        let now = self.clock.now_ms();
        let Some(mut history) = self.histories.get_mut(actor) else {
            return CommentStatus::allowed();
        };

        history.photo_restrictions.retain(|_, &mut end| now < end);

        if let Some(end) = history.global_restriction.filter(|&end| now < end) {
            return CommentStatus::rejected(
                RestrictionLevel::GlobalRestricted,
                Some(end),
                Rejection::GlobalRestriction {
                    hours: ceil_hours(end - now),
                },
            );
        }

        if let Some(&end) = history
            .photo_restrictions
            .get(photo_id)
            .filter(|&&end| now < end)
        {
            return CommentStatus::rejected(
                RestrictionLevel::PhotoRestricted,
                Some(end),
                Rejection::PhotoRestricted {
                    minutes: ceil_minutes(end - now),
                },
            );
        }

        let photo_actions: Vec<u64> = history
            .actions
            .iter()
            .filter(|a| a.photo_id == photo_id && self.is_recent(a.timestamp, now))
            .map(|a| a.timestamp)
            .collect();

        if let Some(&last) = photo_actions.iter().max() {
            let elapsed = now.saturating_sub(last);
            if elapsed < self.config.basic_interval_ms {
                let wait = self.config.basic_interval_ms - elapsed;
                return CommentStatus::rejected(
                    RestrictionLevel::Normal,
                    Some(now.saturating_add(wait)),
                    Rejection::CommentIntervalActive {
                        wait_secs: ceil_secs(wait),
                    },
                );
            }
        }

        if photo_actions.len() >= self.config.comment_limit as usize {
            return CommentStatus::rejected(
                RestrictionLevel::PhotoRestricted,
                None,
                Rejection::PhotoLimitReached {
                    limit: self.config.comment_limit,
                },
            );
        }

        CommentStatus::allowed()
    }

    /// Record a comment and apply photo or global restrictions it triggers
    pub fn record_comment(&self, actor: &str, photo_id: &str) {
        let now = self.clock.now_ms();
        let mut history = self.histories.entry(actor.to_string()).or_default();

        history.actions.retain(|a| self.is_recent(a.timestamp, now));
        history.actions.push(CommentAction {
            photo_id: photo_id.to_string(),
            timestamp: now,
        });

        let photo_count = history
            .actions
            .iter()
            .filter(|a| a.photo_id == photo_id)
            .count();
        if photo_count < self.config.comment_limit as usize {
            return;
        }

        let restriction_end = now.saturating_add(self.config.photo_restriction_ms);
        history
            .photo_restrictions
            .insert(photo_id.to_string(), restriction_end);
        debug!(
            "Photo {} restricted for {} until {}",
            photo_id, actor, restriction_end
        );

        let active = history
            .photo_restrictions
            .values()
            .filter(|&&end| now < end)
            .count();
        if active >= self.config.spam_threshold as usize {
            history.global_restriction =
                Some(now.saturating_add(self.config.global_restriction_ms));
            warn!(
                "Spam detected: {} has {} restricted photos, comments blocked for {}ms",
                actor, active, self.config.global_restriction_ms
            );
        }
    }

    /// Forget everything about the actor
    pub fn reset(&self, actor: &str) {
        self.histories.remove(actor);
    }

    /// Drop expired actions and restrictions, and actors left with nothing
    pub fn cleanup(&self) -> usize {
        let now = self.clock.now_ms();
        let before = self.histories.len();
        self.histories.retain(|_, history| {
            history.actions.retain(|a| self.is_recent(a.timestamp, now));
            history.photo_restrictions.retain(|_, &mut end| now < end);
            if history.global_restriction.is_some_and(|end| now >= end) {
                history.global_restriction = None;
            }
            !history.is_empty()
        });
        before.saturating_sub(self.histories.len())
    }

    /// Copy of the actor's history, for callers that persist it
    pub fn snapshot(&self, actor: &str) -> Option<CommentHistory> {
        self.histories.get(actor).map(|h| h.value().clone())
    }

    /// Replace the actor's history with a previously taken snapshot
    pub fn restore(&self, actor: &str, history: CommentHistory) {
        self.histories.insert(actor.to_string(), history);
    }

    pub fn tracked_actors(&self) -> usize {
        self.histories.len()
    }

    pub fn config(&self) -> &CommentLimitConfig {
        &self.config
    }

    fn is_recent(&self, timestamp: u64, now: u64) -> bool {
        now.saturating_sub(timestamp) < self.config.window_ms
    }
}
