//! Process-wide throttle service
//!
//! Owns one spam filter, one comment limiter and the named rate limiters,
//! all reading the same clock. Construct it once per process (or per test)
//! and hand out references.

use super::comment_limit::CommentRateLimiter;
use super::rate_limiter::LimiterRegistry;
use super::spam_filter::SpamFilter;
use crate::config::Config;
use crate::utils::clock::SharedClock;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

pub struct ThrottleService {
    spam_filter: SpamFilter,
    comments: CommentRateLimiter,
    limiters: LimiterRegistry,
    clock: SharedClock,
}

impl ThrottleService {
    pub fn new(config: &Config, clock: SharedClock) -> Self {
        info!(
            "Creating throttle service with {} named rate limits",
            config.rate_limits.len()
        );
        Self {
            spam_filter: SpamFilter::new(&config.spam_filter, clock.clone()),
            comments: CommentRateLimiter::new(config.comment_limit.clone(), clock.clone()),
            limiters: LimiterRegistry::from_config(&config.rate_limits, clock.clone()),
            clock,
        }
    }

    pub fn spam_filter(&self) -> &SpamFilter {
        &self.spam_filter
    }

    pub fn comments(&self) -> &CommentRateLimiter {
        &self.comments
    }

    pub fn limiters(&self) -> &LimiterRegistry {
        &self.limiters
    }

    pub fn clock(&self) -> &SharedClock {
        &self.clock
    }

    /// Clear an actor's chat and comment state, e.g. on logout
    pub fn reset_user(&self, actor: &str) {
        self.spam_filter.reset_user(actor);
        self.comments.reset(actor);
    }

    /// Sweep expired state everywhere
    pub fn cleanup(&self) -> usize {
        let removed = self.spam_filter.cleanup() + self.comments.cleanup();
        debug!("Throttle cleanup removed {} entries", removed);
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
}
