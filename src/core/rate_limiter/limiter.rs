//! Core rate limiter implementation

use super::types::{RateLimitResult, WindowState};
use crate::config::RateLimitConfig;
use crate::core::types::Rejection;
use crate::utils::clock::{SharedClock, ceil_secs};
use parking_lot::Mutex;
use tracing::debug;

/// Sliding window limiter with an optional minimum interval
///
/// [`check`](Self::check) never changes state; callers register an action
/// with [`record_action`](Self::record_action) once they actually perform it,
/// or use [`check_and_record`](Self::check_and_record) to do both under one
/// lock.
pub struct RateLimiter {
    config: RateLimitConfig,
    state: Mutex<WindowState>,
    clock: SharedClock,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig, clock: SharedClock) -> Self {
        Self {
            config,
            state: Mutex::new(WindowState::default()),
            clock,
        }
    }

    /// Check if an action would be allowed (read-only)
    pub fn check(&self) -> RateLimitResult {
        let now = self.clock.now_ms();
        let state = self.state.lock();
        self.evaluate(&state, now)
    }

    /// Register an action at the current instant
    pub fn record_action(&self) {
        let now = self.clock.now_ms();
        let mut state = self.state.lock();
        self.push(&mut state, now);
    }

    /// Atomically check and, when allowed, record an action
    pub fn check_and_record(&self) -> RateLimitResult {
        let now = self.clock.now_ms();
        let mut state = self.state.lock();
        let result = self.evaluate(&state, now);
        if result.allowed {
            self.push(&mut state, now);
        }
        result
    }

    /// Forget all recorded actions
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.timestamps.clear();
        state.last_action = None;
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    fn is_recent(&self, timestamp: u64, now: u64) -> bool {
        now.saturating_sub(timestamp) < self.config.window_ms
    }

    fn push(&self, state: &mut WindowState, now: u64) {
        state.timestamps.retain(|&t| self.is_recent(t, now));
        state.timestamps.push_back(now);
        state.last_action = Some(now);
    }

    fn evaluate(&self, state: &WindowState, now: u64) -> RateLimitResult {
        let limit = self.config.max_actions;
        let recent: Vec<u64> = state
            .timestamps
            .iter()
            .copied()
            .filter(|&t| self.is_recent(t, now))
            .collect();
        let current_count = u32::try_from(recent.len()).unwrap_or(u32::MAX);

        if let (Some(min_interval), Some(last)) = (self.config.min_interval_ms, state.last_action)
        {
            let elapsed = now.saturating_sub(last);
            if elapsed < min_interval {
                let wait = min_interval - elapsed;
                debug!("Minimum interval not elapsed: {}ms left", wait);
                return RateLimitResult {
                    allowed: false,
                    current_count,
                    limit,
                    remaining_actions: limit.saturating_sub(current_count),
                    next_available_time: Some(now.saturating_add(wait)),
                    rejection: Some(Rejection::MinIntervalActive {
                        wait_secs: ceil_secs(wait),
                    }),
                };
            }
        }

        if current_count >= limit {
            let oldest = recent.iter().copied().min().unwrap_or(now);
            let next_available = oldest.saturating_add(self.config.window_ms);
            let wait = next_available.saturating_sub(now);
            debug!(
                "Rate limit exceeded: {}/{} actions, {}ms left",
                current_count, limit, wait
            );
            return RateLimitResult {
                allowed: false,
                current_count,
                limit,
                remaining_actions: 0,
                next_available_time: Some(next_available),
                rejection: Some(Rejection::RateLimitExceeded {
                    wait_secs: ceil_secs(wait),
                }),
            };
        }

        RateLimitResult {
            allowed: true,
            current_count,
            limit,
            // Accounts for the action about to be recorded
            remaining_actions: limit - current_count - 1,
            next_available_time: None,
            rejection: None,
        }
    }
}
