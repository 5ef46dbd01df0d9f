//! Rate limiter types and data structures

use crate::core::types::Rejection;
use serde::Serialize;
use std::collections::VecDeque;

/// Rate limit result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitResult {
    /// Whether the action is allowed
    pub allowed: bool,
    /// Recorded actions inside the window
    pub current_count: u32,
    /// Maximum actions allowed in the window
    pub limit: u32,
    /// Actions left after this one (when allowed) or right now (when not)
    pub remaining_actions: u32,
    /// Epoch ms at which the next action may be allowed, set when not allowed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_available_time: Option<u64>,
    /// Why the action was refused
    #[serde(skip)]
    pub rejection: Option<Rejection>,
}

impl RateLimitResult {
    /// Displayable reason, present only when not allowed
    pub fn reason(&self) -> Option<String> {
        self.rejection.as_ref().map(Rejection::reason)
    }

    /// Milliseconds until `next_available_time`, measured from `now`
    pub fn retry_after_ms(&self, now: u64) -> Option<u64> {
        self.next_available_time
            .map(|next| next.saturating_sub(now))
    }
}

/// Recorded actions of one limiter instance
#[derive(Debug, Clone, Default)]
pub(super) struct WindowState {
    /// Epoch ms of recorded actions, oldest first
    pub(super) timestamps: VecDeque<u64>,
    /// Epoch ms of the most recent recorded action
    pub(super) last_action: Option<u64>,
}
