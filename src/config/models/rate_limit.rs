//! Sliding window rate limit configuration

use serde::{Deserialize, Serialize};

/// Settings for one sliding window limiter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Actions allowed inside the window
    pub max_actions: u32,
    /// Window length in milliseconds
    pub window_ms: u64,
    /// Optional minimum gap between two recorded actions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_interval_ms: Option<u64>,
}

impl RateLimitConfig {
    pub fn new(max_actions: u32, window_ms: u64) -> Self {
        Self {
            max_actions,
            window_ms,
            min_interval_ms: None,
        }
    }

    pub fn with_min_interval(mut self, min_interval_ms: u64) -> Self {
        self.min_interval_ms = Some(min_interval_ms);
        self
    }
}
