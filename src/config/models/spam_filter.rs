//! Chat spam filter configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cooldown and repeated-pattern settings for chat messages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpamFilterConfig {
    /// Minimum milliseconds between two messages of the same actor
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
    /// Single-character messages allowed per character inside the window
    #[serde(default = "default_max_repeated")]
    pub max_repeated: u32,
    /// Window after which a repeated-character count starts over
    #[serde(default = "default_pattern_window_ms")]
    pub pattern_window_ms: u64,
    /// Period of the cleanup sweep, in seconds
    #[serde(default = "default_cleanup_interval_secs")]
    pub cleanup_interval_secs: u64,
}

impl Default for SpamFilterConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: default_cooldown_ms(),
            max_repeated: default_max_repeated(),
            pattern_window_ms: default_pattern_window_ms(),
            cleanup_interval_secs: default_cleanup_interval_secs(),
        }
    }
}

impl SpamFilterConfig {
    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_secs)
    }
}
