//! Layered comment limit configuration

use serde::{Deserialize, Serialize};

fn default_basic_interval_ms() -> u64 {
    30 * 1000
}

fn default_comment_limit() -> u32 {
    3
}

fn default_comment_window_ms() -> u64 {
    10 * 60 * 1000
}

fn default_photo_restriction_ms() -> u64 {
    60 * 60 * 1000
}

fn default_global_restriction_ms() -> u64 {
    6 * 60 * 60 * 1000
}

fn default_spam_threshold() -> u32 {
    3
}

/// Settings for the per-photo and global comment restrictions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentLimitConfig {
    /// Minimum gap between two comments on the same photo
    #[serde(default = "default_basic_interval_ms")]
    pub basic_interval_ms: u64,
    /// Comments allowed on one photo inside `window_ms`
    #[serde(default = "default_comment_limit")]
    pub comment_limit: u32,
    /// Window for counting comments on one photo
    #[serde(default = "default_comment_window_ms")]
    pub window_ms: u64,
    /// How long a photo stays locked once its limit is reached
    #[serde(default = "default_photo_restriction_ms")]
    pub photo_restriction_ms: u64,
    /// How long all commenting is blocked once spam is detected
    #[serde(default = "default_global_restriction_ms")]
    pub global_restriction_ms: u64,
    /// Simultaneously restricted photos that count as spam
    #[serde(default = "default_spam_threshold")]
    pub spam_threshold: u32,
}

impl Default for CommentLimitConfig {
    fn default() -> Self {
        Self {
            basic_interval_ms: default_basic_interval_ms(),
            comment_limit: default_comment_limit(),
            window_ms: default_comment_window_ms(),
            photo_restriction_ms: default_photo_restriction_ms(),
            global_restriction_ms: default_global_restriction_ms(),
            spam_threshold: default_spam_threshold(),
        }
    }
}
