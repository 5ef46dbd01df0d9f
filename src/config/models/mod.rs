//! Configuration data models
//!
//! This module defines all configuration structures used by the throttle service.

#![allow(missing_docs)]

pub mod comment_limit;
pub mod logging;
pub mod rate_limit;
pub mod spam_filter;

// Re-export all configuration types
pub use comment_limit::*;
pub use logging::*;
pub use rate_limit::*;
pub use spam_filter::*;

/// Default minimum gap between chat messages of one actor
pub fn default_cooldown_ms() -> u64 {
    1000
}

/// Default number of single-character messages tolerated per window
pub fn default_max_repeated() -> u32 {
    3
}

/// Default repeated-pattern window
pub fn default_pattern_window_ms() -> u64 {
    30_000
}

/// Default period between cleanup sweeps
pub fn default_cleanup_interval_secs() -> u64 {
    120
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}

/// Default true value
pub fn default_true() -> bool {
    true
}
