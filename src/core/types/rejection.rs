//! Rejection reasons
//!
//! The `Display` text of each variant is shown to end users as is.

use serde::Serialize;
use thiserror::Error;

/// Why an action was refused
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    /// Same actor acted less than the cooldown ago
    #[error("Please wait {wait_secs} second(s) before sending another message.")]
    CooldownActive { wait_secs: u64 },

    /// Too many messages made of a single repeated character
    #[error(
        "You have sent too many messages containing only \"{character}\". Please wait before sending it again."
    )]
    RepeatedPatternLimitExceeded { character: char },

    /// Generic limiter minimum interval not yet elapsed
    #[error("Please wait {wait_secs} second(s) before trying again.")]
    MinIntervalActive { wait_secs: u64 },

    /// Generic limiter window exhausted
    #[error("Rate limit reached. Try again in {wait_secs} second(s).")]
    RateLimitExceeded { wait_secs: u64 },

    /// Same photo commented on too recently
    #[error("Please wait {wait_secs} second(s) before commenting on this photo again.")]
    CommentIntervalActive { wait_secs: u64 },

    /// Photo locked after reaching its comment limit
    #[error("You commented too much on this photo. Please wait {minutes} minute(s).")]
    PhotoRestricted { minutes: u64 },

    /// Photo comment limit reached inside the window
    #[error("You reached the limit of {limit} comments on this photo. Try again in a few minutes.")]
    PhotoLimitReached { limit: u32 },

    /// All commenting blocked after spam was detected
    #[error("Spam behaviour detected. Comments are blocked for {hours} hour(s).")]
    GlobalRestriction { hours: u64 },
}

impl Rejection {
    /// User-facing sentence for this rejection
    pub fn reason(&self) -> String {
        self.to_string()
    }
}
