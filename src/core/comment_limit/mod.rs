//! Layered comment rate limiting
//!
//! Three layers guard photo comments:
//! 1. one comment per photo every `basic_interval_ms`;
//! 2. at most `comment_limit` comments per photo inside `window_ms`, after
//!    which the photo is locked for `photo_restriction_ms`;
//! 3. once `spam_threshold` photos are locked at the same time, all
//!    commenting is blocked for `global_restriction_ms`.

mod limiter;
mod types;


pub use limiter::CommentRateLimiter;
pub use types::{CommentAction, CommentHistory, CommentStatus, RestrictionLevel};
