//! # HabboHub Throttle
//!
//! Interaction throttling for the HabboHub community site: the gates that
//! decide whether a chat message, photo comment or outbound API call may go
//! ahead.
//!
//! ## Features
//!
//! - **Chat cooldown**: one message per actor per second
//! - **Repeated-character spam filter**: caps messages like `"!!!!"` per
//!   actor and character inside a rolling window
//! - **Sliding window rate limits**: named limiters with an optional minimum
//!   interval, checked without side effects and recorded separately
//! - **Layered comment limits**: per-photo interval, per-photo cap with a
//!   temporary lock, and a global block for spammers
//! - **Injectable clock**: deterministic tests and event replay
//!
//! ## Quick Start
//!
//! ```rust
//! use habbohub_throttle::{Config, SystemClock, ThrottleService};
//!
//! let service = ThrottleService::new(&Config::default(), SystemClock::shared());
//!
//! let decision = service.spam_filter().check_message("u1", "hello");
//! assert!(decision.is_valid());
//!
//! let decision = service.spam_filter().check_message("u1", "hello again");
//! assert!(decision.reason().is_some());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::ThrottleService;
pub use core::comment_limit::{CommentRateLimiter, CommentStatus, RestrictionLevel};
pub use core::rate_limiter::{LimiterRegistry, RateLimitResult, RateLimiter};
pub use core::spam_filter::{SpamFilter, is_single_character_message};
pub use core::types::{Decision, Rejection};
pub use utils::clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use utils::error::{Result, ThrottleError};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
