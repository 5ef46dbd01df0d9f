//! Sliding window rate limiting
//!
//! Provides the generic [`RateLimiter`] used to gate outbound API calls, and a
//! [`LimiterRegistry`] holding one limiter per guarded endpoint.

mod limiter;
mod registry;
mod types;


// Re-export public types
pub use limiter::RateLimiter;
pub use registry::LimiterRegistry;
pub use types::RateLimitResult;
