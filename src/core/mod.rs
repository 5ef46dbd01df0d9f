//! Core throttling components

pub mod comment_limit;
pub mod rate_limiter;
pub mod service;
pub mod spam_filter;
pub mod types;

pub use service::ThrottleService;
