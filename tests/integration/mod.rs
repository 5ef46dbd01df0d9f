//! Integration tests for habbohub-throttle
//!
//! These tests drive the public API with a manual clock and check the
//! observable decisions.

pub mod comment_limit_tests;
pub mod config_tests;
pub mod rate_limiter_tests;
pub mod spam_filter_tests;
