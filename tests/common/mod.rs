//! Common test utilities for habbohub-throttle

pub mod fixtures;

pub use fixtures::TestThrottle;
