//! Error handling for the throttle crate
//!
//! Rejections produced by the gates are ordinary values (see
//! [`crate::core::types::Rejection`]); the types here cover operational
//! failures such as unreadable configuration or malformed replay events.

mod helpers;
mod types;

pub use types::{Result, ThrottleError};
