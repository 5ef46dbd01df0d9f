//! Utility modules for the throttle service
//!
//! - **clock**: injectable time sources
//! - **error**: error types and result alias
//! - **logging**: tracing subscriber setup

pub mod clock;
pub mod error;
pub mod logging;

pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
