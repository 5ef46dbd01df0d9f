//! Command line support
//!
//! The binary is a thin wrapper around these functions.

pub mod replay;

pub use replay::{ReplayEvent, ReplayOutcome, replay};
