//! Decision types shared by every gate

mod decision;
mod rejection;

pub use decision::{Decision, DecisionSummary};
pub use rejection::Rejection;
