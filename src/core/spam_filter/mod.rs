//! Chat spam filtering
//!
//! A [`SpamFilter`] combines a per-actor [`CooldownGate`] with a
//! [`RepeatedPatternGate`] that throttles messages made of one repeated
//! character, tracked separately per `(actor, character)`.

mod cooldown;
mod filter;
mod pattern;


pub use cooldown::CooldownGate;
pub use filter::{SpamFilter, SpamFilterStats};
pub use pattern::{RepeatedPatternGate, is_single_character_message, repeated_character};
