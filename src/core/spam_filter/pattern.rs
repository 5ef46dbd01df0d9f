//! Repeated single-character spam detection

use crate::core::types::{Decision, Rejection};
use crate::utils::clock::SharedClock;
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::debug;

/// True when the trimmed text is non-empty and made of one repeated character
pub fn is_single_character_message(text: &str) -> bool {
    repeated_character(text).is_some()
}

/// The character a single-character message repeats
pub fn repeated_character(text: &str) -> Option<char> {
    let mut chars = text.trim().chars();
    let first = chars.next()?;
    chars.all(|c| c == first).then_some(first)
}

#[derive(Debug, Clone, Copy)]
struct PatternEntry {
    /// Matching messages seen inside the window, always >= 1
    count: u32,
    /// Epoch ms of the last counted message
    last_time: u64,
}

/// Caps how many single-character messages an actor may send per character
pub struct RepeatedPatternGate {
    max_repeated: u32,
    window_ms: u64,
    /// Actor -> repeated character -> entry
    entries: Mutex<HashMap<String, HashMap<char, PatternEntry>>>,
    clock: SharedClock,
}

impl RepeatedPatternGate {
    pub fn new(max_repeated: u32, window_ms: u64, clock: SharedClock) -> Self {
        Self {
            max_repeated,
            window_ms,
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    pub fn check(&self, actor: &str, text: &str) -> Decision {
        self.check_at(actor, text, self.clock.now_ms(), true)
    }

    /// Report what [`check`](Self::check) would decide, without counting
    pub fn peek(&self, actor: &str, text: &str) -> Decision {
        self.check_at(actor, text, self.clock.now_ms(), false)
    }

    /// Pattern check at a given instant
    /// If `record` is true, an allowed message is counted
    pub(super) fn check_at(&self, actor: &str, text: &str, now: u64, record: bool) -> Decision {
        let Some(character) = repeated_character(text) else {
            return Decision::Allow;
        };

        let mut entries = self.entries.lock();
        let existing = entries
            .get(actor)
            .and_then(|per_char| per_char.get(&character))
            .copied()
            .filter(|entry| !self.is_stale(entry, now));

        let next = match existing {
            Some(entry) if entry.count >= self.max_repeated => {
                debug!(
                    "Repeated pattern limit for {}: {:?} sent {} times",
                    actor, character, entry.count
                );
                return Rejection::RepeatedPatternLimitExceeded { character }.into();
            }
            Some(entry) => PatternEntry {
                count: entry.count + 1,
                last_time: now,
            },
            None => PatternEntry {
                count: 1,
                last_time: now,
            },
        };

        if record {
            // Avoid String allocation if actor already exists
            match entries.get_mut(actor) {
                Some(per_char) => {
                    per_char.insert(character, next);
                }
                None => {
                    entries
                        .entry(actor.to_string())
                        .or_default()
                        .insert(character, next);
                }
            }
        }

        Decision::Allow
    }

    fn is_stale(&self, entry: &PatternEntry, now: u64) -> bool {
        now.saturating_sub(entry.last_time) >= self.window_ms
    }

    /// Remove every entry of the actor, whatever the character
    pub fn reset(&self, actor: &str) {
        self.entries.lock().remove(actor);
    }

    /// Remove entries whose window has elapsed
    pub fn cleanup(&self) -> usize {
        self.cleanup_at(self.clock.now_ms())
    }

    pub(super) fn cleanup_at(&self, now: u64) -> usize {
        let mut entries = self.entries.lock();
        let mut removed = 0;
        entries.retain(|_, per_char| {
            let before = per_char.len();
            per_char.retain(|_, entry| !self.is_stale(entry, now));
            removed += before - per_char.len();
            !per_char.is_empty()
        });
        removed
    }

    /// Number of live `(actor, character)` entries
    pub fn tracked_patterns(&self) -> usize {
        self.entries.lock().values().map(HashMap::len).sum()
    }

    /// Current count for `(actor, character)`, if tracked
    pub fn count(&self, actor: &str, character: char) -> Option<u32> {
        self.entries
            .lock()
            .get(actor)
            .and_then(|per_char| per_char.get(&character))
            .map(|entry| entry.count)
    }
}
