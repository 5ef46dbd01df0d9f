//! Replay of timestamped interaction events
//!
//! Reads JSON lines such as
//!
//! ```text
//! {"type":"message","actor":"u1","text":"hi","at_ms":0}
//! {"type":"comment","actor":"u1","photo_id":"p1","at_ms":500}
//! {"type":"api_call","limiter":"habbo_profile","at_ms":900}
//! {"type":"reset","actor":"u1","at_ms":1000}
//! ```
//!
//! and evaluates each one against a [`ThrottleService`] whose clock follows
//! the event timestamps. Blank lines and lines starting with `#` are skipped.

use crate::config::Config;
use crate::core::ThrottleService;
use crate::core::types::DecisionSummary;
use crate::utils::clock::ManualClock;
use crate::utils::error::{Result, ThrottleError};
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayEvent {
    Message {
        actor: String,
        text: String,
        at_ms: u64,
    },
    Comment {
        actor: String,
        photo_id: String,
        at_ms: u64,
    },
    ApiCall {
        limiter: String,
        at_ms: u64,
    },
    Reset {
        actor: String,
        at_ms: u64,
    },
}

impl ReplayEvent {
    pub fn at_ms(&self) -> u64 {
        match self {
            Self::Message { at_ms, .. }
            | Self::Comment { at_ms, .. }
            | Self::ApiCall { at_ms, .. }
            | Self::Reset { at_ms, .. } => *at_ms,
        }
    }
}

/// Decision for one replayed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayOutcome {
    pub line: usize,
    pub at_ms: u64,
    #[serde(flatten)]
    pub decision: DecisionSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_available_time: Option<u64>,
}

/// Replay every event in `input` and return one outcome per event
pub fn replay<R: BufRead>(config: &Config, input: R) -> Result<Vec<ReplayOutcome>> {
    let clock = Arc::new(ManualClock::new(0));
    let service = ThrottleService::new(config, clock.clone());
    let cleanup_every =
        u64::try_from(service.spam_filter().cleanup_interval().as_millis()).unwrap_or(u64::MAX);
    let mut next_cleanup = cleanup_every;
    let mut outcomes = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let event: ReplayEvent = serde_json::from_str(trimmed)
            .map_err(|e| ThrottleError::invalid_event(line_no, e.to_string()))?;
        let now = event.at_ms();
        clock.set(now);

        if now >= next_cleanup {
            let removed = service.cleanup();
            debug!("Replay cleanup at {}ms removed {} entries", now, removed);
            next_cleanup = now.saturating_add(cleanup_every);
        }

        outcomes.push(apply(&service, event, line_no)?);
    }

    info!("Replayed {} events", outcomes.len());
    Ok(outcomes)
}

fn apply(service: &ThrottleService, event: ReplayEvent, line: usize) -> Result<ReplayOutcome> {
    let at_ms = event.at_ms();
    let outcome = match event {
        ReplayEvent::Message { actor, text, .. } => {
            let decision = service.spam_filter().check_message(&actor, &text);
            ReplayOutcome {
                line,
                at_ms,
                decision: decision.summary(),
                next_available_time: None,
            }
        }
        ReplayEvent::Comment {
            actor, photo_id, ..
        } => {
            let status = service.comments().check_can_comment(&actor, &photo_id);
            if status.can_comment {
                service.comments().record_comment(&actor, &photo_id);
            }
            ReplayOutcome {
                line,
                at_ms,
                decision: DecisionSummary {
                    is_valid: status.can_comment,
                    reason: status.reason(),
                },
                next_available_time: status.next_available_time,
            }
        }
        ReplayEvent::ApiCall { limiter, .. } => {
            let limiter = service.limiters().get(&limiter).ok_or_else(|| {
                ThrottleError::invalid_event(line, format!("unknown limiter '{}'", limiter))
            })?;
            let result = limiter.check_and_record();
            ReplayOutcome {
                line,
                at_ms,
                decision: DecisionSummary {
                    is_valid: result.allowed,
                    reason: result.reason(),
                },
                next_available_time: result.next_available_time,
            }
        }
        ReplayEvent::Reset { actor, .. } => {
            service.reset_user(&actor);
            ReplayOutcome {
                line,
                at_ms,
                decision: DecisionSummary {
                    is_valid: true,
                    reason: None,
                },
                next_available_time: None,
            }
        }
    };
    Ok(outcome)
}
