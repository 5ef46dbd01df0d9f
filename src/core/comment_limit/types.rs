//! Comment limiter types

use crate::core::types::Rejection;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One recorded comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAction {
    pub photo_id: String,
    pub timestamp: u64,
}

/// Everything the limiter knows about one actor
///
/// Serializable so callers can keep it across sessions; the limiter itself
/// never persists anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentHistory {
    #[serde(default)]
    pub actions: Vec<CommentAction>,
    /// Photo id -> epoch ms at which the photo lock ends
    #[serde(default)]
    pub photo_restrictions: HashMap<String, u64>,
    #[serde(default)]
    pub global_restriction: Option<u64>,
}

impl CommentHistory {
    pub(super) fn is_empty(&self) -> bool {
        self.actions.is_empty()
            && self.photo_restrictions.is_empty()
            && self.global_restriction.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestrictionLevel {
    Normal,
    PhotoRestricted,
    GlobalRestricted,
}

/// Outcome of a comment check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentStatus {
    pub can_comment: bool,
    pub level: RestrictionLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_available_time: Option<u64>,
    #[serde(skip)]
    pub rejection: Option<Rejection>,
}

impl CommentStatus {
    pub(super) fn allowed() -> Self {
        Self {
            can_comment: true,
            level: RestrictionLevel::Normal,
            next_available_time: None,
            rejection: None,
        }
    }

    pub(super) fn rejected(
        level: RestrictionLevel,
        next_available_time: Option<u64>,
        rejection: Rejection,
    ) -> Self {
        Self {
            can_comment: false,
            level,
            next_available_time,
            rejection: Some(rejection),
        }
    }

    pub fn reason(&self) -> Option<String> {
        self.rejection.as_ref().map(Rejection::reason)
    }
}
