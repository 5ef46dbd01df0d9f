//! Allow/reject outcome of a gate

use super::rejection::Rejection;
use serde::Serialize;

/// Outcome of a gate check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Reject(Rejection),
}

impl Decision {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Displayable reason, present only for rejections
    pub fn reason(&self) -> Option<String> {
        self.rejection().map(Rejection::reason)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Allow => None,
            Self::Reject(rejection) => Some(rejection),
        }
    }

    pub fn summary(&self) -> DecisionSummary {
        DecisionSummary {
            is_valid: self.is_valid(),
            reason: self.reason(),
        }
    }
}

impl From<Rejection> for Decision {
    fn from(rejection: Rejection) -> Self {
        Self::Reject(rejection)
    }
}

/// Wire form of a [`Decision`] as consumed by the frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionSummary {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
