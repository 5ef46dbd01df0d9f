//! Helper functions for creating specific error types

use super::types::ThrottleError;

impl ThrottleError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid_event<S: Into<String>>(line: usize, message: S) -> Self {
        Self::InvalidEvent {
            line,
            message: message.into(),
        }
    }
}
