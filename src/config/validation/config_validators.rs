//! Validators for the throttle configuration structures

use super::trait_def::Validate;
use crate::config::Config;
use crate::config::models::*;
use tracing::debug;

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating throttle configuration");

        self.spam_filter.validate()?;
        self.comment_limit.validate()?;
        self.logging.validate()?;

        for (name, limit) in &self.rate_limits {
            if name.trim().is_empty() {
                return Err("Rate limit names cannot be empty".to_string());
            }
            limit
                .validate()
                .map_err(|e| format!("Rate limit '{}': {}", name, e))?;
        }

        debug!("Throttle configuration validation completed");
        Ok(())
    }
}

impl Validate for SpamFilterConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_repeated == 0 {
            return Err("max_repeated must be greater than 0".to_string());
        }
        if self.pattern_window_ms == 0 {
            return Err("pattern_window_ms must be greater than 0".to_string());
        }
        if self.cleanup_interval_secs == 0 {
            return Err("cleanup_interval_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for RateLimitConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_actions == 0 {
            return Err("max_actions must be greater than 0".to_string());
        }
        if self.window_ms == 0 {
            return Err("window_ms must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for CommentLimitConfig {
    fn validate(&self) -> Result<(), String> {
        if self.comment_limit == 0 {
            return Err("comment_limit must be greater than 0".to_string());
        }
        if self.window_ms == 0 {
            return Err("comment window_ms must be greater than 0".to_string());
        }
        if self.spam_threshold == 0 {
            return Err("spam_threshold must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
