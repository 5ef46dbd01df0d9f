//! Environment overrides
//!
//! Variables use the `HABBOHUB_` prefix and replace single fields of an
//! already loaded configuration. [`Config::load`] reads them from the process
//! environment.

use super::Config;
use crate::utils::error::{Result, ThrottleError};
use std::str::FromStr;
use tracing::debug;

impl Config {
    /// Apply overrides from an arbitrary lookup
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = parse_var(&lookup, "HABBOHUB_COOLDOWN_MS")? {
            self.spam_filter.cooldown_ms = value;
        }
        if let Some(value) = parse_var(&lookup, "HABBOHUB_MAX_REPEATED")? {
            self.spam_filter.max_repeated = value;
        }
        if let Some(value) = parse_var(&lookup, "HABBOHUB_PATTERN_WINDOW_MS")? {
            self.spam_filter.pattern_window_ms = value;
        }
        if let Some(value) = parse_var(&lookup, "HABBOHUB_CLEANUP_INTERVAL_SECS")? {
            self.spam_filter.cleanup_interval_secs = value;
        }
        if let Some(level) = lookup("HABBOHUB_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(value) = parse_var(&lookup, "HABBOHUB_LOG_JSON")? {
            self.logging.json = value;
        }

        debug!("Environment overrides applied");
        Ok(self)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| ThrottleError::config(format!("Invalid {}: {}", key, e))),
        None => Ok(None),
    }
}
