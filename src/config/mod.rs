//! Configuration management for the throttle service
//!
//! This module handles loading, validation, and management of all throttle configuration.

mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{Result, ThrottleError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the throttle service
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Chat cooldown and repeated-pattern settings
    #[serde(default)]
    pub spam_filter: SpamFilterConfig,
    /// Layered comment restrictions
    #[serde(default)]
    pub comment_limit: CommentLimitConfig,
    /// Named sliding window limiters, one per guarded endpoint
    #[serde(default)]
    pub rate_limits: HashMap<String, RateLimitConfig>,
    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load and validate configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::read_file(path.as_ref()).await?;
        config.check()?;
        Ok(config)
    }

    /// Parse and validate configuration from a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config = Self::parse_yaml(content)?;
        config.check()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise start from defaults, then apply
    /// environment overrides
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |key| env::var(key).ok()).await
    }

    /// Same as [`load`](Self::load) with overrides read from `lookup`
    ///
    /// Validation runs once, after the overrides, so an override can repair
    /// an invalid value from the file.
    pub async fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match path {
            Some(path) => Self::read_file(path).await?,
            None => Self::default(),
        };

        let config = base.with_overrides_from(lookup)?;
        config.check()?;
        Ok(config)
    }

    async fn read_file(path: &Path) -> Result<Self> {
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ThrottleError::config(format!("Failed to read config file: {}", e)))?;

        let config = Self::parse_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    fn parse_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| ThrottleError::config(format!("Failed to parse config: {}", e)))
    }

    /// Validate, mapping failures to [`ThrottleError::Validation`]
    pub fn check(&self) -> Result<()> {
        self.validate().map_err(ThrottleError::validation)
    }

    /// Serialize the effective configuration as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Look up a named rate limit
    pub fn rate_limit(&self, name: &str) -> Option<&RateLimitConfig> {
        self.rate_limits.get(name)
    }
}
