//! Logging setup
//!
//! Installs a `tracing_subscriber` fmt subscriber. `RUST_LOG` takes precedence
//! over the configured level.

use crate::config::LoggingConfig;
use crate::utils::error::{Result, ThrottleError};
use tracing_subscriber::EnvFilter;

/// Build the filter for `config`, preferring `RUST_LOG` when set
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| ThrottleError::config(format!("Invalid log level '{}': {}", config.level, e))),
    }
}

/// Install the global subscriber; fails if one is already installed
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| ThrottleError::config(format!("Failed to initialize logging: {}", e)))
}
