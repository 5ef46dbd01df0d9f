//! Named limiter instances, one per guarded endpoint

use super::limiter::RateLimiter;
use crate::config::RateLimitConfig;
use crate::utils::clock::SharedClock;
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

pub struct LimiterRegistry {
    limiters: DashMap<String, Arc<RateLimiter>>,
    clock: SharedClock,
}

impl LimiterRegistry {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            limiters: DashMap::new(),
            clock,
        }
    }

    pub fn from_config(configs: &HashMap<String, RateLimitConfig>, clock: SharedClock) -> Self {
        let registry = Self::new(clock);
        for (name, config) in configs {
            registry.get_or_insert(name, *config);
        }
        registry
    }

    pub fn get(&self, name: &str) -> Option<Arc<RateLimiter>> {
        self.limiters.get(name).map(|entry| entry.value().clone())
    }

    /// Existing limiter for `name`, or a new one built from `config`
    pub fn get_or_insert(&self, name: &str, config: RateLimitConfig) -> Arc<RateLimiter> {
        if let Some(existing) = self.get(name) {
            return existing;
        }
        self.limiters
            .entry(name.to_string())
            .or_insert_with(|| {
                debug!(
                    "Creating limiter {}: {} actions per {}ms",
                    name, config.max_actions, config.window_ms
                );
                Arc::new(RateLimiter::new(config, self.clock.clone()))
            })
            .value()
            .clone()
    }

    pub fn reset_all(&self) {
        for entry in self.limiters.iter() {
            entry.value().reset();
        }
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.limiters.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.limiters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limiters.is_empty()
    }
}
