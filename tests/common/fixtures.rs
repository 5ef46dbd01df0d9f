//! Test fixtures

use habbohub_throttle::config::RateLimitConfig;
use habbohub_throttle::{Config, ManualClock, ThrottleService};
use std::sync::Arc;

/// A throttle service whose clock only moves when told to
pub struct TestThrottle {
    pub service: ThrottleService,
    pub clock: Arc<ManualClock>,
}

impl TestThrottle {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let clock = Arc::new(ManualClock::new(0));
        let service = ThrottleService::new(&config, clock.clone());
        Self { service, clock }
    }

    /// Default config plus a named limiter
    pub fn with_limiter(name: &str, limit: RateLimitConfig) -> Self {
        let mut config = Config::default();
        config.rate_limits.insert(name.to_string(), limit);
        Self::with_config(config)
    }

    pub fn at(&self, now_ms: u64) -> &Self {
        self.clock.set(now_ms);
        self
    }

    /// `check_message` at `now_ms`, returning whether it was allowed
    pub fn send(&self, actor: &str, text: &str, now_ms: u64) -> bool {
        self.clock.set(now_ms);
        self.service.spam_filter().check_message(actor, text).is_valid()
    }
}

impl Default for TestThrottle {
    fn default() -> Self {
        Self::new()
    }
}
