//! Time sources
//!
//! Every gate reads the current instant through [`Clock`] so that tests and
//! the replay command can drive time explicitly instead of sleeping.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of the current instant in epoch milliseconds
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}

/// Shared handle to a clock
pub type SharedClock = Arc<dyn Clock>;

/// Wall clock backed by `chrono::Utc`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        // Pre-epoch wall clocks collapse to 0.
        u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

impl SystemClock {
    pub fn shared() -> SharedClock {
        Arc::new(Self)
    }
}

/// Manually driven clock
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: AtomicU64::new(start_ms),
        }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.store(now_ms, Ordering::SeqCst);
    }

    pub fn advance(&self, delta_ms: u64) {
        self.now.fetch_add(delta_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Whole seconds needed to cover `ms`, rounded up
pub fn ceil_secs(ms: u64) -> u64 {
    ms.div_ceil(1000)
}

/// Whole minutes needed to cover `ms`, rounded up
pub fn ceil_minutes(ms: u64) -> u64 {
    ms.div_ceil(60 * 1000)
}

/// Whole hours needed to cover `ms`, rounded up
pub fn ceil_hours(ms: u64) -> u64 {
    ms.div_ceil(60 * 60 * 1000)
}
