//! Sliding window rate limiter integration tests

#[cfg(test)]
mod tests {
    use crate::common::TestThrottle;
    use habbohub_throttle::config::RateLimitConfig;
    use habbohub_throttle::{ManualClock, RateLimiter};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_three_recorded_actions_exhaust_limit() {
        let throttle = TestThrottle::with_limiter("habbo_api", RateLimitConfig::new(3, 60_000));
        let limiter = throttle.service.limiters().get("habbo_api").unwrap();

        for i in 0..3 {
            throttle.clock.set(i * 1000);
            let result = limiter.check();
            assert!(result.allowed);
            assert_eq!(result.remaining_actions, 2 - i as u32);
            limiter.record_action();
        }

        let result = limiter.check();
        assert!(!result.allowed);
        assert_eq!(result.remaining_actions, 0);
        assert!(result.reason().unwrap().contains("58"));
    }

    #[test]
    fn test_expired_first_action_frees_a_slot() {
        let throttle = TestThrottle::with_limiter("habbo_api", RateLimitConfig::new(3, 60_000));
        let limiter = throttle.service.limiters().get("habbo_api").unwrap();

        for at in [0, 10_000, 20_000] {
            throttle.clock.set(at);
            limiter.record_action();
        }
        throttle.clock.set(59_999);
        assert!(!limiter.check().allowed);

        throttle.clock.set(60_001);
        assert!(limiter.check().allowed);
    }

    #[test]
    fn test_check_without_record_never_consumes() {
        let throttle = TestThrottle::with_limiter("news", RateLimitConfig::new(1, 60_000));
        let limiter = throttle.service.limiters().get("news").unwrap();
        for _ in 0..10 {
            assert!(limiter.check().allowed);
        }
    }

    #[test]
    fn test_concurrent_check_and_record_respects_limit() {
        let clock = Arc::new(ManualClock::new(0));
        let limiter = Arc::new(RateLimiter::new(RateLimitConfig::new(50, 60_000), clock));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let limiter = limiter.clone();
                thread::spawn(move || {
                    (0..20)
                        .filter(|_| limiter.check_and_record().allowed)
                        .count()
                })
            })
            .collect();

        let allowed: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(allowed, 50);
    }
}
