//! Layered comment limiter integration tests

#[cfg(test)]
mod tests {
    use crate::common::TestThrottle;
    use habbohub_throttle::{Rejection, RestrictionLevel};

    const SECOND: u64 = 1000;

    /// Check then record, the way the comment form does it
    fn comment(throttle: &TestThrottle, actor: &str, photo: &str, at: u64) -> bool {
        throttle.clock.set(at);
        let comments = throttle.service.comments();
        let status = comments.check_can_comment(actor, photo);
        if status.can_comment {
            comments.record_comment(actor, photo);
        }
        status.can_comment
    }

    #[test]
    fn test_spammer_escalates_to_global_block() {
        let throttle = TestThrottle::new();
        let mut at = 0;
        for photo in ["p1", "p2", "p3"] {
            for _ in 0..3 {
                assert!(comment(&throttle, "spammer", photo, at));
                at += 30 * SECOND;
            }
            // Fourth comment on the same photo hits the photo lock.
            assert!(!comment(&throttle, "spammer", photo, at));
        }

        throttle.clock.set(at);
        let status = throttle.service.comments().check_can_comment("spammer", "p9");
        assert_eq!(status.level, RestrictionLevel::GlobalRestricted);
        assert_eq!(status.rejection, Some(Rejection::GlobalRestriction { hours: 6 }));
        assert!(status.reason().unwrap().contains("6 hour"));
    }

    #[test]
    fn test_casual_commenter_never_locked() {
        let throttle = TestThrottle::new();
        for (i, photo) in ["p1", "p2", "p3", "p4", "p5"].iter().enumerate() {
            assert!(comment(&throttle, "casual", photo, i as u64 * SECOND));
        }
    }

    #[test]
    fn test_reset_user_lifts_global_block() {
        let throttle = TestThrottle::new();
        let mut at = 0;
        for photo in ["p1", "p2", "p3"] {
            for _ in 0..3 {
                comment(&throttle, "u1", photo, at);
                at += 30 * SECOND;
            }
        }
        assert!(!comment(&throttle, "u1", "p4", at));

        throttle.service.reset_user("u1");
        assert!(comment(&throttle, "u1", "p4", at));
    }
}
