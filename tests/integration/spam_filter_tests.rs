//! Chat spam filter integration tests

#[cfg(test)]
mod tests {
    use crate::common::TestThrottle;
    use habbohub_throttle::{Decision, Rejection, is_single_character_message};

    // ==================== Cooldown ====================

    #[test]
    fn test_quick_second_message_waits_one_second() {
        let throttle = TestThrottle::new();
        assert!(throttle.send("u1", "hello", 10_000));

        for gap in [0, 1, 500, 999] {
            throttle.clock.set(10_000 + gap);
            let decision = throttle.service.spam_filter().check_message("u1", "hello");
            assert_eq!(
                decision,
                Decision::Reject(Rejection::CooldownActive { wait_secs: 1 }),
                "gap {}ms",
                gap
            );
        }
    }

    #[test]
    fn test_cooldown_recovers_after_rejection() {
        let throttle = TestThrottle::new();
        assert!(throttle.send("u1", "hello", 0));
        assert!(!throttle.send("u1", "hello", 700));
        assert!(throttle.send("u1", "hello", 1700));
    }

    #[test]
    fn test_scenario_plain_messages() {
        let throttle = TestThrottle::new();
        assert!(throttle.send("u1", "hi", 0));

        let decision = throttle
            .at(500)
            .service
            .spam_filter()
            .check_message("u1", "hi");
        assert!(!decision.is_valid());
        assert!(decision.reason().unwrap().contains('1'));

        assert!(throttle.send("u1", "hi", 1001));
    }

    // ==================== Repeated pattern ====================

    #[test]
    fn test_single_character_predicate() {
        for text in ["a", "!!!", "   xxx   "] {
            assert!(is_single_character_message(text), "{:?}", text);
        }
        for text in ["ab", "", "   "] {
            assert!(!is_single_character_message(text), "{:?}", text);
        }
    }

    #[test]
    fn test_fourth_repeated_message_rejected() {
        let throttle = TestThrottle::new();
        assert!(throttle.send("u1", "!", 0));
        assert!(throttle.send("u1", "!", 1000));
        assert!(throttle.send("u1", "!", 2000));

        throttle.clock.set(3000);
        let decision = throttle.service.spam_filter().check_message("u1", "!");
        assert_eq!(
            decision.rejection(),
            Some(&Rejection::RepeatedPatternLimitExceeded { character: '!' })
        );
    }

    #[test]
    fn test_alternating_characters_all_allowed() {
        let throttle = TestThrottle::new();
        for (i, text) in ["!", "?", "!", "?"].iter().enumerate() {
            assert!(throttle.send("u1", text, i as u64 * 1000));
        }
    }

    #[test]
    fn test_pattern_window_resets_after_thirty_seconds() {
        let throttle = TestThrottle::new();
        for at in [0, 1000, 2000] {
            assert!(throttle.send("u1", "!", at));
        }
        assert!(!throttle.send("u1", "!", 3000));
        assert!(throttle.send("u1", "!", 32_000));
    }

    #[test]
    fn test_scenario_repeated_x() {
        let throttle = TestThrottle::new();
        assert!(throttle.send("u2", "x", 0));
        assert!(throttle.send("u2", "x", 1100));
        assert!(throttle.send("u2", "x", 2200));
        assert!(!throttle.send("u2", "x", 3300));
        assert!(throttle.send("u2", "x", 33_400));
    }

    #[test]
    fn test_padding_and_length_do_not_matter() {
        let throttle = TestThrottle::new();
        assert!(throttle.send("u1", "!", 0));
        assert!(throttle.send("u1", "  !!!!! ", 1000));
        assert!(throttle.send("u1", "!!", 2000));
        assert!(!throttle.send("u1", "!!!!!!!!!!", 3000));
        // Normal text still passes.
        assert!(throttle.send("u1", "ok then", 4000));
    }

    // ==================== Reset ====================

    #[test]
    fn test_reset_user_allows_immediately() {
        let throttle = TestThrottle::new();
        for at in [0, 1000, 2000] {
            throttle.send("u1", "!", at);
        }
        assert!(!throttle.send("u1", "!", 2500));

        throttle.service.spam_filter().reset_user("u1");
        assert!(throttle.send("u1", "hello", 2500));
        assert!(throttle.send("u1", "!", 3500));
    }

    #[test]
    fn test_actors_do_not_affect_each_other() {
        let throttle = TestThrottle::new();
        for at in [0, 1000, 2000] {
            throttle.send("u1", "!", at);
        }
        assert!(!throttle.send("u1", "!", 3000));
        assert!(throttle.send("u2", "!", 3000));
    }
}
