//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use crate::common::TestThrottle;
    use habbohub_throttle::{Config, ThrottleError};
    use std::collections::HashMap;
    use std::io::Write;

    const SAMPLE: &str = r#"
spam_filter:
  cooldown_ms: 2000
  max_repeated: 2
rate_limits:
  habbo_profile:
    max_actions: 5
    window_ms: 60000
    min_interval_ms: 1000
logging:
  level: debug
"#;

    #[tokio::test]
    async fn test_load_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.spam_filter.cooldown_ms, 2000);
        assert_eq!(config.spam_filter.max_repeated, 2);
        assert_eq!(config.spam_filter.pattern_window_ms, 30_000);
        assert_eq!(config.comment_limit.comment_limit, 3);
        assert_eq!(config.logging.level, "debug");

        let profile = config.rate_limit("habbo_profile").unwrap();
        assert_eq!(profile.min_interval_ms, Some(1000));
    }

    #[tokio::test]
    async fn test_missing_file_is_config_error() {
        let err = Config::from_file("/definitely/not/here.yaml")
            .await
            .unwrap_err();
        assert!(matches!(err, ThrottleError::Config(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let yaml = "rate_limits:\n  broken:\n    max_actions: 0\n    window_ms: 1000\n";
        let err = Config::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ThrottleError::Validation(msg) if msg.contains("broken")));
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_yaml_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_yaml_round_trip_through_service() {
        let config = Config::from_yaml_str(SAMPLE).unwrap();
        let reparsed = Config::from_yaml_str(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(reparsed, config);

        let throttle = TestThrottle::with_config(reparsed);
        assert!(throttle.send("u1", "hi", 0));
        // Two second cooldown from the file.
        assert!(!throttle.send("u1", "hi", 1500));
        assert!(throttle.send("u1", "hi", 2000));
    }

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[tokio::test]
    async fn test_env_override_repairs_invalid_file_value() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"spam_filter:\n  max_repeated: 0\n").unwrap();

        let config = Config::load_with(
            Some(file.path()),
            lookup_from(&[("HABBOHUB_MAX_REPEATED", "3")]),
        )
        .await
        .unwrap();
        assert_eq!(config.spam_filter.max_repeated, 3);

        let err = Config::load_with(Some(file.path()), lookup_from(&[]))
            .await
            .unwrap_err();
        assert!(matches!(err, ThrottleError::Validation(_)));
    }

    #[tokio::test]
    async fn test_load_without_file_uses_defaults_and_overrides() {
        let config = Config::load_with(None, lookup_from(&[("HABBOHUB_COOLDOWN_MS", "250")]))
            .await
            .unwrap();
        assert_eq!(config.spam_filter.cooldown_ms, 250);
        assert_eq!(config.comment_limit, Config::default().comment_limit);
    }
}
