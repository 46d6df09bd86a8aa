//! Tests for leaderboard configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [ranking]
        random_seed = 42
        boost_bound = 100
        change_policy = "tracked"

        [display]
        title = "Weekly Cast Ranking"
        highlight_top = 1

        [timing]
        initial_load_ms = 0
        refresh_ms = 10
    "#;

    let config = LeaderboardConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.ranking.random_seed, Some(42));
    assert_eq!(config.ranking.boost_bound, 100);
    assert_eq!(config.ranking.change_policy, ChangePolicy::Tracked);
    assert_eq!(config.display.title, "Weekly Cast Ranking");
    assert_eq!(config.display.highlight_top, 1);
    // unset display fields keep their defaults
    assert_eq!(config.display.skeleton_rows, 6);
    assert_eq!(config.timing.initial_load_delay(), Duration::ZERO);
    assert_eq!(config.timing.refresh_delay(), Duration::from_millis(10));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        ranking:
          random_seed: 42
          change_policy: cosmetic
        display:
          handle: "@someone"
    "#;

    let config = LeaderboardConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.ranking.random_seed, Some(42));
    assert_eq!(config.ranking.change_policy, ChangePolicy::Cosmetic);
    assert_eq!(config.display.handle, "@someone");
    assert_eq!(config.timing, TimingConfig::default());
}

#[test]
fn test_empty_document_is_default() {
    let config = LeaderboardConfig::from_toml_str("").unwrap();
    assert_eq!(config, LeaderboardConfig::default());
    assert_eq!(config.ranking.boost_bound, DEFAULT_BOOST_BOUND);
    assert_eq!(config.ranking.random_seed, None);
    assert_eq!(config.timing.initial_load_ms, 1500);
    assert_eq!(config.timing.refresh_ms, 1000);
}

#[test]
fn test_zero_bound_rejected() {
    let err = LeaderboardConfig::from_toml_str("[ranking]\nboost_bound = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_zero_skeleton_rows_rejected() {
    let err = LeaderboardConfig::from_yaml_str("display:\n  skeleton_rows: 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_unknown_policy_rejected() {
    let err = LeaderboardConfig::from_toml_str("[ranking]\nchange_policy = \"random\"\n")
        .unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file() {
    let err = LeaderboardConfig::load("does-not-exist.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = LeaderboardConfig::new()
        .with_random_seed(123)
        .with_boost_bound(50)
        .with_change_policy(ChangePolicy::Tracked)
        .with_delays_ms(0, 5);

    assert_eq!(config.ranking.random_seed, Some(123));
    assert_eq!(config.ranking.boost_bound, 50);
    assert_eq!(config.ranking.change_policy, ChangePolicy::Tracked);
    assert_eq!(config.timing.refresh_delay(), Duration::from_millis(5));
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_roundtrip_through_serialize() {
    let config = LeaderboardConfig::new().with_random_seed(9);
    let text = toml::to_string(&config).unwrap();
    let parsed = LeaderboardConfig::from_toml_str(&text).unwrap();
    assert_eq!(parsed, config);
}
