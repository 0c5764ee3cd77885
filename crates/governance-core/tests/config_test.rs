//! Tests for the layered configuration system.

use std::sync::Mutex;

use governance_core::config::GovernanceConfig;
use governance_core::errors::ConfigError;

/// Serializes tests that touch process environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_governance_env_vars() {
    for key in [
        "GOVERNANCE_LOG_LEVEL",
        "GOVERNANCE_LOG_JSON",
        "GOVERNANCE_BELIEF_CACHE_CAPACITY",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = GovernanceConfig::from_toml("").unwrap();

    assert_eq!(config.inference.belief_cache_capacity, 1024);
    assert_eq!(config.consistency.enabled_checks.len(), 6);
    assert_eq!(config.consistency.fail_on, "low");
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[inference]
belief_cache_capacity = 0

[consistency]
enabled_checks = ["circular_dependencies", "rules"]
"#;
    let config = GovernanceConfig::from_toml(toml).unwrap();
    assert_eq!(config.inference.belief_cache_capacity, 0);
    assert!(config.consistency.is_enabled("rules"));
    assert!(!config.consistency.is_enabled("logic"));
    // Untouched sections keep defaults.
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn config_rejects_unknown_check_name() {
    let toml = r#"
[consistency]
enabled_checks = ["logic", "telepathy"]
"#;
    let err = GovernanceConfig::from_toml(toml).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, message } => {
            assert_eq!(field, "consistency.enabled_checks");
            assert!(message.contains("telepathy"));
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[test]
fn config_rejects_unknown_log_level_and_severity() {
    let err = GovernanceConfig::from_toml("[observability]\nlog_level = \"loud\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));

    let err = GovernanceConfig::from_toml("[consistency]\nfail_on = \"urgent\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn config_reports_parse_errors() {
    let err = GovernanceConfig::from_toml("[inference\nbroken").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = GovernanceConfig::default();
    config.observability.json = true;
    config.consistency.fail_on = "high".to_string();

    let text = config.to_toml().unwrap();
    let back = GovernanceConfig::from_toml(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn load_without_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_governance_env_vars();

    let config = GovernanceConfig::load(None).unwrap();
    assert_eq!(config, GovernanceConfig::default());
}

#[test]
fn load_missing_file_is_an_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_governance_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let err = GovernanceConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn env_overrides_file_values() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_governance_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("governance.toml");
    std::fs::write(
        &path,
        r#"
[inference]
belief_cache_capacity = 64

[observability]
log_level = "warn"
"#,
    )
    .unwrap();

    std::env::set_var("GOVERNANCE_BELIEF_CACHE_CAPACITY", "8");
    std::env::set_var("GOVERNANCE_LOG_JSON", "true");

    let config = GovernanceConfig::load(Some(&path)).unwrap();
    assert_eq!(config.inference.belief_cache_capacity, 8);
    assert!(config.observability.json);
    // Not overridden by env.
    assert_eq!(config.observability.log_level, "warn");

    clear_governance_env_vars();
}

#[test]
fn env_override_with_garbage_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_governance_env_vars();

    std::env::set_var("GOVERNANCE_BELIEF_CACHE_CAPACITY", "lots");
    let config = GovernanceConfig::load(None).unwrap();
    assert_eq!(config.inference.belief_cache_capacity, 1024);

    clear_governance_env_vars();
}
