use chronos_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = ChronosConfig::from_toml("").unwrap();

    // Engine defaults
    assert_eq!(config.engine.initial_butterfly_index, 50.0);
    assert_eq!(config.engine.index_gain, 12.0);
    assert_eq!(config.engine.paradox_threshold, 0.7);
    assert_eq!(config.engine.pre_check_risk, 0.3);
    assert_eq!(config.engine.recent_action_window, 5);
    assert!(config.engine.rng_seed.is_none());

    // Guardrail defaults
    assert_eq!(config.guardrails.gridlock_threshold, 0.85);
    assert_eq!(config.guardrails.warning_threshold, 0.70);
    assert_eq!(config.guardrails.cooldown_rate, 0.05);
    assert_eq!(config.guardrails.accumulation_rate, 0.1);
    assert_eq!(config.guardrails.risk_weight, 0.6);
    assert_eq!(config.guardrails.index_weight, 0.4);

    // Oracle defaults
    assert!(!config.oracle.enabled);
    assert_eq!(config.oracle.timeout_ms, 5_000);
    assert_eq!(config.oracle.max_stability_change, 25);
    assert_eq!(config.oracle.max_in_flight, 2);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[engine]
rng_seed = 42
initial_butterfly_index = 10.0

[oracle]
enabled = true
timeout_ms = 250
"#;
    let config = ChronosConfig::from_toml(toml).unwrap();
    assert_eq!(config.engine.rng_seed, Some(42));
    assert_eq!(config.engine.initial_butterfly_index, 10.0);
    // Non-overridden fields keep defaults
    assert_eq!(config.engine.index_gain, 12.0);
    assert!(config.oracle.enabled);
    assert_eq!(config.oracle.timeout_ms, 250);
    assert_eq!(config.oracle.max_stability_change, 25);
    assert_eq!(config.guardrails.gridlock_threshold, 0.85);
}

#[test]
fn config_rejects_wrong_types() {
    let err = ChronosConfig::from_toml("[engine]\nindex_gain = \"lots\"\n");
    assert!(err.is_err());
}

#[test]
fn config_serde_roundtrip() {
    let config = ChronosConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = ChronosConfig::from_toml(&toml_str).unwrap();
    assert_eq!(
        roundtripped.guardrails.warning_threshold,
        config.guardrails.warning_threshold
    );
    assert_eq!(roundtripped.oracle.endpoint, config.oracle.endpoint);
}
