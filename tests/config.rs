use datacenter_policy_model::config::{self, ConfigError, ModelConfig};

#[test]
fn parse_baseline_override() {
    let cfg = ModelConfig::from_toml_str("baseline_emissions_mmt = 42.5\n").expect("config");
    assert_eq!(cfg.baseline_emissions_mmt, Some(42.5));
}

#[test]
fn empty_config_infers_baseline() {
    let cfg = ModelConfig::from_toml_str("").expect("config");
    assert_eq!(cfg, ModelConfig::default());
    assert!(cfg.baseline_emissions_mmt.is_none());
}

#[test]
fn non_finite_baseline_rejected() {
    let err = ModelConfig::from_toml_str("baseline_emissions_mmt = nan\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    let err = ModelConfig::from_toml_str("baseline_emissions_mmt = inf\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn malformed_toml_is_parse_error() {
    let err = ModelConfig::from_toml_str("baseline_emissions_mmt = \"high\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn load_from_file_and_missing_file() {
    let dir = std::env::temp_dir().join(format!("policy_model_cfg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("dir");
    let path = dir.join("model.toml");
    std::fs::write(&path, "baseline_emissions_mmt = 12.0\n").expect("write");

    let cfg = config::load(&path).expect("load");
    assert_eq!(cfg.baseline_emissions_mmt, Some(12.0));
    assert_eq!(config::load_or_default(&path).expect("load"), cfg);

    let missing = dir.join("absent.toml");
    assert_eq!(
        config::load_or_default(&missing).expect("default"),
        ModelConfig::default()
    );
    assert!(matches!(config::load(&missing), Err(ConfigError::Io(_))));

    std::fs::remove_dir_all(&dir).ok();
}
